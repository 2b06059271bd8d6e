//! # Parsing
//!
//! Source text to [`Document`]: the rope is split into lines, each line is
//! classified, and the block state machine assembles the result.

pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

use serde::Serialize;
use xi_rope::Rope;

use blocks::{Block, BlockBuilder, InlineFragments, MarkdownLineClassifier};
use rope::lines_with_spans;

/// Ordered blocks from one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Segments `rope` into blocks. Heading, paragraph and list-item text is
/// finished by `inline`; code payloads are kept verbatim.
pub fn parse_document(rope: &Rope, inline: &dyn InlineFragments) -> Document {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(inline);

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    Document {
        blocks: builder.finish(),
    }
}
