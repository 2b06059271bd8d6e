use serde::Serialize;

use crate::parsing::rope::span::Span;

/// One entry of a [`BlockKind::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Span of the source line the item came from.
    pub span: Span,
    /// Item text with the marker stripped, before inline transforms.
    pub raw_text: String,
    /// Inline-transformed, sanitized markup.
    pub rendered: String,
}

/// The kind of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Single-line ATX heading.
    Heading { level: u8 },
    /// One line of paragraph text.
    Paragraph,
    /// Run of consecutive items sharing one ordering kind.
    List { ordered: bool, items: Vec<ListItem> },
    /// Fenced code. `content` is opaque: never inline-transformed.
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    /// Paragraph separator. Never rendered.
    Blank,
}

/// A parsed block with its source span, raw text and rendered markup.
///
/// Blocks are built once by [`BlockBuilder`](super::BlockBuilder) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Byte span of every source line that contributed, fences included.
    pub span: Span,
    /// The unprocessed source line(s).
    pub raw_text: String,
    /// Inline-transformed, sanitized markup for headings and paragraphs.
    /// `None` for lists (see items), code blocks and blanks.
    pub rendered: Option<String>,
}

impl Block {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, BlockKind::Blank)
    }
}
