use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceSig, Heading, ListMarker};

/// Markers may be indented by at most this many spaces.
const MAX_MARKER_INDENT: usize = 3;

/// What a line looks like on its own, before the segmenter decides what it
/// means in context (inside a code block every line is content).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Fence(FenceSig),
    Heading { level: u8, content: String },
    ListItem { ordered: bool, content: String },
    Blank,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line, terminator included.
    pub line: Span,
    /// Span of the line text without the terminator.
    pub text_span: Span,
    /// Raw line text, used verbatim inside code blocks.
    pub text: String,
    pub kind: LineKind,
}

impl LineClass {
    pub fn fence_sig(&self) -> Option<&FenceSig> {
        match &self.kind {
            LineKind::Fence(sig) => Some(sig),
            _ => None,
        }
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried in segmenter priority order: fence, heading, list
    /// item, blank, and finally plain text.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        LineClass {
            line: lr.span,
            text_span: lr.text_span,
            text: lr.text.clone(),
            kind: Self::kind_of(&lr.text),
        }
    }

    fn kind_of(text: &str) -> LineKind {
        if text.trim().is_empty() {
            return LineKind::Blank;
        }

        let indent = text.bytes().take_while(|&b| b == b' ').count();
        if indent > MAX_MARKER_INDENT {
            return LineKind::Text;
        }
        let remainder = &text[indent..];

        if let Some(sig) = CodeFence::sig(remainder) {
            return LineKind::Fence(sig);
        }
        if let Some((level, offset)) = Heading::sig(remainder) {
            return LineKind::Heading {
                level,
                content: remainder[offset..].trim_end().to_string(),
            };
        }
        if let Some(sig) = ListMarker::sig(remainder) {
            return LineKind::ListItem {
                ordered: sig.ordered,
                content: remainder[sig.content_offset..].trim_end().to_string(),
            };
        }
        LineKind::Text
    }
}
