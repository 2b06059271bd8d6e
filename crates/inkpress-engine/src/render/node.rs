use serde::Serialize;

/// One node of the assembled document tree.
///
/// All markup fields are already sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Heading {
        level: u8,
        html: String,
    },
    /// One or more adjacent paragraph lines, joined with `<br>`.
    Paragraph {
        html: String,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    CodeBlock {
        /// Language from the fence, if any.
        language: Option<String>,
        /// Verbatim payload.
        code: String,
        /// Highlighter output.
        html: String,
    },
}
