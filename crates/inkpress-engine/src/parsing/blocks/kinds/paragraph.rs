/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: any non-blank line that no other rule
/// claims. The assembler joins consecutive paragraph lines with this
/// separator.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_BREAK: &'static str = "<br>";
}
