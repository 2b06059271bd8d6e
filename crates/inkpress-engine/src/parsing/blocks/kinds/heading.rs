/// ATX heading line: one to three `#` markers followed by a space.
///
/// Deeper levels (`####`) and setext underlines are not recognized; such
/// lines fall through to paragraph text.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 3;

    /// Returns the heading level and the byte offset where the heading text
    /// starts, or `None` if `remainder` is not a heading line.
    pub fn sig(remainder: &str) -> Option<(u8, usize)> {
        let bytes = remainder.as_bytes();
        let level = bytes.iter().take_while(|&&b| b == Self::MARKER).count();
        if level == 0 || level > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        if bytes.get(level) != Some(&b' ') {
            return None;
        }
        Some((level as u8, level + 1))
    }
}
