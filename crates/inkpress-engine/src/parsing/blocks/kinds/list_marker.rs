/// Result of matching a list marker at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSig {
    pub ordered: bool,
    /// Byte offset where the item text begins (after the marker and space).
    pub content_offset: usize,
}

/// Bullet (`* `, `- `) and numbered (`12. `) list markers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [u8; 2] = [b'*', b'-'];
    pub const ORDERED_DELIMITER: u8 = b'.';

    pub fn sig(remainder: &str) -> Option<ListSig> {
        let bytes = remainder.as_bytes();

        if let Some(first) = bytes.first()
            && Self::BULLETS.contains(first)
            && bytes.get(1) == Some(&b' ')
        {
            return Some(ListSig {
                ordered: false,
                content_offset: 2,
            });
        }

        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0
            && bytes.get(digits) == Some(&Self::ORDERED_DELIMITER)
            && bytes.get(digits + 1) == Some(&b' ')
        {
            return Some(ListSig {
                ordered: true,
                content_offset: digits + 2,
            });
        }

        None
    }
}
