/// `[label](destination)` delimiters.
pub struct Link;

impl Link {
    pub const LABEL_CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';

    /// Attributes every rendered anchor carries.
    pub const SAFETY_ATTRS: &'static str = r#"target="_blank" rel="noopener noreferrer""#;
}
