/// Delimits a raw-zone placeholder. Private-use code points: stripped from
/// input before scanning, so a placeholder can never be forged.
pub const ZONE_OPEN: char = '\u{E000}';
pub const ZONE_CLOSE: char = '\u{E001}';

/// Text hidden from the emphasis passes until the final restore pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawZone {
    /// Content between backticks, unescaped.
    CodeSpan(String),
    /// Destination of a `](...)` link tail, verbatim.
    LinkDest(String),
    /// A complete HTML tag, attributes included, verbatim.
    Markup(String),
}

/// Inline text with its raw zones swapped out for numbered placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Protected {
    pub text: String,
    pub zones: Vec<RawZone>,
}

impl Protected {
    /// Stores `zone` and appends its placeholder to the text.
    pub fn push_zone(&mut self, zone: RawZone) {
        let index = self.zones.len();
        self.zones.push(zone);
        self.text.push(ZONE_OPEN);
        self.text.push_str(&index.to_string());
        self.text.push(ZONE_CLOSE);
    }

    pub fn zone(&self, index: usize) -> Option<&RawZone> {
        self.zones.get(index)
    }
}
