/// HTML tag the author typed inline.
///
/// A well-formed tag is a raw zone: its attribute values are left for the
/// sanitizer, never rewritten as emphasis.
pub struct RawHtml;

impl RawHtml {
    pub const TAG_OPEN: u8 = b'<';
}
