/// Strong (`**text**`) and emphasis (`*text*`) rewrite patterns.
///
/// Strong must run first: a `**bold**` span read by the emphasis pattern
/// would come out as two nested empty italics.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG_PATTERN: &'static str = r"\*\*(.+?)\*\*";
    pub const EM_PATTERN: &'static str = r"\*([^*\n]+)\*";
}
