/// Which marker opened a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A line that looks like a fence, with the info string that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// First word of the info string (`rust` in ```` ```rust title ````).
    pub language: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Recognizes a fence line. `remainder` must already have its
    /// indentation stripped.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let (kind, rest) = if let Some(rest) = remainder.strip_prefix(Self::BACKTICKS) {
            (FenceKind::Backticks, rest)
        } else if let Some(rest) = remainder.strip_prefix(Self::TILDES) {
            (FenceKind::Tildes, rest)
        } else {
            return None;
        };

        // Longer runs (```` or ~~~~) still count as the same marker.
        let marker = match kind {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        };
        let info = rest.trim_start_matches(marker).trim();
        let language = info
            .split_whitespace()
            .next()
            .map(|word| word.to_string());

        Some(FenceSig { kind, language })
    }

    /// A fence only closes a block opened with the same marker.
    pub fn closes(kind: FenceKind, sig: Option<&FenceSig>) -> bool {
        sig.is_some_and(|s| s.kind == kind)
    }
}
