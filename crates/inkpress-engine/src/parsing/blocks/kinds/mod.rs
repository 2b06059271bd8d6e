//! Block syntax knowledge: each kind owns its delimiter constants and the
//! matcher that recognizes it. The classifier only calls into these.

pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod paragraph;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use list_marker::{ListMarker, ListSig};
pub use paragraph::Paragraph;
