//! Line and span bookkeeping over the `xi_rope::Rope` holding the input.

pub mod lines;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use span::Span;
