//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a block sequence as a stable one-line-per-block
//!   outline for `insta` snapshots
//! - **`invariants`**: runtime checks for segmenter correctness (spans in
//!   bounds and ordered, lists non-empty, code payload untouched)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
