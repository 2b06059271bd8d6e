//! # Block Parsing
//!
//! Two-phase block segmentation.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its
//!    own into a `LineClass` (fence, heading, list item, blank, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    (`Idle`, `InList`, `InCodeBlock`) accumulates multi-line constructs and
//!    emits `Block`s, flushing whatever is open at end of input
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`, `ListItem`
//! - **`kinds`**: block-specific syntax with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier`
//! - **`builder`**: `BlockBuilder` and the `InlineFragments` seam
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Consecutive items of one ordering kind form exactly one list
//! - Lists and lines are flat; nothing nests

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, InlineFragments};
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{Block, BlockKind, ListItem};
