//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `TICK` - raw zone that suppresses other rewriting
//! - **`Emphasis`**: strong/em rewrite patterns, strong first
//! - **`Link`**: label/destination delimiters and anchor safety attributes
//! - **`RawHtml`**: `TAG_OPEN` - author tags kept verbatim

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod raw_html;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use raw_html::RawHtml;
