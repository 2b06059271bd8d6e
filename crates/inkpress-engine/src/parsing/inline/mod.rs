//! # Inline Transforms
//!
//! Ordered substring rewrites over one line of block text, with explicit
//! raw zones.
//!
//! ## Pipeline
//!
//! 1. **protect**: code spans, link destinations and author HTML tags are
//!    swapped for opaque placeholders (`cursor`-driven scan)
//! 2. **strong** then **emphasis** (regex rewrites; strong first)
//! 3. **links**: `[label](placeholder)` becomes an anchor; the destination
//!    passes the sanitizer's scheme check
//! 4. **restore**: placeholders are replaced with escaped `<code>`, the
//!    verbatim destination or the verbatim tag
//!
//! ## Raw Zone Precedence
//!
//! The zone that starts first wins: `` `[a](b)` `` is code, `` [a](x`y`) ``
//! is a link to `` x`y` ``, and `*` inside a code span, a link destination or
//! a tag's attributes is never emphasis.

pub mod cursor;
pub mod kinds;
pub mod protect;
pub mod transform;
pub mod types;

pub use protect::protect_raw_zones;
pub use transform::InlineTransformer;
pub use types::{Protected, RawZone};
