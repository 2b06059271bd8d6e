//! # inkpress-engine
//!
//! Safe, themed markdown rendering for article display and live editor
//! previews.
//!
//! ```
//! use inkpress_engine::{Renderer, Theme};
//!
//! let html = Renderer::new(Theme::unstyled()).render_html("# Hi\n\n<script>x</script>ok");
//! assert_eq!(html, "<h1>Hi</h1>\n<p>ok</p>");
//! ```

pub mod import;
pub mod parsing;
pub mod render;
pub mod sanitize;
pub mod theme;

pub use import::html_to_markdown;
pub use parsing::{
    Document,
    blocks::{Block, BlockKind, ListItem},
    rope::Span,
};
pub use render::{
    DEFAULT_LANGUAGE, Highlighter, Node, PlainHighlighter, Renderer, render, render_html,
    render_tree,
};
pub use sanitize::{DEFAULT_POLICY, SanitizePolicy, sanitize, sanitize_with};
pub use theme::Theme;
