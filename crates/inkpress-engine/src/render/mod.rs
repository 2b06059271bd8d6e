//! # Rendering
//!
//! The public face of the engine. A [`Renderer`] owns the theme, the
//! sanitization policy and the highlighter, and drives the pipeline:
//!
//! 1. **segment** the text into blocks (inline fragments are transformed
//!    and sanitized as the blocks are built)
//! 2. **assemble** the blocks into a [`Node`] tree (mode A)
//! 3. optionally **serialize** the tree into one HTML string and sanitize
//!    it once more as a whole (mode B)
//!
//! Every entry point is infallible: malformed input degrades to literal
//! text, never to an error.

pub mod assembler;
pub mod highlighter;
pub mod node;

pub use assembler::Assembler;
pub use highlighter::{Highlighter, PlainHighlighter};
pub use node::Node;

use std::sync::LazyLock;

use xi_rope::Rope;

use crate::parsing::{Document, blocks::InlineFragments, inline::InlineTransformer, parse_document};
use crate::sanitize::{DEFAULT_POLICY, SanitizePolicy, sanitize_with};
use crate::theme::Theme;

/// Language handed to the highlighter for fences that name none.
pub const DEFAULT_LANGUAGE: &str = "text";

static DEFAULT_RENDERER: LazyLock<Renderer> = LazyLock::new(Renderer::default);

/// Configured, immutable renderer. Safe to share across threads.
pub struct Renderer {
    theme: Theme,
    transformer: InlineTransformer,
    policy: SanitizePolicy,
    highlighter: Box<dyn Highlighter>,
    default_language: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("theme", &self.theme)
            .field("policy", &self.policy)
            .field("default_language", &self.default_language)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            transformer: InlineTransformer::new(&theme),
            theme,
            policy: DEFAULT_POLICY.clone(),
            highlighter: Box::new(PlainHighlighter),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: SanitizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn policy(&self) -> &SanitizePolicy {
        &self.policy
    }

    /// Segments `text` into its block sequence.
    pub fn render(&self, text: &str) -> Document {
        parse_document(&Rope::from(text), self)
    }

    /// Mode A: the typed node tree.
    pub fn render_tree(&self, text: &str) -> Vec<Node> {
        let doc = self.render(text);
        self.assembler().nodes(&doc.blocks)
    }

    /// Mode B: one sanitized HTML string.
    pub fn render_html(&self, text: &str) -> String {
        let assembler = self.assembler();
        let nodes = assembler.nodes(&self.render(text).blocks);
        self.sanitize(&assembler.html(&nodes))
    }

    /// Sanitizes `markup` with this renderer's policy.
    pub fn sanitize(&self, markup: &str) -> String {
        sanitize_with(markup, &self.policy)
    }

    fn assembler(&self) -> Assembler<'_> {
        Assembler {
            theme: &self.theme,
            highlighter: self.highlighter.as_ref(),
            policy: &self.policy,
            default_language: &self.default_language,
        }
    }
}

impl InlineFragments for Renderer {
    fn fragment(&self, text: &str) -> String {
        self.sanitize(&self.transformer.transform(text))
    }

    fn unclosed_element(&self, text: &str) -> Option<String> {
        crate::sanitize::unclosed_element(&self.transformer.transform(text), &self.policy)
    }
}

/// [`Renderer::render`] with the default theme and policy.
pub fn render(text: &str) -> Document {
    DEFAULT_RENDERER.render(text)
}

/// [`Renderer::render_tree`] with the default theme and policy.
pub fn render_tree(text: &str) -> Vec<Node> {
    DEFAULT_RENDERER.render_tree(text)
}

/// [`Renderer::render_html`] with the default theme and policy.
pub fn render_html(text: &str) -> String {
    DEFAULT_RENDERER.render_html(text)
}
