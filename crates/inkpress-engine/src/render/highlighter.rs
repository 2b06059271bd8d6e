//! Syntax highlighter seam for code blocks.

/// Turns a code block payload into markup.
///
/// Implementations are shared by every render call, so they must be
/// `Send + Sync`. Their output is sanitized before it is emitted.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, code: &str, language: &str) -> String;
}

/// Escapes the code and wraps it in `<pre><code class="language-{lang}">`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, language: &str) -> String {
        format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            html_escape::encode_double_quoted_attribute(language),
            html_escape::encode_text(code)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_code() {
        assert_eq!(
            PlainHighlighter.highlight("if a < b && c > d {}", "rust"),
            r#"<pre><code class="language-rust">if a &lt; b &amp;&amp; c &gt; d {}</code></pre>"#
        );
    }

    #[test]
    fn escapes_language() {
        assert_eq!(
            PlainHighlighter.highlight("x", r#"a"b"#),
            r#"<pre><code class="language-a&quot;b">x</code></pre>"#
        );
    }
}
