//! # Output Sanitization
//!
//! The unconditional last step on every render path. Any markup the
//! renderer produces (inline fragments, highlighter output, author HTML)
//! goes through [`sanitize`] before it reaches a frontend.
//!
//! ## Rules
//!
//! - `script` and `iframe` elements are removed with their subtree
//! - tags outside the allow-list are neutralized (`<` becomes `&lt;`)
//! - `on*` event-handler attributes are dropped
//! - `href`/`src` values with a `javascript:`/`vbscript:` scheme become `#`
//! - comments are removed; a `<` that does not open a well-formed tag is
//!   escaped
//!
//! Kept tags are re-serialized canonically (lower-case names, double-quoted
//! entity-encoded values), which makes the pass idempotent.

pub mod policy;
pub mod tag;
pub mod url;

pub use policy::{DEFAULT_POLICY, SanitizePolicy};
pub use url::{SAFE_URL_PLACEHOLDER, is_dangerous_url, safe_url};

use tag::{Tag, parse_tag};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Sanitizes `markup` with the default policy.
pub fn sanitize(markup: &str) -> String {
    sanitize_with(markup, &DEFAULT_POLICY)
}

/// Sanitizes `markup` with `policy`. Never fails: malformed input is
/// escaped or dropped, never rejected.
pub fn sanitize_with(markup: &str, policy: &SanitizePolicy) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut i = 0usize;

    while let Some(offset) = markup[i..].find('<') {
        let lt = i + offset;
        out.push_str(&markup[i..lt]);

        if markup[lt..].starts_with(COMMENT_OPEN) {
            i = markup[lt + COMMENT_OPEN.len()..]
                .find(COMMENT_CLOSE)
                .map_or(markup.len(), |p| lt + COMMENT_OPEN.len() + p + COMMENT_CLOSE.len());
            continue;
        }

        match parse_tag(markup, lt) {
            Some(tag) if policy.denies(&tag.name) => {
                i = if tag.closing {
                    tag.end
                } else {
                    log::debug!("sanitizer removed <{}> subtree", tag.name);
                    subtree_end(markup, &tag).unwrap_or(markup.len())
                };
            }
            Some(tag) if policy.allows(&tag.name) => {
                write_tag(&mut out, &tag, policy);
                i = tag.end;
            }
            _ => {
                out.push_str("&lt;");
                i = lt + 1;
            }
        }
    }

    out.push_str(&markup[i..]);
    out
}

/// Name of a denied element that `markup` opens and never closes, scanning
/// exactly as [`sanitize_with`] does.
///
/// A caller that feeds markup in pieces uses this to know that the next
/// piece still belongs to the removed subtree.
pub fn unclosed_element(markup: &str, policy: &SanitizePolicy) -> Option<String> {
    let mut i = 0usize;

    while let Some(offset) = markup[i..].find('<') {
        let lt = i + offset;

        if markup[lt..].starts_with(COMMENT_OPEN) {
            let p = markup[lt + COMMENT_OPEN.len()..].find(COMMENT_CLOSE)?;
            i = lt + COMMENT_OPEN.len() + p + COMMENT_CLOSE.len();
            continue;
        }

        i = match parse_tag(markup, lt) {
            Some(tag) if policy.denies(&tag.name) && !tag.closing => {
                match subtree_end(markup, &tag) {
                    Some(end) => end,
                    None => return Some(tag.name),
                }
            }
            Some(tag) if policy.denies(&tag.name) || policy.allows(&tag.name) => tag.end,
            _ => lt + 1,
        };
    }
    None
}

/// Index just past the element's closing tag, `None` when it is never
/// closed.
fn subtree_end(markup: &str, open: &Tag<'_>) -> Option<usize> {
    let lower = markup[open.end..].to_ascii_lowercase();
    let needle = format!("</{}", open.name);
    let mut from = 0usize;

    while let Some(p) = lower[from..].find(&needle) {
        let after = from + p + needle.len();
        match lower.as_bytes().get(after) {
            Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c') => {
                return lower[after..]
                    .find('>')
                    .map(|gt| open.end + after + gt + 1);
            }
            None => return None,
            _ => from = after,
        }
    }
    None
}

fn write_tag(out: &mut String, tag: &Tag<'_>, policy: &SanitizePolicy) {
    out.push('<');
    if tag.closing {
        out.push('/');
        out.push_str(&tag.name);
        out.push('>');
        return;
    }
    out.push_str(&tag.name);

    for &(name, value) in &tag.attrs {
        let name = name.to_ascii_lowercase();
        if policy.is_event_handler(&name) {
            log::debug!("sanitizer dropped {name} attribute on <{}>", tag.name);
            continue;
        }
        out.push(' ');
        out.push_str(&name);

        let Some(raw) = value else {
            continue;
        };
        let decoded = html_escape::decode_html_entities(raw);
        let value = if policy.is_url_attribute(&name) {
            safe_url(&decoded).into_owned()
        } else {
            decoded.into_owned()
        };
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(&value));
        out.push('"');
    }

    out.push_str(if tag.self_closing { " />" } else { ">" });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("<script>alert(1)</script>Hello", "Hello")]
    #[case("a<SCRIPT type=\"x\">alert(1)</Script >b", "ab")]
    #[case("a<iframe src=\"x\"><p>inner</p></iframe>b", "ab")]
    #[case("before<script>never closed", "before")]
    #[case("x</script>y", "xy")]
    #[case("a<script>1</scriptx>2</script>b", "ab")]
    fn denied_subtrees_are_removed(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }

    #[rstest]
    #[case("<script>", Some("script"))]
    #[case("text <IFRAME src=\"x\">", Some("iframe"))]
    #[case("<script>a</script><script>b", Some("script"))]
    #[case("<script>a</script>", None)]
    #[case("<script>\nvar a;\n</script >after", None)]
    #[case("</script>", None)]
    #[case("<!-- <script> -->", None)]
    #[case("<!-- <script>", None)]
    #[case("<code>&lt;script></code>", None)]
    #[case("<a title=\"<script>\">x</a>", None)]
    #[case("<style><script>", Some("script"))]
    fn reports_unclosed_denied_elements(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            unclosed_element(input, &DEFAULT_POLICY).as_deref(),
            expected
        );
    }

    #[test]
    fn event_handlers_are_dropped() {
        assert_eq!(
            sanitize(r#"<img src="a.png" onerror="alert(1)" ONLOAD=x alt="pic">"#),
            r#"<img src="a.png" alt="pic">"#
        );
    }

    #[test]
    fn script_urls_become_placeholder() {
        assert_eq!(
            sanitize(r#"<a href=" JavaScript:alert(1)">x</a>"#),
            r##"<a href="#">x</a>"##
        );
        assert_eq!(
            sanitize(r#"<img src="java&#x09;script:alert(1)">"#),
            r##"<img src="#">"##
        );
    }

    #[test]
    fn allowed_markup_is_untouched() {
        let html = r#"<p class="lead">Hi <strong>there</strong> <a href="https://x.test" target="_blank">x</a></p>"#;
        assert_eq!(sanitize(html), html);
    }

    #[test]
    fn tags_are_canonicalized() {
        assert_eq!(sanitize("<P CLASS='a'>x</P>"), r#"<p class="a">x</p>"#);
        assert_eq!(sanitize("<br/>"), "<br />");
        assert_eq!(sanitize("<a href=/x>y</a>"), r#"<a href="/x">y</a>"#);
    }

    #[test]
    fn disallowed_tags_are_neutralized() {
        assert_eq!(
            sanitize("foo <style>body{}</style> bar"),
            "foo &lt;style>body{}&lt;/style> bar"
        );
    }

    #[test]
    fn comments_are_removed() {
        assert_eq!(sanitize("a<!-- hidden -->b"), "ab");
        assert_eq!(sanitize("a<!-- never closed"), "a");
    }

    #[test]
    fn malformed_angle_brackets_are_escaped() {
        assert_eq!(sanitize("1 < 2 and <b"), "1 &lt; 2 and &lt;b");
        assert_eq!(sanitize("<!DOCTYPE html>"), "&lt;!DOCTYPE html>");
    }

    #[test]
    fn removal_cannot_splice_a_new_tag() {
        let out = sanitize("<scr<script>x</script>ipt>alert(1)</script>");
        assert!(!out.contains("<script"));
        assert_eq!(out, "&lt;script>alert(1)");
    }

    #[test]
    fn extended_policy_allows_extra_tags() {
        let policy = SanitizePolicy::default().with_extra_allowed(["video"]);
        assert_eq!(
            sanitize_with("<video src=\"a.mp4\"></video>", &policy),
            "<video src=\"a.mp4\"></video>"
        );
        assert_eq!(sanitize("<video></video>"), "&lt;video>&lt;/video>");
    }

    #[rstest]
    #[case("<a href=\"javascript:x\" onclick=y>t</a>")]
    #[case("<p title='a\"b &amp; c'>x</p>")]
    #[case("<<script>>")]
    #[case("<b>&notanentity;</b>")]
    #[case("plain & simple > text")]
    fn idempotent(#[case] input: &str) {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once);
    }
}
