//! HTML to markdown, for content pasted or imported into the editor.
//!
//! A fixed sequence of element rewrites over the raw HTML. Only the
//! elements the renderer itself emits are understood; anything else is
//! stripped down to its text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `<name ...>inner</name>`, case-insensitive, spanning lines.
fn element(name: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{name}(?:\s[^>]*)?>(.*?)</{name}\s*>"))
        .expect("Invalid element regex")
}

fn subtree(name: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{name}\b[^>]*>.*?(?:</{name}\s*>|$)"))
        .expect("Invalid subtree regex")
}

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| subtree("script"));
static IFRAME_RE: LazyLock<Regex> = LazyLock::new(|| subtree("iframe"));
static H1_RE: LazyLock<Regex> = LazyLock::new(|| element("h1"));
static H2_RE: LazyLock<Regex> = LazyLock::new(|| element("h2"));
static H3_RE: LazyLock<Regex> = LazyLock::new(|| element("h3"));
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| element("strong"));
static B_RE: LazyLock<Regex> = LazyLock::new(|| element("b"));
static EM_RE: LazyLock<Regex> = LazyLock::new(|| element("em"));
static I_RE: LazyLock<Regex> = LazyLock::new(|| element("i"));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*["']([^"']*)["'][^>]*>(.*?)</a\s*>"#)
        .expect("Invalid link regex")
});
static UL_RE: LazyLock<Regex> = LazyLock::new(|| element("ul"));
static OL_RE: LazyLock<Regex> = LazyLock::new(|| element("ol"));
static LI_RE: LazyLock<Regex> = LazyLock::new(|| element("li"));
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| element("blockquote"));
static PRE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<pre(?:\s[^>]*)?>\s*<code(?:\s[^>]*)?>(.*?)</code\s*>\s*</pre\s*>")
        .expect("Invalid pre regex")
});
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| element("code"));
static P_RE: LazyLock<Regex> = LazyLock::new(|| element("p"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));
static EXTRA_NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid newline regex"));

/// Converts editor HTML back to markdown.
///
/// `script` and `iframe` subtrees are removed first; unknown tags are
/// stripped, entities decoded, runs of blank lines collapsed and the result
/// trimmed.
pub fn html_to_markdown(html: &str) -> String {
    let mut s = SCRIPT_RE.replace_all(html, "").into_owned();
    s = IFRAME_RE.replace_all(&s, "").into_owned();

    for (re, rep) in [
        (&H1_RE, "# $1\n\n"),
        (&H2_RE, "## $1\n\n"),
        (&H3_RE, "### $1\n\n"),
        (&STRONG_RE, "**$1**"),
        (&B_RE, "**$1**"),
        (&EM_RE, "*$1*"),
        (&I_RE, "*$1*"),
        (&LINK_RE, "[$2]($1)"),
    ] {
        s = re.replace_all(&s, rep).into_owned();
    }

    s = UL_RE
        .replace_all(&s, |caps: &Captures| {
            format!("{}\n", LI_RE.replace_all(&caps[1], "* $1\n"))
        })
        .into_owned();
    s = OL_RE
        .replace_all(&s, |caps: &Captures| {
            let mut n = 0;
            let items = LI_RE.replace_all(&caps[1], |li: &Captures| {
                n += 1;
                format!("{n}. {}\n", &li[1])
            });
            format!("{items}\n")
        })
        .into_owned();

    for (re, rep) in [
        (&BLOCKQUOTE_RE, "> $1\n\n"),
        (&PRE_CODE_RE, "```\n$1\n```\n\n"),
        (&CODE_RE, "`$1`"),
        (&P_RE, "$1\n\n"),
        (&TAG_RE, ""),
    ] {
        s = re.replace_all(&s, rep).into_owned();
    }

    let s = html_escape::decode_html_entities(&s);
    EXTRA_NEWLINES_RE
        .replace_all(&s, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("<h1>Title</h1><p>Hello <strong>world</strong></p>", "# Title\n\nHello **world**")]
    #[case("<h2 class=\"x\">Sub</h2>", "## Sub")]
    #[case("<H3>Small</H3>", "### Small")]
    #[case("<p><b>b</b> <i>i</i> <em>e</em></p>", "**b** *i* *e*")]
    #[case("<blockquote>quoted</blockquote>", "> quoted")]
    #[case("<p>use <code>x</code></p>", "use `x`")]
    #[case("<p>a</p>\n\n<p>b</p>", "a\n\nb")]
    #[case("<div><span>plain</span></div>", "plain")]
    #[case("", "")]
    fn converts(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(html_to_markdown(html), expected);
    }

    #[test]
    fn links_keep_their_destination() {
        assert_eq!(
            html_to_markdown(r#"<p><a class="l" href="https://x.test/?a=1&amp;b=2" target="_blank">site</a></p>"#),
            "[site](https://x.test/?a=1&b=2)"
        );
    }

    #[test]
    fn lists_are_numbered_per_list() {
        assert_eq!(
            html_to_markdown("<ul><li>a</li><li>b</li></ul><ol><li>x</li><li>y</li></ol>"),
            "* a\n* b\n\n1. x\n2. y"
        );
    }

    #[test]
    fn code_blocks_are_fenced_and_unescaped() {
        assert_eq!(
            html_to_markdown(r#"<pre><code class="language-rs">let a = 1 &lt; 2;</code></pre>"#),
            "```\nlet a = 1 < 2;\n```"
        );
    }

    #[test]
    fn br_is_not_bold() {
        assert_eq!(html_to_markdown("<p>a<br>b</p>"), "ab");
    }

    #[test]
    fn executable_subtrees_are_dropped() {
        assert_eq!(
            html_to_markdown("<p>ok</p><script>alert('<p>x</p>')</script><iframe src=\"e\">f</iframe>"),
            "ok"
        );
        assert_eq!(html_to_markdown("<p>ok</p><script>never closed"), "ok");
    }
}
