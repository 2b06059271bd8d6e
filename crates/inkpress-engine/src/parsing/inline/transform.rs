use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::sanitize::safe_url;
use crate::theme::{Theme, class_attr};

use super::{
    kinds::{Emphasis, Link},
    protect::protect_raw_zones,
    types::{Protected, RawZone},
};

static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Emphasis::STRONG_PATTERN).expect("Invalid strong regex"));
static EM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Emphasis::EM_PATTERN).expect("Invalid emphasis regex"));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]\n]+)\]\(\x{E000}(\d+)\x{E001}\)").expect("Invalid link regex")
});
static ZONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}(\d+)\x{E001}").expect("Invalid placeholder regex"));

/// Ordered inline rewrite pipeline for one line of text.
///
/// Passes: protect raw zones, strong, emphasis, links, restore raw zones.
/// Text outside raw zones is not escaped; embedded HTML is left for the
/// sanitizer.
#[derive(Debug, Clone)]
pub struct InlineTransformer {
    strong_open: String,
    em_open: String,
    code_open: String,
    link_class: String,
}

impl InlineTransformer {
    pub fn new(theme: &Theme) -> Self {
        Self {
            strong_open: format!("<strong{}>", class_attr(&theme.strong)),
            em_open: format!("<em{}>", class_attr(&theme.em)),
            code_open: format!("<code{}>", class_attr(&theme.inline_code)),
            link_class: class_attr(&theme.link),
        }
    }

    pub fn transform(&self, text: &str) -> String {
        let protected = protect_raw_zones(text);
        let s = self.strong(&protected.text);
        let s = self.emphasis(&s);
        let s = self.links(&s, &protected);
        self.restore(&s, &protected)
    }

    fn strong(&self, s: &str) -> String {
        STRONG_RE
            .replace_all(s, |caps: &Captures| {
                format!("{}{}</strong>", self.strong_open, &caps[1])
            })
            .into_owned()
    }

    fn emphasis(&self, s: &str) -> String {
        EM_RE
            .replace_all(s, |caps: &Captures| format!("{}{}</em>", self.em_open, &caps[1]))
            .into_owned()
    }

    fn links(&self, s: &str, protected: &Protected) -> String {
        LINK_RE
            .replace_all(s, |caps: &Captures| {
                let dest = caps[2]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| protected.zone(i));
                match dest {
                    Some(RawZone::LinkDest(url)) => format!(
                        "<a href=\"{}\"{} {}>{}</a>",
                        html_escape::encode_double_quoted_attribute(&safe_url(url.trim())),
                        self.link_class,
                        Link::SAFETY_ATTRS,
                        &caps[1]
                    ),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    fn restore(&self, s: &str, protected: &Protected) -> String {
        ZONE_RE
            .replace_all(s, |caps: &Captures| {
                let zone = caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| protected.zone(i));
                match zone {
                    Some(RawZone::CodeSpan(inner)) => format!(
                        "{}{}</code>",
                        self.code_open,
                        html_escape::encode_text(inner)
                    ),
                    Some(RawZone::LinkDest(url)) => url.clone(),
                    Some(RawZone::Markup(tag)) => tag.clone(),
                    None => String::new(),
                }
            })
            .into_owned()
    }
}
