use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Tags that pass through raw-HTML segments untouched (apart from
/// attribute policing).
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "b", "blockquote", "br", "code", "del", "details", "div", "em", "figcaption",
    "figure", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "img", "kbd", "li", "mark", "ol", "p",
    "pre", "s", "small", "span", "strong", "sub", "summary", "sup", "table", "tbody", "td", "th",
    "thead", "tr", "u", "ul",
];

/// Tags removed together with everything inside them.
pub const DENIED_TAGS: &[&str] = &["script", "iframe"];

/// Attributes whose values are URLs and get the scheme check.
pub const URL_ATTRIBUTES: &[&str] = &["href", "src", "xlink:href"];

static EVENT_HANDLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^on\w+$").expect("Invalid event handler regex"));

/// The sanitizer's tag and attribute rules.
///
/// The deny-list, event-handler rule and URL rule are fixed; only the
/// allow-list can be extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizePolicy {
    allowed: HashSet<String>,
}

/// Process-wide default policy.
pub static DEFAULT_POLICY: LazyLock<SanitizePolicy> = LazyLock::new(SanitizePolicy::default);

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self {
            allowed: DEFAULT_ALLOWED_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl SanitizePolicy {
    /// Adds tags to the allow-list. Denied tags are ignored: they can never
    /// be allowed.
    #[must_use]
    pub fn with_extra_allowed<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref().trim().to_ascii_lowercase();
            if tag.is_empty() || DENIED_TAGS.contains(&tag.as_str()) {
                log::warn!("ignoring sanitizer allow-list entry {tag:?}");
                continue;
            }
            self.allowed.insert(tag);
        }
        self
    }

    /// `name` must already be lower-case.
    pub fn allows(&self, name: &str) -> bool {
        !self.denies(name) && self.allowed.contains(name)
    }

    /// `name` must already be lower-case.
    pub fn denies(&self, name: &str) -> bool {
        DENIED_TAGS.contains(&name)
    }

    pub fn is_event_handler(&self, attr: &str) -> bool {
        EVENT_HANDLER_RE.is_match(attr)
    }

    /// `attr` must already be lower-case.
    pub fn is_url_attribute(&self, attr: &str) -> bool {
        URL_ATTRIBUTES.contains(&attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("onclick", true)]
    #[case("ONLOAD", true)]
    #[case("onMouseOver", true)]
    #[case("on", false)]
    #[case("one-way", false)]
    #[case("class", false)]
    fn event_handler_pattern(#[case] attr: &str, #[case] expected: bool) {
        assert_eq!(DEFAULT_POLICY.is_event_handler(attr), expected);
    }

    #[test]
    fn denied_tags_are_never_allowed() {
        let policy = SanitizePolicy::default().with_extra_allowed(["script", "IFRAME", "abbr2"]);
        assert!(!policy.allows("script"));
        assert!(!policy.allows("iframe"));
        assert!(policy.denies("script"));
        assert!(policy.allows("abbr2"));
    }

    #[test]
    fn default_allow_list() {
        assert!(DEFAULT_POLICY.allows("strong"));
        assert!(DEFAULT_POLICY.allows("a"));
        assert!(!DEFAULT_POLICY.allows("style"));
        assert!(!DEFAULT_POLICY.allows("object"));
    }
}
