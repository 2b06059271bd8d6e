use std::borrow::Cow;

/// Replacement for a URL that would execute script.
pub const SAFE_URL_PLACEHOLDER: &str = "#";

const BLOCKED_SCHEMES: &[&str] = &["javascript", "vbscript"];

/// True when `value` resolves to a script-executing scheme.
///
/// Entities are decoded and all whitespace and control characters removed
/// before the case-insensitive comparison, matching how browsers resolve
/// `java&#09;script:` or ` JavaScript:`.
pub fn is_dangerous_url(value: &str) -> bool {
    let decoded = html_escape::decode_html_entities(value);
    let normalized: String = decoded
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    BLOCKED_SCHEMES.iter().any(|scheme| {
        normalized
            .strip_prefix(scheme)
            .is_some_and(|rest| rest.starts_with(':'))
    })
}

/// Returns `value`, or [`SAFE_URL_PLACEHOLDER`] if it is dangerous.
pub fn safe_url(value: &str) -> Cow<'_, str> {
    if is_dangerous_url(value) {
        log::debug!("neutralized script URL");
        Cow::Borrowed(SAFE_URL_PLACEHOLDER)
    } else {
        Cow::Borrowed(value)
    }
}
