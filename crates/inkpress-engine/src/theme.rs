//! Per-element CSS classes applied to rendered markup.

use serde::{Deserialize, Serialize};

/// One class string per element kind the renderer emits.
///
/// An empty string omits the `class` attribute entirely. Deserializing a
/// partial table fills the missing fields from [`Theme::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub paragraph: String,
    pub list: String,
    pub ordered_list: String,
    pub list_item: String,
    pub strong: String,
    pub em: String,
    pub inline_code: String,
    pub link: String,
    /// Wrapper `<div>` around highlighter output.
    pub code_block: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            h1: "text-4xl font-bold text-gray-100 mb-6 mt-8".into(),
            h2: "text-3xl font-bold text-gray-100 mb-4 mt-8".into(),
            h3: "text-2xl font-bold text-gray-100 mb-4 mt-6".into(),
            paragraph: "text-gray-100/90 leading-relaxed mb-4".into(),
            list: "list-disc list-inside text-gray-100/90 mb-4 space-y-1".into(),
            ordered_list: "list-decimal list-inside text-gray-100/90 mb-4 space-y-1".into(),
            list_item: "text-gray-100/90".into(),
            strong: "font-bold text-gray-100".into(),
            em: "italic text-gray-100/90".into(),
            inline_code: "bg-gray-700 text-gray-100 px-2 py-1 rounded text-sm font-mono".into(),
            link: "text-blue-400 hover:text-blue-300 underline".into(),
            code_block: "my-6".into(),
        }
    }
}

impl Theme {
    /// A theme that emits no classes at all.
    pub fn unstyled() -> Self {
        Self {
            h1: String::new(),
            h2: String::new(),
            h3: String::new(),
            paragraph: String::new(),
            list: String::new(),
            ordered_list: String::new(),
            list_item: String::new(),
            strong: String::new(),
            em: String::new(),
            inline_code: String::new(),
            link: String::new(),
            code_block: String::new(),
        }
    }

    /// Class for a heading level. Levels past 3 share the `h3` class.
    pub fn heading(&self, level: u8) -> &str {
        match level {
            1 => &self.h1,
            2 => &self.h2,
            _ => &self.h3,
        }
    }
}

/// Formats ` class="..."` (leading space included), or nothing for an
/// empty class.
pub fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(
            " class=\"{}\"",
            html_escape::encode_double_quoted_attribute(class)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_attr_omits_empty() {
        assert_eq!(class_attr(""), "");
        assert_eq!(class_attr("a b"), " class=\"a b\"");
    }

    #[test]
    fn class_attr_escapes_quotes() {
        assert_eq!(class_attr("x\"y"), " class=\"x&quot;y\"");
    }

    #[test]
    fn heading_levels_past_three_use_h3() {
        let theme = Theme::default();
        assert_eq!(theme.heading(1), theme.h1);
        assert_eq!(theme.heading(5), theme.h3);
    }
}
