//! Best-effort scanner for one HTML tag.

/// A tag as written in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Lower-cased element name.
    pub name: String,
    pub closing: bool,
    pub self_closing: bool,
    /// Attribute names as written, with raw (still entity-encoded) values.
    pub attrs: Vec<(&'a str, Option<&'a str>)>,
    /// Byte index just past the closing `>`.
    pub end: usize,
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

fn is_attr_name_byte(b: u8) -> bool {
    !is_space(b) && !matches!(b, b'"' | b'\'' | b'>' | b'/' | b'=' | b'<')
}

/// Parses the tag starting at `s[start] == '<'`.
///
/// Returns `None` for anything that is not a complete, well-formed tag:
/// comments, doctypes, unterminated tags, stray `<` inside a tag, or an
/// unclosed quoted value.
pub fn parse_tag(s: &str, start: usize) -> Option<Tag<'_>> {
    let b = s.as_bytes();
    let mut j = start + 1;

    let closing = b.get(j) == Some(&b'/');
    if closing {
        j += 1;
    }

    let name_start = j;
    if !b.get(j)?.is_ascii_alphabetic() {
        return None;
    }
    while j < b.len() && (b[j].is_ascii_alphanumeric() || b[j] == b'-') {
        j += 1;
    }
    let name = s[name_start..j].to_ascii_lowercase();
    match b.get(j) {
        Some(&c) if is_space(c) || c == b'>' || c == b'/' => {}
        _ => return None,
    }

    let mut attrs = vec![];
    loop {
        while j < b.len() && is_space(b[j]) {
            j += 1;
        }
        match b.get(j)? {
            b'>' => {
                return Some(Tag {
                    name,
                    closing,
                    self_closing: false,
                    attrs,
                    end: j + 1,
                });
            }
            b'/' if b.get(j + 1) == Some(&b'>') => {
                return Some(Tag {
                    name,
                    closing,
                    self_closing: true,
                    attrs,
                    end: j + 2,
                });
            }
            b'/' => {
                j += 1;
                continue;
            }
            _ => {}
        }

        let attr_start = j;
        while j < b.len() && is_attr_name_byte(b[j]) {
            j += 1;
        }
        if j == attr_start {
            return None;
        }
        let attr_name = &s[attr_start..j];

        let mut k = j;
        while k < b.len() && is_space(b[k]) {
            k += 1;
        }
        if b.get(k) != Some(&b'=') {
            attrs.push((attr_name, None));
            continue;
        }
        k += 1;
        while k < b.len() && is_space(b[k]) {
            k += 1;
        }

        let value = match b.get(k)? {
            &q @ (b'"' | b'\'') => {
                let value_start = k + 1;
                let len = s[value_start..].bytes().position(|c| c == q)?;
                k = value_start + len + 1;
                &s[value_start..value_start + len]
            }
            _ => {
                let value_start = k;
                while k < b.len() && !is_space(b[k]) && b[k] != b'>' {
                    if b[k] == b'<' {
                        return None;
                    }
                    k += 1;
                }
                &s[value_start..k]
            }
        };
        attrs.push((attr_name, Some(value)));
        j = k;
    }
}
