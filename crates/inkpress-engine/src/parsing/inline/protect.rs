use crate::sanitize::tag::parse_tag;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Link, RawHtml},
    types::{Protected, RawZone, ZONE_CLOSE, ZONE_OPEN},
};

/// Swaps every raw zone in `s` for a placeholder.
///
/// Zones are taken left to right and the one that starts first wins: `](`
/// inside a code span is never a link, a link destination keeps its
/// backticks verbatim, and backticks or `*` inside a tag's attribute values
/// are left alone. Unclosed constructs stay literal.
pub fn protect_raw_zones(s: &str) -> Protected {
    let clean: String = s.chars().filter(|&c| c != ZONE_OPEN && c != ZONE_CLOSE).collect();
    let mut cur = Cursor::new(&clean);
    let mut out = Protected {
        text: String::with_capacity(clean.len()),
        zones: vec![],
    };
    let mut copied = 0usize;

    while !cur.eof() {
        let at = cur.i;
        if let Some(inner) = try_code_span(&mut cur) {
            out.text.push_str(&clean[copied..at]);
            out.push_zone(RawZone::CodeSpan(inner.to_string()));
            copied = cur.i;
            continue;
        }
        if let Some(dest) = try_link_dest(&mut cur) {
            out.text.push_str(&clean[copied..at]);
            out.text.push(char::from(Link::LABEL_CLOSE));
            out.text.push(char::from(Link::DEST_OPEN));
            out.push_zone(RawZone::LinkDest(dest.to_string()));
            out.text.push(char::from(Link::DEST_CLOSE));
            copied = cur.i;
            continue;
        }
        if let Some(tag) = try_tag(&mut cur) {
            out.text.push_str(&clean[copied..at]);
            out.push_zone(RawZone::Markup(tag.to_string()));
            copied = cur.i;
            continue;
        }
        cur.bump();
    }

    out.text.push_str(&clean[copied..]);
    out
}

/// Parses `` `code` `` at the cursor, returning the inner text.
///
/// Empty spans (``` `` ```) are not code. On failure the cursor is not
/// moved.
fn try_code_span<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let inner_start = cur.i + 1;
    let mut ahead = cur.clone();
    ahead.bump();
    let inner_end = ahead.find(CodeSpan::TICK)?;
    if inner_end == inner_start {
        return None;
    }
    cur.i = inner_end + 1;
    Some(&cur.s[inner_start..inner_end])
}

/// Parses the `](destination)` tail of a link at the cursor, returning the
/// destination. On failure the cursor is not moved.
fn try_link_dest<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(Link::LABEL_CLOSE) || cur.peek_at(1) != Some(Link::DEST_OPEN) {
        return None;
    }
    let dest_start = cur.i + 2;
    let mut ahead = cur.clone();
    ahead.bump_n(2);
    let dest_end = ahead.find(Link::DEST_CLOSE)?;
    if dest_end == dest_start {
        return None;
    }
    cur.i = dest_end + 1;
    Some(&cur.s[dest_start..dest_end])
}

/// Parses a complete HTML tag at the cursor, returning its text. On
/// failure the cursor is not moved.
fn try_tag<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(RawHtml::TAG_OPEN) {
        return None;
    }
    let start = cur.i;
    let tag = parse_tag(cur.s, start)?;
    cur.i = tag.end;
    Some(&cur.s[start..tag.end])
}
