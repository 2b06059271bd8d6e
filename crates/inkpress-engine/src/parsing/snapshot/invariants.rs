use xi_rope::Rope;

use crate::parsing::blocks::{Block, BlockKind};

/// Validates segmenter output invariants.
///
/// Asserts that:
/// - All block and list item spans are within rope bounds
/// - Blocks appear in source order without overlapping
/// - Every list has at least one item, each inside the list's span
/// - Code block content is a verbatim substring of the block's raw text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[Block]) {
    let n = rope.len();
    let mut prev_end = 0;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block span overlaps its predecessor: {:?} (previous end: {})",
            b.span,
            prev_end
        );
        prev_end = b.span.end;

        match &b.kind {
            BlockKind::List { items, .. } => {
                assert!(!items.is_empty(), "empty list at {:?}", b.span);
                for item in items {
                    assert!(
                        item.span.start >= b.span.start && item.span.end <= b.span.end,
                        "list item span not contained in list span: item {:?}, list {:?}",
                        item.span,
                        b.span
                    );
                }
            }
            BlockKind::CodeBlock { content, .. } => {
                assert!(
                    b.raw_text.contains(content.as_str()),
                    "code content not verbatim: {content:?} in {:?}",
                    b.raw_text
                );
                assert!(b.rendered.is_none(), "code block was inline-transformed");
            }
            _ => {}
        }
    }
}
