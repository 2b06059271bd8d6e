use crate::parsing::rope::span::Span;

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, FenceKind, FenceSig},
    types::{Block, BlockKind, ListItem},
};

/// Produces the finished markup for a heading, paragraph or list-item text.
///
/// The segmenter never formats inline syntax itself; it hands the text of
/// each inline-eligible line to this seam. Code block payloads are never
/// passed through it.
pub trait InlineFragments {
    fn fragment(&self, text: &str) -> String;

    /// Name of an element whose whole subtree is removed (`script`,
    /// `iframe`) that `text` opens without closing.
    ///
    /// When this returns a name, the following lines are that element's
    /// body: the segmenter collects them until the element closes and
    /// hands them over as one unit.
    fn unclosed_element(&self, _text: &str) -> Option<String> {
        None
    }
}

/// The segmenter's "current open block" slot.
#[derive(Debug)]
enum SegmenterState {
    Idle,
    InList {
        ordered: bool,
        span: Span,
        lines: Vec<String>,
        items: Vec<ListItem>,
    },
    InCodeBlock {
        fence: FenceKind,
        language: Option<String>,
        span: Span,
        lines: Vec<String>,
    },
    /// Body lines of an element opened on an earlier line.
    InRawHtml {
        element: String,
        span: Option<Span>,
        lines: Vec<String>,
    },
}

/// Line-driven state machine that turns classified lines into [`Block`]s.
///
/// Feed every line through [`push`](Self::push), then call
/// [`finish`](Self::finish), which flushes whatever block is still open.
pub struct BlockBuilder<'a> {
    inline: &'a dyn InlineFragments,
    state: SegmenterState,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(inline: &'a dyn InlineFragments) -> Self {
        Self {
            inline,
            state: SegmenterState::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_code_block() {
            self.consume_code_line(c);
            return;
        }
        if self.in_raw_html() {
            self.consume_raw_html_line(c);
            return;
        }

        match &c.kind {
            LineKind::Fence(sig) => {
                self.flush_list();
                self.open_code_block(sig, c.text_span, &c.text);
            }
            LineKind::Heading { level, content } => {
                self.flush_list();
                self.out.push(Block {
                    kind: BlockKind::Heading { level: *level },
                    span: c.text_span,
                    raw_text: c.text.clone(),
                    rendered: Some(self.inline.fragment(content)),
                });
                self.open_raw_html(content);
            }
            LineKind::ListItem { ordered, content } => {
                self.push_list_item(*ordered, content, c);
                self.open_raw_html(content);
            }
            LineKind::Blank => {
                self.flush_list();
                self.out.push(Block {
                    kind: BlockKind::Blank,
                    span: c.text_span,
                    raw_text: c.text.clone(),
                    rendered: None,
                });
            }
            LineKind::Text => {
                self.flush_list();
                let text = c.text.trim();
                self.out.push(Block {
                    kind: BlockKind::Paragraph,
                    span: c.text_span,
                    raw_text: c.text.clone(),
                    rendered: Some(self.inline.fragment(text)),
                });
                self.open_raw_html(text);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush: the open block is emitted, never dropped.
        self.flush_list();
        if let SegmenterState::InRawHtml { element, .. } = &self.state {
            log::debug!("closing unterminated <{element}> at end of input");
        }
        self.flush_raw_html();
        if self.in_code_block() {
            log::debug!("closing unterminated code fence at end of input");
        }
        self.flush_code_block(false);
        self.out
    }

    fn in_code_block(&self) -> bool {
        matches!(self.state, SegmenterState::InCodeBlock { .. })
    }

    fn in_raw_html(&self) -> bool {
        matches!(self.state, SegmenterState::InRawHtml { .. })
    }

    /// Enters `InRawHtml` when `text` leaves an element open. An open list
    /// ends with the line that opened it.
    fn open_raw_html(&mut self, text: &str) {
        if let Some(element) = self.inline.unclosed_element(text) {
            self.flush_list();
            self.state = SegmenterState::InRawHtml {
                element,
                span: None,
                lines: vec![],
            };
        }
    }

    fn consume_raw_html_line(&mut self, c: &LineClass) {
        let SegmenterState::InRawHtml {
            element,
            span,
            lines,
        } = &mut self.state
        else {
            return;
        };

        *span = Some(span.map_or(c.text_span, |s| s.cover(c.text_span)));
        lines.push(c.text.clone());

        if self
            .inline
            .unclosed_element(&raw_html_unit(element, lines))
            .is_none()
        {
            self.flush_raw_html();
        }
    }

    fn open_code_block(&mut self, sig: &FenceSig, line: Span, text: &str) {
        self.state = SegmenterState::InCodeBlock {
            fence: sig.kind,
            language: sig.language.clone(),
            span: line,
            lines: vec![text.to_string()],
        };
    }

    fn consume_code_line(&mut self, c: &LineClass) {
        let SegmenterState::InCodeBlock {
            fence, span, lines, ..
        } = &mut self.state
        else {
            return;
        };

        *span = span.cover(c.text_span);
        lines.push(c.text.clone());

        if CodeFence::closes(*fence, c.fence_sig()) {
            self.flush_code_block(true);
        }
    }

    fn push_list_item(&mut self, ordered: bool, content: &str, c: &LineClass) {
        let same_kind = matches!(
            self.state,
            SegmenterState::InList { ordered: open, .. } if open == ordered
        );
        if !same_kind {
            self.flush_list();
            self.state = SegmenterState::InList {
                ordered,
                span: c.text_span,
                lines: vec![],
                items: vec![],
            };
        }

        let item = ListItem {
            span: c.text_span,
            raw_text: content.to_string(),
            rendered: self.inline.fragment(content),
        };
        if let SegmenterState::InList {
            span, lines, items, ..
        } = &mut self.state
        {
            *span = span.cover(c.text_span);
            lines.push(c.text.clone());
            items.push(item);
        }
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.state, SegmenterState::Idle);
        if let SegmenterState::InList {
            ordered,
            span,
            lines,
            items,
        } = prev
        {
            self.out.push(Block {
                kind: BlockKind::List { ordered, items },
                span,
                raw_text: lines.join("\n"),
                rendered: None,
            });
        } else {
            self.state = prev; // put back a non-list state (e.g. code block)
        }
    }

    /// Emits the collected body as one paragraph, re-opened with its start
    /// tag so the inline seam sees the whole element.
    fn flush_raw_html(&mut self) {
        let prev = std::mem::replace(&mut self.state, SegmenterState::Idle);
        match prev {
            SegmenterState::InRawHtml {
                element,
                span: Some(span),
                lines,
            } => {
                let rendered = self.inline.fragment(&raw_html_unit(&element, &lines));
                self.out.push(Block {
                    kind: BlockKind::Paragraph,
                    span,
                    raw_text: lines.join("\n"),
                    rendered: Some(rendered),
                });
            }
            SegmenterState::InRawHtml { span: None, .. } => {}
            other => self.state = other,
        }
    }

    /// `closed` says whether the last buffered line is the closing fence.
    fn flush_code_block(&mut self, closed: bool) {
        let prev = std::mem::replace(&mut self.state, SegmenterState::Idle);
        if let SegmenterState::InCodeBlock {
            language,
            span,
            lines,
            ..
        } = prev
        {
            // lines[0] is the opening fence.
            let body_end = if closed { lines.len() - 1 } else { lines.len() };
            let content = lines[1..body_end].join("\n");

            self.out.push(Block {
                kind: BlockKind::CodeBlock { language, content },
                span,
                raw_text: lines.join("\n"),
                rendered: None,
            });
        } else {
            self.state = prev;
        }
    }
}

fn raw_html_unit(element: &str, lines: &[String]) -> String {
    format!("<{element}>\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::classify::MarkdownLineClassifier;
    use crate::parsing::rope::lines_with_spans;
    use crate::sanitize::{DEFAULT_POLICY, sanitize};
    use pretty_assertions::assert_eq;
    use xi_rope::Rope;

    /// Marks inline-transformed text so tests can see which strings went
    /// through the inline seam.
    struct Bracketing;

    impl InlineFragments for Bracketing {
        fn fragment(&self, text: &str) -> String {
            format!("[{text}]")
        }
    }

    /// Sanitizes without any inline formatting.
    struct Sanitizing;

    impl InlineFragments for Sanitizing {
        fn fragment(&self, text: &str) -> String {
            sanitize(text)
        }

        fn unclosed_element(&self, text: &str) -> Option<String> {
            crate::sanitize::unclosed_element(text, &DEFAULT_POLICY)
        }
    }

    fn segment_with(inline: &dyn InlineFragments, md: &str) -> Vec<Block> {
        let rope = Rope::from(md);
        let mut builder = BlockBuilder::new(inline);
        for lr in lines_with_spans(&rope) {
            builder.push(&MarkdownLineClassifier.classify(&lr));
        }
        builder.finish()
    }

    fn segment(md: &str) -> Vec<Block> {
        segment_with(&Bracketing, md)
    }

    fn rendered(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .map(|b| b.rendered.as_deref().unwrap_or_default())
            .collect()
    }

    fn kinds(blocks: &[Block]) -> Vec<&'static str> {
        blocks
            .iter()
            .map(|b| match b.kind {
                BlockKind::Heading { .. } => "heading",
                BlockKind::Paragraph => "paragraph",
                BlockKind::List { ordered: false, .. } => "bullets",
                BlockKind::List { ordered: true, .. } => "numbers",
                BlockKind::CodeBlock { .. } => "code",
                BlockKind::Blank => "blank",
            })
            .collect()
    }

    #[test]
    fn fenced_code_is_opaque() {
        let blocks = segment("```js\nconst x = 1;\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::CodeBlock {
                language: Some("js".into()),
                content: "const x = 1;".into(),
            }
        );
        assert_eq!(blocks[0].raw_text, "```js\nconst x = 1;\n```");
        assert_eq!(blocks[0].rendered, None);
    }

    #[test]
    fn list_looking_lines_inside_code_are_content() {
        let blocks = segment("```\n* not a list\n# not a heading\n```");
        assert_eq!(kinds(&blocks), vec!["code"]);
        assert_eq!(
            blocks[0].kind,
            BlockKind::CodeBlock {
                language: None,
                content: "* not a list\n# not a heading".into(),
            }
        );
    }

    #[test]
    fn unterminated_fence_is_flushed_at_end_of_input() {
        let blocks = segment("intro\n```rust\nfn main() {}\nlet y = 2;");
        assert_eq!(kinds(&blocks), vec!["paragraph", "code"]);
        assert_eq!(
            blocks[1].kind,
            BlockKind::CodeBlock {
                language: Some("rust".into()),
                content: "fn main() {}\nlet y = 2;".into(),
            }
        );
    }

    #[test]
    fn mismatched_fence_does_not_close() {
        let blocks = segment("~~~\n```\n~~~");
        assert_eq!(
            blocks[0].kind,
            BlockKind::CodeBlock {
                language: None,
                content: "```".into(),
            }
        );
    }

    #[test]
    fn deeply_indented_fence_is_content() {
        let blocks = segment("```
    ```");
        assert_eq!(
            blocks[0].kind,
            BlockKind::CodeBlock {
                language: None,
                content: "    ```".into(),
            }
        );
    }

    #[test]
    fn empty_code_block_is_kept() {
        let blocks = segment("```\n```");
        assert_eq!(
            blocks[0].kind,
            BlockKind::CodeBlock {
                language: None,
                content: String::new(),
            }
        );
    }

    #[test]
    fn bullets_group_into_one_list() {
        let blocks = segment("* a\n* b\n\ntext");
        assert_eq!(kinds(&blocks), vec!["bullets", "blank", "paragraph"]);

        let BlockKind::List { items, .. } = &blocks[0].kind else {
            panic!("expected list");
        };
        let rendered: Vec<_> = items.iter().map(|i| i.rendered.as_str()).collect();
        assert_eq!(rendered, vec!["[a]", "[b]"]);
        assert_eq!(blocks[0].raw_text, "* a\n* b");
        assert_eq!(blocks[2].rendered.as_deref(), Some("[text]"));
    }

    #[test]
    fn change_of_ordering_kind_closes_list() {
        let blocks = segment("- a\n1. one\n2. two\n- b");
        assert_eq!(kinds(&blocks), vec!["bullets", "numbers", "bullets"]);
    }

    #[test]
    fn paragraph_line_closes_list() {
        let blocks = segment("- a\nafter\n- b");
        assert_eq!(kinds(&blocks), vec!["bullets", "paragraph", "bullets"]);
    }

    #[test]
    fn fence_closes_open_list() {
        let blocks = segment("- a\n```\ncode\n```\n- b");
        assert_eq!(kinds(&blocks), vec!["bullets", "code", "bullets"]);
    }

    #[test]
    fn list_at_end_of_input_is_flushed() {
        let blocks = segment("para\n1. x\n2. y");
        assert_eq!(kinds(&blocks), vec!["paragraph", "numbers"]);
    }

    #[test]
    fn headings_are_single_line_and_inline_transformed() {
        let blocks = segment("# Title\nbody");
        assert_eq!(kinds(&blocks), vec!["heading", "paragraph"]);
        assert_eq!(blocks[0].kind, BlockKind::Heading { level: 1 });
        assert_eq!(blocks[0].rendered.as_deref(), Some("[Title]"));
        assert_eq!(blocks[0].raw_text, "# Title");
    }

    #[test]
    fn heading_closes_open_list() {
        let blocks = segment("* a\n## Next");
        assert_eq!(kinds(&blocks), vec!["bullets", "heading"]);
    }

    #[test]
    fn spans_cover_source_lines() {
        let md = "* a\n* b\n```\nx\n```";
        let blocks = segment(md);
        assert_eq!(blocks[0].span, Span::new(0, 7));
        assert_eq!(&md[blocks[1].span.start..blocks[1].span.end], "```\nx\n```");
    }

    #[test]
    fn script_body_spanning_lines_is_one_unit() {
        let md = "intro\n<script>\nvar a = **1**;\n\n* x\n</script> after\nnext";
        let blocks = segment_with(&Sanitizing, md);
        assert_eq!(
            kinds(&blocks),
            vec!["paragraph", "paragraph", "paragraph", "paragraph"]
        );
        assert_eq!(rendered(&blocks), vec!["intro", "", " after", "next"]);
        assert_eq!(blocks[2].raw_text, "var a = **1**;\n\n* x\n</script> after");
        assert_eq!(
            &md[blocks[2].span.start..blocks[2].span.end],
            blocks[2].raw_text
        );
    }

    #[test]
    fn unclosed_iframe_swallows_the_rest() {
        let blocks = segment_with(&Sanitizing, "<iframe src=x>\n# not a heading\n```\nstill body");
        assert_eq!(kinds(&blocks), vec!["paragraph", "paragraph"]);
        assert_eq!(rendered(&blocks), vec!["", ""]);
    }

    #[test]
    fn script_inside_fenced_code_stays_code() {
        let blocks = segment_with(&Sanitizing, "```\n<script>\n```\nafter");
        assert_eq!(kinds(&blocks), vec!["code", "paragraph"]);
        assert_eq!(rendered(&blocks), vec!["", "after"]);
    }

    #[test]
    fn list_item_opening_script_ends_the_list() {
        let blocks = segment_with(&Sanitizing, "* a <script>\nbody\n</script>\n* b");
        assert_eq!(kinds(&blocks), vec!["bullets", "paragraph", "bullets"]);
        assert_eq!(blocks[1].rendered.as_deref(), Some(""));
    }

    #[test]
    fn heading_opening_script_keeps_its_text() {
        let blocks = segment_with(&Sanitizing, "# Title <script>\nx\n</script>");
        assert_eq!(kinds(&blocks), vec!["heading", "paragraph"]);
        assert_eq!(rendered(&blocks), vec!["Title ", ""]);
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(segment("").is_empty());
    }
}
