//! Block sequence to node tree, and node tree to one markup string.

use crate::parsing::blocks::{Block, BlockKind, kinds::Paragraph};
use crate::sanitize::{SanitizePolicy, sanitize_with};
use crate::theme::{Theme, class_attr};

use super::{highlighter::Highlighter, node::Node};

/// Everything the assembler needs besides the blocks themselves.
pub struct Assembler<'a> {
    pub theme: &'a Theme,
    pub highlighter: &'a dyn Highlighter,
    pub policy: &'a SanitizePolicy,
    /// Language passed to the highlighter for fences without one.
    pub default_language: &'a str,
}

impl Assembler<'_> {
    /// Builds the node tree.
    ///
    /// Blank blocks are dropped; they only end a paragraph. Adjacent
    /// paragraph lines merge into one node. A line whose markup is empty
    /// (sanitized away entirely) adds nothing.
    pub fn nodes(&self, blocks: &[Block]) -> Vec<Node> {
        let mut out = vec![];
        let mut paragraph: Vec<&str> = vec![];

        for block in blocks {
            if let BlockKind::Paragraph = block.kind {
                match block.rendered.as_deref() {
                    Some(html) if !html.is_empty() => paragraph.push(html),
                    _ => {}
                }
                continue;
            }
            flush_paragraph(&mut paragraph, &mut out);

            match &block.kind {
                BlockKind::Heading { level } => out.push(Node::Heading {
                    level: *level,
                    html: block.rendered.clone().unwrap_or_default(),
                }),
                BlockKind::List { ordered, items } => out.push(Node::List {
                    ordered: *ordered,
                    items: items.iter().map(|i| i.rendered.clone()).collect(),
                }),
                BlockKind::CodeBlock { language, content } => {
                    let lang = language.as_deref().unwrap_or(self.default_language);
                    let html = sanitize_with(&self.highlighter.highlight(content, lang), self.policy);
                    out.push(Node::CodeBlock {
                        language: language.clone(),
                        code: content.clone(),
                        html,
                    });
                }
                BlockKind::Paragraph | BlockKind::Blank => {}
            }
        }
        flush_paragraph(&mut paragraph, &mut out);

        out
    }

    /// Wraps each node in its themed element. The result is not yet
    /// sanitized as a whole.
    pub fn html(&self, nodes: &[Node]) -> String {
        let theme = self.theme;
        nodes
            .iter()
            .map(|node| match node {
                Node::Heading { level, html } => {
                    let class = class_attr(theme.heading(*level));
                    format!("<h{level}{class}>{html}</h{level}>")
                }
                Node::Paragraph { html } => {
                    format!("<p{}>{html}</p>", class_attr(&theme.paragraph))
                }
                Node::List { ordered, items } => {
                    let (tag, class) = if *ordered {
                        ("ol", &theme.ordered_list)
                    } else {
                        ("ul", &theme.list)
                    };
                    let item_class = class_attr(&theme.list_item);
                    let items: String = items
                        .iter()
                        .map(|item| format!("<li{item_class}>{item}</li>"))
                        .collect();
                    format!("<{tag}{}>{items}</{tag}>", class_attr(class))
                }
                Node::CodeBlock { html, .. } => {
                    format!("<div{}>{html}</div>", class_attr(&theme.code_block))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn flush_paragraph(lines: &mut Vec<&str>, out: &mut Vec<Node>) {
    if lines.is_empty() {
        return;
    }
    out.push(Node::Paragraph {
        html: lines.join(Paragraph::LINE_BREAK),
    });
    lines.clear();
}
