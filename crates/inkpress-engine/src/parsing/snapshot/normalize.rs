use crate::parsing::blocks::{Block, BlockKind};

/// One line per block: kind, span and the text that matters for that kind.
///
/// ```text
/// Heading(1) 0..7 "Title"
/// List(unordered) 9..16 ["a", "b"]
/// CodeBlock(js) 18..40 "const x = 1;"
/// ```
pub fn outline(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| {
            let span = format!("{}..{}", b.span.start, b.span.end);
            match &b.kind {
                BlockKind::Heading { level } => {
                    format!("Heading({level}) {span} {:?}", rendered(b))
                }
                BlockKind::Paragraph => format!("Paragraph {span} {:?}", rendered(b)),
                BlockKind::List { ordered, items } => {
                    let kind = if *ordered { "ordered" } else { "unordered" };
                    let items = items.iter().map(|i| i.rendered.as_str()).collect::<Vec<_>>();
                    format!("List({kind}) {span} {items:?}")
                }
                BlockKind::CodeBlock { language, content } => format!(
                    "CodeBlock({}) {span} {content:?}",
                    language.as_deref().unwrap_or("-")
                ),
                BlockKind::Blank => format!("Blank {span}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn rendered(b: &Block) -> &str {
    b.rendered.as_deref().unwrap_or_default()
}
