use xi_rope::Rope;

use super::span::Span;

/// One physical line of the source with its byte spans.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Span of the whole line, terminator included.
    pub span: Span,
    /// Span of the line without its `\n` / `\r\n` terminator.
    pub text_span: Span,
    /// Line text without the terminator.
    pub text: String,
}

/// Iterates the rope line by line, tracking absolute byte offsets.
///
/// A trailing `\r` is treated as part of the terminator so CRLF input
/// classifies the same as LF input.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches('\n').trim_end_matches('\r');
        LineRef {
            span: Span { start, end: offset },
            text_span: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_and_strips_terminators() {
        let rope = Rope::from("one\r\ntwo\nthree");
        let lines: Vec<_> = lines_with_spans(&rope).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "one");
        assert_eq!(lines[0].span, Span::new(0, 5));
        assert_eq!(lines[0].text_span, Span::new(0, 3));
        assert_eq!(lines[1].text, "two");
        assert_eq!(lines[1].span, Span::new(5, 9));
        assert_eq!(lines[2].text, "three");
        assert_eq!(lines[2].text_span, Span::new(9, 14));
    }

    #[test]
    fn empty_rope_has_no_lines() {
        let rope = Rope::from("");
        assert_eq!(lines_with_spans(&rope).count(), 0);
    }

    #[test]
    fn blank_lines_are_kept() {
        let rope = Rope::from("a\n\nb\n");
        let texts: Vec<_> = lines_with_spans(&rope).map(|l| l.text).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
    }
}
