use crate::comment::Comment;

/// Panics if any comment breaks the span rules every scanner must honor.
pub fn check(source: &str, comments: &[Comment<'_>]) {
    let n = source.len();
    for c in comments {
        assert!(
            c.code_span.start <= c.code_span.end && c.code_span.end <= n,
            "code span out of bounds: {:?} (source len: {})",
            c.code_span,
            n
        );
        assert!(
            c.code_span.contains(c.text_span),
            "text span not contained in code span: text {:?}, code {:?}",
            c.text_span,
            c.code_span
        );
        assert!(
            source.is_char_boundary(c.code_span.start)
                && source.is_char_boundary(c.code_span.end)
                && source.is_char_boundary(c.text_span.start)
                && source.is_char_boundary(c.text_span.end),
            "span splits a character: code {:?}, text {:?}",
            c.code_span,
            c.text_span
        );
    }
    for pair in comments.windows(2) {
        assert!(
            pair[0].code_span.end <= pair[1].code_span.start,
            "comments out of order or overlapping: {:?} then {:?}",
            pair[0].code_span,
            pair[1].code_span
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{language::Language, scan::collect, span::Span};

    #[test]
    fn scanned_comments_pass() {
        let source = "/* a */ x // b\n<!-- not html here -->";
        check(source, &collect(source, Language::C).unwrap());
    }

    #[test]
    #[should_panic(expected = "text span not contained")]
    fn escaping_text_span_is_caught() {
        let source = "// abc";
        let bad = Comment::new(source, Span::new(0, 3), Span::new(2, 3), false);
        let worse = Comment {
            text_span: Span::new(2, 6),
            ..bad
        };
        check(source, &[worse]);
    }

    #[test]
    #[should_panic(expected = "overlapping")]
    fn overlap_is_caught() {
        let source = "/* a */";
        let c = Comment::new(source, Span::new(0, 7), Span::new(2, 5), true);
        check(source, &[c, c]);
    }
}
