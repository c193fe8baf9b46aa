use std::fmt;

use serde::Serialize;

use crate::span::Span;

/// Whether a comment's markup style can span several lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// Terminated by end of line or end of input (`// x`, `# x`).
    Line,
    /// Has distinct open and close delimiters (`/* x */`, `<!-- x -->`).
    Block,
}

/// A comment found in a source string.
///
/// Borrows the full source rather than copying it; both spans index into
/// that same source. `multiline` describes the comment style, not whether
/// this instance happens to contain a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'a> {
    /// The complete source the comment was found in.
    pub source: &'a str,
    /// Full markup including delimiters.
    pub code_span: Span,
    /// Payload between the delimiters; always inside `code_span`.
    pub text_span: Span,
    /// True for block-style comments.
    pub multiline: bool,
}

impl<'a> Comment<'a> {
    pub(crate) fn new(source: &'a str, code_span: Span, text_span: Span, multiline: bool) -> Self {
        debug_assert!(code_span.contains(text_span));
        debug_assert!(code_span.end <= source.len());
        Self {
            source,
            code_span,
            text_span,
            multiline,
        }
    }

    /// The markup, delimiters included.
    pub fn code(&self) -> &'a str {
        self.code_span.extract(self.source)
    }

    /// The payload with delimiters stripped.
    pub fn text(&self) -> &'a str {
        self.text_span.extract(self.source)
    }

    pub fn kind(&self) -> CommentKind {
        if self.multiline {
            CommentKind::Block
        } else {
            CommentKind::Line
        }
    }

    /// 1-based line number of the first character of the markup.
    pub fn line(&self) -> usize {
        self.source.as_bytes()[..self.code_span.start]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1
    }

    /// Returns true if only blanks precede the markup on its source line.
    pub fn starts_line(&self) -> bool {
        let before = &self.source[..self.code_span.start];
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        before[line_start..].trim().is_empty()
    }
}

impl fmt::Display for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
