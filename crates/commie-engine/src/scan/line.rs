use crate::{comment::Comment, error::ScanError, span::Span};

use super::cursor::Cursor;

/// Parameters of a hash-comment language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDialect {
    /// Byte that opens a comment running to end of line.
    pub marker: u8,
    /// Characters that open and close a string literal.
    pub quotes: &'static [u8],
}

impl LineDialect {
    /// Shell, Ruby and Python all share `#` with single and double quotes.
    pub const HASH: LineDialect = LineDialect {
        marker: b'#',
        quotes: b"\"'",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    InComment { start: usize },
    InString { quote: u8 },
    EscapingInString { quote: u8 },
    EscapingOutsideString,
}

/// Scanner for comments that run from a marker to end of line.
///
/// There is no unterminated form: end of input closes an open comment, so
/// this scanner never yields an error.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    cursor: Cursor<'a>,
    dialect: LineDialect,
    state: State,
    done: bool,
}

impl<'a> LineScanner<'a> {
    pub fn new(source: &'a str, dialect: LineDialect) -> Self {
        Self {
            cursor: Cursor::new(source),
            dialect,
            state: State::Default,
            done: false,
        }
    }

    fn comment(&self, start: usize, end: usize) -> Comment<'a> {
        Comment::new(
            self.cursor.source(),
            Span::new(start, end),
            Span::new(start + 1, end),
            false,
        )
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = Result<Comment<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(b) = self.cursor.bump() {
            let at = self.cursor.pos() - 1;
            match self.state {
                State::Default => {
                    if b == self.dialect.marker {
                        self.state = State::InComment { start: at };
                    } else if self.dialect.quotes.contains(&b) {
                        self.state = State::InString { quote: b };
                    } else if b == b'\\' {
                        self.state = State::EscapingOutsideString;
                    }
                }
                State::InComment { start } => {
                    if b == b'\n' {
                        self.state = State::Default;
                        let comment = self.comment(start, at);
                        log::trace!("comment at {:?}", comment.code_span);
                        return Some(Ok(comment));
                    }
                }
                State::InString { quote } => {
                    if b == quote {
                        self.state = State::Default;
                    } else if b == b'\\' {
                        self.state = State::EscapingInString { quote };
                    }
                }
                State::EscapingInString { quote } => self.state = State::InString { quote },
                State::EscapingOutsideString => self.state = State::Default,
            }
        }

        self.done = true;
        match std::mem::replace(&mut self.state, State::Default) {
            State::InComment { start } => Some(Ok(self.comment(start, self.cursor.pos()))),
            _ => None,
        }
    }
}

impl std::iter::FusedIterator for LineScanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scan(code: &str) -> Vec<(&str, &str)> {
        LineScanner::new(code, LineDialect::HASH)
            .map(|c| c.map(|c| (c.code(), c.text())))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn comment_runs_to_end_of_input() {
        let code = "# comment";
        let comments: Vec<_> = LineScanner::new(code, LineDialect::HASH)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].code(), "# comment");
        assert_eq!(comments[0].text(), " comment");
        assert!(!comments[0].multiline);
    }

    #[test]
    fn comment_stops_before_newline() {
        assert_eq!(
            scan("echo hi # greet\necho bye\n"),
            vec![("# greet", " greet")]
        );
    }

    #[test]
    fn empty_comment_is_still_single_line() {
        let comments: Vec<_> = LineScanner::new("x=1 #\n", LineDialect::HASH)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text(), "");
        assert!(!comments[0].multiline);
    }

    #[rstest]
    #[case::escaped_marker(r"\# not a comment")]
    #[case::single_quoted("'this is # not a comment'")]
    #[case::double_quoted("\"this is # not a comment\"")]
    #[case::nested_single_outside("'this is \"# not a comment\"'")]
    #[case::nested_double_outside("\"this is '# not a comment'\"")]
    #[case::escaped_quote_in_string(r#""a \" # still string""#)]
    fn hidden_markers_are_not_comments(#[case] code: &str) {
        assert_eq!(scan(code), vec![]);
    }

    #[rstest]
    #[case::single_quote("\\'# this is a comment", "# this is a comment", " this is a comment")]
    #[case::double_quote("\\\"# this is another comment", "# this is another comment", " this is another comment")]
    fn escaped_quote_does_not_open_a_string(
        #[case] code: &str,
        #[case] markup: &str,
        #[case] text: &str,
    ) {
        assert_eq!(scan(code), vec![(markup, text)]);
    }

    #[test]
    fn marker_after_closed_string_opens_comment() {
        assert_eq!(
            scan("puts 'a # b' # real\n"),
            vec![("# real", " real")]
        );
    }

    #[test]
    fn string_spanning_lines_hides_markers() {
        assert_eq!(
            scan("msg=\"line one\n# not here\"\n# here"),
            vec![("# here", " here")]
        );
    }

    #[test]
    fn consecutive_comments() {
        assert_eq!(
            scan("# a\n# b\n\n  # c"),
            vec![("# a", " a"), ("# b", " b"), ("# c", " c")]
        );
    }

    #[test]
    fn never_errors_and_then_fuses() {
        let mut scanner = LineScanner::new("# x", LineDialect::HASH);
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }
}
