use crate::{comment::Comment, error::ScanError, span::Span};

use super::cursor::Cursor;

/// Which constructs the bracketed scanner recognizes for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Characters that open and close an escape-sensitive string literal.
    pub quotes: &'static [u8],
    /// Characters that open and close a raw literal, in which backslash is
    /// ordinary text.
    pub raw_quotes: &'static [u8],
    /// `// ...` comments.
    pub line_comments: bool,
    /// `/* ... */` comments.
    pub block_comments: bool,
    /// Whether `/*` inside a block comment opens a nested level.
    pub block_nests: bool,
}

impl Dialect {
    /// C, C++, Java, Objective-C. Single quotes are treated like strings:
    /// a character literal is just a one-character string here.
    pub const C: Dialect = Dialect {
        quotes: b"\"'",
        raw_quotes: b"",
        line_comments: true,
        block_comments: true,
        block_nests: false,
    };

    /// JavaScript, TypeScript, Dart. Template literals honor escapes.
    pub const JAVASCRIPT: Dialect = Dialect {
        quotes: b"\"'`",
        raw_quotes: b"",
        line_comments: true,
        block_comments: true,
        block_nests: false,
    };

    /// Go: backticks delimit raw strings.
    pub const GO: Dialect = Dialect {
        quotes: b"\"'",
        raw_quotes: b"`",
        line_comments: true,
        block_comments: true,
        block_nests: false,
    };

    /// CSS: block comments only, and quotes are not tracked at all.
    pub const CSS: Dialect = Dialect {
        quotes: b"",
        raw_quotes: b"",
        line_comments: false,
        block_comments: true,
        block_nests: false,
    };

    /// SCSS: CSS block comments plus `//` line comments. Only double
    /// quotes delimit strings; an apostrophe is ordinary text.
    pub const SCSS: Dialect = Dialect {
        quotes: b"\"",
        raw_quotes: b"",
        line_comments: true,
        block_comments: true,
        block_nests: false,
    };

    fn opens_string(&self, b: u8) -> bool {
        self.quotes.contains(&b) || self.raw_quotes.contains(&b)
    }

    fn is_raw(&self, quote: u8) -> bool {
        self.raw_quotes.contains(&quote)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    FoundSlash,
    InLineComment { start: usize },
    InBlockComment { start: usize, depth: u32 },
    InBlockCommentAfterAsterisk { start: usize, depth: u32 },
    InBlockCommentAfterSlash { start: usize, depth: u32 },
    InString { quote: u8 },
    InStringAfterBackslash { quote: u8 },
}

/// Scanner for `//` and `/* */` comments that skips over string literals.
///
/// Yields comments in source order. A block comment still open at end of
/// input yields [`ScanError::UnterminatedComment`] and ends the sequence; a
/// line comment is closed by end of input without error.
#[derive(Debug, Clone)]
pub struct BracketScanner<'a> {
    cursor: Cursor<'a>,
    dialect: Dialect,
    state: State,
    done: bool,
}

impl<'a> BracketScanner<'a> {
    pub fn new(source: &'a str, dialect: Dialect) -> Self {
        Self {
            cursor: Cursor::new(source),
            dialect,
            state: State::Default,
            done: false,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Handles the byte `b` at offset `at`. Consumes it unless the byte has
    /// to be read again in another state.
    fn step(&mut self, at: usize, b: u8) -> Option<Comment<'a>> {
        let d = self.dialect;
        match self.state {
            State::Default => {
                if b == b'/' {
                    self.state = State::FoundSlash;
                } else if d.opens_string(b) {
                    self.state = State::InString { quote: b };
                }
            }
            State::FoundSlash => {
                // The slash sits one byte back.
                let start = at - 1;
                if b == b'/' && d.line_comments {
                    self.state = State::InLineComment { start };
                } else if b == b'*' && d.block_comments {
                    self.state = State::InBlockComment { start, depth: 1 };
                } else if b != b'/' {
                    // Not an opener; `b` may still open a string.
                    self.state = State::Default;
                    return None;
                }
            }
            State::InLineComment { start } => {
                if b == b'\n' {
                    self.state = State::Default;
                    self.cursor.bump();
                    return Some(self.line_comment(start, at));
                }
            }
            State::InBlockComment { start, depth } => match b {
                b'*' => self.state = State::InBlockCommentAfterAsterisk { start, depth },
                b'/' if d.block_nests => {
                    self.state = State::InBlockCommentAfterSlash { start, depth }
                }
                _ => {}
            },
            State::InBlockCommentAfterAsterisk { start, depth } => match b {
                b'/' if depth > 1 => {
                    self.state = State::InBlockComment {
                        start,
                        depth: depth - 1,
                    }
                }
                b'/' => {
                    self.state = State::Default;
                    self.cursor.bump();
                    return Some(self.block_comment(start, at));
                }
                // runs like `/***/`
                b'*' => {}
                _ => self.state = State::InBlockComment { start, depth },
            },
            State::InBlockCommentAfterSlash { start, depth } => match b {
                b'*' => {
                    self.state = State::InBlockComment {
                        start,
                        depth: depth + 1,
                    }
                }
                b'/' => {}
                _ => self.state = State::InBlockComment { start, depth },
            },
            State::InString { quote } => {
                if b == quote {
                    self.state = State::Default;
                } else if b == b'\\' && !d.is_raw(quote) {
                    self.state = State::InStringAfterBackslash { quote };
                }
            }
            State::InStringAfterBackslash { quote } => {
                self.state = State::InString { quote };
            }
        }
        self.cursor.bump();
        None
    }

    fn line_comment(&self, start: usize, end: usize) -> Comment<'a> {
        Comment::new(
            self.cursor.source(),
            Span::new(start, end),
            Span::new(start + 2, end),
            false,
        )
    }

    /// `close` is the offset of the final `/` of `*/`.
    fn block_comment(&self, start: usize, close: usize) -> Comment<'a> {
        Comment::new(
            self.cursor.source(),
            Span::new(start, close + 1),
            Span::new(start + 2, close - 1),
            true,
        )
    }

    /// Applies the end-of-input policy to whatever state is left over.
    fn finish(&mut self) -> Option<Result<Comment<'a>, ScanError>> {
        let end = self.cursor.pos();
        match std::mem::replace(&mut self.state, State::Default) {
            State::InLineComment { start } => Some(Ok(self.line_comment(start, end))),
            State::InBlockComment { start, .. }
            | State::InBlockCommentAfterAsterisk { start, .. }
            | State::InBlockCommentAfterSlash { start, .. } => {
                log::debug!("block comment opened at byte {start} is never closed");
                Some(Err(ScanError::UnterminatedComment { start }))
            }
            State::Default
            | State::FoundSlash
            | State::InString { .. }
            | State::InStringAfterBackslash { .. } => None,
        }
    }
}

impl<'a> Iterator for BracketScanner<'a> {
    type Item = Result<Comment<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(b) = self.cursor.peek() {
            let at = self.cursor.pos();
            if let Some(comment) = self.step(at, b) {
                log::trace!("comment at {:?}", comment.code_span);
                return Some(Ok(comment));
            }
        }
        self.done = true;
        self.finish()
    }
}

impl std::iter::FusedIterator for BracketScanner<'_> {}
