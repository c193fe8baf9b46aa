use crate::{comment::Comment, error::ScanError, span::Span};

use super::cursor::Cursor;

const OPEN: &[u8] = b"<!--";
const CLOSE: &[u8] = b"-->";

/// Scanner for `<!-- ... -->` comments in HTML, XML and SGML.
///
/// Quotes are not tracked and comments do not nest: the first `-->` after
/// an opener closes it. Every comment is reported as multiline since the
/// style has no single-line form.
#[derive(Debug, Clone)]
pub struct HtmlScanner<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> HtmlScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            done: false,
        }
    }

    /// Consumes input up to and including the next `-->`, returning the
    /// offset where the terminator starts.
    fn skip_to_close(&mut self) -> Option<usize> {
        while !self.cursor.eof() {
            if self.cursor.starts_with(CLOSE) {
                let at = self.cursor.pos();
                self.cursor.bump_n(CLOSE.len());
                return Some(at);
            }
            self.cursor.bump();
        }
        None
    }
}

impl<'a> Iterator for HtmlScanner<'a> {
    type Item = Result<Comment<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while !self.cursor.eof() {
            if !self.cursor.starts_with(OPEN) {
                self.cursor.bump();
                continue;
            }

            let start = self.cursor.pos();
            self.cursor.bump_n(OPEN.len());
            let Some(close) = self.skip_to_close() else {
                log::debug!("html comment opened at byte {start} is never closed");
                self.done = true;
                self.cursor.finish();
                return Some(Err(ScanError::UnterminatedComment { start }));
            };

            let comment = Comment::new(
                self.cursor.source(),
                Span::new(start, self.cursor.pos()),
                Span::new(start + OPEN.len(), close),
                true,
            );
            log::trace!("comment at {:?}", comment.code_span);
            return Some(Ok(comment));
        }
        self.done = true;
        None
    }
}

impl std::iter::FusedIterator for HtmlScanner<'_> {}
