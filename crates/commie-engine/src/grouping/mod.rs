//! Merges runs of adjacent single-line comments into logical blocks.
//!
//! A run is a sequence of line comments that each start their own source
//! line and sit on consecutive lines. Block comments and comments trailing
//! code always form a group of their own and close any open run.

use crate::{comment::Comment, error::ScanError};

/// Lazy adapter yielding groups of comments in source order.
///
/// When the underlying scanner fails, the run collected so far is yielded
/// first and the error right after it; nothing follows the error.
#[derive(Debug, Clone)]
pub struct CommentGroups<'a, I> {
    inner: I,
    run: Vec<Comment<'a>>,
    queued: Option<Result<Vec<Comment<'a>>, ScanError>>,
    done: bool,
}

impl<'a, I> CommentGroups<'a, I>
where
    I: Iterator<Item = Result<Comment<'a>, ScanError>>,
{
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            run: Vec::new(),
            queued: None,
            done: false,
        }
    }

    fn flush_run(&mut self) -> Option<Vec<Comment<'a>>> {
        if self.run.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.run))
        }
    }

    /// Yields the open run (if any) and holds `then` back for the next call.
    fn flush_then(
        &mut self,
        then: Result<Vec<Comment<'a>>, ScanError>,
    ) -> Result<Vec<Comment<'a>>, ScanError> {
        match self.flush_run() {
            Some(run) => {
                self.queued = Some(then);
                Ok(run)
            }
            None => then,
        }
    }
}

impl<'a, I> Iterator for CommentGroups<'a, I>
where
    I: Iterator<Item = Result<Comment<'a>, ScanError>>,
{
    type Item = Result<Vec<Comment<'a>>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.queued.take() {
            return Some(item);
        }
        if self.done {
            return None;
        }

        loop {
            let comment = match self.inner.next() {
                None => {
                    self.done = true;
                    return self.flush_run().map(Ok);
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(self.flush_then(Err(e)));
                }
                Some(Ok(comment)) => comment,
            };

            if comment.multiline || !comment.starts_line() {
                return Some(self.flush_then(Ok(vec![comment])));
            }

            if let Some(last) = self.run.last()
                && !on_next_line(last, &comment)
            {
                let run = std::mem::replace(&mut self.run, vec![comment]);
                return Some(Ok(run));
            }
            self.run.push(comment);
        }
    }
}

/// True when only blanks and exactly one line break separate the comments.
fn on_next_line(prev: &Comment<'_>, next: &Comment<'_>) -> bool {
    let between = &next.source[prev.code_span.end..next.code_span.start];
    between.trim().is_empty() && between.matches('\n').count() == 1
}

/// Groups the comments produced by a scanner.
pub fn group_comments<'a, I>(comments: I) -> CommentGroups<'a, I::IntoIter>
where
    I: IntoIterator<Item = Result<Comment<'a>, ScanError>>,
{
    CommentGroups::new(comments.into_iter())
}

/// `.grouped()` on any comment sequence.
pub trait GroupExt<'a>: Iterator<Item = Result<Comment<'a>, ScanError>> + Sized {
    fn grouped(self) -> CommentGroups<'a, Self> {
        CommentGroups::new(self)
    }
}

impl<'a, I> GroupExt<'a> for I where I: Iterator<Item = Result<Comment<'a>, ScanError>> {}
