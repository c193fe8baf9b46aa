use serde::Serialize;

/// A byte range `[start, end)` into a source string.
///
/// Comments store spans rather than copied text: extracting a span from the
/// source it was produced for reproduces the exact markup or payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a span, swapping the bounds if they arrive reversed.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns `source[start..end]`.
    ///
    /// Panics if the span is out of bounds for `source` or splits a UTF-8
    /// character, exactly like slicing would.
    pub fn extract(self, source: &str) -> &str {
        &source[self.start..self.end]
    }

    /// Returns true if `other` lies entirely within this span.
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
