/// A byte cursor for the scanners' single left-to-right pass.
///
/// Every delimiter the scanners care about is ASCII, so walking bytes never
/// mistakes part of a multi-byte character for markup.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    /// The source being scanned.
    src: &'a str,
    /// Current byte index into `src`.
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `src`.
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, i: 0 }
    }

    /// Returns the source this cursor walks over.
    pub(crate) fn source(&self) -> &'a str {
        self.src
    }

    /// Returns the current byte position.
    pub(crate) fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of input.
    pub(crate) fn eof(&self) -> bool {
        self.i >= self.src.len()
    }

    /// Peeks at the current byte without advancing.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub(crate) fn starts_with(&self, pat: &[u8]) -> bool {
        self.src
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, clamped to the input length.
    pub(crate) fn bump_n(&mut self, n: usize) {
        self.i = self.i.saturating_add(n).min(self.src.len());
    }

    /// Moves to the end of input.
    pub(crate) fn finish(&mut self) {
        self.i = self.src.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("<!-- x -->");
        assert!(cur.starts_with(b"<!--"));
        assert!(!cur.starts_with(b"-->"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with(b"abcdef"));

        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn bump_n_is_clamped() {
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn finish_jumps_to_end() {
        let mut cur = Cursor::new("abc");
        cur.finish();
        assert!(cur.eof());
        assert_eq!(cur.pos(), 3);
    }
}
