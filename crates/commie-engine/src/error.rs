/// Errors raised while scanning a source or choosing a scanner for it.
///
/// Both are terminal: a scanner that yields an error yields nothing after it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A comment with a required terminator was still open at end of input.
    #[error("unterminated comment starting at byte {start}")]
    UnterminatedComment {
        /// Byte offset of the opening delimiter.
        start: usize,
    },

    /// No scanner is registered for the file name or extension.
    #[error("cannot detect source format of {name:?}")]
    FormatUndetected {
        /// The file name or extension that failed to resolve.
        name: String,
    },
}
