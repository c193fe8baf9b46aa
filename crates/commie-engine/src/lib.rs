//! Extracts comments from source code without parsing it.
//!
//! Scanners walk the source once, tell comment markers apart from the same
//! characters inside string literals, and yield [`Comment`]s carrying the
//! span of the full markup and the span of the text inside it.
//!
//! ```
//! use commie_engine::{Language, scan};
//!
//! let source = "int x = 1; /* one */ // \"quoted\"";
//! let texts: Vec<_> = scan(source, Language::C)
//!     .map(|c| c.map(|c| c.text()))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(texts, [" one ", " \"quoted\""]);
//! # Ok::<(), commie_engine::ScanError>(())
//! ```

pub mod comment;
pub mod error;
pub mod grouping;
pub mod io;
pub mod language;
pub mod record;
pub mod scan;
pub mod span;

// Re-export key types for easier usage
pub use comment::{Comment, CommentKind};
pub use error::ScanError;
pub use grouping::{CommentGroups, GroupExt, group_comments};
pub use io::{IoError, SourceFile};
pub use language::{Language, Style};
pub use record::{CommentRecord, check_invariants};
pub use scan::{Comments, collect, scan, scan_named};
pub use span::Span;
