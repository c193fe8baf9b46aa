//! # Comment records
//!
//! Owned, serializable views of scanned comments plus runtime invariant
//! checks used by tests.
//!
//! - **`normalize`**: converts comments to [`CommentRecord`]s for output
//! - **`invariants`**: span bounds, containment, ordering and non-overlap

pub mod invariants;
pub mod normalize;

pub use invariants::check as check_invariants;
pub use normalize::{CommentRecord, normalize, normalize_groups};
