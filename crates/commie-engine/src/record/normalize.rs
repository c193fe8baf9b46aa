use serde::Serialize;

use crate::{
    comment::{Comment, CommentKind},
    span::Span,
};

/// A comment detached from its source, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRecord {
    pub kind: CommentKind,
    /// 1-based line of the opening delimiter.
    pub line: usize,
    pub code_span: Span,
    pub text_span: Span,
    pub code: String,
    pub text: String,
}

impl From<&Comment<'_>> for CommentRecord {
    fn from(c: &Comment<'_>) -> Self {
        Self {
            kind: c.kind(),
            line: c.line(),
            code_span: c.code_span,
            text_span: c.text_span,
            code: c.code().to_string(),
            text: c.text().to_string(),
        }
    }
}

pub fn normalize(comments: &[Comment<'_>]) -> Vec<CommentRecord> {
    comments.iter().map(CommentRecord::from).collect()
}

pub fn normalize_groups(groups: &[Vec<Comment<'_>>]) -> Vec<Vec<CommentRecord>> {
    groups.iter().map(|g| normalize(g)).collect()
}
