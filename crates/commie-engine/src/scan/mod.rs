//! Quote-aware comment scanners.
//!
//! Each scanner is a pull iterator over one source string: it does a single
//! left-to-right pass, yields comments as it finds them and stops for good
//! after an error. Rerun [`scan`] to start over.

pub mod bracket;
mod cursor;
pub mod html;
pub mod line;

use std::path::Path;

pub use bracket::{BracketScanner, Dialect};
pub use html::HtmlScanner;
pub use line::{LineDialect, LineScanner};

use crate::{
    comment::Comment,
    error::ScanError,
    language::{Language, Style},
};

/// The comments of one source, produced by the scanner its language uses.
#[derive(Debug, Clone)]
pub enum Comments<'a> {
    Bracketed(BracketScanner<'a>),
    Html(HtmlScanner<'a>),
    Line(LineScanner<'a>),
}

impl<'a> Comments<'a> {
    pub fn new(source: &'a str, style: Style) -> Self {
        match style {
            Style::Bracketed(dialect) => Comments::Bracketed(BracketScanner::new(source, dialect)),
            Style::Html => Comments::Html(HtmlScanner::new(source)),
            Style::Line(dialect) => Comments::Line(LineScanner::new(source, dialect)),
        }
    }
}

impl<'a> Iterator for Comments<'a> {
    type Item = Result<Comment<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Comments::Bracketed(s) => s.next(),
            Comments::Html(s) => s.next(),
            Comments::Line(s) => s.next(),
        }
    }
}

impl std::iter::FusedIterator for Comments<'_> {}

/// Lazily scans `source` as `language`.
pub fn scan(source: &str, language: Language) -> Comments<'_> {
    log::debug!("scanning {} bytes as {language}", source.len());
    Comments::new(source, language.style())
}

/// Picks the scanner from `file_name`'s extension, then scans `source`.
///
/// Fails with [`ScanError::FormatUndetected`] before any scanning happens.
pub fn scan_named(source: &str, file_name: impl AsRef<Path>) -> Result<Comments<'_>, ScanError> {
    let language = Language::from_path(file_name)?;
    Ok(scan(source, language))
}

/// Scans the whole source, failing on the first error.
pub fn collect(source: &str, language: Language) -> Result<Vec<Comment<'_>>, ScanError> {
    scan(source, language).collect()
}
