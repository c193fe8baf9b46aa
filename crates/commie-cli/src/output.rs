use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use commie_config::OutputFormat;
use commie_engine::record::{normalize, normalize_groups};
use commie_engine::{Comment, CommentRecord, GroupExt, ScanError, SourceFile};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug)]
pub enum Found<'a> {
    Comments(Vec<Comment<'a>>),
    Groups(Vec<Vec<Comment<'a>>>),
}

/// What one file produced. Scanning stops at the first error, so `found`
/// holds everything before it.
#[derive(Debug)]
pub struct FileReport<'a> {
    pub path: &'a Path,
    pub found: Found<'a>,
    pub error: Option<ScanError>,
}

impl<'a> FileReport<'a> {
    pub fn scan(file: &'a SourceFile, group: bool) -> Self {
        let mut error = None;
        let found = if group {
            let mut groups = Vec::new();
            for item in file.comments().grouped() {
                match item {
                    Ok(g) => groups.push(g),
                    Err(e) => error = Some(e),
                }
            }
            Found::Groups(groups)
        } else {
            let mut comments = Vec::new();
            for item in file.comments() {
                match item {
                    Ok(c) => comments.push(c),
                    Err(e) => error = Some(e),
                }
            }
            Found::Comments(comments)
        };
        Self {
            path: &file.path,
            found,
            error,
        }
    }
}

/// Writes `path:line: markup` per comment, with a blank line between groups.
pub fn write_text(
    out: &mut impl Write,
    report: &FileReport<'_>,
    text_only: bool,
) -> io::Result<()> {
    match &report.found {
        Found::Comments(comments) => {
            for c in comments {
                write_comment(out, report.path, c, text_only)?;
            }
        }
        Found::Groups(groups) => {
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                for c in group {
                    write_comment(out, report.path, c, text_only)?;
                }
            }
        }
    }
    Ok(())
}

fn write_comment(
    out: &mut impl Write,
    path: &Path,
    c: &Comment<'_>,
    text_only: bool,
) -> io::Result<()> {
    let markup = if text_only { c.text() } else { c.code() };
    writeln!(out, "{}:{}: {markup}", path.display(), c.line())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFound {
    Comments(Vec<CommentRecord>),
    Groups(Vec<Vec<CommentRecord>>),
}

#[derive(Debug, Serialize)]
pub struct JsonFile {
    pub path: String,
    #[serde(flatten)]
    pub found: JsonFound,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&FileReport<'_>> for JsonFile {
    fn from(report: &FileReport<'_>) -> Self {
        let found = match &report.found {
            Found::Comments(comments) => JsonFound::Comments(normalize(comments)),
            Found::Groups(groups) => JsonFound::Groups(normalize_groups(groups)),
        };
        Self {
            path: report.path.display().to_string(),
            found,
            error: report.error.as_ref().map(ToString::to_string),
        }
    }
}
