use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::ScanError,
    scan::{Dialect, LineDialect},
};

/// Every language the engine can scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    C,
    JavaScript,
    Go,
    Html,
    Css,
    Scss,
    Shell,
    Ruby,
    Python,
}

/// Which scanner handles a language, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `//` and `/* */` comments, see [`crate::scan::BracketScanner`].
    Bracketed(Dialect),
    /// `<!-- -->` comments, see [`crate::scan::HtmlScanner`].
    Html,
    /// Marker-to-end-of-line comments, see [`crate::scan::LineScanner`].
    Line(LineDialect),
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::C,
        Language::JavaScript,
        Language::Go,
        Language::Html,
        Language::Css,
        Language::Scss,
        Language::Shell,
        Language::Ruby,
        Language::Python,
    ];

    /// Lowercase file extensions dispatched to this language.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            // .m is Objective-C; its headers are .h
            Language::C => &["c", "cpp", "h", "hpp", "java", "m"],
            Language::JavaScript => &["js", "ts", "dart"],
            Language::Go => &["go"],
            Language::Html => &["html", "htm", "xml"],
            Language::Css => &["css"],
            Language::Scss => &["scss"],
            Language::Shell => &["sh"],
            Language::Ruby => &["rb"],
            Language::Python => &["py"],
        }
    }

    pub fn style(self) -> Style {
        match self {
            Language::C => Style::Bracketed(Dialect::C),
            Language::JavaScript => Style::Bracketed(Dialect::JAVASCRIPT),
            Language::Go => Style::Bracketed(Dialect::GO),
            Language::Css => Style::Bracketed(Dialect::CSS),
            Language::Scss => Style::Bracketed(Dialect::SCSS),
            Language::Html => Style::Html,
            Language::Shell | Language::Ruby | Language::Python => Style::Line(LineDialect::HASH),
        }
    }

    /// Looks up a bare extension such as `"go"` or `"HTM"`, ignoring case
    /// and a leading dot.
    pub fn from_extension(ext: &str) -> Result<Self, ScanError> {
        let lower = ext.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&lower.as_str()))
            .ok_or_else(|| ScanError::FormatUndetected {
                name: ext.to_string(),
            })
    }

    /// Dispatches on the final extension of a file name or path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let lang = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| Self::from_extension(ext).ok())
            .ok_or_else(|| ScanError::FormatUndetected {
                name: path.display().to_string(),
            })?;
        log::debug!("{} dispatched to {lang}", path.display());
        Ok(lang)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::JavaScript => "javascript",
            Language::Go => "go",
            Language::Html => "html",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Shell => "shell",
            Language::Ruby => "ruby",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ScanError;

    /// Accepts a language name or any of its extensions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == lower)
            .map_or_else(|| Self::from_extension(s), Ok)
    }
}
