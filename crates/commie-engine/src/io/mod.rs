use std::fs;
use std::path::{Path, PathBuf};

use crate::{error::ScanError, language::Language, scan::Comments};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] ScanError),
}

/// A source file read into memory together with the language to scan it as.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub language: Language,
    pub text: String,
}

impl SourceFile {
    /// Picks the language from the file name, then reads the file.
    ///
    /// An unknown extension fails before the file is touched.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let language = Language::from_path(path)?;
        Self::read_as(path, language)
    }

    /// Reads the file and scans it as `language` regardless of its name.
    pub fn read_as(path: impl AsRef<Path>, language: Language) -> Result<Self, IoError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        log::debug!("read {} ({} bytes)", path.display(), text.len());
        Ok(Self {
            path: path.to_path_buf(),
            language,
            text,
        })
    }

    /// Builds a source from text that did not come from disk, such as stdin.
    pub fn from_text(path: impl Into<PathBuf>, language: Language, text: String) -> Self {
        Self {
            path: path.into(),
            language,
            text,
        }
    }

    pub fn comments(&self) -> Comments<'_> {
        crate::scan::scan(&self.text, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_and_dispatches_on_name() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "multiply.GO", "// adds\nfunc add() {}\n");

        let file = SourceFile::read(&path).unwrap();
        assert_eq!(file.language, Language::Go);

        let texts: Vec<_> = file.comments().map(|c| c.unwrap().text()).collect();
        assert_eq!(texts, vec![" adds"]);
    }

    #[test]
    fn unknown_extension_fails_before_reading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.haha");

        let err = SourceFile::read(&path).unwrap_err();
        assert!(matches!(
            err,
            IoError::Format(ScanError::FormatUndetected { .. })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.c");

        let err = SourceFile::read(&path).unwrap_err();
        assert!(matches!(err, IoError::NotFound(p) if p == path));
    }

    #[test]
    fn read_as_overrides_the_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Dockerfile.txt", "# base image\nFROM scratch\n");

        let file = SourceFile::read_as(&path, Language::Shell).unwrap();
        let codes: Vec<_> = file.comments().map(|c| c.unwrap().code()).collect();
        assert_eq!(codes, vec!["# base image"]);
    }

    #[test]
    fn from_text_scans_owned_text() {
        let file = SourceFile::from_text("-", Language::Html, "<!-- x -->".to_string());
        assert_eq!(file.comments().count(), 1);
    }
}
