use commie_engine::{Language, ScanError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "COMMIE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How the CLI prints what it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra extension mappings, consulted before the built-in table.
    /// Keys are matched case-insensitively, with or without a leading dot.
    pub extensions: BTreeMap<String, Language>,
    /// Merge adjacent line comments into blocks by default.
    pub group: bool,
    pub format: OutputFormat,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "loaded config from {} ({} extension overrides)",
            config_path.display(),
            config.extensions.len()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// `$COMMIE_CONFIG` if set, otherwise `~/.config/commie/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var(CONFIG_ENV_VAR)
            && !custom.is_empty()
        {
            let custom = PathBuf::from(custom);
            return Self::expand_path(&custom).unwrap_or(custom);
        }
        let config_dir = shellexpand::tilde("~/.config/commie");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolves the language for `path`, preferring configured overrides.
    pub fn language_for(&self, path: &Path) -> Result<Language, ScanError> {
        let ext = path.extension().and_then(|ext| ext.to_str());
        if let Some(ext) = ext
            && let Some((_, lang)) = self
                .extensions
                .iter()
                .find(|(key, _)| key.trim_start_matches('.').eq_ignore_ascii_case(ext))
        {
            log::debug!("{} mapped to {lang} by config", path.display());
            return Ok(*lang);
        }
        Language::from_path(path)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        unsafe {
            env::remove_var(CONFIG_ENV_VAR);
        }
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/commie/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            extensions: BTreeMap::from([("kt".to_string(), Language::C)]),
            group: true,
            format: OutputFormat::Json,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.group);
    }

    #[test]
    fn test_parse_extension_table() {
        let config_content = r#"
group = true
format = "json"

[extensions]
kt = "c"
".mjs" = "javascript"
zsh = "shell"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert!(config.group);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.extensions.get("kt"), Some(&Language::C));
        assert_eq!(config.extensions.get("zsh"), Some(&Language::Shell));
    }

    #[test]
    fn test_unknown_language_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[extensions]\nfoo = \"cobol\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_language_for_prefers_overrides() {
        let config = Config {
            extensions: BTreeMap::from([
                (".MJS".to_string(), Language::JavaScript),
                ("h".to_string(), Language::Go),
            ]),
            ..Config::default()
        };

        assert_eq!(
            config.language_for(Path::new("a/b.mjs")).unwrap(),
            Language::JavaScript
        );
        assert_eq!(config.language_for(Path::new("x.H")).unwrap(), Language::Go);
        assert_eq!(config.language_for(Path::new("x.rb")).unwrap(), Language::Ruby);
        assert!(config.language_for(Path::new("notes.txt")).is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            extensions: BTreeMap::from([("bash".to_string(), Language::Shell)]),
            group: true,
            format: OutputFormat::Text,
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
