//! Client configuration read from `protege.toml`.
//!
//! ```toml
//! log_filter = "protege_frame=debug,info"
//! label_language = "en"
//! settings_dir = "/var/lib/protege/settings"
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "protege.toml";

/// Log filter used when neither `RUST_LOG` nor the configuration sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Directory for stored graph settings when none is configured.
pub const DEFAULT_SETTINGS_DIR: &str = ".protege";

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML for [`ClientConfig`].
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// The config file.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Settings shared by every client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// `tracing` filter directive, e.g. `protege_frame=trace`.
    pub log_filter: Option<String>,
    /// Preferred language tag for entity labels.
    pub label_language: Option<String>,
    /// Directory holding stored entity graph settings.
    pub settings_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `text` is not a valid document;
    /// `origin` names the source in the error.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read from the working directory if present, and defaults are
    /// used otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        match fs::read_to_string(&path) {
            Ok(text) => Self::from_toml_str(&text, &path),
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Returns the log filter, falling back to [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Returns the settings directory, falling back to
    /// [`DEFAULT_SETTINGS_DIR`].
    #[must_use]
    pub fn settings_dir(&self) -> PathBuf {
        self.settings_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_DIR))
    }

    /// Overrides file values with the ones given on the command line.
    #[must_use]
    pub fn with_overrides(
        mut self,
        log_filter: Option<String>,
        label_language: Option<String>,
        settings_dir: Option<PathBuf>,
    ) -> Self {
        if log_filter.is_some() {
            self.log_filter = log_filter;
        }
        if label_language.is_some() {
            self.label_language = label_language;
        }
        if settings_dir.is_some() {
            self.settings_dir = settings_dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let result = ClientConfig::from_toml_str("", Path::new("test.toml"));
        assert!(matches!(&result, Ok(config) if *config == ClientConfig::default()));
        assert_eq!(ClientConfig::default().log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn full_document_is_read() {
        let text = "log_filter = \"debug\"\nlabel_language = \"en\"\nsettings_dir = \"/tmp/s\"\n";
        let result = ClientConfig::from_toml_str(text, Path::new("test.toml"));
        assert!(matches!(
            &result,
            Ok(config) if config.label_language.as_deref() == Some("en")
                && config.settings_dir() == PathBuf::from("/tmp/s")
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = ClientConfig::from_toml_str("colour = true", Path::new("test.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn flags_override_file_values() {
        let file = ClientConfig {
            log_filter: Some("info".to_owned()),
            label_language: Some("de".to_owned()),
            settings_dir: None,
        };
        let merged = file.with_overrides(None, Some("fr".to_owned()), None);
        assert_eq!(merged.log_filter(), "info");
        assert_eq!(merged.label_language.as_deref(), Some("fr"));
        assert_eq!(merged.settings_dir(), PathBuf::from(DEFAULT_SETTINGS_DIR));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = ClientConfig::load(Some(Path::new("/nonexistent/protege.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
