//! Configuration management.
//!
//! Configuration only affects ambient behavior such as logging; the console
//! protocol is the same with or without a config file.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "json"
//! file = "/tmp/staffroll.log"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration for staffroll.
#[derive(Debug, Clone, Default)]
pub struct StaffrollConfig {
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section in the config file.
///
/// Unset values fall back to defaults when logging is initialized.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `"info"` or `"staffroll=debug"`.
    pub level: Option<String>,
    /// Output format: `"pretty"` or `"json"`.
    pub format: Option<String>,
    /// Log file to append to instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl StaffrollConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration TOML.
    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::from_toml(&contents)
    }

    /// Returns the platform config file location, if one can be determined.
    ///
    /// `~/.config/staffroll/config.toml` on Linux,
    /// `~/Library/Application Support/staffroll/config.toml` on macOS.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("staffroll").join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// Returns default configuration if no config file exists or it cannot
    /// be loaded.
    #[must_use]
    #[allow(clippy::print_stderr)]
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                // Logging is not up yet, so this goes straight to stderr.
                eprintln!("Ignoring config file {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Loads from `path` when given, otherwise from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        path.map_or_else(|| Ok(Self::load_default()), Self::load_from_file)
    }

    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();
        if let Some(logging) = file.logging {
            config.logging = logging;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_toml_logging_section() {
        let config = StaffrollConfig::from_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"
            file = "/tmp/staffroll.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/staffroll.log"))
        );
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        let config = StaffrollConfig::from_toml("").unwrap();
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_section() {
        let result = StaffrollConfig::from_toml("[database]\nurl = \"x\"\n");
        assert!(matches!(
            result,
            Err(crate::Error::OperationFailed { ref operation, .. }) if operation == "parse_config_file"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();

        let config = StaffrollConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = StaffrollConfig::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(
            result,
            Err(crate::Error::OperationFailed { ref operation, .. }) if operation == "read_config_file"
        ));
    }
}
