//! Optional TOML configuration for the guide.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file = "order-guide.log"
//! stdout = false
//! ```
//!
//! Every key is optional. Command-line flags override values read here.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "order-guide.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuideConfig {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` still wins at startup.
    pub level: String,
    /// Log file to append to. Needed to see anything while the guide runs,
    /// since the terminal UI owns stdout.
    pub file: Option<PathBuf>,
    /// Echo records to stdout for the non-interactive commands.
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            stdout: true,
        }
    }
}

/// Logging settings after command-line flags are layered over the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLogging {
    /// Filter to install, or `None` to keep the one read from `RUST_LOG`.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Level precedence is `--log-level`, then `RUST_LOG`, then this config.
    /// `--log-file` replaces the configured file.
    pub fn resolve(
        &self,
        cli_level: Option<&str>,
        cli_file: Option<&Path>,
        rust_log_set: bool,
    ) -> ResolvedLogging {
        let level = match cli_level {
            Some(level) => Some(level.to_string()),
            None if rust_log_set => None,
            None => Some(self.level.clone()),
        };
        let file = cli_file
            .map(Path::to_path_buf)
            .or_else(|| self.file.clone());
        ResolvedLogging { level, file }
    }
}

impl GuideConfig {
    pub fn from_toml_str(
        text: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads `path`, failing if it is missing or malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&text, path)
    }

    /// Reads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GuideConfig::from_toml_str("", Path::new("inline")).unwrap();

        assert_eq!(config, GuideConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.stdout);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = GuideConfig::from_toml_str(
            "[logging]\nlevel = \"debug\"\n",
            Path::new("inline"),
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, None);
        assert!(config.logging.stdout);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GuideConfig::from_toml_str("[logging]\nlevle = \"debug\"\n", Path::new("x.toml"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("x.toml"));
    }

    fn file_config() -> LoggingConfig {
        LoggingConfig {
            level: "warn".to_string(),
            file: Some(PathBuf::from("from-config.log")),
            stdout: true,
        }
    }

    #[test]
    fn cli_level_beats_rust_log_and_config() {
        let resolved = file_config().resolve(Some("trace"), None, true);

        assert_eq!(resolved.level.as_deref(), Some("trace"));
    }

    #[test]
    fn rust_log_beats_config_level() {
        let resolved = file_config().resolve(None, None, true);

        assert_eq!(resolved.level, None);
    }

    #[test]
    fn config_level_applies_without_overrides() {
        let resolved = file_config().resolve(None, None, false);

        assert_eq!(resolved.level.as_deref(), Some("warn"));
        assert_eq!(resolved.file, Some(PathBuf::from("from-config.log")));
    }

    #[test]
    fn cli_log_file_beats_config_file() {
        let resolved = file_config().resolve(None, Some(Path::new("cli.log")), false);

        assert_eq!(resolved.file, Some(PathBuf::from("cli.log")));
        assert_eq!(
            LoggingConfig::default().resolve(None, None, false).file,
            None
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = GuideConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
