//! Core configuration.
//!
//! # Responsibility
//! - Describe embedder-supplied settings for the graph and logging.
//! - Validate settings before they reach the logging backend.
//!
//! # Invariants
//! - The core never reads environment variables or config files itself.
//! - Every field has a default, so partial documents deserialize.

use crate::logging::{self, LoggingError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// What happens to a placeholder once its last incoming edge is retracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderRetention {
    /// Drop the placeholder; the id becomes unknown again.
    #[default]
    Collect,
    /// Keep the id as an empty placeholder for the graph lifetime.
    Retain,
}

/// Graph engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub placeholder_retention: PlaceholderRetention,
}

/// Logging settings.
///
/// File logging is enabled only when `log_dir` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error` (case-insensitive).
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Checks level and directory without touching the logging backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        logging::normalize_level(&self.level).map_err(ConfigError::Logging)?;
        if let Some(dir) = self.log_dir.as_deref() {
            logging::normalize_log_dir(dir).map_err(ConfigError::Logging)?;
        }
        Ok(())
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging is disabled by configuration.
    pub fn apply(&self) -> Result<bool, ConfigError> {
        match self.log_dir.as_deref() {
            Some(dir) => {
                logging::init_logging(&self.level, dir).map_err(ConfigError::Logging)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Top-level settings an embedder hands to the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub logging: LoggingConfig,
    pub graph: GraphConfig,
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }
}

/// Configuration validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "invalid logging config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, GraphConfig, LoggingConfig, PlaceholderRetention};

    #[test]
    fn defaults_collect_placeholders_and_disable_file_logging() {
        let config = CoreConfig::default();
        assert_eq!(
            config.graph.placeholder_retention,
            PlaceholderRetention::Collect
        );
        assert!(config.logging.log_dir.is_none());
        config.validate().expect("default config should validate");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: CoreConfig =
            serde_json::from_str(r#"{"graph":{"placeholder_retention":"retain"}}"#)
                .expect("partial config should decode");
        assert_eq!(
            config.graph,
            GraphConfig {
                placeholder_retention: PlaceholderRetention::Retain,
            }
        );
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn rejects_unknown_retention_value() {
        let result =
            serde_json::from_str::<GraphConfig>(r#"{"placeholder_retention":"forever"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_unsupported_level() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            log_dir: None,
        };
        let err = config.validate().expect_err("unknown level must fail");
        assert!(matches!(err, ConfigError::Logging(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn validate_rejects_relative_log_dir() {
        let config = LoggingConfig {
            level: "info".to_string(),
            log_dir: Some("logs/dev".to_string()),
        };
        let err = config.validate().expect_err("relative dir must fail");
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn apply_without_dir_is_a_no_op() {
        let config = LoggingConfig::default();
        assert!(!config.apply().expect("disabled logging should not fail"));
    }
}
