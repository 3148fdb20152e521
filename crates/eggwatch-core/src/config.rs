//! Configuration loading and typed config structures for eggwatch.
//!
//! The optional `eggwatch-config.yaml` at the working directory controls
//! logging and where the peek tool reads its inputs. Every field has a
//! default, so an empty or missing file is valid.
//!
//! ```yaml
//! logging:
//!   level: debug
//!   format: json
//! inputs:
//!   coop_status_path: data/coops.json
//!   events_path: data/events.json
//! ```

use std::path::Path;

use serde::Deserialize;

/// Environment variable overriding [`InputConfig::coop_status_path`].
pub const COOP_STATUS_ENV: &str = "EGGWATCH_COOP_STATUS";

/// Environment variable overriding [`InputConfig::events_path`].
pub const EVENTS_ENV: &str = "EGGWATCH_EVENTS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level eggwatch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WatchConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Input file locations.
    #[serde(default)]
    pub inputs: InputConfig,
}

impl WatchConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for input paths:
    /// - `EGGWATCH_COOP_STATUS` overrides `inputs.coop_status_path`
    /// - `EGGWATCH_EVENTS` overrides `inputs.events_path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.inputs.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string without consulting the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG` wins
    /// when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log line format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Input file locations for the peek tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    /// JSON array of coop status records.
    #[serde(default = "default_coop_status_path")]
    pub coop_status_path: String,

    /// JSON array of event records. Events are skipped when unset.
    #[serde(default)]
    pub events_path: Option<String>,
}

impl InputConfig {
    /// Override input paths with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(COOP_STATUS_ENV) {
            self.coop_status_path = val;
        }
        if let Ok(val) = std::env::var(EVENTS_ENV) {
            self.events_path = Some(val);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            coop_status_path: default_coop_status_path(),
            events_path: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_coop_status_path() -> String {
    "coop-status.json".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WatchConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.inputs.coop_status_path, "coop-status.json");
        assert_eq!(config.inputs.events_path, None);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
logging:
  level: debug
  format: json
inputs:
  coop_status_path: data/coops.json
  events_path: data/events.json
";
        let config = WatchConfig::parse_yaml(yaml).ok();
        assert_eq!(
            config,
            Some(WatchConfig {
                logging: LoggingConfig {
                    level: "debug".to_owned(),
                    format: LogFormat::Json,
                },
                inputs: InputConfig {
                    coop_status_path: "data/coops.json".to_owned(),
                    events_path: Some("data/events.json".to_owned()),
                },
            })
        );
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config = WatchConfig::parse_yaml("logging:\n  level: warn\n").ok();
        assert_eq!(config.as_ref().map(|c| c.logging.level.as_str()), Some("warn"));
        assert_eq!(
            config.as_ref().map(|c| c.inputs.coop_status_path.as_str()),
            Some("coop-status.json")
        );
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(WatchConfig::parse_yaml("").ok(), Some(WatchConfig::default()));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = WatchConfig::parse_yaml("logging: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn unknown_log_format_is_an_error() {
        let result = WatchConfig::parse_yaml("logging:\n  format: xml\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = WatchConfig::from_file(Path::new("/nonexistent/eggwatch-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
