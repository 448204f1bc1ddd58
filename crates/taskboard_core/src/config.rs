//! Core runtime configuration.
//!
//! # Responsibility
//! - Resolve logging settings from the environment or a serialized document.
//!
//! # Invariants
//! - A missing or blank level falls back to `default_log_level()`.
//! - A missing or blank directory leaves logging disabled.

use crate::logging::{default_log_level, init_logging, LoggingError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default = "default_level_string")]
    pub log_level: String,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_level_string() -> String {
    default_log_level().to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_level_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `TASKBOARD_LOG_LEVEL` and `TASKBOARD_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or_else(default_level_string),
            log_dir: non_blank(ENV_LOG_DIR).map(PathBuf::from),
        }
    }

    pub fn logging_enabled(&self) -> bool {
        self.log_dir.is_some()
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays disabled.
    ///
    /// # Errors
    /// - Propagates any `init_logging` failure.
    pub fn apply_logging(&self) -> Result<bool, LoggingError> {
        let Some(dir) = &self.log_dir else {
            return Ok(false);
        };
        init_logging(&self.log_level, dir)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn lookup_reads_level_and_dir() {
        let config = CoreConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, " warn "),
            (ENV_LOG_DIR, "/var/log/taskboard"),
        ]));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/taskboard")));
        assert!(config.logging_enabled());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            CoreConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "  "), (ENV_LOG_DIR, "")]));
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.log_level, default_log_level());
        assert!(!config.logging_enabled());
    }

    #[test]
    fn disabled_logging_is_not_applied() {
        let applied = CoreConfig::default()
            .apply_logging()
            .expect("disabled logging should be a no-op");
        assert!(!applied);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let config: CoreConfig =
            serde_json::from_str(r#"{"log_dir":"/tmp/taskboard"}"#).expect("config should parse");
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/taskboard")));
    }
}
