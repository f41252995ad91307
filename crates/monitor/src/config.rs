//! Monitor Configuration

use ::config::{Config, Environment, File};
use alerting::AlertConfig;
use feature_scaler::ValidationConfig;
use forest_model::DetectorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

use crate::MonitorError;

/// Config file looked up in the working directory (any supported extension)
pub const DEFAULT_CONFIG_FILE: &str = "solar-fault";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SOLAR_FAULT_CONFIG";

/// Prefix for environment overrides, e.g. `SOLAR_FAULT__ALERTS__COOLDOWN_SECONDS=300`
pub const ENV_PREFIX: &str = "SOLAR_FAULT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error
    pub level: String,
    /// Emit JSON log lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`
    pub fn max_level(&self) -> Result<Level, MonitorError> {
        Level::from_str(&self.level).map_err(|_| MonitorError::LogLevel(self.level.clone()))
    }
}

/// Top-level monitor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// JSON-lines input file; stdin when unset
    pub input: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub detector: DetectorConfig,
    pub alerts: AlertConfig,
}

impl MonitorConfig {
    /// Load from the optional config file and environment overrides
    ///
    /// The file is `$SOLAR_FAULT_CONFIG` when set (and must exist), else an
    /// optional `solar-fault.{toml,json,yaml}` in the working directory.
    pub fn load() -> Result<Self, MonitorError> {
        let file = match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => File::with_name(&path).required(true),
            Err(_) => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        Self::from_sources(file, Environment::with_prefix(ENV_PREFIX))
    }

    /// Build from an explicit file source and environment source
    pub fn from_sources<F>(file: F, env: Environment) -> Result<Self, MonitorError>
    where
        F: ::config::Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .add_source(file)
            .add_source(
                env.prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let config: Self = config.try_deserialize()?;
        config.logging.max_level()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::{FileFormat, Map};

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_without_sources() {
        let config =
            MonitorConfig::from_sources(File::from_str("", FileFormat::Toml), env(&[])).unwrap();
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(config.alerts.cooldown_seconds, 60);
        assert_eq!(config.logging.level, "info");
        assert!(config.input.is_none());
    }

    #[test]
    fn test_file_values() {
        let toml = r#"
            input = "readings.jsonl"

            [logging]
            level = "debug"
            json = true

            [alerts]
            cooldown_seconds = 300

            [validation]
            light_range = [0.0, 1500.0]
        "#;
        let config =
            MonitorConfig::from_sources(File::from_str(toml, FileFormat::Toml), env(&[])).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("readings.jsonl")));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.alerts.cooldown_seconds, 300);
        assert_eq!(config.alerts.max_alerts_per_hour, 10);
        assert_eq!(config.validation.light_range, (0.0, 1500.0));
    }

    #[test]
    fn test_misspelled_log_level_rejected() {
        let toml = "[logging]\nlevel = \"verbose\"\n";
        let err = MonitorConfig::from_sources(File::from_str(toml, FileFormat::Toml), env(&[]))
            .unwrap_err();
        assert!(matches!(err, MonitorError::LogLevel(ref level) if level == "verbose"));

        let upper = "[logging]\nlevel = \"WARN\"\n";
        let config =
            MonitorConfig::from_sources(File::from_str(upper, FileFormat::Toml), env(&[])).unwrap();
        assert_eq!(config.logging.max_level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_scaler_cannot_be_overridden() {
        let toml = "[detector.scaler]\nmean = [19.5, 5.0, 35.0, 1000.0]\n";
        let result = MonitorConfig::from_sources(File::from_str(toml, FileFormat::Toml), env(&[]));
        assert!(matches!(result, Err(MonitorError::Config(_))));

        let result = MonitorConfig::from_sources(
            File::from_str("", FileFormat::Toml),
            env(&[("SOLAR_FAULT__DETECTOR__SCALER__MEAN", "0")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let toml = "[alerts]\ncooldown_seconds = 300\n";
        let config = MonitorConfig::from_sources(
            File::from_str(toml, FileFormat::Toml),
            env(&[
                ("SOLAR_FAULT__ALERTS__COOLDOWN_SECONDS", "5"),
                ("SOLAR_FAULT__DETECTOR__LOG_TREE_VOTES", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(config.alerts.cooldown_seconds, 5);
        assert!(config.detector.log_tree_votes);
    }
}
