//! Solar Panel Fault Monitor
//!
//! Reads panel readings or gateway records as JSON lines, classifies each
//! with the fault forest, and writes one JSON report per accepted record.

mod config;
mod monitor;
mod record;
mod report;

pub use config::{LoggingConfig, MonitorConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use monitor::{Monitor, RunStats};
pub use record::{GatewayRecord, InputRecord};
pub use report::PredictionReport;

use forest_model::DetectorError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::FmtSubscriber;

/// Monitor errors
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode report: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Detector(#[from] DetectorError),
    #[error("Unknown log level: {0:?}")]
    LogLevel(String),
    #[error("Failed to install log subscriber: {0}")]
    Logging(#[from] SetGlobalDefaultError),
}

/// Initialize logging to stderr, keeping stdout for reports
pub fn init_logging(config: &LoggingConfig) -> Result<(), MonitorError> {
    let level = config.max_level()?;
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
