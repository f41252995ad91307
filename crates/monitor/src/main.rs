//! Solar Panel Fault Monitor - Main Entry Point

use anyhow::Context;
use monitor::{init_logging, Monitor, MonitorConfig};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let mut config = MonitorConfig::load().context("Failed to load configuration")?;
    if let Some(path) = std::env::args_os().nth(1) {
        config.input = Some(path.into());
    }

    init_logging(&config.logging)?;

    info!("=== Solar Fault Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let mut monitor = Monitor::new(&config)?;
    let stdout = io::stdout().lock();

    let stats = match &config.input {
        Some(path) => {
            info!("Reading records from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            monitor.run(BufReader::new(file), stdout)?
        }
        None => {
            info!("Reading records from stdin");
            monitor.run(io::stdin().lock(), stdout)?
        }
    };

    info!(
        "Done: {} processed, {} skipped, {} faults, {} alerts",
        stats.processed, stats.skipped, stats.faults, stats.alerts
    );

    Ok(())
}
