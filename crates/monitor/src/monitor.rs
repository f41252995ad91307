//! Classification Loop

use alerting::AlertManager;
use feature_scaler::{SensorReading, Validator};
use forest_model::FaultDetector;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::config::MonitorConfig;
use crate::record::InputRecord;
use crate::report::PredictionReport;
use crate::MonitorError;

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Records classified
    pub processed: usize,
    /// Records dropped as malformed, flagged invalid, or out of range
    pub skipped: usize,
    /// Classified records that were not `Normal`
    pub faults: usize,
    /// Notifications raised
    pub alerts: usize,
}

/// Validates, classifies and reports panel records
pub struct Monitor {
    detector: FaultDetector,
    validator: Validator,
    alerts: AlertManager,
    stats: RunStats,
}

impl Monitor {
    /// Create a monitor from configuration
    pub fn new(config: &MonitorConfig) -> Result<Self, MonitorError> {
        Ok(Self {
            detector: FaultDetector::new(config.detector.clone())?,
            validator: Validator::new(config.validation.clone()),
            alerts: AlertManager::new(config.alerts.clone()),
            stats: RunStats::default(),
        })
    }

    /// Process every line of `input`, writing one JSON report per accepted record
    ///
    /// Lines that are not UTF-8 are skipped; only read and write failures
    /// end the run.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<RunStats, MonitorError> {
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Line {}: not valid UTF-8: {}", line_no, e);
                    self.stats.skipped += 1;
                    continue;
                }
            };

            if let Some(report) = self.process_line(line_no, line) {
                serde_json::to_writer(&mut output, &report).map_err(MonitorError::Encode)?;
                output.write_all(b"\n")?;
            }
        }
        output.flush()?;
        Ok(self.stats)
    }

    /// Parse and process one input line; blank lines are ignored
    pub fn process_line(&mut self, line_no: usize, line: &str) -> Option<PredictionReport> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match serde_json::from_str::<InputRecord>(line) {
            Ok(record) => self.process_record(&record),
            Err(e) => {
                warn!("Line {}: unrecognised record: {}", line_no, e);
                self.stats.skipped += 1;
                None
            }
        }
    }

    /// Process one parsed record
    pub fn process_record(&mut self, record: &InputRecord) -> Option<PredictionReport> {
        match record {
            InputRecord::Reading(reading) => self.process_reading(reading),
            InputRecord::Gateway(gateway) => {
                if !gateway.valid {
                    debug!("Skipping invalid sample from sender {}", gateway.sender_id);
                    self.stats.skipped += 1;
                    return None;
                }
                self.process_reading(&gateway.to_reading())
                    .map(|report| report.with_source(gateway.sender_id, gateway.gateway_timestamp_ms))
            }
        }
    }

    /// Validate and classify one reading
    pub fn process_reading(&mut self, reading: &SensorReading) -> Option<PredictionReport> {
        let validation = self.validator.validate(reading);
        if !validation.valid {
            for error in &validation.errors {
                warn!("Reading rejected: {}", error);
            }
            self.stats.skipped += 1;
            return None;
        }

        let prediction = self.detector.classify_reading(reading);
        self.stats.processed += 1;

        if prediction.is_fault() {
            self.stats.faults += 1;
            if self.alerts.should_fire(prediction.fault, prediction.confidence) {
                self.alerts.record_fire(prediction.fault);
                self.stats.alerts += 1;
                warn!(
                    "{} [{}]: {}",
                    prediction.fault.message(),
                    prediction.fault.severity(),
                    prediction.fault.recommended_action()
                );
            }
        }

        Some(PredictionReport::new(reading, &prediction))
    }

    /// Counters so far
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Alert state, for acknowledging notifications
    pub fn alerts_mut(&mut self) -> &mut AlertManager {
        &mut self.alerts
    }
}
