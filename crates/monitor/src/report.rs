//! Prediction Reports

use feature_scaler::SensorReading;
use forest_model::{FaultClass, Prediction, Severity, VoteTally};
use serde::{Deserialize, Serialize};

/// One classified reading, as written to the output stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    pub fault_type: FaultClass,
    pub fault_index: usize,
    /// Winner's vote share in percent
    pub confidence: f32,
    pub is_fault: bool,
    pub votes: VoteTally,
    /// Output power (W)
    pub power: f32,
    /// Efficiency estimate (%)
    pub efficiency: f32,
    pub severity: Severity,
    pub recommendation: String,
}

impl PredictionReport {
    /// Build a report for a reading and its prediction
    pub fn new(reading: &SensorReading, prediction: &Prediction) -> Self {
        let fault = prediction.fault;
        Self {
            sender_id: None,
            timestamp_ms: None,
            fault_type: fault,
            fault_index: fault.index(),
            confidence: prediction.confidence * 100.0,
            is_fault: fault.is_fault(),
            votes: prediction.votes,
            power: (reading.power_w() * 100.0).round() / 100.0,
            efficiency: reading.efficiency_pct(),
            severity: fault.severity(),
            recommendation: fault.recommended_action().to_string(),
        }
    }

    /// Attach the gateway origin
    pub fn with_source(mut self, sender_id: u32, timestamp_ms: u64) -> Self {
        self.sender_id = Some(sender_id);
        self.timestamp_ms = Some(timestamp_ms);
        self
    }
}
