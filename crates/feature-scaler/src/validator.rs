//! Reading Validator for Range Checking

use crate::error::ValidationError;
use crate::reading::SensorReading;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Voltage valid range (V)
    pub voltage_range: (f32, f32),
    /// Current valid range (A)
    pub current_range: (f32, f32),
    /// Temperature valid range (°C)
    pub temperature_range: (f32, f32),
    /// Light intensity valid range (lux)
    pub light_range: (f32, f32),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            voltage_range: (0.0, 60.0),
            current_range: (0.0, 20.0),
            temperature_range: (-40.0, 125.0),
            light_range: (0.0, 200_000.0),
        }
    }
}

/// Result of validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Range validator for raw panel readings
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f32,
        range: (f32, f32),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate voltage
    pub fn validate_voltage(&self, voltage: f32) -> Result<(), ValidationError> {
        self.validate_range("voltage", voltage, self.config.voltage_range)
    }

    /// Validate current
    pub fn validate_current(&self, current: f32) -> Result<(), ValidationError> {
        self.validate_range("current", current, self.config.current_range)
    }

    /// Validate temperature
    pub fn validate_temperature(&self, temperature: f32) -> Result<(), ValidationError> {
        self.validate_range("temperature", temperature, self.config.temperature_range)
    }

    /// Validate light intensity
    pub fn validate_light(&self, light: f32) -> Result<(), ValidationError> {
        self.validate_range("light_intensity", light, self.config.light_range)
    }

    /// Validate every field of a reading, collecting all failures
    pub fn validate(&self, reading: &SensorReading) -> ValidationResult {
        let checks = [
            self.validate_voltage(reading.voltage),
            self.validate_current(reading.current),
            self.validate_temperature(reading.temperature),
            self.validate_light(reading.light_intensity),
        ];
        let fields_checked = checks.len();
        let errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();

        if errors.is_empty() {
            ValidationResult::valid(fields_checked)
        } else {
            debug!("Reading rejected with {} error(s)", errors.len());
            ValidationResult::invalid(errors, fields_checked)
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}
