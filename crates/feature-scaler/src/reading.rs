//! Raw Panel Readings and Derived Metrics

use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// Panel surface area used for the efficiency estimate (m²)
pub const PANEL_AREA_M2: f32 = 1.6;

/// Approximate lux to W/m² conversion for sunlight
pub const LUX_TO_IRRADIANCE: f32 = 0.0079;

/// Realistic ceiling for silicon panel efficiency (%)
pub const MAX_EFFICIENCY_PCT: f32 = 25.0;

/// One set of named measurements from a panel
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorReading {
    /// Output voltage (V)
    pub voltage: f32,
    /// Output current (A)
    pub current: f32,
    /// Panel temperature (°C)
    pub temperature: f32,
    /// Incident light (lux)
    pub light_intensity: f32,
}

impl SensorReading {
    /// Create a reading
    pub const fn new(voltage: f32, current: f32, temperature: f32, light_intensity: f32) -> Self {
        Self {
            voltage,
            current,
            temperature,
            light_intensity,
        }
    }

    /// Positional feature vector for the model
    pub const fn to_features(&self) -> FeatureVector {
        FeatureVector::new([
            self.voltage,
            self.current,
            self.temperature,
            self.light_intensity,
        ])
    }

    /// Electrical output power (W)
    pub fn power_w(&self) -> f32 {
        self.voltage * self.current
    }

    /// Conversion efficiency estimate (%), clamped to `[0, 25]` and rounded to 2 decimals
    ///
    /// Returns 0 when there is no measurable light input.
    pub fn efficiency_pct(&self) -> f32 {
        let irradiance = self.light_intensity * LUX_TO_IRRADIANCE;
        let solar_input = irradiance * PANEL_AREA_M2;

        if solar_input <= 0.0 {
            return 0.0;
        }

        let efficiency = (self.power_w() / solar_input) * 100.0;
        round2(efficiency.clamp(0.0, MAX_EFFICIENCY_PCT))
    }
}

impl From<FeatureVector> for SensorReading {
    fn from(features: FeatureVector) -> Self {
        let [voltage, current, temperature, light_intensity] = *features.as_array();
        Self {
            voltage,
            current,
            temperature,
            light_intensity,
        }
    }
}

impl From<SensorReading> for FeatureVector {
    fn from(reading: SensorReading) -> Self {
        reading.to_features()
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
