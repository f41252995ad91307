//! Feature Vector Layout

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of features the model consumes
pub const NUM_FEATURES: usize = 4;

/// Feature names in positional order (for debugging and reports)
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "Voltage",
    "Current",
    "Temperature",
    "Light_Intensity",
];

/// A position in the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Panel output voltage (V)
    Voltage,
    /// Panel output current (A)
    Current,
    /// Panel temperature (°C)
    Temperature,
    /// Incident light (lux)
    LightIntensity,
}

impl Feature {
    /// All features in positional order
    pub const ALL: [Feature; NUM_FEATURES] = [
        Feature::Voltage,
        Feature::Current,
        Feature::Temperature,
        Feature::LightIntensity,
    ];

    /// Position of this feature in a vector
    pub const fn index(self) -> usize {
        match self {
            Feature::Voltage => 0,
            Feature::Current => 1,
            Feature::Temperature => 2,
            Feature::LightIntensity => 3,
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw measurements in the order `[voltage, current, temperature, light_intensity]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f32; NUM_FEATURES]);

impl FeatureVector {
    /// Create a feature vector from positional values
    pub const fn new(values: [f32; NUM_FEATURES]) -> Self {
        Self(values)
    }

    /// Value of one feature
    pub const fn get(&self, feature: Feature) -> f32 {
        self.0[feature.index()]
    }

    /// Underlying values
    pub const fn as_array(&self) -> &[f32; NUM_FEATURES] {
        &self.0
    }
}

impl From<[f32; NUM_FEATURES]> for FeatureVector {
    fn from(values: [f32; NUM_FEATURES]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[f32]> for FeatureVector {
    type Error = FeatureError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        <[f32; NUM_FEATURES]>::try_from(values)
            .map(Self)
            .map_err(|_| FeatureError::WrongLength {
                expected: NUM_FEATURES,
                actual: values.len(),
            })
    }
}

/// Standardized features, as seen by the decision trees
///
/// Only produced by a [`StandardScaler`](crate::StandardScaler) or built
/// explicitly with [`ScaledFeatureVector::new`] when probing tree boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaledFeatureVector([f32; NUM_FEATURES]);

impl ScaledFeatureVector {
    /// Wrap values that are already in scaled space
    pub const fn new(values: [f32; NUM_FEATURES]) -> Self {
        Self(values)
    }

    /// Scaled value of one feature
    #[inline]
    pub const fn get(&self, feature: Feature) -> f32 {
        self.0[feature.index()]
    }

    /// Underlying values
    pub const fn as_array(&self) -> &[f32; NUM_FEATURES] {
        &self.0
    }
}
