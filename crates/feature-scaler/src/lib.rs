//! Feature Scaling and Validation
//!
//! Provides the fixed-shape feature vector consumed by the fault model, the
//! model's standard scaler, and range checking for raw panel readings.

mod error;
mod features;
mod reading;
mod scaler;
mod validator;

pub use error::{FeatureError, ValidationError};
pub use features::{Feature, FeatureVector, ScaledFeatureVector, FEATURE_NAMES, NUM_FEATURES};
pub use reading::{SensorReading, LUX_TO_IRRADIANCE, MAX_EFFICIENCY_PCT, PANEL_AREA_M2};
pub use scaler::{scale_features, StandardScaler, SCALER_MEAN, SCALER_STD};
pub use validator::{ValidationConfig, ValidationResult, Validator};
