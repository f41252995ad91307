//! Fault Classifier

use feature_scaler::{scale_features, FeatureVector, SensorReading};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::fault::{FaultClass, CLASS_NAMES};
use crate::forest::FOREST;
use crate::votes::VoteTally;
use crate::DetectorError;

/// Class index for a raw reading, always in `0..NUM_CLASSES`
pub fn predict(raw: &FeatureVector) -> usize {
    FOREST.vote(&scale_features(raw)).winner().index()
}

/// Class name for a raw reading
pub fn predict_class_name(raw: &FeatureVector) -> &'static str {
    CLASS_NAMES[predict(raw)]
}

/// Whether a raw reading is classified as anything but `Normal`
pub fn is_fault(raw: &FeatureVector) -> bool {
    predict(raw) != 0
}

/// Full prediction detail for a raw reading
pub fn classify(raw: &FeatureVector) -> Prediction {
    Prediction::from_votes(FOREST.vote(&scale_features(raw)))
}

/// Prediction result with its supporting votes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Winning class
    pub fault: FaultClass,
    /// Votes per class
    pub votes: VoteTally,
    /// Winner's share of the votes (0.0 to 1.0)
    pub confidence: f32,
}

impl Prediction {
    /// Resolve a tally into a prediction
    pub fn from_votes(votes: VoteTally) -> Self {
        let fault = votes.winner();
        Self {
            fault,
            votes,
            confidence: votes.share(fault),
        }
    }

    /// Whether the winning class is a fault
    pub fn is_fault(&self) -> bool {
        self.fault.is_fault()
    }
}

/// Detector configuration
///
/// The forest and its scaler are fixed; only diagnostics are configurable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Log every tree's vote at debug level
    pub log_tree_votes: bool,
}

/// Forest classifier with logging and input conversion
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone)]
pub struct FaultDetector {
    config: DetectorConfig,
}

impl FaultDetector {
    /// Create a detector, checking the forest tables
    pub fn new(config: DetectorConfig) -> Result<Self, DetectorError> {
        let mut max_depth = 0usize;
        for (index, tree) in FOREST.trees().iter().enumerate() {
            let depth = tree
                .depth()
                .map_err(|source| DetectorError::InvalidTree { index, source })?;
            max_depth = max_depth.max(depth);
        }

        info!(
            "Fault detector ready: {} trees, max depth {}",
            FOREST.trees().len(),
            max_depth
        );

        Ok(Self { config })
    }

    /// Classify a raw feature vector
    pub fn classify(&self, raw: &FeatureVector) -> Prediction {
        let scaled = scale_features(raw);

        if self.config.log_tree_votes {
            debug!("Tree votes: {:?}", FOREST.tree_votes(&scaled));
        }

        let prediction = Prediction::from_votes(FOREST.vote(&scaled));
        debug!(
            "Prediction: {} (conf={:.2}, votes={:?})",
            prediction.fault,
            prediction.confidence,
            prediction.votes.votes()
        );
        prediction
    }

    /// Classify a named reading
    pub fn classify_reading(&self, reading: &SensorReading) -> Prediction {
        self.classify(&reading.to_features())
    }

    /// Classify values from an untyped buffer
    pub fn classify_slice(&self, values: &[f32]) -> Result<Prediction, DetectorError> {
        let raw = FeatureVector::try_from(values)?;
        Ok(self.classify(&raw))
    }

    /// Active configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}
