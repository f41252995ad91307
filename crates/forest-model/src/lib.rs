//! Solar Panel Fault Forest
//!
//! Frozen random-forest classifier mapping a 4-feature panel reading to one
//! of four operating states. Inference is allocation-free and stateless.

mod classifier;
mod fault;
mod forest;
mod tree;
mod votes;

pub use classifier::{
    classify, is_fault, predict, predict_class_name, DetectorConfig, FaultDetector, Prediction,
};
pub use fault::{FaultClass, Severity, UnknownFaultClass, CLASS_NAMES};
pub use forest::{Forest, FOREST};
pub use tree::{leaf, split, DecisionTree, Node, TreeError, MAX_NODES};
pub use votes::VoteTally;

pub use feature_scaler::{
    FeatureVector, ScaledFeatureVector, FEATURE_NAMES, NUM_FEATURES, SCALER_MEAN, SCALER_STD,
};

use feature_scaler::FeatureError;
use thiserror::Error;

/// Number of output classes
pub const NUM_CLASSES: usize = 4;

/// Number of trees in the forest
pub const NUM_TREES: usize = 10;

/// Maximum depth of any tree
pub const MAX_DEPTH: usize = 5;

/// Errors from the detector facade
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Invalid feature input: {0}")]
    Features(#[from] FeatureError),
    #[error("Tree {index} is malformed: {source}")]
    InvalidTree {
        index: usize,
        #[source]
        source: TreeError,
    },
}
