//! The Trained Forest
//!
//! Ten trees transcribed from the exported model. Thresholds are in scaled
//! feature space and compared with `<=`; each trailing comment is the node's
//! index in its table.

use feature_scaler::{Feature, ScaledFeatureVector};

use crate::fault::FaultClass;
use crate::tree::{leaf, split, DecisionTree, Node, TreeError};
use crate::votes::VoteTally;
use crate::NUM_TREES;

/// An ordered ensemble of decision trees voting on one class each
#[derive(Debug, Clone, Copy)]
pub struct Forest {
    trees: [DecisionTree; NUM_TREES],
}

const MODEL: Forest = Forest::new([
    DecisionTree::new(&TREE_0),
    DecisionTree::new(&TREE_1),
    DecisionTree::new(&TREE_2),
    DecisionTree::new(&TREE_3),
    DecisionTree::new(&TREE_4),
    DecisionTree::new(&TREE_5),
    DecisionTree::new(&TREE_6),
    DecisionTree::new(&TREE_7),
    DecisionTree::new(&TREE_8),
    DecisionTree::new(&TREE_9),
]);

/// The model's forest
pub static FOREST: Forest = MODEL;

// Every table is checked at compile time.
const _: () = {
    let mut i = 0;
    while i < NUM_TREES {
        assert!(MODEL.trees[i].validate().is_ok(), "malformed tree table");
        i += 1;
    }
};

impl Forest {
    /// Build a forest from its trees
    pub const fn new(trees: [DecisionTree; NUM_TREES]) -> Self {
        Self { trees }
    }

    /// Let every tree vote on one scaled vector
    #[inline]
    pub fn vote(&self, x: &ScaledFeatureVector) -> VoteTally {
        let mut tally = VoteTally::new();
        for tree in &self.trees {
            tally.record(tree.evaluate(x));
        }
        tally
    }

    /// Each tree's individual vote, in tree order
    pub fn tree_votes(&self, x: &ScaledFeatureVector) -> [FaultClass; NUM_TREES] {
        let mut votes = [FaultClass::Normal; NUM_TREES];
        for (vote, tree) in votes.iter_mut().zip(&self.trees) {
            *vote = tree.evaluate(x);
        }
        votes
    }

    /// Trees in voting order
    pub fn trees(&self) -> &[DecisionTree; NUM_TREES] {
        &self.trees
    }

    /// Deepest tree in the forest, or the first malformed tree's defect
    pub fn max_depth(&self) -> Result<usize, TreeError> {
        let mut max = 0usize;
        for tree in &self.trees {
            max = max.max(tree.depth()?);
        }
        Ok(max)
    }
}

const TREE_0: [Node; 17] = [
    split(Feature::Current, 0.756920, 1, 16), // 0
    split(Feature::Voltage, 0.285778, 2, 3), // 1
    leaf(FaultClass::PartialShading), // 2
    split(Feature::Voltage, 1.016722, 4, 9), // 3
    split(Feature::Voltage, 0.755108, 5, 6), // 4
    leaf(FaultClass::Normal), // 5
    split(Feature::Current, -0.546588, 7, 8), // 6
    leaf(FaultClass::OpenCircuit), // 7
    leaf(FaultClass::Normal), // 8
    split(Feature::LightIntensity, 1.355272, 10, 13), // 9
    split(Feature::Voltage, 1.037918, 11, 12), // 10
    leaf(FaultClass::OpenCircuit), // 11
    leaf(FaultClass::OpenCircuit), // 12
    split(Feature::Temperature, -0.499967, 14, 15), // 13
    leaf(FaultClass::OpenCircuit), // 14
    leaf(FaultClass::Normal), // 15
    leaf(FaultClass::ShortCircuit), // 16
];

const TREE_1: [Node; 17] = [
    split(Feature::Temperature, 0.530407, 1, 16), // 0
    split(Feature::LightIntensity, -0.691717, 2, 5), // 1
    split(Feature::Voltage, 0.454132, 3, 4), // 2
    leaf(FaultClass::PartialShading), // 3
    leaf(FaultClass::OpenCircuit), // 4
    split(Feature::Temperature, -0.198546, 6, 11), // 5
    split(Feature::Voltage, 0.281539, 7, 8), // 6
    leaf(FaultClass::PartialShading), // 7
    split(Feature::Voltage, 0.781149, 9, 10), // 8
    leaf(FaultClass::Normal), // 9
    leaf(FaultClass::OpenCircuit), // 10
    split(Feature::Current, -0.107166, 12, 13), // 11
    leaf(FaultClass::PartialShading), // 12
    split(Feature::LightIntensity, -0.526737, 14, 15), // 13
    leaf(FaultClass::Normal), // 14
    leaf(FaultClass::Normal), // 15
    leaf(FaultClass::ShortCircuit), // 16
];

const TREE_2: [Node; 7] = [
    split(Feature::Voltage, -0.939325, 1, 2), // 0
    leaf(FaultClass::ShortCircuit), // 1
    split(Feature::Current, -1.025361, 3, 4), // 2
    leaf(FaultClass::OpenCircuit), // 3
    split(Feature::Current, -0.066176, 5, 6), // 4
    leaf(FaultClass::PartialShading), // 5
    leaf(FaultClass::Normal), // 6
];

const TREE_3: [Node; 7] = [
    split(Feature::Current, -1.025361, 1, 2), // 0
    leaf(FaultClass::OpenCircuit), // 1
    split(Feature::Voltage, 0.285778, 3, 6), // 2
    split(Feature::Current, 0.276508, 4, 5), // 3
    leaf(FaultClass::PartialShading), // 4
    leaf(FaultClass::ShortCircuit), // 5
    leaf(FaultClass::Normal), // 6
];

const TREE_4: [Node; 9] = [
    split(Feature::Current, -1.031919, 1, 2), // 0
    leaf(FaultClass::OpenCircuit), // 1
    split(Feature::Temperature, 0.530407, 3, 8), // 2
    split(Feature::Current, -0.066176, 4, 5), // 3
    leaf(FaultClass::PartialShading), // 4
    split(Feature::Current, 0.773317, 6, 7), // 5
    leaf(FaultClass::Normal), // 6
    leaf(FaultClass::Normal), // 7
    leaf(FaultClass::ShortCircuit), // 8
];

const TREE_5: [Node; 11] = [
    split(Feature::Temperature, 0.541841, 1, 10), // 0
    split(Feature::Voltage, 0.285778, 2, 5), // 1
    split(Feature::Voltage, -0.694668, 3, 4), // 2
    leaf(FaultClass::ShortCircuit), // 3
    leaf(FaultClass::PartialShading), // 4
    split(Feature::Voltage, 0.755108, 6, 7), // 5
    leaf(FaultClass::Normal), // 6
    split(Feature::Current, -0.540030, 8, 9), // 7
    leaf(FaultClass::OpenCircuit), // 8
    leaf(FaultClass::Normal), // 9
    leaf(FaultClass::ShortCircuit), // 10
];

const TREE_6: [Node; 7] = [
    split(Feature::Current, -1.030280, 1, 2), // 0
    leaf(FaultClass::OpenCircuit), // 1
    split(Feature::Voltage, 0.274272, 3, 6), // 2
    split(Feature::Current, 0.278147, 4, 5), // 3
    leaf(FaultClass::PartialShading), // 4
    leaf(FaultClass::ShortCircuit), // 5
    leaf(FaultClass::Normal), // 6
];

const TREE_7: [Node; 7] = [
    split(Feature::Voltage, -0.953254, 1, 2), // 0
    leaf(FaultClass::ShortCircuit), // 1
    split(Feature::Current, -1.025361, 3, 4), // 2
    leaf(FaultClass::OpenCircuit), // 3
    split(Feature::Current, -0.056338, 5, 6), // 4
    leaf(FaultClass::PartialShading), // 5
    leaf(FaultClass::Normal), // 6
];

const TREE_8: [Node; 7] = [
    split(Feature::Voltage, -0.960521, 1, 2), // 0
    leaf(FaultClass::ShortCircuit), // 1
    split(Feature::Current, -0.057977, 3, 6), // 2
    split(Feature::Current, -1.031919, 4, 5), // 3
    leaf(FaultClass::OpenCircuit), // 4
    leaf(FaultClass::PartialShading), // 5
    leaf(FaultClass::Normal), // 6
];

const TREE_9: [Node; 7] = [
    split(Feature::Current, -0.066176, 1, 4), // 0
    split(Feature::Current, -1.030280, 2, 3), // 1
    leaf(FaultClass::OpenCircuit), // 2
    leaf(FaultClass::PartialShading), // 3
    split(Feature::Temperature, 0.339854, 5, 6), // 4
    leaf(FaultClass::Normal), // 5
    leaf(FaultClass::ShortCircuit), // 6
];
