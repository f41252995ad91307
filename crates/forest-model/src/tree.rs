//! Table-Driven Decision Tree

use feature_scaler::{Feature, ScaledFeatureVector};
use thiserror::Error;

use crate::fault::FaultClass;
use crate::MAX_DEPTH;

/// Upper bound on nodes in a binary tree of depth `MAX_DEPTH`
pub const MAX_NODES: usize = (1 << (MAX_DEPTH + 1)) - 1;

/// One node of a tree table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    /// Go to `left` when `scaled[feature] <= threshold`, else to `right`
    Split {
        feature: Feature,
        threshold: f32,
        left: u8,
        right: u8,
    },
    /// Terminal vote
    Leaf(FaultClass),
}

/// Shorthand for a split node
pub const fn split(feature: Feature, threshold: f32, left: u8, right: u8) -> Node {
    Node::Split {
        feature,
        threshold,
        left,
        right,
    }
}

/// Shorthand for a leaf node
pub const fn leaf(class: FaultClass) -> Node {
    Node::Leaf(class)
}

/// Structural defects in a tree table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("tree has no nodes")]
    Empty,
    #[error("tree has {0} nodes, more than depth {max} allows", max = MAX_DEPTH)]
    TooManyNodes(usize),
    #[error("node {node} points to child {child} outside the table")]
    ChildOutOfBounds { node: usize, child: usize },
    #[error("node {node} points back to earlier node {child}")]
    ChildBeforeParent { node: usize, child: usize },
    #[error("tree depth {0} exceeds {max}", max = MAX_DEPTH)]
    TooDeep(usize),
}

/// A binary decision tree stored as a pre-order node table, root at index 0
///
/// Children always come after their parent, so evaluation only moves
/// forward and terminates in at most `MAX_DEPTH` steps.
#[derive(Debug, Clone, Copy)]
pub struct DecisionTree {
    nodes: &'static [Node],
}

impl DecisionTree {
    /// Wrap a static node table
    pub const fn new(nodes: &'static [Node]) -> Self {
        Self { nodes }
    }

    /// Walk from the root to a leaf
    #[inline]
    pub fn evaluate(&self, x: &ScaledFeatureVector) -> FaultClass {
        let mut idx = 0usize;
        loop {
            match self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let next = if x.get(feature) <= threshold { left } else { right };
                    idx = usize::from(next);
                }
                Node::Leaf(class) => return class,
            }
        }
    }

    /// Node table
    pub const fn nodes(&self) -> &'static [Node] {
        self.nodes
    }

    /// Number of nodes
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the table is empty
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges on the longest root-to-leaf path, or the table's defect
    pub const fn depth(&self) -> Result<usize, TreeError> {
        self.check()
    }

    /// Check the table is well formed
    pub const fn validate(&self) -> Result<(), TreeError> {
        match self.check() {
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }

    const fn check(&self) -> Result<usize, TreeError> {
        let len = self.nodes.len();
        if len == 0 {
            return Err(TreeError::Empty);
        }
        if len > MAX_NODES {
            return Err(TreeError::TooManyNodes(len));
        }

        // Parents precede children, so a single forward pass sees every
        // node's depth before its children are visited.
        let mut depths = [0usize; MAX_NODES];
        let mut max_depth = 0;
        let mut i = 0;
        while i < len {
            if let Node::Split { left, right, .. } = self.nodes[i] {
                let children = [left as usize, right as usize];
                let mut c = 0;
                while c < 2 {
                    let child = children[c];
                    if child >= len {
                        return Err(TreeError::ChildOutOfBounds { node: i, child });
                    }
                    if child <= i {
                        return Err(TreeError::ChildBeforeParent { node: i, child });
                    }
                    depths[child] = depths[i] + 1;
                    if depths[child] > max_depth {
                        max_depth = depths[child];
                    }
                    c += 1;
                }
            }
            i += 1;
        }

        if max_depth > MAX_DEPTH {
            return Err(TreeError::TooDeep(max_depth));
        }
        Ok(max_depth)
    }
}
