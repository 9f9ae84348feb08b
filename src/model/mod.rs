//! Pre-trained actuator classifier: artifact schema and evaluation.
//!
//! The artifact is produced by an external training run and is immutable
//! for the process lifetime. This module only deserializes and evaluates
//! it; there is no fitting, updating, or versioning here.

pub mod loader;

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::Deserialize;

use crate::errors::InferenceError;

pub use loader::{load_artifact, ModelCache, ModelHandle};

/// Anything that can classify a batch of feature rows.
///
/// The contract mirrors the exported artifact: a 2-D numeric batch in, a
/// 2-D integer batch out, one output column per actuator. Implementations
/// are treated as pure functions of their input.
pub trait Predict {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array2<i64>, InferenceError>;
}

/// One node of the serialized decision tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal split: the `feature` column is compared against
    /// `threshold`; `<=` descends to `left`, otherwise `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node carrying one class per output column.
    Leaf { classes: Vec<i64> },
}

/// Multi-output decision tree deserialized from the model artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionModel {
    /// Input column names, in training order.
    pub feature_names: Vec<String>,
    /// Output column names, one per actuator position.
    pub output_names: Vec<String>,
    root: usize,
    nodes: Vec<TreeNode>,
}

impl DecisionModel {
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn n_outputs(&self) -> usize {
        self.output_names.len()
    }

    /// Structural checks applied once at load time.
    ///
    /// Returns the first problem found: a node index out of range, a split
    /// referencing a feature column the artifact does not declare, or a
    /// leaf whose class count disagrees with the declared outputs.
    pub fn validate(&self) -> Result<(), String> {
        let len = self.nodes.len();
        if len == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.root >= len {
            return Err(format!("root index {} out of range ({} nodes)", self.root, len));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= self.n_features() {
                        return Err(format!(
                            "node {} splits on feature {} but only {} features are declared",
                            index,
                            feature,
                            self.n_features()
                        ));
                    }
                    if *left >= len || *right >= len {
                        return Err(format!(
                            "node {} has child index out of range ({} nodes)",
                            index, len
                        ));
                    }
                }
                TreeNode::Leaf { classes } => {
                    if classes.len() != self.n_outputs() {
                        return Err(format!(
                            "leaf {} carries {} classes but {} outputs are declared",
                            index,
                            classes.len(),
                            self.n_outputs()
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    fn classify_row(&self, row: ArrayView1<'_, f64>) -> Result<&[i64], InferenceError> {
        let mut index = self.root;
        // A well-formed tree reaches a leaf in at most `nodes.len()` hops;
        // anything longer means a cycle in the node graph.
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(index).ok_or(InferenceError::CorruptTree {
                index,
                len: self.nodes.len(),
            })?;
            match node {
                TreeNode::Leaf { classes } => return Ok(classes),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value =
                        row.get(*feature)
                            .copied()
                            .ok_or(InferenceError::FeatureArity {
                                expected: self.n_features(),
                                actual: row.len(),
                            })?;
                    index = if value <= *threshold { *left } else { *right };
                }
            }
        }
        Err(InferenceError::CorruptTree {
            index,
            len: self.nodes.len(),
        })
    }
}

impl Predict for DecisionModel {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array2<i64>, InferenceError> {
        if features.ncols() != self.n_features() {
            return Err(InferenceError::FeatureArity {
                expected: self.n_features(),
                actual: features.ncols(),
            });
        }

        let mut output = Array2::zeros((features.nrows(), self.n_outputs()));
        for (i, row) in features.rows().into_iter().enumerate() {
            let classes = self.classify_row(row)?;
            if classes.len() != self.n_outputs() {
                return Err(InferenceError::OutputArity {
                    expected: self.n_outputs(),
                    actual: classes.len(),
                });
            }
            for (j, &class) in classes.iter().enumerate() {
                output[[i, j]] = class;
            }
        }
        Ok(output)
    }
}
