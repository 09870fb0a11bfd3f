//! Gradient-boosted tree ensemble loaded from a JSON export.
//!
//! Artifact schema:
//!
//! ```text
//! {
//!   "name": "gb_gen_time_only",
//!   "feature_names": ["hour", "dayofweek", "month", "year"],
//!   "base_score": 27000.0,
//!   "trees": [
//!     { "nodes": [
//!         { "feature": 0, "threshold": 7.5, "left": 1, "right": 2 },
//!         { "leaf": -1800.0 },
//!         { "leaf": 900.0 }
//!     ] }
//!   ]
//! }
//! ```
//!
//! A split sends a row left when `value < threshold`. Node 0 is the root and
//! children always sit at higher indices than their parent, so traversal
//! terminates. The prediction is `base_score` plus one leaf per tree.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nalgebra::DMatrix;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::model::Predictor;

/// On-disk form of the ensemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleArtifact {
    pub name: String,
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: f64,
    },
}

/// A validated ensemble ready for prediction.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    artifact: EnsembleArtifact,
}

impl TreeEnsemble {
    /// Read and validate an artifact file.
    pub fn load(path: &Path) -> Result<Self, ForecastError> {
        let file = File::open(path).map_err(|e| {
            ForecastError::ArtifactLoad(format!("cannot open '{}': {e}", path.display()))
        })?;
        let artifact: EnsembleArtifact = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            ForecastError::ArtifactLoad(format!("'{}' is not a valid ensemble: {e}", path.display()))
        })?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: EnsembleArtifact) -> Result<Self, ForecastError> {
        validate(&artifact)?;
        Ok(Self { artifact })
    }

    pub fn tree_count(&self) -> usize {
        self.artifact.trees.len()
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        self.artifact
            .trees
            .iter()
            .fold(self.artifact.base_score, |acc, tree| acc + tree.eval(row))
    }
}

impl Tree {
    fn eval(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf { leaf } => return leaf,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[feature] < threshold { left } else { right };
                }
            }
        }
    }
}

fn validate(artifact: &EnsembleArtifact) -> Result<(), ForecastError> {
    let invalid = |msg: String| ForecastError::ArtifactLoad(format!("{}: {msg}", artifact.name));

    if artifact.feature_names.is_empty() {
        return Err(invalid("no feature names".to_string()));
    }
    if artifact.trees.is_empty() {
        return Err(invalid("ensemble has no trees".to_string()));
    }
    if !artifact.base_score.is_finite() {
        return Err(invalid("base_score is not finite".to_string()));
    }

    let n_features = artifact.feature_names.len();
    for (t, tree) in artifact.trees.iter().enumerate() {
        if tree.nodes.is_empty() {
            return Err(invalid(format!("tree {t} has no nodes")));
        }
        for (i, node) in tree.nodes.iter().enumerate() {
            match *node {
                Node::Leaf { leaf } => {
                    if !leaf.is_finite() {
                        return Err(invalid(format!("tree {t} node {i}: non-finite leaf")));
                    }
                }
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(invalid(format!(
                            "tree {t} node {i}: feature index {feature} out of range (have {n_features})"
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(invalid(format!("tree {t} node {i}: NaN threshold")));
                    }
                    for child in [left, right] {
                        if child <= i || child >= tree.nodes.len() {
                            return Err(invalid(format!("tree {t} node {i}: bad child index {child}")));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

impl Predictor for TreeEnsemble {
    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    fn predict(&self, features: &DMatrix<f64>) -> Result<Vec<f64>, ForecastError> {
        let p = self.artifact.feature_names.len();
        if features.ncols() != p {
            return Err(ForecastError::Prediction(format!(
                "{} expects {p} feature columns, got {}",
                self.artifact.name,
                features.ncols()
            )));
        }

        // Rows are independent; collect() keeps them in input order.
        let out = (0..features.nrows())
            .into_par_iter()
            .map(|i| {
                let row: Vec<f64> = features.row(i).iter().copied().collect();
                self.predict_row(&row)
            })
            .collect();
        Ok(out)
    }
}
