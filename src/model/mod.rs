//! Prediction capability.
//!
//! The pipeline only depends on the [`Predictor`] trait: rows of calendar
//! features in, one MW value per row out. The shipped implementation evaluates
//! an exported tree ensemble ([`TreeEnsemble`]); tests plug in stubs.

use nalgebra::DMatrix;

use crate::error::ForecastError;

pub mod ensemble;
pub mod provider;

pub use ensemble::*;
pub use provider::*;

/// A fitted, read-only regression model.
///
/// Implementations must be pure: the same matrix always yields the same values
/// and no call mutates the model.
pub trait Predictor: Send + Sync {
    /// Model identifier for logs and headers.
    fn name(&self) -> &str;

    /// Feature columns the model was trained on, in order.
    fn feature_names(&self) -> &[String];

    /// Predict one value per matrix row.
    fn predict(&self, features: &DMatrix<f64>) -> Result<Vec<f64>, ForecastError>;
}
