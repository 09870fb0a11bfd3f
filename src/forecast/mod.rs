//! Forecast orchestration.
//!
//! Responsibilities:
//!
//! - check the feature table against the predictor's schema
//! - run the predictor once over the whole batch
//! - zip the predictions back onto the timestamp grid

pub mod engine;

pub use engine::*;
