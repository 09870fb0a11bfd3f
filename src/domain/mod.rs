//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - request inputs (`TimeRange`, `AggregationMode`)
//! - intermediate tables (`TimestampGrid`, `FeatureRow`, `FeatureTable`)
//! - outputs (`ForecastSeries`, `KpiSet`) and the resolved `ForecastConfig`

pub mod types;

pub use types::*;
