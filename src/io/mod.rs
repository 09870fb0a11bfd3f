//! Input/output helpers.
//!
//! - forecast CSV export (`export`)
//! - forecast CSV ingest, the inverse of the export (`ingest`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;

/// Timestamp layout used in every CSV and table we emit.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header of the timestamp column.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Header of the forecast value column.
pub const VALUE_COLUMN: &str = "forecast_mw";
