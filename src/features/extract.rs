//! Feature rows and the design matrix handed to predictors.

use chrono::{Datelike, NaiveDateTime, Timelike};
use nalgebra::DMatrix;

use crate::domain::{FEATURE_COLUMNS, FeatureRow, FeatureTable, TimestampGrid};

/// Calendar features for a single timestamp.
pub fn feature_row(ts: NaiveDateTime) -> FeatureRow {
    FeatureRow {
        hour: ts.hour(),
        dayofweek: ts.weekday().num_days_from_monday(),
        month: ts.month(),
        year: ts.year(),
    }
}

/// One feature row per grid timestamp, in grid order.
pub fn extract_features(grid: &TimestampGrid) -> FeatureTable {
    FeatureTable {
        columns: FEATURE_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        rows: grid.as_slice().iter().map(|&ts| feature_row(ts)).collect(),
    }
}

/// Fill a design row in `FEATURE_COLUMNS` order.
///
/// # Panics
/// Panics if `out` is shorter than `FEATURE_COLUMNS.len()`.
pub fn fill_feature_row(row: &FeatureRow, out: &mut [f64]) {
    out[0] = f64::from(row.hour);
    out[1] = f64::from(row.dayofweek);
    out[2] = f64::from(row.month);
    out[3] = f64::from(row.year);
}

/// Lay the table out as an `n x 4` matrix (rows = timestamps).
pub fn feature_matrix(table: &FeatureTable) -> DMatrix<f64> {
    let p = FEATURE_COLUMNS.len();
    let mut data = vec![0.0; table.len() * p];
    for (row, chunk) in table.rows.iter().zip(data.chunks_mut(p)) {
        fill_feature_row(row, chunk);
    }
    DMatrix::from_row_slice(table.len(), p, &data)
}
