//! Batch prediction over a timestamp grid.

use crate::domain::{FeatureTable, ForecastPoint, ForecastSeries, TimestampGrid};
use crate::error::ForecastError;
use crate::features::feature_matrix;
use crate::model::Predictor;

/// Predict every grid timestamp in a single predictor call.
///
/// The series is only returned when the predictor produced exactly one value
/// per row; a short or long answer is an error, never truncated or padded.
pub fn forecast(
    grid: &TimestampGrid,
    features: &FeatureTable,
    predictor: &dyn Predictor,
) -> Result<ForecastSeries, ForecastError> {
    if features.len() != grid.len() {
        return Err(ForecastError::Prediction(format!(
            "feature table has {} rows but the grid has {} timestamps",
            features.len(),
            grid.len()
        )));
    }

    check_schema(&features.columns, predictor)?;

    let matrix = feature_matrix(features);
    let values = predictor.predict(&matrix)?;

    if values.len() != grid.len() {
        return Err(ForecastError::Prediction(format!(
            "{} returned {} values for {} rows",
            predictor.name(),
            values.len(),
            grid.len()
        )));
    }

    tracing::debug!(model = predictor.name(), points = values.len(), "forecast complete");

    let points = grid
        .as_slice()
        .iter()
        .zip(values)
        .map(|(&timestamp, value_mw)| ForecastPoint { timestamp, value_mw })
        .collect();
    Ok(ForecastSeries::new(points))
}

fn check_schema(columns: &[String], predictor: &dyn Predictor) -> Result<(), ForecastError> {
    let expected = predictor.feature_names();
    if columns != expected {
        return Err(ForecastError::Prediction(format!(
            "{} expects features [{}], got [{}]",
            predictor.name(),
            expected.join(", "),
            columns.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::NaiveDate;
    use nalgebra::DMatrix;

    use super::*;
    use crate::calendar::generate_grid;
    use crate::domain::{FEATURE_COLUMNS, TimeRange};
    use crate::features::extract_features;

    fn columns() -> Vec<String> {
        FEATURE_COLUMNS.iter().map(|c| (*c).to_string()).collect()
    }

    /// Returns `hour * 100 + dayofweek` so ordering mistakes are visible.
    struct HourEcho {
        columns: Vec<String>,
    }

    impl Predictor for HourEcho {
        fn name(&self) -> &str {
            "hour-echo"
        }

        fn feature_names(&self) -> &[String] {
            &self.columns
        }

        fn predict(&self, x: &DMatrix<f64>) -> Result<Vec<f64>, ForecastError> {
            Ok((0..x.nrows()).map(|i| x[(i, 0)] * 100.0 + x[(i, 1)]).collect())
        }
    }

    struct Truncating {
        columns: Vec<String>,
    }

    impl Predictor for Truncating {
        fn name(&self) -> &str {
            "truncating"
        }

        fn feature_names(&self) -> &[String] {
            &self.columns
        }

        fn predict(&self, x: &DMatrix<f64>) -> Result<Vec<f64>, ForecastError> {
            Ok(vec![0.0; x.nrows().saturating_sub(1)])
        }
    }

    struct CountingCalls {
        columns: Vec<String>,
        calls: AtomicUsize,
    }

    impl Predictor for CountingCalls {
        fn name(&self) -> &str {
            "counting"
        }

        fn feature_names(&self) -> &[String] {
            &self.columns
        }

        fn predict(&self, x: &DMatrix<f64>) -> Result<Vec<f64>, ForecastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0.0; x.nrows()])
        }
    }

    fn two_day_grid() -> TimestampGrid {
        generate_grid(
            &TimeRange::new(
                NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
                NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
            )
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn preserves_order_and_count() {
        let grid = two_day_grid();
        let features = extract_features(&grid);
        let series = forecast(&grid, &features, &HourEcho { columns: columns() }).unwrap();

        assert_eq!(series.len(), grid.len());
        assert!(series.timestamps().eq(grid.as_slice().iter().copied()));
        let values: Vec<f64> = series.values().collect();
        // 2026-02-15 is a Sunday, 2026-02-16 a Monday.
        assert_eq!(values[0], 6.0);
        assert_eq!(values[3], 106.0);
        assert_eq!(values[48], 0.0);
        assert_eq!(values[95], 2300.0);
    }

    #[test]
    fn predictor_called_once_per_batch() {
        let grid = two_day_grid();
        let features = extract_features(&grid);
        let p = CountingCalls {
            columns: columns(),
            calls: AtomicUsize::new(0),
        };
        forecast(&grid, &features, &p).unwrap();
        assert_eq!(p.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let grid = two_day_grid();
        let features = extract_features(&grid);
        let err = forecast(&grid, &features, &Truncating { columns: columns() }).unwrap_err();
        assert!(matches!(err, ForecastError::Prediction(_)));
    }

    #[test]
    fn schema_mismatch_is_rejected() {
        let grid = two_day_grid();
        let features = extract_features(&grid);
        let reordered = vec![
            "dayofweek".to_string(),
            "hour".to_string(),
            "month".to_string(),
            "year".to_string(),
        ];
        let err = forecast(&grid, &features, &HourEcho { columns: reordered }).unwrap_err();
        assert!(matches!(err, ForecastError::Prediction(_)));

        let short = columns()[..3].to_vec();
        assert!(forecast(&grid, &features, &HourEcho { columns: short }).is_err());
    }
}
