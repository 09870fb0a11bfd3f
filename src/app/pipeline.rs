//! Shared "forecast pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! range validation -> timestamp grid -> features -> predict -> aggregate -> KPIs
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use chrono::NaiveDate;

use crate::domain::{AggregationMode, ForecastSeries, KpiSet, TimeRange};
use crate::error::ForecastError;
use crate::model::{ModelProvider, Predictor};

/// What the user asked for, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastRequest {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub mode: AggregationMode,
}

/// All computed outputs of a single forecast run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub range: TimeRange,
    pub mode: AggregationMode,
    pub model_name: String,
    /// Native half-hourly forecast (what KPIs and exports use).
    pub series: ForecastSeries,
    /// `series` reduced according to `mode` (what tables and charts show).
    pub view: ForecastSeries,
    pub kpis: KpiSet,
    /// Suggested export filename for this run.
    pub filename: String,
}

impl RunOutput {
    /// CSV bytes of the native series.
    pub fn csv(&self) -> Vec<u8> {
        crate::io::to_csv(&self.series)
    }

    /// Switch the display aggregation without re-running the model.
    pub fn with_mode(mut self, mode: AggregationMode) -> Self {
        self.view = crate::aggregate::aggregate(&self.series, mode);
        self.mode = mode;
        self
    }
}

/// Execute the full pipeline, loading the model on first use.
///
/// The range is validated before the provider is touched, so an incomplete or
/// inverted range never triggers a model load.
pub fn run_forecast(request: &ForecastRequest, provider: &ModelProvider) -> Result<RunOutput, ForecastError> {
    let range = TimeRange::from_parts(request.start, request.end)?;
    let predictor = provider.get()?;
    run_forecast_with(range, request.mode, predictor.as_ref())
}

/// Execute the pipeline against an already-available predictor.
pub fn run_forecast_with(
    range: TimeRange,
    mode: AggregationMode,
    predictor: &dyn Predictor,
) -> Result<RunOutput, ForecastError> {
    let span = tracing::info_span!("forecast", start = %range.start, end = %range.end, ?mode);
    let _enter = span.enter();

    let grid = crate::calendar::generate_grid(&range)?;
    let features = crate::features::extract_features(&grid);
    let series = crate::forecast::forecast(&grid, &features, predictor)?;
    let kpis = crate::report::summarize(&series)?;
    let view = crate::aggregate::aggregate(&series, mode);

    tracing::info!(
        points = series.len(),
        view_points = view.len(),
        peak = kpis.peak,
        "run complete"
    );

    Ok(RunOutput {
        filename: crate::io::suggested_filename(&range),
        model_name: predictor.name().to_string(),
        range,
        mode,
        series,
        view,
        kpis,
    })
}

#[cfg(test)]
mod tests {
    use nalgebra::DMatrix;

    use super::*;

    struct Flat(Vec<String>);

    impl Predictor for Flat {
        fn name(&self) -> &str {
            "flat"
        }

        fn feature_names(&self) -> &[String] {
            &self.0
        }

        fn predict(&self, features: &DMatrix<f64>) -> Result<Vec<f64>, ForecastError> {
            Ok(vec![500.0; features.nrows()])
        }
    }

    fn flat() -> Flat {
        Flat(crate::domain::FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect())
    }

    fn range() -> TimeRange {
        TimeRange::new(
            NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn view_follows_mode_but_kpis_do_not() {
        let run = run_forecast_with(range(), AggregationMode::DailyAverage, &flat()).unwrap();
        assert_eq!(run.series.len(), 4 * 48);
        assert_eq!(run.view.len(), 4);
        assert_eq!(run.kpis.total_energy_gwh, 500.0 * 192.0 * 0.5 / 1000.0);
        assert_eq!(run.filename, "UK_Grid_Forecast_2026-02-15.csv");
        // Export carries the native series regardless of the view.
        assert_eq!(crate::io::parse_csv(&run.csv()).unwrap(), run.series);
    }

    #[test]
    fn with_mode_reaggregates_view_only() {
        let run = run_forecast_with(range(), AggregationMode::HalfHourly, &flat()).unwrap();
        let kpis = run.kpis;
        let weekly = run.with_mode(AggregationMode::WeeklySum);
        assert_eq!(weekly.mode, AggregationMode::WeeklySum);
        // 2026-02-15 is a Sunday, so the range spans two ISO weeks.
        assert_eq!(weekly.view.len(), 2);
        assert_eq!(weekly.series.len(), 192);
        assert_eq!(weekly.kpis, kpis);
    }
}
