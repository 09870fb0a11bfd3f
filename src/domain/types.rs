//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - passed between pipeline stages without copying more than needed
//! - exported to CSV
//! - rendered by the CLI and the TUI

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;

use crate::error::ForecastError;

/// Half-hourly settlement periods per calendar day.
pub const SLOTS_PER_DAY: usize = 48;

/// Spacing between consecutive grid timestamps.
pub const SLOT_MINUTES: i64 = 30;

/// Duration of one settlement period in hours (MW -> MWh factor).
pub const SLOT_HOURS: f64 = 0.5;

/// Inclusive range of whole calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ForecastError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Build a range from possibly-missing user inputs.
    ///
    /// Both dates are required; a half-filled date picker is rejected the same
    /// way as an inverted range.
    pub fn from_parts(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, ForecastError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (Some(_), None) => Err(ForecastError::InvalidRange(
                "end date is missing; select both a start and an end date".to_string(),
            )),
            (None, Some(_)) => Err(ForecastError::InvalidRange(
                "start date is missing; select both a start and an end date".to_string(),
            )),
            (None, None) => Err(ForecastError::InvalidRange(
                "no dates supplied; select both a start and an end date".to_string(),
            )),
        }
    }

    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.start > self.end {
            return Err(ForecastError::InvalidRange(format!(
                "start {} is after end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Number of calendar days covered (both endpoints included).
    pub fn days(&self) -> usize {
        let span = (self.end - self.start).num_days();
        if span < 0 { 0 } else { span as usize + 1 }
    }
}

/// Ordered half-hourly timestamps covering a [`TimeRange`].
///
/// Only [`crate::calendar::generate_grid`] constructs non-empty grids, so the
/// spacing invariant holds for every grid in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimestampGrid {
    pub(crate) timestamps: Vec<NaiveDateTime>,
}

impl TimestampGrid {
    pub fn as_slice(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDateTime> {
        self.timestamps.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDateTime> {
        self.timestamps.last().copied()
    }
}

/// Calendar features for one grid timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRow {
    /// 0..=23
    pub hour: u32,
    /// 0 = Monday .. 6 = Sunday
    pub dayofweek: u32,
    /// 1..=12
    pub month: u32,
    pub year: i32,
}

/// Column order every predictor sees.
pub const FEATURE_COLUMNS: [&str; 4] = ["hour", "dayofweek", "month", "year"];

/// Feature rows plus the column names they are laid out under.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    pub columns: Vec<String>,
    pub rows: Vec<FeatureRow>,
}

impl FeatureTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One forecast value (MW) at one timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub value_mw: f64,
}

/// Time-ordered forecast values.
///
/// Values are kept exactly as the model produced them: negative or implausible
/// readings are not clamped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    /// Wrap points that are already in ascending timestamp order.
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        Self { points }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value_mw)
    }

    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.points.iter().map(|p| p.timestamp)
    }
}

/// How the displayed series is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AggregationMode {
    /// Native 30-minute resolution.
    #[default]
    HalfHourly,
    /// Mean of each calendar day.
    DailyAverage,
    /// Sum of each ISO week.
    WeeklySum,
}

impl AggregationMode {
    pub const ALL: [AggregationMode; 3] = [
        AggregationMode::HalfHourly,
        AggregationMode::DailyAverage,
        AggregationMode::WeeklySum,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            AggregationMode::HalfHourly => "Half-hourly (30m)",
            AggregationMode::DailyAverage => "Daily Average",
            AggregationMode::WeeklySum => "Weekly Sum",
        }
    }

    /// Unit of the aggregated values.
    pub fn value_label(self) -> &'static str {
        match self {
            AggregationMode::HalfHourly => "MW",
            AggregationMode::DailyAverage => "MW (mean)",
            AggregationMode::WeeklySum => "MW (sum)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            AggregationMode::HalfHourly => AggregationMode::DailyAverage,
            AggregationMode::DailyAverage => AggregationMode::WeeklySum,
            AggregationMode::WeeklySum => AggregationMode::HalfHourly,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AggregationMode::HalfHourly => AggregationMode::WeeklySum,
            AggregationMode::DailyAverage => AggregationMode::HalfHourly,
            AggregationMode::WeeklySum => AggregationMode::DailyAverage,
        }
    }
}

/// Summary statistics over the native half-hourly series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiSet {
    pub average: f64,
    pub peak: f64,
    pub total_energy_gwh: f64,
    pub minimum: f64,
}

impl KpiSet {
    /// Spread between the peak and the average (shown next to the peak).
    pub fn peak_variance(&self) -> f64 {
        self.peak - self.average
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment defaults).
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub range: TimeRange,
    pub mode: AggregationMode,
    pub model_path: PathBuf,

    /// Max table rows printed (0 = all).
    pub rows: usize,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export: Option<PathBuf>,
    /// Directory receiving the export under its suggested filename.
    pub export_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn range_counts_both_endpoints() {
        let r = TimeRange::new(d(2026, 2, 15), d(2026, 2, 16)).unwrap();
        assert_eq!(r.days(), 2);
        let single = TimeRange::new(d(2026, 2, 15), d(2026, 2, 15)).unwrap();
        assert_eq!(single.days(), 1);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = TimeRange::new(d(2026, 2, 16), d(2026, 2, 15)).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidRange(_)));
    }

    #[test]
    fn missing_end_is_rejected() {
        let err = TimeRange::from_parts(Some(d(2026, 2, 15)), None).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidRange(_)));
        assert!(TimeRange::from_parts(None, Some(d(2026, 2, 15))).is_err());
        assert!(TimeRange::from_parts(None, None).is_err());
    }

    #[test]
    fn aggregation_mode_cycles_through_all_variants() {
        let mut mode = AggregationMode::HalfHourly;
        for _ in 0..AggregationMode::ALL.len() {
            assert_eq!(mode.next().prev(), mode);
            mode = mode.next();
        }
        assert_eq!(mode, AggregationMode::HalfHourly);
    }
}
