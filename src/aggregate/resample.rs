//! Calendar-bucket resampling.
//!
//! Buckets are formed from consecutive points, which is correct because a
//! `ForecastSeries` is always in ascending time order and both bucket keys
//! (calendar date, ISO week) are monotone in time. Partial buckets at either end
//! of the range are reduced over whatever points they contain.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::{AggregationMode, ForecastPoint, ForecastSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reduce {
    Mean,
    Sum,
}

/// Reduce `series` according to `mode`.
pub fn aggregate(series: &ForecastSeries, mode: AggregationMode) -> ForecastSeries {
    let out = match mode {
        AggregationMode::HalfHourly => return series.clone(),
        AggregationMode::DailyAverage => resample(series, |ts| ts.date(), Reduce::Mean),
        AggregationMode::WeeklySum => resample(series, |ts| iso_week_start(ts.date()), Reduce::Sum),
    };
    tracing::debug!(
        mode = mode.display_name(),
        input = series.len(),
        output = out.len(),
        "aggregated series"
    );
    out
}

/// Monday of the ISO week containing `date`.
pub fn iso_week_start(date: NaiveDate) -> NaiveDate {
    // Dates before the first representable Monday keep their own date.
    date.checked_sub_signed(Duration::days(i64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(date)
}

/// Group consecutive points by `bucket` and stamp each group at its bucket's midnight.
fn resample<F>(series: &ForecastSeries, bucket: F, reduce: Reduce) -> ForecastSeries
where
    F: Fn(NaiveDateTime) -> NaiveDate,
{
    let mut out: Vec<ForecastPoint> = Vec::new();
    let mut current: Option<(NaiveDate, f64, usize)> = None;

    let flush = |key: NaiveDate, sum: f64, n: usize, out: &mut Vec<ForecastPoint>| {
        let value_mw = match reduce {
            Reduce::Mean => sum / n as f64,
            Reduce::Sum => sum,
        };
        out.push(ForecastPoint {
            timestamp: NaiveDateTime::new(key, NaiveTime::MIN),
            value_mw,
        });
    };

    for p in series.points() {
        let key = bucket(p.timestamp);
        current = match current {
            Some((k, sum, n)) if k == key => Some((k, sum + p.value_mw, n + 1)),
            Some((k, sum, n)) => {
                flush(k, sum, n, &mut out);
                Some((key, p.value_mw, 1))
            }
            None => Some((key, p.value_mw, 1)),
        };
    }
    if let Some((k, sum, n)) = current {
        flush(k, sum, n, &mut out);
    }

    ForecastSeries::new(out)
}
