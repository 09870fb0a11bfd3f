//! Export a forecast series to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts. Besides the timestamp and the forecast it carries the calendar
//! features the model saw, so a row can be traced back to its inputs.
//!
//! Values are written with Rust's shortest round-trip float formatting, so
//! reading the file back with [`crate::io::parse_csv`] reproduces every value
//! bit for bit.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{ForecastSeries, TimeRange};
use crate::error::AppError;
use crate::features::feature_row;
use crate::io::{TIMESTAMP_COLUMN, TIMESTAMP_FORMAT, VALUE_COLUMN};

/// Download name offered to the user: `UK_Grid_Forecast_<start-date>.csv`.
pub fn suggested_filename(range: &TimeRange) -> String {
    format!("UK_Grid_Forecast_{}.csv", range.start.format("%Y-%m-%d"))
}

/// Serialize `series` into CSV bytes (header row included).
pub fn to_csv(series: &ForecastSeries) -> Vec<u8> {
    let mut out = Vec::with_capacity(64 * (series.len() + 1));
    // Writing into a Vec cannot fail.
    let _ = write_rows(&mut out, series);
    out
}

/// Write `series` as CSV to `path`.
pub fn write_csv(path: &Path, series: &ForecastSeries) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_rows(&mut file, series)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), rows = series.len(), "wrote forecast CSV");
    Ok(())
}

fn write_rows<W: Write>(w: &mut W, series: &ForecastSeries) -> std::io::Result<()> {
    writeln!(w, "{TIMESTAMP_COLUMN},hour,dayofweek,month,year,{VALUE_COLUMN}")?;
    for p in series.points() {
        let f = feature_row(p.timestamp);
        writeln!(
            w,
            "{},{},{},{},{},{}",
            p.timestamp.format(TIMESTAMP_FORMAT),
            f.hour,
            f.dayofweek,
            f.month,
            f.year,
            p.value_mw,
        )?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::ForecastPoint;

    fn sample() -> ForecastSeries {
        let t0 = NaiveDate::from_ymd_opt(2026, 2, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ForecastSeries::new(vec![
            ForecastPoint {
                timestamp: t0,
                value_mw: 27_431.123_456_789,
            },
            ForecastPoint {
                timestamp: t0 + chrono::Duration::minutes(30),
                value_mw: -0.1,
            },
        ])
    }

    #[test]
    fn header_and_rows() {
        let text = String::from_utf8(to_csv(&sample())).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "timestamp,hour,dayofweek,month,year,forecast_mw");
        assert_eq!(lines[1], "2026-02-15 00:00:00,0,6,2,2026,27431.123456789");
        assert_eq!(lines[2], "2026-02-15 00:30:00,0,6,2,2026,-0.1");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn filename_uses_start_date() {
        let range = TimeRange::new(
            NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
        )
        .unwrap();
        assert_eq!(suggested_filename(&range), "UK_Grid_Forecast_2026-02-15.csv");
    }

    #[test]
    fn writes_file_with_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &sample()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), to_csv(&sample()));
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.csv");
        let err = write_csv(&path, &sample()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
