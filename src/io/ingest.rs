//! Read an exported forecast CSV back into a series.
//!
//! Only the `timestamp` and `forecast_mw` columns are required; any other
//! columns (such as the calendar features written by the exporter) are ignored.
//! Unlike a general-purpose ingest this is strict: any malformed row fails the
//! whole read, since a partially-read forecast is not a forecast.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::domain::{ForecastPoint, ForecastSeries};
use crate::error::AppError;
use crate::io::{TIMESTAMP_COLUMN, TIMESTAMP_FORMAT, VALUE_COLUMN};

/// Read a forecast CSV from disk.
pub fn read_csv(path: &Path) -> Result<ForecastSeries, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    parse_reader(file)
}

/// Parse forecast CSV bytes (e.g. the output of [`crate::io::to_csv`]).
pub fn parse_csv(bytes: &[u8]) -> Result<ForecastSeries, AppError> {
    parse_reader(bytes)
}

fn parse_reader<R: Read>(source: R) -> Result<ForecastSeries, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let ts_idx = column(&header_map, TIMESTAMP_COLUMN)?;
    let value_idx = column(&header_map, VALUE_COLUMN)?;

    let mut points: Vec<ForecastPoint> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header and CSV lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| AppError::new(2, format!("CSV parse error on line {line}: {e}")))?;

        let point = parse_row(&record, ts_idx, value_idx).map_err(|e| AppError::new(2, format!("Line {line}: {e}")))?;
        if let Some(prev) = points.last() {
            if point.timestamp <= prev.timestamp {
                return Err(AppError::new(
                    2,
                    format!("Line {line}: timestamps must be strictly increasing"),
                ));
            }
        }
        points.push(point);
    }

    Ok(ForecastSeries::new(points))
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet tools sometimes prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::new(2, format!("Missing required column: `{name}`")))
}

fn parse_row(record: &StringRecord, ts_idx: usize, value_idx: usize) -> Result<ForecastPoint, String> {
    let ts_raw = record
        .get(ts_idx)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{TIMESTAMP_COLUMN}`"))?;
    let value_raw = record
        .get(value_idx)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{VALUE_COLUMN}`"))?;

    let timestamp = NaiveDateTime::parse_from_str(ts_raw, TIMESTAMP_FORMAT)
        .map_err(|e| format!("Invalid timestamp '{ts_raw}': {e}"))?;
    let value_mw = value_raw
        .parse::<f64>()
        .map_err(|e| format!("Invalid forecast value '{value_raw}': {e}"))?;

    Ok(ForecastPoint { timestamp, value_mw })
}
