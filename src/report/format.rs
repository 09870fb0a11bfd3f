//! Terminal formatting for KPI panels and forecast tables.

use crate::domain::{AggregationMode, ForecastSeries, KpiSet, TimeRange};
use crate::io::TIMESTAMP_FORMAT;

/// Run header: range, resolution, model.
pub fn format_run_header(range: &TimeRange, mode: AggregationMode, model_name: &str, points: usize) -> String {
    let mut out = String::new();
    out.push_str("=== gridcast - UK Electricity Generation Forecast ===\n");
    out.push_str(&format!(
        "Range: {} .. {} ({} days, {points} half-hourly points)\n",
        range.start,
        range.end,
        range.days()
    ));
    out.push_str(&format!("View: {}\n", mode.display_name()));
    out.push_str(&format!("Model: {model_name}\n"));
    out
}

/// Key performance indicators, one per line.
pub fn format_kpis(kpis: &KpiSet) -> String {
    let mut out = String::new();
    out.push_str("Key Performance Indicators:\n");
    out.push_str(&format!("  Avg Generation  {:>12} MW\n", fmt_thousands(kpis.average, 0)));
    out.push_str(&format!(
        "  Peak Demand     {:>12} MW   ({} variance)\n",
        fmt_thousands(kpis.peak, 0),
        fmt_signed_thousands(kpis.peak_variance())
    ));
    out.push_str(&format!(
        "  Total Volume    {:>12} GWh\n",
        fmt_thousands(kpis.total_energy_gwh, 2)
    ));
    out.push_str(&format!("  Baseload Min    {:>12} MW\n", fmt_thousands(kpis.minimum, 0)));
    out
}

/// Tabulate a (possibly aggregated) series.
///
/// `max_rows = 0` prints every row; otherwise the head is printed followed by a
/// count of the elided rows.
pub fn format_series_table(series: &ForecastSeries, mode: AggregationMode, max_rows: usize) -> String {
    let mut out = String::new();
    let value_header = format!("forecast {}", mode.value_label());
    out.push_str(&format!("{:<19}  {:>16}\n", "timestamp", value_header));
    out.push_str(&format!("{:-<19}  {:-<16}\n", "", ""));

    let limit = if max_rows == 0 { series.len() } else { max_rows.min(series.len()) };
    for p in &series.points()[..limit] {
        out.push_str(&format!(
            "{:<19}  {:>16}\n",
            p.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            fmt_thousands(p.value_mw, 1)
        ));
    }
    if limit < series.len() {
        out.push_str(&format!("... {} more rows\n", series.len() - limit));
    }
    out
}

/// Format with `,` thousands separators (`27,431.5`).
pub fn fmt_thousands(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let raw = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = v < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// [`fmt_thousands`] with no decimals and an explicit `+` for positive values.
pub fn fmt_signed_thousands(v: f64) -> String {
    if v > 0.0 {
        format!("+{}", fmt_thousands(v, 0))
    } else {
        fmt_thousands(v, 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::ForecastPoint;

    #[test]
    fn thousands_grouping() {
        assert_eq!(fmt_thousands(0.0, 0), "0");
        assert_eq!(fmt_thousands(999.0, 0), "999");
        assert_eq!(fmt_thousands(1000.0, 0), "1,000");
        assert_eq!(fmt_thousands(27431.46, 1), "27,431.5");
        assert_eq!(fmt_thousands(-1234567.0, 0), "-1,234,567");
        assert_eq!(fmt_thousands(48.0, 2), "48.00");
        assert_eq!(fmt_thousands(-0.2, 0), "0");
    }

    #[test]
    fn kpi_panel_mentions_every_indicator() {
        let text = format_kpis(&KpiSet {
            average: 25_000.0,
            peak: 31_000.0,
            total_energy_gwh: 1_200.0,
            minimum: 18_000.0,
        });
        assert!(text.contains("25,000 MW"));
        assert!(text.contains("31,000 MW"));
        assert!(text.contains("+6,000 variance"));
        assert!(text.contains("1,200.00 GWh"));
        assert!(text.contains("18,000 MW"));
    }

    #[test]
    fn table_elides_tail() {
        let t0 = NaiveDate::from_ymd_opt(2026, 2, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let series = ForecastSeries::new(
            (0..10)
                .map(|i| ForecastPoint {
                    timestamp: t0 + chrono::Duration::minutes(30 * i),
                    value_mw: 1000.0,
                })
                .collect(),
        );
        let text = format_series_table(&series, AggregationMode::HalfHourly, 3);
        assert!(text.contains("2026-02-15 00:00:00"));
        assert!(text.contains("2026-02-15 01:00:00"));
        assert!(!text.contains("2026-02-15 01:30:00"));
        assert!(text.contains("... 7 more rows"));
    }
}
