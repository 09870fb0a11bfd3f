//! Summary statistics over a native half-hourly forecast.

use crate::domain::{ForecastSeries, KpiSet, SLOT_HOURS};
use crate::error::ForecastError;

/// MWh -> GWh.
const MWH_PER_GWH: f64 = 1000.0;

/// Compute average, peak, minimum, and total energy.
///
/// Each point is treated as constant power over its 30-minute slot, so the
/// energy is `Σ MW * 0.5 h / 1000`. Pass the native series, not an aggregated
/// view: the energy factor assumes half-hourly spacing.
pub fn summarize(series: &ForecastSeries) -> Result<KpiSet, ForecastError> {
    if series.is_empty() {
        return Err(ForecastError::EmptySeries(
            "cannot compute KPIs over zero points".to_string(),
        ));
    }

    let mut sum = 0.0;
    let mut peak = f64::NEG_INFINITY;
    let mut minimum = f64::INFINITY;
    for v in series.values() {
        sum += v;
        peak = peak.max(v);
        minimum = minimum.min(v);
    }

    let kpis = KpiSet {
        average: sum / series.len() as f64,
        peak,
        total_energy_gwh: sum * SLOT_HOURS / MWH_PER_GWH,
        minimum,
    };
    tracing::debug!(?kpis, "computed KPIs");
    Ok(kpis)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::domain::ForecastPoint;

    fn series(values: &[f64]) -> ForecastSeries {
        let t0 = NaiveDate::from_ymd_opt(2026, 2, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ForecastSeries::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &value_mw)| ForecastPoint {
                    timestamp: t0 + chrono::Duration::minutes(30 * i as i64),
                    value_mw,
                })
                .collect(),
        )
    }

    #[test]
    fn constant_series() {
        let kpis = summarize(&series(&[1000.0; 96])).unwrap();
        assert_eq!(kpis.average, 1000.0);
        assert_eq!(kpis.peak, 1000.0);
        assert_eq!(kpis.minimum, 1000.0);
        assert!((kpis.total_energy_gwh - 48.0).abs() < 1e-9);
        assert_eq!(kpis.peak_variance(), 0.0);
    }

    #[test]
    fn negative_values_are_not_clamped() {
        let kpis = summarize(&series(&[-50.0, 10.0, 40.0])).unwrap();
        assert_eq!(kpis.minimum, -50.0);
        assert_eq!(kpis.peak, 40.0);
        assert!(kpis.average.abs() < 1e-12);
        assert!(kpis.total_energy_gwh.abs() < 1e-12);
    }

    #[test]
    fn empty_series_is_an_error() {
        let err = summarize(&ForecastSeries::default()).unwrap_err();
        assert!(matches!(err, ForecastError::EmptySeries(_)));
    }

    #[test]
    fn identities_hold_for_random_series() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(1..500);
            let values: Vec<f64> = (0..n).map(|_| rng.gen_range(-5_000.0..45_000.0)).collect();
            let kpis = summarize(&series(&values)).unwrap();

            assert!(kpis.minimum <= kpis.average + 1e-9);
            assert!(kpis.average <= kpis.peak + 1e-9);

            let expected = values.iter().sum::<f64>() * 0.5 / 1000.0;
            assert!((kpis.total_energy_gwh - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
