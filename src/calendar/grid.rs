//! Half-hourly timestamp grid generation.
//!
//! A range of whole days expands to `48 * days` timestamps, the first at
//! `start 00:00` and the last at `end 23:30`.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::domain::{SLOT_MINUTES, SLOTS_PER_DAY, TimeRange, TimestampGrid};
use crate::error::ForecastError;

/// Expand a date range into its half-hourly timestamp grid.
pub fn generate_grid(range: &TimeRange) -> Result<TimestampGrid, ForecastError> {
    range.validate()?;

    let n = range.days() * SLOTS_PER_DAY;
    let origin = NaiveDateTime::new(range.start, NaiveTime::MIN);
    let step = Duration::minutes(SLOT_MINUTES);

    // Each slot is offset from the origin, so nothing steps past `end 23:30`.
    let timestamps = (0..n)
        .map(|i| {
            i32::try_from(i)
                .ok()
                .and_then(|i| origin.checked_add_signed(step * i))
                .ok_or_else(|| {
                    ForecastError::InvalidRange(format!(
                        "{} .. {} is outside the supported calendar",
                        range.start, range.end
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        start = %range.start,
        end = %range.end,
        points = timestamps.len(),
        "generated timestamp grid"
    );

    Ok(TimestampGrid { timestamps })
}
