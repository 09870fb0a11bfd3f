//! Series reduction for display.
//!
//! The native half-hourly series can be viewed as-is, as one mean value per
//! calendar day, or as one summed value per ISO week.

pub mod resample;

pub use resample::*;
