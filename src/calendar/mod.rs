//! Calendar helpers.
//!
//! All timestamps are naive wall-clock values on a single local calendar; no
//! timezone conversion happens anywhere in the crate.

pub mod grid;

pub use grid::*;
