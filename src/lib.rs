//! `grid-forecast` library crate.
//!
//! Half-hourly UK electricity generation forecasting from calendar features.
//! The binary (`gridcast`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the pipeline is shared between the one-shot CLI and the dashboard
//!
//! Pipeline: [`calendar`] grid -> [`features`] -> [`forecast`] (via a
//! [`model::Predictor`]) -> [`aggregate`] for display, [`report`] for KPIs,
//! [`io`] for CSV export.

pub mod aggregate;
pub mod app;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod forecast;
pub mod io;
pub mod model;
pub mod plot;
pub mod report;
pub mod tui;
