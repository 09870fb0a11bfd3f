//! Command-line parsing for the half-hourly generation forecaster.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the forecasting code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::AggregationMode;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gridcast", version, about = "UK Electricity Generation Forecast (half-hourly batch)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Forecast a date range, print KPIs and the table, and optionally plot/export.
    Forecast(ForecastArgs),
    /// Plot a previously exported forecast CSV.
    Plot(PlotArgs),
    /// Launch the interactive dashboard.
    ///
    /// This uses the same underlying pipeline as `gridcast forecast`, but renders
    /// results in a terminal UI using Ratatui.
    Tui(TuiArgs),
}

/// Options for a one-shot forecast.
#[derive(Debug, Parser, Clone)]
pub struct ForecastArgs {
    /// First day of the observation window (YYYY-MM-DD).
    #[arg(short = 's', long)]
    pub start: Option<NaiveDate>,

    /// Last day of the observation window, inclusive (YYYY-MM-DD).
    #[arg(short = 'e', long)]
    pub end: Option<NaiveDate>,

    /// How the printed table and plot are aggregated.
    #[arg(short = 'a', long = "agg", value_enum, default_value_t = AggregationMode::HalfHourly)]
    pub agg: AggregationMode,

    /// Model artifact (overrides GRIDCAST_MODEL).
    #[arg(long, value_name = "JSON")]
    pub model: Option<PathBuf>,

    /// Max table rows to print (0 = all).
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the half-hourly forecast to this CSV path.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export into this directory under the suggested `UK_Grid_Forecast_<start>.csv` name.
    #[arg(long = "export-dir", conflicts_with = "export")]
    pub export_dir: Option<PathBuf>,
}

/// Options for plotting a saved forecast.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Forecast CSV produced by `gridcast forecast --export`. Prompts when omitted.
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Aggregate before plotting.
    #[arg(short = 'a', long = "agg", value_enum, default_value_t = AggregationMode::HalfHourly)]
    pub agg: AggregationMode,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Options for the dashboard.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Initial start date (YYYY-MM-DD).
    #[arg(short = 's', long)]
    pub start: Option<NaiveDate>,

    /// Initial end date (YYYY-MM-DD).
    #[arg(short = 'e', long)]
    pub end: Option<NaiveDate>,

    /// Initial aggregation mode.
    #[arg(short = 'a', long = "agg", value_enum, default_value_t = AggregationMode::HalfHourly)]
    pub agg: AggregationMode,

    /// Model artifact (overrides GRIDCAST_MODEL).
    #[arg(long, value_name = "JSON")]
    pub model: Option<PathBuf>,
}
