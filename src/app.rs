//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves environment configuration and installs logging
//! - runs the forecast pipeline
//! - prints reports/plots
//! - writes optional exports

use std::path::PathBuf;

use clap::Parser;

use crate::app::pipeline::ForecastRequest;
use crate::cli::{Command, ForecastArgs, PlotArgs, TuiArgs};
use crate::config::{EnvConfig, LogTarget};
use crate::domain::{ForecastConfig, TimeRange};
use crate::error::AppError;
use crate::model::ModelProvider;

pub mod pipeline;

/// Entry point for the `gridcast` binary.
pub fn run() -> Result<(), AppError> {
    let env = EnvConfig::from_env();

    // `gridcast` and `gridcast -s 2026-02-01` behave like `gridcast tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    // The dashboard owns the terminal, so its logs go nowhere.
    let target = match cli.command {
        Command::Tui(_) => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    crate::config::init_tracing(&env.log_filter, target);

    match cli.command {
        Command::Forecast(args) => handle_forecast(args, &env),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args, &env),
    }
}

fn handle_forecast(args: ForecastArgs, env: &EnvConfig) -> Result<(), AppError> {
    // Validate before anything touches the model artifact.
    let config = forecast_config_from_args(&args, env)?;
    let provider = ModelProvider::new(&config.model_path);

    let request = ForecastRequest {
        start: Some(config.range.start),
        end: Some(config.range.end),
        mode: config.mode,
    };
    let run = pipeline::run_forecast(&request, &provider)?;

    println!(
        "{}",
        crate::report::format_run_header(&run.range, run.mode, &run.model_name, run.series.len())
    );
    println!("{}", crate::report::format_kpis(&run.kpis));
    println!("{}", crate::report::format_series_table(&run.view, run.mode, config.rows));

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.view,
            run.mode.value_label(),
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export {
        crate::io::write_csv(path, &run.series)?;
        println!("Exported {} rows to {}", run.series.len(), path.display());
    }
    if let Some(dir) = &config.export_dir {
        let path = dir.join(&run.filename);
        crate::io::write_csv(&path, &run.series)?;
        println!("Exported {} rows to {}", run.series.len(), path.display());
    }

    Ok(())
}

fn handle_tui(args: TuiArgs, env: &EnvConfig) -> Result<(), AppError> {
    let model_path = args.model.clone().unwrap_or_else(|| env.model_path.clone());
    crate::tui::run(args, model_path)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let path = match &args.csv {
        Some(path) => crate::cli::picker::validate_csv_path(path)?,
        None => crate::cli::picker::prompt_for_forecast_csv()?,
    };
    let series = crate::io::read_csv(&path)?;
    let view = crate::aggregate::aggregate(&series, args.agg);

    let plot = crate::plot::render_ascii_plot(&view, args.agg.value_label(), args.width, args.height);
    println!("{plot}");
    Ok(())
}

/// Resolve CLI flags (plus environment defaults) into a validated config.
pub fn forecast_config_from_args(args: &ForecastArgs, env: &EnvConfig) -> Result<ForecastConfig, AppError> {
    let range = TimeRange::from_parts(args.start, args.end)?;
    let model_path: PathBuf = args.model.clone().unwrap_or_else(|| env.model_path.clone());

    Ok(ForecastConfig {
        range,
        mode: args.agg,
        model_path,
        rows: args.rows,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
        export_dir: args.export_dir.clone(),
    })
}

/// Rewrite argv so `gridcast` defaults to `gridcast tui`.
///
/// Rules:
/// - `gridcast`                       -> `gridcast tui`
/// - `gridcast -s 2026-02-01 ...`     -> `gridcast tui -s 2026-02-01 ...`
/// - `gridcast --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "forecast" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}
