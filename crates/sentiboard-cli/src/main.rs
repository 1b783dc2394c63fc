use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use sentiboard_cli::charts::ChartId;
use sentiboard_cli::error_codes;
use sentiboard_cli::formats;
use sentiboard_cli::runtime::{DashboardRuntime, RuntimeError, RuntimeOptions};
use sentiboard_core::config::OutputFormat;
use sentiboard_core::constants::DEFAULT_DATE_FORMAT;
use sentiboard_core::tracing_setup::init_tracing;

/// Review dashboard: sentiment and topic charts over a date range.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Labeled reviews CSV (overrides `[data] path`)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Config file (default: <root>/sentiboard.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project root used to find the config and default data file
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// First day of the selection, YYYY-MM-DD (default: earliest review)
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Last day of the selection, YYYY-MM-DD (default: latest review)
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,

    /// Output format: text, json, or yaml (overrides `[output] format`)
    #[arg(short, long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Only render this chart; repeat for several
    #[arg(long = "chart", value_enum)]
    charts: Vec<ChartId>,

    /// Width of text bars (overrides `[output] bar_width`)
    #[arg(long)]
    bar_width: Option<usize>,

    /// Log level when SENTIBOARD_LOG and RUST_LOG are unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DEFAULT_DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD, got '{s}': {e}"))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn run(args: Args) -> Result<()> {
    let runtime = DashboardRuntime::new(RuntimeOptions {
        data_path: args.data,
        project_root: Some(args.root),
        config_path: args.config,
        config_toml: None,
    })?;

    let range = runtime.resolve_range(args.from, args.to);
    let report = runtime.render(range, &args.charts);

    let output = &runtime.config.output;
    let format = args.format.unwrap_or_else(|| output.effective_format());
    let bar_width = args
        .bar_width
        .map(|w| w.clamp(1, 200))
        .unwrap_or_else(|| output.effective_bar_width());

    let rendered = formats::render(&report, format, bar_width).map_err(RuntimeError::from)?;
    println!("{rendered}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args).context("dashboard failed") {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<RuntimeError>()
                .map(RuntimeError::code)
                .unwrap_or("INTERNAL_ERROR");
            eprintln!("[{code}] {err:#}");
            ExitCode::from(error_codes::exit_code(code))
        }
    }
}
