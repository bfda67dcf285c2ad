//! Zero command implementation.
//!
//! Builds one curve per observation date and samples its zero-coupon rates
//! every 30 business days out to 20 years.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use tenor_core::types::Date;
use tenor_curves::sweep::{default_offsets, sweep, sweep_parallel, zero_curve, FailurePolicy, ZeroPoint};
use tenor_curves::{CurveError, CurveResult};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::config::CurveSetup;
use crate::data::QuoteTable;
use crate::error::CliError;
use crate::output::{print_output, print_warning};

/// Arguments for the zero command.
#[derive(Args, Debug)]
pub struct ZeroArgs {
    /// CSV of quotes in percent; first column `date`, one column per label
    #[arg(long)]
    pub quotes: PathBuf,

    /// TOML curve setup. Defaults to a USD Libor deposit and swap curve.
    #[arg(short, long)]
    pub setup: Option<PathBuf>,

    /// First observation date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last observation date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Use every Nth observation date
    #[arg(long, default_value_t = 1)]
    pub every: usize,

    /// What to do when a date cannot be bootstrapped
    #[arg(long, value_enum, default_value = "skip")]
    pub on_error: PolicyChoice,

    /// Build curves concurrently
    #[arg(long)]
    pub parallel: bool,
}

/// Failure policy choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PolicyChoice {
    /// Log the failed date and carry on
    #[default]
    Skip,
    /// Stop at the first failed date
    Fail,
}

impl From<PolicyChoice> for FailurePolicy {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::Skip => FailurePolicy::Skip,
            PolicyChoice::Fail => FailurePolicy::Propagate,
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct ZeroRow {
    #[tabled(rename = "Observation")]
    observation: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Zero Rate (%)")]
    zero_rate: String,
}

/// Execute the zero command.
pub fn execute(args: ZeroArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    if args.every == 0 {
        return Err(CliError::Config("--every must be at least 1".to_string()).into());
    }
    let setup = CurveSetup::load(args.setup.as_deref())?;
    let table = QuoteTable::from_path(&args.quotes)?;

    let from = args.from.as_deref().map(parse_date).transpose()?;
    let to = args.to.as_deref().map(parse_date).transpose()?;
    let observations: Vec<Date> = table
        .dates()
        .into_iter()
        .filter(|d| from.map_or(true, |f| *d >= f) && to.map_or(true, |t| *d <= t))
        .step_by(args.every)
        .collect();
    info!(dates = observations.len(), parallel = args.parallel, "building zero curves");

    let build = |obs: Date| -> CurveResult<Vec<ZeroPoint>> {
        let row = table
            .row(obs)
            .ok_or_else(|| CurveError::invalid_helper(format!("no quotes for {obs}")))?;
        let curve = setup.build_curve(obs, &row)?;
        zero_curve(&curve, obs, &setup.calendar, default_offsets())
    };
    let policy = args.on_error.into();
    let result = if args.parallel {
        sweep_parallel(&observations, build, policy)?
    } else {
        sweep(&observations, build, policy)?
    };

    let rows: Vec<ZeroRow> = result
        .successes
        .iter()
        .flat_map(|(obs, points)| {
            points.iter().map(move |p| ZeroRow {
                observation: obs.to_string(),
                date: p.date.to_string(),
                time: format!("{:.6}", p.time),
                zero_rate: format!("{:.6}", p.zero_rate * 100.0),
            })
        })
        .collect();
    print_output(&rows, format)?;

    if !quiet && !result.skipped.is_empty() {
        let dates: Vec<String> = result.skipped_dates().iter().map(ToString::to_string).collect();
        print_warning(&format!(
            "skipped {} observation date(s): {}",
            dates.len(),
            dates.join(", ")
        ));
    }

    Ok(())
}
