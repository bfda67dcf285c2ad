//! Build command implementation.
//!
//! Bootstraps the curve for a single observation date and reports each
//! node with its repricing error.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use tenor_core::types::Compounding;
use tenor_curves::{BootstrapTrait, InterpolationMethod, RepricingReport, YieldTermStructure};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::config::CurveSetup;
use crate::data::QuoteTable;
use crate::error::CliError;
use crate::output::{format_percent, print_header, print_output, KeyValue};

/// Arguments for the build command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// CSV of quotes in percent; first column `date`, one column per label
    #[arg(long)]
    pub quotes: PathBuf,

    /// Observation date (YYYY-MM-DD). Defaults to the last date in the file.
    #[arg(short, long)]
    pub date: Option<String>,

    /// TOML curve setup. Defaults to a USD Libor deposit and swap curve.
    #[arg(short, long)]
    pub setup: Option<PathBuf>,

    /// Override the interpolation method (Linear, LogLinear, CubicSpline)
    #[arg(long)]
    pub interpolation: Option<InterpolationMethod>,

    /// Override the node quantity (Discount, ZeroYield, ForwardRate)
    #[arg(long)]
    pub bootstrap_trait: Option<BootstrapTrait>,
}

#[derive(Debug, Serialize, Tabled)]
struct NodeRow {
    #[tabled(rename = "Helper")]
    helper: String,
    #[tabled(rename = "Pillar")]
    pillar: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Discount Factor")]
    discount: String,
    #[tabled(rename = "Zero Rate (%)")]
    zero_rate: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Implied")]
    implied: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// Execute the build command.
pub fn execute(args: BuildArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut setup = CurveSetup::load(args.setup.as_deref())?;
    if let Some(method) = args.interpolation {
        setup.interpolation = method;
    }
    if let Some(tr) = args.bootstrap_trait {
        setup.bootstrap_trait = tr;
    }

    let table = QuoteTable::from_path(&args.quotes)?;
    let observation = match &args.date {
        Some(s) => parse_date(s)?,
        None => table
            .last_date()
            .ok_or_else(|| CliError::MissingDate("any date".to_string()))?,
    };
    let row = table
        .row(observation)
        .ok_or_else(|| CliError::MissingDate(observation.to_string()))?;

    let curve = setup.build_curve(observation, &row)?;
    let report = RepricingReport::check(&curve)?;
    info!(
        %observation,
        reference_date = %curve.reference_date(),
        valid = report.is_valid(),
        "curve built"
    );

    let mut rows = Vec::with_capacity(report.checks().len());
    for (check, &time) in report.checks().iter().zip(&curve.times()[1..]) {
        let discount = curve.discount(check.pillar)?;
        let zero = curve.zero_rate(check.pillar, Compounding::Continuous)?;
        rows.push(NodeRow {
            helper: check.helper_id.clone(),
            pillar: check.pillar.to_string(),
            time: format!("{:.6}", time),
            discount: format!("{:.10}", discount),
            zero_rate: format!("{:.6}", zero * 100.0),
            market: format_percent(check.market_quote),
            implied: format_percent(check.implied_quote),
            error: format!("{:.2e}", check.error),
        });
    }

    if format == OutputFormat::Table && !quiet {
        print_header(&format!("Curve for {observation}"));
    }
    print_output(&rows, format)?;

    if format == OutputFormat::Table && !quiet {
        let summary = vec![
            KeyValue::new("Reference Date", curve.reference_date().to_string()),
            KeyValue::new("Max Date", curve.max_date().to_string()),
            KeyValue::new("Interpolation", curve.interpolation().to_string()),
            KeyValue::new("Bootstrap Trait", curve.bootstrap_trait().to_string()),
            KeyValue::new("Status", if report.is_valid() { "PASSED" } else { "FAILED" }),
            KeyValue::new(
                "Helpers",
                format!("{}/{} passed", report.passed_count(), report.checks().len()),
            ),
            KeyValue::from_sci("Max Error", report.max_error()),
            KeyValue::from_sci("RMS Error", report.rms_error()),
        ];
        print_header("Summary");
        print_output(&summary, format)?;
    }

    Ok(())
}
