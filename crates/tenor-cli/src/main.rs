//! Tenor CLI - build bootstrapped yield curves from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap the curve for one observation date
//! tenor build --quotes libor.csv --date 2025-03-13
//!
//! # Zero-coupon curves for every 20th observation date
//! tenor zero --quotes libor.csv --every 20 --format csv
//!
//! # List the valid calendar names
//! tenor registry calendars
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod data;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Data goes to stdout, diagnostics to stderr
    let default_level = if cli.quiet { "error" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Build(args) => commands::build::execute(args, format, cli.quiet)?,
        Commands::Zero(args) => commands::zero::execute(args, format, cli.quiet)?,
        Commands::Registry(args) => commands::registry::execute(args)?,
    }

    Ok(())
}
