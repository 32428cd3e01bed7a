//! # shiprate CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shiprate_cli::quote::{run_quote, QuoteArgs};
use shiprate_cli::validate::{run_validate, ValidateArgs};
use shiprate_cli::zone::{run_zone, ZoneArgs};

/// Shipping rate engine CLI
///
/// Prices deliveries from zone and weight-tier tables, resolves postal
/// zones, and validates rate packs.
#[derive(Parser, Debug)]
#[command(name = "shiprate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price one cart and print the quote as JSON.
    Quote(QuoteArgs),

    /// Resolve the delivery zone of a postal code.
    Zone(ZoneArgs),

    /// Validate a rate pack and print its digest.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout carries the JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "shiprate starting");

    let result = match cli.command {
        Commands::Quote(args) => run_quote(&args),
        Commands::Zone(args) => run_zone(&args),
        Commands::Validate(args) => run_validate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
