//! # Validate Subcommand
//!
//! Loads a rate pack, reports row counts and warnings, and prints the
//! config digest to record alongside deployed tables.
//!
//! Exit codes: 0 when the pack is valid (warnings allowed), 1 when it fails
//! validation, 2 when a file cannot be read or parsed.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use shiprate_pack::{PackError, RatePack};

use crate::PackSource;

/// Arguments for the `shiprate validate` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: PackSource,
}

/// Write the report for a loaded pack.
pub fn write_report(out: &mut impl Write, pack: &RatePack) -> std::io::Result<()> {
    writeln!(out, "Rates: {} row(s)", pack.config.rates.len())?;
    writeln!(out, "Zones: {} row(s)", pack.config.zones.len())?;
    for warning in &pack.warnings {
        writeln!(out, "  WARN: {warning}")?;
    }
    writeln!(out, "Digest: {}", pack.digest)?;
    writeln!(out, "OK")
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure. Other load
/// failures are returned as errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.source.load() {
        Ok(pack) => {
            write_report(&mut out, &pack).context("failed to write report")?;
            Ok(0)
        }
        Err(PackError::Validation { issues }) => {
            writeln!(out, "FAIL: {} issue(s)", issues.len())?;
            for issue in &issues {
                writeln!(out, "  {issue}")?;
            }
            Ok(1)
        }
        Err(e) => Err(e).context("failed to load rate pack"),
    }
}
