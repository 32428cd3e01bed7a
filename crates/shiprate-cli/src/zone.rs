//! # Zone Subcommand
//!
//! Resolves a postal code to its delivery zone using the pack's zone table
//! and default zone.

use anyhow::{Context, Result};
use clap::Args;

use shiprate_engine::zone_for_postal_or;

use crate::PackSource;

/// Arguments for the `shiprate zone` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ZoneArgs {
    #[command(flatten)]
    pub source: PackSource,

    /// Postal code to resolve; punctuation is ignored.
    #[arg(value_name = "POSTAL")]
    pub postal: String,
}

/// Resolve the zone id for `args.postal`.
pub fn resolve_zone(args: &ZoneArgs) -> Result<String> {
    let pack = args.source.load().context("failed to load rate pack")?;
    Ok(zone_for_postal_or(
        &pack.config.zones,
        &args.postal,
        &pack.policy.default_zone,
    ))
}

/// Execute the zone subcommand.
pub fn run_zone(args: &ZoneArgs) -> Result<u8> {
    println!("{}", resolve_zone(args)?);
    Ok(0)
}
