//! # shiprate-cli — Command-Line Interface
//!
//! Provides the `shiprate` binary for pricing a delivery against a rate pack
//! and for checking packs before they are deployed.
//!
//! ## Subcommands
//!
//! - `shiprate quote` — Price one cart and print the `QuoteResult` JSON.
//! - `shiprate zone` — Resolve the zone of a postal code.
//! - `shiprate validate` — Validate a pack and print its digest.
//!
//! Every subcommand reads its tables from either a single pack document or
//! a pair of rate/zone list files:
//!
//! ```bash
//! shiprate quote --pack pack.yaml --postal 10671 --method HOME --item qty=1,weight=2
//! shiprate validate --rates rates.json --zones zones.json
//! ```

pub mod quote;
pub mod validate;
pub mod zone;

use std::path::PathBuf;

use clap::Args;

use shiprate_pack::{PackError, PackResult, RatePack};

/// Where to read the rate pack from.
#[derive(Args, Debug, Clone, Default)]
pub struct PackSource {
    /// Single pack document with `rates`, `zones` and optional `policy`.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["rates", "zones"],
        required_unless_present = "rates"
    )]
    pub pack: Option<PathBuf>,

    /// Rate table list document.
    #[arg(long, value_name = "FILE", requires = "zones")]
    pub rates: Option<PathBuf>,

    /// Zone table list document.
    #[arg(long, value_name = "FILE", requires = "rates")]
    pub zones: Option<PathBuf>,
}

impl PackSource {
    /// Load and validate the pack this source names.
    ///
    /// Fails with [`PackError::MissingSource`] unless a pack document or both
    /// table files are set.
    pub fn load(&self) -> PackResult<RatePack> {
        match (&self.pack, &self.rates, &self.zones) {
            (Some(pack), _, _) => shiprate_pack::load_pack(pack),
            (None, Some(rates), Some(zones)) => shiprate_pack::load_tables(rates, zones),
            _ => Err(PackError::MissingSource),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        source: PackSource,
    }

    #[test]
    fn pack_or_table_pair_is_required() {
        assert!(Harness::try_parse_from(["t", "--pack", "p.yaml"]).is_ok());
        assert!(Harness::try_parse_from(["t", "--rates", "r.json", "--zones", "z.json"]).is_ok());
        assert!(Harness::try_parse_from(["t"]).is_err());
        assert!(Harness::try_parse_from(["t", "--rates", "r.json"]).is_err());
        assert!(Harness::try_parse_from(["t", "--pack", "p.yaml", "--zones", "z.json"]).is_err());
    }

    #[test]
    fn incomplete_source_is_an_error() {
        assert!(matches!(
            PackSource::default().load(),
            Err(PackError::MissingSource)
        ));

        let rates_only = PackSource {
            rates: Some(PathBuf::from("rates.json")),
            ..PackSource::default()
        };
        assert!(matches!(rates_only.load(), Err(PackError::MissingSource)));
    }
}
