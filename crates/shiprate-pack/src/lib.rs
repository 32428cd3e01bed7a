//! # shiprate-pack — Rate Pack Loading
//!
//! The configuration boundary of the rate engine. A *rate pack* is the set
//! of tables an engine instance prices from:
//!
//! - **Rates**: weight tiers per (zone, delivery method).
//! - **Zones**: postal-prefix to zone mappings.
//! - **Policy** (optional): overrides of the pricing constants.
//!
//! Packs are YAML or JSON documents, either a single file holding all three
//! sections ([`load_pack`]) or two list files ([`load_tables`]). Loading
//! coerces numeric strings, validates the tables and computes a content
//! digest, so that the engine only ever sees well-formed typed rows.
//!
//! ## Crate Policy
//!
//! - Depends only on `shiprate-core` internally.
//! - Never panics on malformed input: every problem is a [`PackError`].

pub mod digest;
pub mod error;
pub mod parser;
pub mod raw;
pub mod validation;

use std::path::Path;

use shiprate_core::{QuotePolicy, ShippingConfig};

pub use digest::config_digest;
pub use error::{PackError, PackResult};
pub use raw::{RawPack, RawRateRow, RawZoneRow};
pub use validation::{validate_tables, Table, ValidationIssue};

/// A loaded, validated rate pack.
#[derive(Debug, Clone)]
pub struct RatePack {
    /// Tables ready for quoting.
    pub config: ShippingConfig,
    /// Effective pricing policy.
    pub policy: QuotePolicy,
    /// Non-fatal findings from validation.
    pub warnings: Vec<ValidationIssue>,
    /// SHA-256 of the validated config and policy.
    pub digest: String,
}

/// Validate an in-memory pack.
pub fn pack_from_raw(raw: RawPack) -> PackResult<RatePack> {
    let validated = validate_tables(&raw.rates, &raw.zones, raw.policy)?;
    let digest = config_digest(&validated.config, &validated.policy)?;
    Ok(RatePack {
        config: validated.config,
        policy: validated.policy,
        warnings: validated.warnings,
        digest,
    })
}

/// Load a single-document pack with `rates`, `zones` and optional `policy`.
pub fn load_pack(path: &Path) -> PackResult<RatePack> {
    let raw: RawPack = parser::load_document(path)?;
    let pack = pack_from_raw(raw)?;
    log_loaded(path, &pack);
    Ok(pack)
}

/// Load rates and zones from two list documents, using the default policy.
pub fn load_tables(rates_path: &Path, zones_path: &Path) -> PackResult<RatePack> {
    let rates: Vec<RawRateRow> = parser::load_document(rates_path)?;
    let zones: Vec<RawZoneRow> = parser::load_document(zones_path)?;
    let pack = pack_from_raw(RawPack {
        rates,
        zones,
        policy: None,
    })?;
    log_loaded(rates_path, &pack);
    Ok(pack)
}

fn log_loaded(path: &Path, pack: &RatePack) {
    tracing::info!(
        path = %path.display(),
        rates = pack.config.rates.len(),
        zones = pack.config.zones.len(),
        warnings = pack.warnings.len(),
        digest = %pack.digest,
        "rate pack loaded"
    );
}
