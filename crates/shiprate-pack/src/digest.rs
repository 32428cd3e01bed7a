//! Content digest of validated tables.
//!
//! The digest is the SHA-256 of the compact JSON serialization of the typed
//! [`ShippingConfig`] and [`QuotePolicy`]. Because it is taken after
//! validation, `baseRate: "3.5"` and `baseRate: 3.5` produce the same digest,
//! and so do YAML and JSON renditions of one table. Row order is significant.

use serde::Serialize;
use sha2::{Digest, Sha256};

use shiprate_core::{QuotePolicy, ShippingConfig};

use crate::error::PackResult;

#[derive(Serialize)]
struct DigestInput<'a> {
    config: &'a ShippingConfig,
    policy: &'a QuotePolicy,
}

/// Compute the SHA-256 hex digest of raw bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().iter().map(|b| format!("{b:02x}")).collect()
}

/// Digest identifying the pricing behaviour of a config and policy.
pub fn config_digest(config: &ShippingConfig, policy: &QuotePolicy) -> PackResult<String> {
    let bytes = serde_json::to_vec(&DigestInput { config, policy })?;
    Ok(sha256_hex(&bytes))
}
