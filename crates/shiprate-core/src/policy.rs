//! # Quote Policy
//!
//! Business constants applied by the quote engine. The defaults are the
//! pricing contract checkout depends on; a rate pack may override them.

use serde::{Deserialize, Serialize};

/// Volumetric divisor in cm³ per kg.
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Cash-on-delivery fee.
pub const COD_FEE: f64 = 2.0;

/// Subtotal at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 60.0;

/// Flat price when no rate row matches.
pub const FALLBACK_COST: f64 = 3.5;

/// Flat price for pickup when no rate row matches.
pub const PICKUP_FALLBACK_COST: f64 = 0.0;

/// Zone assigned when no postal prefix matches.
pub const DEFAULT_ZONE: &str = "MAIN";

/// Tunable constants for one quote engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotePolicy {
    /// Divisor turning length × width × height (cm³) into kilograms.
    pub volumetric_divisor: f64,
    /// Fee added for `COURIER_COD`.
    pub cod_fee: f64,
    /// Subtotal at or above which a rated quote ships free.
    pub free_shipping_threshold: f64,
    /// Fallback price for every method except pickup.
    pub fallback_cost: f64,
    /// Fallback price for `PICKUP`.
    pub pickup_fallback_cost: f64,
    /// Zone used when no postal prefix matches.
    pub default_zone: String,
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self {
            volumetric_divisor: VOLUMETRIC_DIVISOR,
            cod_fee: COD_FEE,
            free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
            fallback_cost: FALLBACK_COST,
            pickup_fallback_cost: PICKUP_FALLBACK_COST,
            default_zone: DEFAULT_ZONE.to_string(),
        }
    }
}
