//! # Rate and Zone Tables
//!
//! Typed rows of the two externally supplied tables. Both are immutable
//! inputs to the engine; the engine sorts and filters copies, never the
//! caller's data.

use serde::{Deserialize, Serialize};

/// One weight tier's price for a zone and delivery method.
///
/// `zone` and `delivery_method` match case-insensitively. Tiers of one
/// (zone, method) pair do not overlap and may appear in any order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRow {
    /// Zone identifier.
    pub zone: String,
    /// Inclusive lower bound of the tier in kg.
    pub weight_from_kg: f64,
    /// Inclusive upper bound of the tier in kg.
    pub weight_to_kg: f64,
    /// Rate-table method code (`HOME`, `PICKUP`, ...).
    pub delivery_method: String,
    /// Flat price for any chargeable weight inside the tier.
    pub base_rate: f64,
    /// Per-kg price beyond the highest tier of the pair.
    #[serde(default)]
    pub extra_kg_rate: f64,
}

impl RateRow {
    /// Whether this row prices the given zone and method code.
    pub fn applies_to(&self, zone: &str, method: &str) -> bool {
        self.zone.eq_ignore_ascii_case(zone) && self.delivery_method.eq_ignore_ascii_case(method)
    }

    /// Whether `kg` lies inside `[weight_from_kg, weight_to_kg]`.
    pub fn contains(&self, kg: f64) -> bool {
        self.weight_from_kg <= kg && kg <= self.weight_to_kg
    }
}

/// A postal-code prefix mapped to a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRow {
    /// Digit prefix matched against the cleaned postal code.
    pub prefix: String,
    /// Zone selected by this prefix.
    pub zone_id: String,
}

/// The rate and zone tables a quote is computed against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Tiered rate rows.
    pub rates: Vec<RateRow>,
    /// Postal prefix mappings.
    pub zones: Vec<ZoneRow>,
}

impl ShippingConfig {
    /// Build a config from its two tables.
    pub fn new(rates: Vec<RateRow>, zones: Vec<ZoneRow>) -> Self {
        Self { rates, zones }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RateRow {
        RateRow {
            zone: "MAIN".to_string(),
            weight_from_kg: 0.0,
            weight_to_kg: 5.0,
            delivery_method: "HOME".to_string(),
            base_rate: 3.5,
            extra_kg_rate: 1.0,
        }
    }

    #[test]
    fn applies_to_ignores_case() {
        let r = row();
        assert!(r.applies_to("main", "home"));
        assert!(r.applies_to("MAIN", "HOME"));
        assert!(!r.applies_to("ISLANDS", "HOME"));
        assert!(!r.applies_to("MAIN", "LOCKER"));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let r = row();
        assert!(r.contains(0.0));
        assert!(r.contains(5.0));
        assert!(!r.contains(5.01));
        assert!(!r.contains(-0.01));
    }

    #[test]
    fn extra_kg_rate_defaults_to_zero() {
        let json = r#"{"zone":"MAIN","weightFromKg":0,"weightToKg":2,"deliveryMethod":"HOME","baseRate":3}"#;
        let r: RateRow = serde_json::from_str(json).unwrap();
        assert_eq!(r.extra_kg_rate, 0.0);
    }

    #[test]
    fn zone_row_uses_camel_case() {
        let z = ZoneRow {
            prefix: "10".to_string(),
            zone_id: "ATTICA".to_string(),
        };
        let json = serde_json::to_value(&z).unwrap();
        assert_eq!(json["zoneId"], "ATTICA");
    }
}
