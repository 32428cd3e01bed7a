//! Raw table rows as they appear in pack documents.
//!
//! Rate tables are frequently exported from spreadsheets or databases with
//! every column as text (`baseRate: "3.5"`). Raw rows accept either a
//! number or a numeric string for each numeric column; conversion into
//! typed [`RateRow`](shiprate_core::RateRow)s happens in
//! [`validation`](crate::validation).

use serde::{Deserialize, Serialize};

use shiprate_core::QuotePolicy;

/// A numeric column written as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    /// A YAML/JSON number.
    Number(f64),
    /// A string expected to hold a number.
    Text(String),
}

impl NumberLike {
    /// Parse into an `f64`, returning the offending text on failure.
    ///
    /// Surrounding whitespace is ignored. `NaN` and infinities parse but are
    /// rejected later as non-finite.
    pub fn parse(&self) -> Result<f64, String> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| s.clone()),
        }
    }

    /// Whether this is empty text.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for NumberLike {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A postal prefix written as text or, by YAML accident, as an integer.
///
/// An unquoted `prefix: 10` in YAML is an integer, and any leading zero is
/// lost before the loader sees it, so integers are rejected during
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefixLike {
    /// A quoted prefix.
    Text(String),
    /// An unquoted numeric prefix.
    Integer(u64),
}

/// One rate row before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRateRow {
    /// Zone identifier.
    pub zone: String,
    /// Inclusive lower tier bound in kg.
    #[serde(alias = "weight_from_kg")]
    pub weight_from_kg: NumberLike,
    /// Inclusive upper tier bound in kg.
    #[serde(alias = "weight_to_kg")]
    pub weight_to_kg: NumberLike,
    /// Rate-table method code.
    #[serde(alias = "delivery_method")]
    pub delivery_method: String,
    /// Flat tier price.
    #[serde(alias = "base_rate")]
    pub base_rate: NumberLike,
    /// Per-kg overage rate; absent, null or blank means 0.
    #[serde(default, alias = "extra_kg_rate")]
    pub extra_kg_rate: Option<NumberLike>,
}

/// One zone row before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawZoneRow {
    /// Postal-code digit prefix.
    pub prefix: PrefixLike,
    /// Target zone.
    #[serde(alias = "zone_id")]
    pub zone_id: String,
}

/// A single-document pack: both tables plus an optional policy override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPack {
    /// Rate rows.
    #[serde(default)]
    pub rates: Vec<RawRateRow>,
    /// Zone rows.
    #[serde(default)]
    pub zones: Vec<RawZoneRow>,
    /// Policy overrides; missing fields keep their defaults.
    #[serde(default)]
    pub policy: Option<QuotePolicy>,
}
