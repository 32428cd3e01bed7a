//! # Rule Trace Tokens
//!
//! The audit vocabulary written into `QuoteResult::rule_trace`. Tokens are
//! compared verbatim by downstream audit tooling, so their text is fixed.

/// One rule that fired while computing a quote.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceToken {
    /// Resolved zone: `ZONE:<id>`.
    Zone(String),
    /// Chargeable weight: `KG:<value>`, shortest decimal form (`KG:2`).
    Kg(f64),
    /// No tier applied; a flat fallback price was used: `FALLBACK`.
    Fallback,
    /// Cash-on-delivery fee applied: `COD=<fee>`, e.g. `COD=2.0`.
    Cod(f64),
    /// Subtotal reached the free-shipping threshold: `FREE>=<threshold>`.
    FreeShipping(f64),
}

impl std::fmt::Display for TraceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zone(zone) => write!(f, "ZONE:{zone}"),
            Self::Kg(kg) => write!(f, "KG:{kg}"),
            Self::Fallback => f.write_str("FALLBACK"),
            // Debug keeps the trailing `.0` on whole amounts.
            Self::Cod(fee) => write!(f, "COD={fee:?}"),
            Self::FreeShipping(threshold) => write!(f, "FREE>={threshold}"),
        }
    }
}

impl From<TraceToken> for String {
    fn from(token: TraceToken) -> Self {
        token.to_string()
    }
}
