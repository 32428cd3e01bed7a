//! # Tiered Rate Selection
//!
//! Finds the price tier for a (zone, method, chargeable weight) triple.
//!
//! Tiers of one pair are sorted by lower bound and searched with a binary
//! search over inclusive `[from, to]` intervals. When two tiers share a
//! boundary weight, the lower tier prices it. Weights heavier than the top
//! tier are priced by extrapolation:
//!
//! ```text
//! base = top.base_rate + ceil(kg - top.weight_to_kg) * top.extra_kg_rate
//! ```
//!
//! A weight below the lowest tier, or in a gap between two tiers, matches
//! nothing and yields `None`, the same as a pair with no rows at all.

use shiprate_core::RateRow;

/// The tier that priced a shipment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedRate {
    /// Lower bound of the matched tier in kg.
    pub from: f64,
    /// Upper bound of the matched tier in kg.
    pub to: f64,
    /// Price, including any extrapolated overage.
    pub base: f64,
    /// Per-kg overage rate of the tier.
    pub extra: f64,
    /// Whole kilograms charged above `to`; 0 inside a tier.
    pub extra_kg: f64,
}

impl SelectedRate {
    fn from_tier(tier: &RateRow) -> Self {
        Self {
            from: tier.weight_from_kg,
            to: tier.weight_to_kg,
            base: tier.base_rate,
            extra: tier.extra_kg_rate,
            extra_kg: 0.0,
        }
    }

    /// Whether the price came from extrapolating past the top tier.
    pub fn is_extrapolated(&self) -> bool {
        self.extra_kg > 0.0
    }
}

/// Select the rate for `chargeable_kg` among rows for `zone` and `method`.
///
/// Zone and method match case-insensitively. `rates` may be unsorted.
pub fn select_rate(
    rates: &[RateRow],
    zone: &str,
    method: &str,
    chargeable_kg: f64,
) -> Option<SelectedRate> {
    let mut candidates: Vec<&RateRow> = rates
        .iter()
        .filter(|r| r.applies_to(zone, method))
        .collect();
    candidates.sort_by(|a, b| a.weight_from_kg.total_cmp(&b.weight_from_kg));

    // First tier whose upper bound reaches the weight.
    let idx = candidates.partition_point(|tier| tier.weight_to_kg < chargeable_kg);
    if let Some(tier) = candidates.get(idx).filter(|tier| tier.contains(chargeable_kg)) {
        return Some(SelectedRate::from_tier(tier));
    }

    let top = candidates.last()?;
    if chargeable_kg > top.weight_to_kg {
        let extra_kg = (chargeable_kg - top.weight_to_kg).ceil().max(0.0);
        return Some(SelectedRate {
            base: top.base_rate + extra_kg * top.extra_kg_rate,
            extra_kg,
            ..SelectedRate::from_tier(top)
        });
    }

    tracing::debug!(
        zone,
        method,
        chargeable_kg,
        lowest_from = ?candidates.first().map(|t| t.weight_from_kg),
        "chargeable weight falls outside every tier"
    );
    None
}
