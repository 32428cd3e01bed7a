//! # Chargeable Weight
//!
//! Carriers bill the greater of a parcel's actual weight and its
//! volumetric weight (volume divided by a fixed divisor).

use shiprate_core::policy::VOLUMETRIC_DIVISOR;
use shiprate_core::{round2, ItemDim};

/// Volumetric weight of one unit in kg.
///
/// Zero unless all three dimensions are present and non-zero.
pub fn volumetric_kg(item: &ItemDim, divisor: f64) -> f64 {
    match (item.length_cm, item.width_cm, item.height_cm) {
        (Some(l), Some(w), Some(h)) if l != 0.0 && w != 0.0 && h != 0.0 => (l * w * h) / divisor,
        _ => 0.0,
    }
}

/// Total chargeable weight of `items` with the standard 5000 divisor.
pub fn chargeable_kg_of(items: &[ItemDim]) -> f64 {
    chargeable_kg_with_divisor(items, VOLUMETRIC_DIVISOR)
}

/// Total chargeable weight of `items`, rounded to 2 decimals, never negative.
pub fn chargeable_kg_with_divisor(items: &[ItemDim], divisor: f64) -> f64 {
    let total: f64 = items
        .iter()
        .map(|item| {
            let actual = item.weight_kg.unwrap_or(0.0);
            let per_unit = actual.max(volumetric_kg(item, divisor));
            per_unit * f64::from(item.qty)
        })
        .sum();
    round2(total).max(0.0)
}
