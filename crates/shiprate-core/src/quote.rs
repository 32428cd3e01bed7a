//! # Quote Input and Result
//!
//! What checkout hands the engine, and what the engine hands back.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::method::Method;

/// Quantity and physical measurements of one order line.
///
/// Missing measurements count as 0. A line without all three dimensions
/// has no volumetric weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDim {
    /// Number of units on the line.
    pub qty: u32,
    /// Actual weight of one unit in kg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Package length in cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_cm: Option<f64>,
    /// Package width in cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<f64>,
    /// Package height in cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

impl ItemDim {
    /// A line of `qty` units weighing `weight_kg` each, with no dimensions.
    pub fn weighing(qty: u32, weight_kg: f64) -> Self {
        Self {
            qty,
            weight_kg: Some(weight_kg),
            ..Self::default()
        }
    }

    /// Set the package dimensions in cm.
    pub fn with_dimensions(mut self, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        self.length_cm = Some(length_cm);
        self.width_cm = Some(width_cm);
        self.height_cm = Some(height_cm);
        self
    }

    fn measurements(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("weightKg", self.weight_kg),
            ("lengthCm", self.length_cm),
            ("widthCm", self.width_cm),
            ("heightCm", self.height_cm),
        ]
    }
}

/// A request to price delivery of one cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    /// Destination postal code, punctuation allowed.
    pub postal_code: String,
    /// Requested delivery method.
    pub method: Method,
    /// Order lines.
    #[serde(default)]
    pub items: Vec<ItemDim>,
    /// Pre-tax order value, compared against the free-shipping threshold.
    pub subtotal: f64,
    /// Producer the cart belongs to. Informational; not used in pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer_id: Option<String>,
}

impl QuoteInput {
    /// Create an input with no items and no producer.
    pub fn new(postal_code: impl Into<String>, method: Method, subtotal: f64) -> Self {
        Self {
            postal_code: postal_code.into(),
            method,
            items: Vec::new(),
            subtotal,
            producer_id: None,
        }
    }

    /// Append an order line.
    pub fn with_item(mut self, item: ItemDim) -> Self {
        self.items.push(item);
        self
    }

    /// Attach the producer id.
    pub fn with_producer(mut self, producer_id: impl Into<String>) -> Self {
        self.producer_id = Some(producer_id.into());
        self
    }

    /// Caller-side sanity checks, run before quoting.
    ///
    /// The engine tolerates everything rejected here (it would quote an
    /// empty cart at 0 kg); checkout should not.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.items.is_empty() {
            return Err(InputError::NoItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.qty == 0 {
                return Err(InputError::ZeroQuantity { index });
            }
            for (field, value) in item.measurements() {
                if let Some(value) = value {
                    if !value.is_finite() || value < 0.0 {
                        return Err(InputError::InvalidMeasurement {
                            index,
                            field,
                            value,
                        });
                    }
                }
            }
        }
        if !self.subtotal.is_finite() || self.subtotal < 0.0 {
            return Err(InputError::InvalidSubtotal(self.subtotal));
        }
        Ok(())
    }
}

/// An extra charge itemised on a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable label.
    pub label: String,
    /// Amount in currency units.
    pub amount: f64,
}

/// The priced quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Shipping price, rounded to 2 decimals.
    pub shipping_cost: f64,
    /// Cash-on-delivery fee, rounded to 2 decimals.
    pub cod_fee: f64,
    /// Itemised surcharges. COD is reported in `cod_fee`, not here.
    pub surcharges: Vec<Surcharge>,
    /// Ordered tokens naming the rules that fired.
    pub rule_trace: Vec<String>,
    /// Chargeable weight in kg, rounded to 2 decimals.
    pub chargeable_kg: f64,
    /// Resolved zone.
    pub zone: String,
}
