//! # Delivery Methods
//!
//! The closed set of delivery methods a shopper can pick at checkout.
//!
//! Rate tables key their rows by a method code string. `COURIER` is a
//! legacy alias: courier-style delivery is priced from the `HOME` rows,
//! so [`Method::rate_key`] maps it before lookup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// How the parcel reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Method {
    /// Door-to-door delivery.
    Home,
    /// Customer collects from the producer or a pickup point.
    Pickup,
    /// Delivery to a parcel locker.
    Locker,
    /// Courier delivery, priced as `HOME`.
    Courier,
    /// Courier delivery with cash on delivery.
    CourierCod,
}

impl Method {
    /// Return the wire code of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Pickup => "PICKUP",
            Self::Locker => "LOCKER",
            Self::Courier => "COURIER",
            Self::CourierCod => "COURIER_COD",
        }
    }

    /// Return all method variants.
    pub fn all() -> &'static [Method] {
        &[
            Self::Home,
            Self::Pickup,
            Self::Locker,
            Self::Courier,
            Self::CourierCod,
        ]
    }

    /// The `deliveryMethod` value to look up in the rate table.
    ///
    /// Only `COURIER` is remapped (to `HOME`). `COURIER_COD` keeps its own
    /// code, so a table without `COURIER_COD` rows sends it to the fallback.
    pub fn rate_key(&self) -> &'static str {
        match self {
            Self::Courier => Self::Home.as_str(),
            other => other.as_str(),
        }
    }

    /// Whether the carrier collects payment on delivery.
    pub fn is_cash_on_delivery(&self) -> bool {
        matches!(self, Self::CourierCod)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = InputError;

    /// Parse a method code. Case-insensitive; `-` is accepted for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| InputError::UnknownMethod(s.to_string()))
    }
}
