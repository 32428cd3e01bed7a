//! # Error Types
//!
//! Errors raised when a caller checks a [`QuoteInput`](crate::QuoteInput)
//! before quoting, or parses a delivery method from text.
//!
//! The engine itself never returns these: ordinary business misses
//! (unknown postal code, missing rate row) degrade to a fallback quote.

use thiserror::Error;

/// Rejected quote input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The delivery method string is not one of the known codes.
    #[error("unknown delivery method {0:?} (expected HOME, PICKUP, LOCKER, COURIER or COURIER_COD)")]
    UnknownMethod(String),

    /// The quote carries no order lines.
    #[error("quote input has no items")]
    NoItems,

    /// An order line has a zero quantity.
    #[error("item {index}: quantity must be at least 1")]
    ZeroQuantity {
        /// Position of the line in `items`.
        index: usize,
    },

    /// A weight or dimension is negative, NaN or infinite.
    #[error("item {index}: {field} must be a finite non-negative number, got {value}")]
    InvalidMeasurement {
        /// Position of the line in `items`.
        index: usize,
        /// Wire name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The order subtotal is negative, NaN or infinite.
    #[error("subtotal must be a finite non-negative number, got {0}")]
    InvalidSubtotal(f64),
}
