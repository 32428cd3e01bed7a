//! # Numeric Helpers
//!
//! The single rounding rule shared by chargeable weights and money amounts.

/// Round to 2 decimal places, half up.
///
/// `f64::EPSILON` is added before scaling so that values sitting just below
/// a half-cent because of binary representation (`1.005` is stored as
/// `1.00499…`) still round up.
pub fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0 + 0.5).floor() / 100.0
}
