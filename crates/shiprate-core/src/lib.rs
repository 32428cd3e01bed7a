#![deny(missing_docs)]
//! # shiprate-core — Data Model for the Shipping Rate Engine
//!
//! Defines the types that flow into and out of a shipping quote: the
//! delivery [`Method`], the externally supplied [`RateRow`] and [`ZoneRow`]
//! tables, the per-line [`ItemDim`] measurements, the [`QuoteInput`] and
//! the resulting [`QuoteResult`].
//!
//! ## Key Design Principles
//!
//! 1. **Closed method enum, open zone ids.** Delivery methods are a fixed
//!    set known at compile time. Zone identifiers are data-driven and stay
//!    plain strings.
//!
//! 2. **Typed tables.** Rate and zone rows hold parsed numbers. String
//!    coercion and validation happen once, at the configuration boundary
//!    (`shiprate-pack`), never per quote.
//!
//! 3. **One rounding rule.** Weights and money both go through [`round2`].
//!
//! 4. **Stable wire names.** Every type serializes with the camelCase field
//!    names consumed by checkout responses (`shippingCost`, `ruleTrace`, ...).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shiprate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod method;
pub mod numeric;
pub mod policy;
pub mod quote;
pub mod tables;

// Re-export primary types for ergonomic imports.
pub use error::InputError;
pub use method::Method;
pub use numeric::round2;
pub use policy::QuotePolicy;
pub use quote::{ItemDim, QuoteInput, QuoteResult, Surcharge};
pub use tables::{RateRow, ShippingConfig, ZoneRow};
