//! # shiprate-engine — Shipping Quote Computation
//!
//! Prices delivery of a cart against caller-supplied rate and zone tables.
//!
//! ## Pipeline
//!
//! 1. **Zone resolution** ([`zone_for_postal`]) — strip the postal code to
//!    digits and pick the zone of the longest matching prefix, or the
//!    default zone.
//! 2. **Chargeable weight** ([`chargeable_kg_of`]) — per line, the greater of
//!    actual and volumetric weight, times quantity, summed and rounded.
//! 3. **Rate selection** ([`select_rate`]) — binary search of the sorted
//!    tiers for (zone, method), extrapolating past the highest tier.
//! 4. **Overrides** ([`QuoteEngine::quote`]) — fallback price when no tier
//!    applies, COD fee, free shipping above the subtotal threshold.
//!
//! Every step appends a [`TraceToken`] to the result's `ruleTrace`.
//!
//! ## Determinism
//!
//! The engine holds no mutable state and never mutates its inputs. Identical
//! `(config, input)` pairs always produce identical results, and a single
//! engine may be shared across threads without synchronisation.
//!
//! ## Failure Semantics
//!
//! Nothing here returns an error. Unknown postal codes, missing rate rows
//! and empty carts all produce a quote plus a trace entry.

pub mod engine;
pub mod rate;
pub mod trace;
pub mod weight;
pub mod zone;

pub use engine::{quote, QuoteEngine};
pub use rate::{select_rate, SelectedRate};
pub use trace::TraceToken;
pub use weight::{chargeable_kg_of, chargeable_kg_with_divisor, volumetric_kg};
pub use zone::{clean_postal, zone_for_postal, zone_for_postal_or};
