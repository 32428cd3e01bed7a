//! # Quote Engine
//!
//! Orchestrates zone resolution, weight calculation and rate selection,
//! then applies the business overrides in a fixed order:
//!
//! 1. `ZONE:<id>` and `KG:<value>` are always traced first.
//! 2. **Fallback.** No tier for (zone, method, kg): flat price (0 for
//!    pickup, 3.5 otherwise), COD fee still applied, `FALLBACK` traced,
//!    and the quote returns here. The free-shipping threshold never
//!    waives a fallback price.
//! 3. **COD.** `COURIER_COD` adds the COD fee, traced as `COD=2.0`.
//! 4. **Free shipping.** Subtotal at or above the threshold zeroes shipping,
//!    COD and surcharges, traced as `FREE>=60`.
//!
//! ## Determinism
//!
//! `quote` is a pure function of the policy, the tables and the input.

use shiprate_core::{round2, Method, QuoteInput, QuotePolicy, QuoteResult, ShippingConfig};

use crate::rate::select_rate;
use crate::trace::TraceToken;
use crate::weight::chargeable_kg_with_divisor;
use crate::zone::zone_for_postal_or;

/// Price a quote with the standard policy.
pub fn quote(config: &ShippingConfig, input: &QuoteInput) -> QuoteResult {
    QuoteEngine::default().quote(config, input)
}

/// A quote engine bound to a [`QuotePolicy`].
///
/// Holds no tables: the same engine prices against any config passed in.
#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    policy: QuotePolicy,
}

impl QuoteEngine {
    /// Create an engine with the given policy.
    pub fn new(policy: QuotePolicy) -> Self {
        Self { policy }
    }

    /// Price delivery of `input` against `config`.
    pub fn quote(&self, config: &ShippingConfig, input: &QuoteInput) -> QuoteResult {
        let mut trace: Vec<String> = Vec::new();

        let zone = zone_for_postal_or(
            &config.zones,
            &input.postal_code,
            &self.policy.default_zone,
        );
        trace.push(TraceToken::Zone(zone.clone()).into());

        let chargeable_kg =
            chargeable_kg_with_divisor(&input.items, self.policy.volumetric_divisor);
        trace.push(TraceToken::Kg(chargeable_kg).into());

        let method_key = input.method.rate_key();
        let cod_fee = self.cod_fee_for(input.method);

        let Some(rate) = select_rate(&config.rates, &zone, method_key, chargeable_kg) else {
            let shipping_cost = self.fallback_cost_for(input.method);
            tracing::warn!(
                zone = %zone,
                method = %input.method,
                chargeable_kg,
                shipping_cost,
                "no rate configured; using fallback price"
            );
            trace.push(TraceToken::Fallback.into());
            return QuoteResult {
                shipping_cost: round2(shipping_cost),
                cod_fee: round2(cod_fee),
                surcharges: Vec::new(),
                rule_trace: trace,
                chargeable_kg,
                zone,
            };
        };

        tracing::debug!(
            zone = %zone,
            method = method_key,
            chargeable_kg,
            tier_from = rate.from,
            tier_to = rate.to,
            base = rate.base,
            extrapolated = rate.is_extrapolated(),
            extra_kg = rate.extra_kg,
            "rate tier selected"
        );

        if cod_fee != 0.0 {
            trace.push(TraceToken::Cod(cod_fee).into());
        }

        if input.subtotal >= self.policy.free_shipping_threshold {
            tracing::debug!(
                subtotal = input.subtotal,
                threshold = self.policy.free_shipping_threshold,
                "free shipping threshold reached"
            );
            trace.push(TraceToken::FreeShipping(self.policy.free_shipping_threshold).into());
            return QuoteResult {
                shipping_cost: 0.0,
                cod_fee: 0.0,
                surcharges: Vec::new(),
                rule_trace: trace,
                chargeable_kg,
                zone,
            };
        }

        QuoteResult {
            shipping_cost: round2(rate.base),
            cod_fee: round2(cod_fee),
            surcharges: Vec::new(),
            rule_trace: trace,
            chargeable_kg,
            zone,
        }
    }

    fn cod_fee_for(&self, method: Method) -> f64 {
        if method.is_cash_on_delivery() {
            self.policy.cod_fee
        } else {
            0.0
        }
    }

    fn fallback_cost_for(&self, method: Method) -> f64 {
        match method {
            Method::Pickup => self.policy.pickup_fallback_cost,
            _ => self.policy.fallback_cost,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shiprate_core::{ItemDim, RateRow, ZoneRow};

    fn method() -> impl Strategy<Value = Method> {
        prop::sample::select(Method::all().to_vec())
    }

    fn item() -> impl Strategy<Value = ItemDim> {
        (
            1u32..5,
            prop::option::of(0.0f64..30.0),
            prop::option::of(0.0f64..120.0),
            prop::option::of(0.0f64..120.0),
            prop::option::of(0.0f64..120.0),
        )
            .prop_map(|(qty, weight_kg, length_cm, width_cm, height_cm)| ItemDim {
                qty,
                weight_kg,
                length_cm,
                width_cm,
                height_cm,
            })
    }

    fn config() -> ShippingConfig {
        let row = |zone: &str, method: &str, from: f64, to: f64, base: f64| RateRow {
            zone: zone.to_string(),
            weight_from_kg: from,
            weight_to_kg: to,
            delivery_method: method.to_string(),
            base_rate: base,
            extra_kg_rate: 0.75,
        };
        ShippingConfig::new(
            vec![
                row("MAIN", "HOME", 0.0, 2.0, 3.5),
                row("MAIN", "HOME", 2.01, 10.0, 5.0),
                row("ISLANDS", "HOME", 0.0, 10.0, 7.0),
                row("MAIN", "LOCKER", 0.0, 10.0, 2.5),
            ],
            vec![ZoneRow {
                prefix: "8".to_string(),
                zone_id: "ISLANDS".to_string(),
            }],
        )
    }

    proptest! {
        /// Quoting twice yields identical results.
        #[test]
        fn quote_is_deterministic(
            postal in "[0-9 -]{0,8}",
            m in method(),
            items in prop::collection::vec(item(), 0..6),
            subtotal in 0.0f64..200.0,
        ) {
            let cfg = config();
            let mut input = QuoteInput::new(postal, m, subtotal);
            input.items = items;
            prop_assert_eq!(quote(&cfg, &input), quote(&cfg, &input));
        }

        /// The trace always opens with the zone and the weight, in that order.
        #[test]
        fn trace_starts_with_zone_and_weight(
            postal in "[0-9]{5}",
            m in method(),
            items in prop::collection::vec(item(), 0..6),
            subtotal in 0.0f64..200.0,
        ) {
            let mut input = QuoteInput::new(postal, m, subtotal);
            input.items = items;
            let result = quote(&config(), &input);
            prop_assert_eq!(&result.rule_trace[0], &format!("ZONE:{}", result.zone));
            prop_assert_eq!(&result.rule_trace[1], &format!("KG:{}", result.chargeable_kg));
        }

        /// Amounts are never negative and are whole cents.
        #[test]
        fn amounts_are_non_negative_cents(
            m in method(),
            items in prop::collection::vec(item(), 0..6),
            subtotal in 0.0f64..200.0,
        ) {
            let mut input = QuoteInput::new("10671", m, subtotal);
            input.items = items;
            let result = quote(&config(), &input);
            prop_assert!(result.shipping_cost >= 0.0);
            prop_assert!(result.cod_fee >= 0.0);
            prop_assert!(result.chargeable_kg >= 0.0);
            prop_assert_eq!(round2(result.shipping_cost), result.shipping_cost);
        }
    }
}
