//! # Pack Validation
//!
//! Converts raw rows into typed tables and checks the invariants the engine
//! relies on. This is the only place numeric text is coerced: once a pack
//! validates, quoting never meets a malformed number.
//!
//! ## Errors (the pack is rejected)
//!
//! - Non-numeric, non-finite or negative numeric columns.
//! - `weightFromKg > weightToKg`.
//! - Empty zone or method on a rate row.
//! - Overlapping tiers within one (zone, method) pair. Pairs group
//!   case-insensitively, as the engine matches them.
//! - Empty, non-digit or unquoted-integer zone prefixes; empty zone ids.
//! - Policy values the engine cannot use (divisor ≤ 0, negative amounts).
//!
//! ## Warnings (logged, returned, not fatal)
//!
//! - A pair whose lowest tier does not start at 0.
//! - Gaps between consecutive tiers, and tiers sharing a boundary weight.
//! - Rate rows whose method no delivery method looks up.
//! - Duplicate zone prefixes (the first one wins).

use std::collections::{BTreeMap, HashSet};

use shiprate_core::{Method, QuotePolicy, RateRow, ShippingConfig, ZoneRow};

use crate::error::{PackError, PackResult};
use crate::raw::{NumberLike, PrefixLike, RawRateRow, RawZoneRow};

/// Smallest weight step a tier table needs to cover: chargeable weights
/// are rounded to 2 decimals.
const WEIGHT_STEP_KG: f64 = 0.01;

/// Which part of the pack an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The rate table.
    Rates,
    /// The zone table.
    Zones,
    /// The policy block.
    Policy,
}

impl Table {
    /// Return the document key of this table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rates => "rates",
            Self::Zones => "zones",
            Self::Policy => "policy",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding against a pack, located by table, row and field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Table the issue belongs to.
    pub table: Table,
    /// Row index within the table; `None` for the policy block.
    pub row: Option<usize>,
    /// Wire name of the field.
    pub field: &'static str,
    /// What is wrong.
    pub message: String,
}

impl ValidationIssue {
    /// Create an issue.
    pub fn new(
        table: Table,
        row: Option<usize>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            table,
            row,
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.row {
            Some(row) => write!(f, "{}[{}].{}: {}", self.table, row, self.field, self.message),
            None => write!(f, "{}.{}: {}", self.table, self.field, self.message),
        }
    }
}

/// Typed, validated tables plus the non-fatal findings.
#[derive(Debug, Clone)]
pub struct ValidatedTables {
    /// Tables ready for the engine.
    pub config: ShippingConfig,
    /// Policy with pack overrides applied.
    pub policy: QuotePolicy,
    /// Non-fatal findings.
    pub warnings: Vec<ValidationIssue>,
}

/// Validate raw tables and an optional policy override.
///
/// All errors are collected before returning, so one run reports every
/// broken row.
pub fn validate_tables(
    rates: &[RawRateRow],
    zones: &[RawZoneRow],
    policy: Option<QuotePolicy>,
) -> PackResult<ValidatedTables> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let typed_rates: Vec<(usize, RateRow)> = rates
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| convert_rate_row(idx, raw, &mut errors))
        .collect();
    check_tiers(&typed_rates, &mut errors, &mut warnings);

    let typed_zones: Vec<ZoneRow> = zones
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| convert_zone_row(idx, raw, &mut errors))
        .collect();
    check_duplicate_prefixes(&typed_zones, &mut warnings);

    let policy = policy.unwrap_or_default();
    check_policy(&policy, &mut errors);

    if !errors.is_empty() {
        return Err(PackError::Validation { issues: errors });
    }

    for warning in &warnings {
        tracing::warn!(%warning, "rate pack warning");
    }

    Ok(ValidatedTables {
        config: ShippingConfig::new(
            typed_rates.into_iter().map(|(_, row)| row).collect(),
            typed_zones,
        ),
        policy,
        warnings,
    })
}

fn parse_column(
    value: &NumberLike,
    row: usize,
    field: &'static str,
    errors: &mut Vec<ValidationIssue>,
) -> Option<f64> {
    let problem = match value.parse() {
        Ok(n) if !n.is_finite() => format!("must be finite, got {n}"),
        Ok(n) if n < 0.0 => format!("must not be negative, got {n}"),
        Ok(n) => return Some(n),
        Err(text) => format!("not a number: {text:?}"),
    };
    errors.push(ValidationIssue::new(Table::Rates, Some(row), field, problem));
    None
}

fn convert_rate_row(
    idx: usize,
    raw: &RawRateRow,
    errors: &mut Vec<ValidationIssue>,
) -> Option<(usize, RateRow)> {
    let before = errors.len();

    if raw.zone.trim().is_empty() {
        errors.push(ValidationIssue::new(Table::Rates, Some(idx), "zone", "must not be empty"));
    }
    if raw.delivery_method.trim().is_empty() {
        errors.push(ValidationIssue::new(
            Table::Rates,
            Some(idx),
            "deliveryMethod",
            "must not be empty",
        ));
    }

    let from = parse_column(&raw.weight_from_kg, idx, "weightFromKg", errors);
    let to = parse_column(&raw.weight_to_kg, idx, "weightToKg", errors);
    let base = parse_column(&raw.base_rate, idx, "baseRate", errors);
    let extra = match &raw.extra_kg_rate {
        None => Some(0.0),
        Some(v) if v.is_blank() => Some(0.0),
        Some(v) => parse_column(v, idx, "extraKgRate", errors),
    };

    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            errors.push(ValidationIssue::new(
                Table::Rates,
                Some(idx),
                "weightFromKg",
                format!("lower bound {from} exceeds upper bound {to}"),
            ));
        }
    }

    if errors.len() > before {
        return None;
    }

    Some((
        idx,
        RateRow {
            zone: raw.zone.trim().to_string(),
            weight_from_kg: from?,
            weight_to_kg: to?,
            delivery_method: raw.delivery_method.trim().to_string(),
            base_rate: base?,
            extra_kg_rate: extra?,
        },
    ))
}

/// Check tier layout per (zone, method) pair.
fn check_tiers(
    rates: &[(usize, RateRow)],
    errors: &mut Vec<ValidationIssue>,
    warnings: &mut Vec<ValidationIssue>,
) {
    let looked_up: HashSet<&str> = Method::all().iter().map(Method::rate_key).collect();

    let mut pairs: BTreeMap<(String, String), Vec<(usize, &RateRow)>> = BTreeMap::new();
    for (idx, row) in rates {
        pairs
            .entry((
                row.zone.to_ascii_uppercase(),
                row.delivery_method.to_ascii_uppercase(),
            ))
            .or_default()
            .push((*idx, row));
    }

    for ((zone, method), mut tiers) in pairs {
        if !looked_up.contains(method.as_str()) {
            warnings.push(ValidationIssue::new(
                Table::Rates,
                Some(tiers[0].0),
                "deliveryMethod",
                format!("no delivery method is priced from {method:?} rows"),
            ));
        }

        tiers.sort_by(|a, b| a.1.weight_from_kg.total_cmp(&b.1.weight_from_kg));

        let (first_idx, first) = tiers[0];
        if first.weight_from_kg > 0.0 {
            warnings.push(ValidationIssue::new(
                Table::Rates,
                Some(first_idx),
                "weightFromKg",
                format!(
                    "{zone}/{method} tiers start at {} kg; lighter parcels get the fallback price",
                    first.weight_from_kg
                ),
            ));
        }

        for pair in tiers.windows(2) {
            let (_, prev) = pair[0];
            let (idx, next) = pair[1];
            if next.weight_from_kg < prev.weight_to_kg {
                errors.push(ValidationIssue::new(
                    Table::Rates,
                    Some(idx),
                    "weightFromKg",
                    format!(
                        "{zone}/{method} tier [{}, {}] overlaps [{}, {}]",
                        next.weight_from_kg,
                        next.weight_to_kg,
                        prev.weight_from_kg,
                        prev.weight_to_kg
                    ),
                ));
            } else if next.weight_from_kg == prev.weight_to_kg {
                warnings.push(ValidationIssue::new(
                    Table::Rates,
                    Some(idx),
                    "weightFromKg",
                    format!(
                        "{zone}/{method} tiers share the boundary {} kg; the lower tier prices it",
                        next.weight_from_kg
                    ),
                ));
            } else if next.weight_from_kg - prev.weight_to_kg > WEIGHT_STEP_KG + 1e-9 {
                warnings.push(ValidationIssue::new(
                    Table::Rates,
                    Some(idx),
                    "weightFromKg",
                    format!(
                        "{zone}/{method} has no tier between {} and {} kg",
                        prev.weight_to_kg, next.weight_from_kg
                    ),
                ));
            }
        }
    }
}

fn convert_zone_row(
    idx: usize,
    raw: &RawZoneRow,
    errors: &mut Vec<ValidationIssue>,
) -> Option<ZoneRow> {
    let before = errors.len();

    let prefix = match &raw.prefix {
        PrefixLike::Text(s) => s.trim().to_string(),
        PrefixLike::Integer(n) => {
            errors.push(ValidationIssue::new(
                Table::Zones,
                Some(idx),
                "prefix",
                format!("must be a quoted string, got the number {n}"),
            ));
            String::new()
        }
    };
    if errors.len() == before {
        if prefix.is_empty() {
            errors.push(ValidationIssue::new(
                Table::Zones,
                Some(idx),
                "prefix",
                "must not be empty",
            ));
        } else if !prefix.chars().all(|c| c.is_ascii_digit()) {
            errors.push(ValidationIssue::new(
                Table::Zones,
                Some(idx),
                "prefix",
                format!("must contain only digits, got {prefix:?}"),
            ));
        }
    }

    let zone_id = raw.zone_id.trim().to_string();
    if zone_id.is_empty() {
        errors.push(ValidationIssue::new(Table::Zones, Some(idx), "zoneId", "must not be empty"));
    }

    (errors.len() == before).then_some(ZoneRow { prefix, zone_id })
}

fn check_duplicate_prefixes(zones: &[ZoneRow], warnings: &mut Vec<ValidationIssue>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for (idx, zone) in zones.iter().enumerate() {
        if !seen.insert(zone.prefix.as_str()) {
            warnings.push(ValidationIssue::new(
                Table::Zones,
                Some(idx),
                "prefix",
                format!("duplicate prefix {:?}; the first mapping wins", zone.prefix),
            ));
        }
    }
}

fn check_policy(policy: &QuotePolicy, errors: &mut Vec<ValidationIssue>) {
    if !(policy.volumetric_divisor.is_finite() && policy.volumetric_divisor > 0.0) {
        errors.push(ValidationIssue::new(
            Table::Policy,
            None,
            "volumetricDivisor",
            format!("must be a positive number, got {}", policy.volumetric_divisor),
        ));
    }
    let amounts = [
        ("codFee", policy.cod_fee),
        ("freeShippingThreshold", policy.free_shipping_threshold),
        ("fallbackCost", policy.fallback_cost),
        ("pickupFallbackCost", policy.pickup_fallback_cost),
    ];
    for (field, value) in amounts {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationIssue::new(
                Table::Policy,
                None,
                field,
                format!("must be a finite non-negative amount, got {value}"),
            ));
        }
    }
    if policy.default_zone.trim().is_empty() {
        errors.push(ValidationIssue::new(
            Table::Policy,
            None,
            "defaultZone",
            "must not be empty",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(zone: &str, method: &str, from: &str, to: &str, base: &str) -> RawRateRow {
        RawRateRow {
            zone: zone.to_string(),
            weight_from_kg: NumberLike::Text(from.to_string()),
            weight_to_kg: NumberLike::Text(to.to_string()),
            delivery_method: method.to_string(),
            base_rate: NumberLike::Text(base.to_string()),
            extra_kg_rate: None,
        }
    }

    fn zone(prefix: &str, id: &str) -> RawZoneRow {
        RawZoneRow {
            prefix: PrefixLike::Text(prefix.to_string()),
            zone_id: id.to_string(),
        }
    }

    fn issues(result: PackResult<ValidatedTables>) -> Vec<ValidationIssue> {
        match result {
            Err(PackError::Validation { issues }) => issues,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn string_typed_table_converts() {
        let mut row = rate("MAIN", "HOME", "0", "5", "3.5");
        row.extra_kg_rate = Some(NumberLike::Text("1".into()));
        let v = validate_tables(&[row], &[zone("10", "ATTICA")], None).unwrap();

        assert_eq!(
            v.config.rates,
            vec![RateRow {
                zone: "MAIN".into(),
                weight_from_kg: 0.0,
                weight_to_kg: 5.0,
                delivery_method: "HOME".into(),
                base_rate: 3.5,
                extra_kg_rate: 1.0,
            }]
        );
        assert_eq!(v.config.zones[0].zone_id, "ATTICA");
        assert_eq!(v.policy, QuotePolicy::default());
        assert!(v.warnings.is_empty());
    }

    #[test]
    fn blank_extra_rate_defaults_to_zero() {
        let mut row = rate("MAIN", "HOME", "0", "5", "3.5");
        row.extra_kg_rate = Some(NumberLike::Text(" ".into()));
        let v = validate_tables(&[row], &[], None).unwrap();
        assert_eq!(v.config.rates[0].extra_kg_rate, 0.0);
    }

    #[test]
    fn every_bad_column_is_reported() {
        let bad = vec![
            rate("MAIN", "HOME", "zero", "5", "3.5"),
            rate("MAIN", "HOME", "0", "5", "-1"),
            rate("", "HOME", "0", "NaN", "3.5"),
        ];
        let found = issues(validate_tables(&bad, &[], None));
        let rendered: Vec<String> = found.iter().map(ToString::to_string).collect();

        assert!(rendered.iter().any(|m| m.starts_with("rates[0].weightFromKg: not a number")));
        assert!(rendered.iter().any(|m| m.starts_with("rates[1].baseRate: must not be negative")));
        assert!(rendered.iter().any(|m| m.starts_with("rates[2].zone")));
        assert!(rendered.iter().any(|m| m.starts_with("rates[2].weightToKg: must be finite")));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let found = issues(validate_tables(&[rate("MAIN", "HOME", "5", "2", "3.5")], &[], None));
        assert_eq!(found.len(), 1);
        assert!(found[0].message.contains("exceeds upper bound"));
    }

    #[test]
    fn overlapping_tiers_rejected_case_insensitively() {
        let rows = vec![
            rate("MAIN", "HOME", "0", "5", "3.5"),
            rate("main", "home", "4", "10", "6"),
        ];
        let found = issues(validate_tables(&rows, &[], None));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].row, Some(1));
        assert!(found[0].message.contains("overlaps"));
    }

    #[test]
    fn tier_layout_warnings() {
        let rows = vec![
            rate("MAIN", "HOME", "0.5", "2", "3.5"),
            rate("MAIN", "HOME", "2", "5", "4.5"),
            rate("MAIN", "HOME", "8", "10", "6.5"),
            rate("MAIN", "HOME", "5.01", "7.99", "5.5"),
        ];
        let v = validate_tables(&rows, &[], None).unwrap();
        let messages: Vec<&str> = v.warnings.iter().map(|w| w.message.as_str()).collect();

        assert_eq!(messages.len(), 2, "{messages:?}");
        assert!(messages[0].contains("start at 0.5"));
        assert!(messages[1].contains("share the boundary 2"));
    }

    #[test]
    fn gap_between_tiers_warns() {
        let rows = vec![
            rate("MAIN", "HOME", "0", "2", "3.5"),
            rate("MAIN", "HOME", "3", "5", "4.5"),
        ];
        let v = validate_tables(&rows, &[], None).unwrap();
        assert_eq!(v.warnings.len(), 1);
        assert!(v.warnings[0].message.contains("no tier between 2 and 3"));
    }

    #[test]
    fn courier_rows_are_flagged_as_unused() {
        let v = validate_tables(&[rate("MAIN", "COURIER", "0", "5", "3.5")], &[], None).unwrap();
        assert_eq!(v.warnings.len(), 1);
        assert_eq!(v.warnings[0].field, "deliveryMethod");
    }

    #[test]
    fn zone_prefix_rules() {
        let rows = vec![
            zone("", "A"),
            zone("1O", "B"),
            RawZoneRow {
                prefix: PrefixLike::Integer(10),
                zone_id: "C".into(),
            },
            zone("84", " "),
        ];
        let found = issues(validate_tables(&[], &rows, None));
        let fields: Vec<(Option<usize>, &str)> = found.iter().map(|i| (i.row, i.field)).collect();
        assert_eq!(
            fields,
            vec![
                (Some(0), "prefix"),
                (Some(1), "prefix"),
                (Some(2), "prefix"),
                (Some(3), "zoneId"),
            ]
        );
    }

    #[test]
    fn duplicate_prefix_warns() {
        let v = validate_tables(&[], &[zone("10", "A"), zone("10", "B")], None).unwrap();
        assert_eq!(v.warnings.len(), 1);
        assert_eq!(v.warnings[0].row, Some(1));
    }

    #[test]
    fn policy_override_is_checked() {
        let bad = QuotePolicy {
            volumetric_divisor: 0.0,
            cod_fee: -1.0,
            ..QuotePolicy::default()
        };
        let found = issues(validate_tables(&[], &[], Some(bad)));
        let fields: Vec<&str> = found.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["volumetricDivisor", "codFee"]);
        assert_eq!(
            found[0].to_string(),
            "policy.volumetricDivisor: must be a positive number, got 0"
        );
    }

    #[test]
    fn policy_override_is_kept() {
        let policy = QuotePolicy {
            cod_fee: 4.0,
            ..QuotePolicy::default()
        };
        let v = validate_tables(&[], &[], Some(policy.clone())).unwrap();
        assert_eq!(v.policy, policy);
    }
}
