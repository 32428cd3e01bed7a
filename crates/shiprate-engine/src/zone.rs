//! # Zone Resolution
//!
//! Maps a postal code to a zone by longest matching digit prefix.

use shiprate_core::policy::DEFAULT_ZONE;
use shiprate_core::ZoneRow;

/// Keep only the ASCII digits of a postal code (`"106 71"` → `"10671"`).
pub fn clean_postal(postal: &str) -> String {
    postal.chars().filter(char::is_ascii_digit).collect()
}

/// Resolve the zone for `postal`, falling back to `"MAIN"`.
pub fn zone_for_postal(zones: &[ZoneRow], postal: &str) -> String {
    zone_for_postal_or(zones, postal, DEFAULT_ZONE)
}

/// Resolve the zone for `postal`, falling back to `default_zone`.
///
/// The longest matching prefix wins. Between equally long prefixes the
/// first in table order is kept.
pub fn zone_for_postal_or(zones: &[ZoneRow], postal: &str, default_zone: &str) -> String {
    let clean = clean_postal(postal);
    let mut best: Option<&ZoneRow> = None;
    for z in zones {
        if !clean.starts_with(z.prefix.as_str()) {
            continue;
        }
        if best.map_or(true, |b| z.prefix.len() > b.prefix.len()) {
            best = Some(z);
        }
    }
    best.map_or_else(|| default_zone.to_string(), |z| z.zone_id.clone())
}
