//! Unit and value universe derivation.
//!
//! Both universes are presentation orderings only: alpha is invariant
//! under any permutation of units.

use std::collections::BTreeSet;

use krippendorff_core::constants::MIN_VALUE;

use crate::data::{ObserverRecord, Rating, UnitId};

/// Deduplicate and order unit identifiers.
///
/// If every identifier parses as an integer the units are sorted
/// numerically, otherwise lexicographically. Numeric ties (`"01"` vs `"1"`)
/// keep their lexicographic order.
pub fn sort_units(units: impl IntoIterator<Item = UnitId>) -> Vec<UnitId> {
    let mut sorted: Vec<UnitId> = units.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    if sorted.iter().all(|u| u.as_integer().is_some()) {
        sorted.sort_by_cached_key(UnitId::as_integer);
    }
    sorted
}

/// Every unit key appearing in any record, rated or not.
pub fn unit_universe(observers: &[ObserverRecord]) -> Vec<UnitId> {
    sort_units(observers.iter().flat_map(|o| o.units().cloned()))
}

/// `1..=max(1, largest assigned value)`.
pub fn value_universe(observers: &[ObserverRecord]) -> Vec<Rating> {
    let max_value = observers
        .iter()
        .flat_map(|o| o.ratings().map(|(_, v)| v))
        .fold(MIN_VALUE, Rating::max);
    (MIN_VALUE..=max_value).collect()
}

/// Number of observers with a non-absent value for `unit` (m_u).
pub fn participation(observers: &[ObserverRecord], unit: &UnitId) -> usize {
    observers.iter().filter(|o| o.get(unit).is_some()).count()
}
