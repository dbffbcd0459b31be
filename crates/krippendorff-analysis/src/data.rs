//! Input data model: unit identifiers, ratings, and observer records.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A value code assigned by an observer. Codes are positive integers.
pub type Rating = u32;

/// Identifier of a rated unit.
///
/// Numeric labels are stored as their decimal text, so `UnitId::from(7u32)`
/// and `UnitId::from("7")` name the same unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label as an integer of any width, if it parses as one.
    pub fn as_integer(&self) -> Option<BigInt> {
        BigInt::from_str(self.0.trim()).ok()
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UnitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u32> for UnitId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<u64> for UnitId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<i64> for UnitId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

/// One observer's ratings: unit → value, where `None` marks a unit the
/// observer saw but did not rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObserverRecord {
    ratings: FxHashMap<UnitId, Option<Rating>>,
}

impl ObserverRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: record `value` for `unit`.
    pub fn rate(mut self, unit: impl Into<UnitId>, value: Rating) -> Self {
        self.ratings.insert(unit.into(), Some(value));
        self
    }

    /// Builder: record `unit` as present but unrated.
    pub fn skip(mut self, unit: impl Into<UnitId>) -> Self {
        self.ratings.insert(unit.into(), None);
        self
    }

    pub fn insert(&mut self, unit: impl Into<UnitId>, value: Option<Rating>) {
        self.ratings.insert(unit.into(), value);
    }

    /// The value assigned to `unit`, or `None` if absent or unknown.
    pub fn get(&self, unit: &UnitId) -> Option<Rating> {
        self.ratings.get(unit).copied().flatten()
    }

    pub fn contains_unit(&self, unit: &UnitId) -> bool {
        self.ratings.contains_key(unit)
    }

    /// Every unit key, rated or not.
    pub fn units(&self) -> impl Iterator<Item = &UnitId> {
        self.ratings.keys()
    }

    /// Only the non-absent ratings.
    pub fn ratings(&self) -> impl Iterator<Item = (&UnitId, Rating)> {
        self.ratings
            .iter()
            .filter_map(|(unit, value)| value.map(|v| (unit, v)))
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl<U: Into<UnitId>> FromIterator<(U, Option<Rating>)> for ObserverRecord {
    fn from_iter<I: IntoIterator<Item = (U, Option<Rating>)>>(iter: I) -> Self {
        Self {
            ratings: iter
                .into_iter()
                .map(|(unit, value)| (unit.into(), value))
                .collect(),
        }
    }
}

/// Display label for the observer at `index`: `A`..`Z`, then `AA`, `AB`, ...
pub fn observer_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}
