//! `CoincidenceModel`: the immutable pipeline from observer records to alpha.

use std::fmt;

use num_rational::BigRational;
use tracing::debug;

use krippendorff_core::config::{AnalysisConfig, ReportConfig};
use krippendorff_core::constants::MIN_PAIRABLE_RATINGS;
use krippendorff_core::errors::ReliabilityError;

use crate::alpha::{compute_alpha, Alpha, AlphaSummary};
use crate::coincidence::{build_coincidence_matrix, CoincidenceMatrix, UnitTally};
use crate::data::{observer_label, ObserverRecord, Rating, UnitId};
use crate::report::{render_matrix, render_report};
use crate::universe::{participation, unit_universe, value_universe};

/// Reliability data for a set of observers, with every derived quantity
/// computed once at construction.
///
/// The model exposes no mutation, so the cached universes, matrix,
/// marginals, and total always agree with the observer records.
#[derive(Debug, Clone)]
pub struct CoincidenceModel {
    observers: Vec<ObserverRecord>,
    units: Vec<UnitId>,
    values: Vec<Rating>,
    /// m_u, aligned with `units`.
    participation: Vec<usize>,
    matrix: CoincidenceMatrix,
    marginals: Vec<BigRational>,
    total: BigRational,
}

impl CoincidenceModel {
    /// Build with the default analysis config (rating code 0 rejected).
    pub fn new(observers: Vec<ObserverRecord>) -> Result<Self, ReliabilityError> {
        Self::with_config(observers, &AnalysisConfig::default())
    }

    pub fn with_config(
        observers: Vec<ObserverRecord>,
        config: &AnalysisConfig,
    ) -> Result<Self, ReliabilityError> {
        let units = unit_universe(&observers);

        if config.effective_strict_values() {
            validate_ratings(&observers, &units)?;
        }

        let values = value_universe(&observers);
        let counts = units
            .iter()
            .map(|unit| participation(&observers, unit))
            .collect();
        let matrix = build_coincidence_matrix(&observers, &units, &values);
        let marginals = matrix.marginals();
        let total: BigRational = marginals.iter().sum();

        debug!(
            observers = observers.len(),
            units = units.len(),
            values = values.len(),
            n = %total,
            "coincidence model built"
        );

        Ok(Self {
            observers,
            units,
            values,
            participation: counts,
            matrix,
            marginals,
            total,
        })
    }

    pub fn observers(&self) -> &[ObserverRecord] {
        &self.observers
    }

    /// `A`, `B`, ... in input order. Labels are cosmetic.
    pub fn observer_labels(&self) -> Vec<String> {
        (0..self.observers.len()).map(observer_label).collect()
    }

    /// Unit universe, numerically ordered when every label is an integer.
    pub fn units(&self) -> &[UnitId] {
        &self.units
    }

    /// Value universe `1..=max_value`.
    pub fn values(&self) -> &[Rating] {
        &self.values
    }

    /// Every ordered (c, k) pair over the value universe, row-major.
    pub fn value_pairs(&self) -> Vec<(Rating, Rating)> {
        self.values
            .iter()
            .flat_map(|&c| self.values.iter().map(move |&k| (c, k)))
            .collect()
    }

    /// Reliability data matrix: one row per observer, one column per unit.
    pub fn values_matrix(&self) -> Vec<Vec<Option<Rating>>> {
        self.observers
            .iter()
            .map(|o| self.units.iter().map(|u| o.get(u)).collect())
            .collect()
    }

    /// m_u for `unit`; zero for units outside the universe.
    pub fn participation(&self, unit: &UnitId) -> usize {
        self.units
            .iter()
            .position(|u| u == unit)
            .map(|i| self.participation[i])
            .unwrap_or(0)
    }

    /// Units rated by at least two observers.
    pub fn pairable_units(&self) -> usize {
        self.participation
            .iter()
            .filter(|&&m| m >= MIN_PAIRABLE_RATINGS)
            .count()
    }

    /// `unit`'s contribution to O[c][k].
    pub fn pairs_in_unit(
        &self,
        c: Rating,
        k: Rating,
        unit: &UnitId,
    ) -> Result<BigRational, ReliabilityError> {
        self.check_value(c)?;
        self.check_value(k)?;
        Ok(UnitTally::from_observers(&self.observers, unit).contribution(c, k))
    }

    /// O[c][k].
    pub fn observed_coincidence(&self, c: Rating, k: Rating) -> Result<&BigRational, ReliabilityError> {
        self.check_value(c)?;
        self.check_value(k)?;
        self.matrix.get(c, k).ok_or_else(|| self.unknown_value(c))
    }

    pub fn coincidence_matrix(&self) -> &CoincidenceMatrix {
        &self.matrix
    }

    /// N[value], the marginal count of `value`.
    pub fn value_count(&self, value: Rating) -> Result<&BigRational, ReliabilityError> {
        self.check_value(value)?;
        self.values
            .iter()
            .position(|&v| v == value)
            .map(|i| &self.marginals[i])
            .ok_or_else(|| self.unknown_value(value))
    }

    /// N[c] for every value, in universe order.
    pub fn marginals(&self) -> &[BigRational] {
        &self.marginals
    }

    /// Grand total n.
    pub fn total(&self) -> &BigRational {
        &self.total
    }

    pub fn alpha(&self) -> Result<Alpha, ReliabilityError> {
        compute_alpha(&self.matrix, &self.marginals, &self.total)
    }

    pub fn summary(&self) -> Result<AlphaSummary, ReliabilityError> {
        let alpha = self.alpha()?;
        Ok(AlphaSummary {
            alpha: alpha.to_string(),
            alpha_approx: alpha.to_f64(),
            total: self.total.to_string(),
            observers: self.observers.len(),
            units: self.units.len(),
            pairable_units: self.pairable_units(),
            values: self.values.clone(),
        })
    }

    pub fn report(&self, config: &ReportConfig) -> String {
        render_report(&self.matrix, &self.marginals, &self.total, config)
    }

    pub fn matrix_report(&self) -> String {
        render_matrix(&self.matrix)
    }

    fn check_value(&self, value: Rating) -> Result<(), ReliabilityError> {
        if self.values.contains(&value) {
            Ok(())
        } else {
            Err(self.unknown_value(value))
        }
    }

    fn unknown_value(&self, value: Rating) -> ReliabilityError {
        ReliabilityError::UnknownValue {
            value,
            max_value: self.values.last().copied().unwrap_or(1),
        }
    }
}

impl fmt::Display for CoincidenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report(&ReportConfig::default()))
    }
}

/// Reject rating code 0, reporting the first offender in observer then
/// unit-universe order.
fn validate_ratings(observers: &[ObserverRecord], units: &[UnitId]) -> Result<(), ReliabilityError> {
    for (index, observer) in observers.iter().enumerate() {
        if let Some(unit) = units.iter().find(|u| observer.get(u) == Some(0)) {
            return Err(ReliabilityError::InvalidRating {
                observer: observer_label(index),
                unit: unit.to_string(),
            });
        }
    }
    Ok(())
}
