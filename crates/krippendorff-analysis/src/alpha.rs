//! Krippendorff's alpha from the coincidence matrix.
//!
//! ```text
//! alpha = [ (n - 1) * Σ_c O[c][c] - Σ_c N[c](N[c] - 1) ]
//!       / [ n(n - 1)              - Σ_c N[c](N[c] - 1) ]
//! ```
//!
//! Evaluated in exact rational arithmetic; the two differences can be
//! close for small samples.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use tracing::warn;

use krippendorff_core::errors::ReliabilityError;

use crate::coincidence::CoincidenceMatrix;
use crate::data::Rating;

/// Exact alpha coefficient.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Alpha(BigRational);

impl Alpha {
    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }

    pub fn into_ratio(self) -> BigRational {
        self.0
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Nearest `f64`, for display only.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Compute alpha from a coincidence matrix and its marginals and total.
///
/// Fails with [`ReliabilityError::UndefinedCoefficient`] when the
/// denominator is zero: no pairable unit at all, or every pairable rating
/// falls in a single value.
pub fn compute_alpha(
    matrix: &CoincidenceMatrix,
    marginals: &[BigRational],
    total: &BigRational,
) -> Result<Alpha, ReliabilityError> {
    let one = BigRational::one();
    let n_minus_one = total - &one;

    let agreement: BigRational = matrix.diagonal().sum();
    let chance: BigRational = marginals.iter().map(|n_c| n_c * (n_c - &one)).sum();

    let numerator = &n_minus_one * agreement - &chance;
    let denominator = total * &n_minus_one - &chance;

    if denominator.is_zero() {
        let reason = if total.is_zero() {
            "no unit was rated by two or more observers".to_string()
        } else {
            "every pairable rating uses the same value, so there is no variation".to_string()
        };
        warn!(n = %total, numerator = %numerator, "alpha undefined: {reason}");
        return Err(ReliabilityError::UndefinedCoefficient {
            numerator: numerator.to_string(),
            reason,
        });
    }

    Ok(Alpha(numerator / denominator))
}

/// Serializable digest of a computed alpha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaSummary {
    /// Exact value as `p/q` (or `p`).
    pub alpha: String,
    pub alpha_approx: f64,
    /// Grand total n as `p/q` (or `p`).
    pub total: String,
    pub observers: usize,
    pub units: usize,
    /// Units rated by at least two observers.
    pub pairable_units: usize,
    pub values: Vec<Rating>,
}
