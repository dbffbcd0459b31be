//! Reliability computation errors.

use super::error_code::{self, KrippErrorCode};

/// Errors raised while building a coincidence model or computing alpha.
///
/// Rationals are carried as their `p/q` text so this crate stays free of
/// the arithmetic backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReliabilityError {
    /// The alpha denominator `n(n-1) - Σ N_c(N_c-1)` is zero.
    #[error("Alpha is undefined (division by zero, numerator {numerator}): {reason}")]
    UndefinedCoefficient { numerator: String, reason: String },

    /// A rating code that is not a positive integer.
    #[error("Observer {observer} assigned non-positive value 0 to unit {unit}")]
    InvalidRating { observer: String, unit: String },

    /// A value outside `1..=max_value` was queried.
    #[error("Value {value} is outside the value universe 1..={max_value}")]
    UnknownValue { value: u32, max_value: u32 },
}

impl KrippErrorCode for ReliabilityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UndefinedCoefficient { .. } => error_code::UNDEFINED_COEFFICIENT,
            Self::InvalidRating { .. } => error_code::INVALID_RATING,
            Self::UnknownValue { .. } => error_code::UNKNOWN_VALUE,
        }
    }
}
