//! `KrippErrorCode` trait for stable, machine-matchable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait KrippErrorCode {
    /// Returns the error code string (e.g., "UNDEFINED_COEFFICIENT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNDEFINED_COEFFICIENT: &str = "UNDEFINED_COEFFICIENT";
pub const INVALID_RATING: &str = "INVALID_RATING";
pub const UNKNOWN_VALUE: &str = "UNKNOWN_VALUE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
