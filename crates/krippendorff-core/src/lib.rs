//! # krippendorff-core
//!
//! Errors, configuration, tracing setup, and shared constants for the
//! Krippendorff alpha engine. The computation itself lives in
//! `krippendorff-analysis`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::{ConfigOverrides, KrippendorffConfig};
pub use errors::{ConfigError, KrippErrorCode, ReliabilityError};
