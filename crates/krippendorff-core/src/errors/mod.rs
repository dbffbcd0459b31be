//! Error handling for the Krippendorff engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod reliability_error;

pub use config_error::ConfigError;
pub use error_code::KrippErrorCode;
pub use reliability_error::ReliabilityError;
