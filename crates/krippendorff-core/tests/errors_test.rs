//! Tests for the error handling system.

use std::collections::HashSet;

use krippendorff_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let undefined = ReliabilityError::UndefinedCoefficient {
        numerator: "0".into(),
        reason: "no pairable units".into(),
    };
    assert!(!undefined.error_code().is_empty());

    let invalid = ReliabilityError::InvalidRating {
        observer: "A".into(),
        unit: "3".into(),
    };
    assert!(!invalid.error_code().is_empty());

    let unknown = ReliabilityError::UnknownValue { value: 9, max_value: 5 };
    assert!(!unknown.error_code().is_empty());

    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert!(!config.error_code().is_empty());
}

#[test]
fn test_reliability_codes_are_distinct() {
    let codes: HashSet<&str> = [
        ReliabilityError::UndefinedCoefficient {
            numerator: "0".into(),
            reason: String::new(),
        }
        .error_code(),
        ReliabilityError::InvalidRating {
            observer: String::new(),
            unit: String::new(),
        }
        .error_code(),
        ReliabilityError::UnknownValue { value: 0, max_value: 1 }.error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 3);
}

#[test]
fn test_coded_string_format() {
    let err = ReliabilityError::UndefinedCoefficient {
        numerator: "0".into(),
        reason: "fewer than two pairable units".into(),
    };
    let s = err.coded_string();
    assert!(s.starts_with("[UNDEFINED_COEFFICIENT] "), "{s}");
    assert!(s.contains("division by zero"), "{s}");
    assert!(s.contains("fewer than two pairable units"), "{s}");
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::ValidationFailed {
        field: "report.separator_width".into(),
        message: "must be greater than 0".into(),
    };
    assert_eq!(
        err.to_string(),
        "Config validation failed for report.separator_width: must be greater than 0"
    );
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
