//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ReportConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`KRIPP_*`)
/// 3. Project config (`krippendorff.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KrippendorffConfig {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

/// Caller-supplied overrides, the highest-priority layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub strict_values: Option<bool>,
    pub separator_width: Option<usize>,
    pub float_precision: Option<usize>,
}

impl KrippendorffConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &KrippendorffConfig) -> Result<(), ConfigError> {
        if config.report.separator_width == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.separator_width".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(c) = config.report.separator_char {
            if c.is_control() {
                return Err(ConfigError::InvalidValue {
                    field: "report.separator_char".to_string(),
                    message: format!("control character {c:?} cannot be used as a separator"),
                });
            }
        }
        if let Some(digits) = config.report.float_precision {
            if digits > 17 {
                return Err(ConfigError::ValidationFailed {
                    field: "report.float_precision".to_string(),
                    message: "must be at most 17".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut KrippendorffConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: KrippendorffConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut KrippendorffConfig, other: &KrippendorffConfig) {
        if other.analysis.strict_values.is_some() {
            base.analysis.strict_values = other.analysis.strict_values;
        }

        if other.report.separator_width.is_some() {
            base.report.separator_width = other.report.separator_width;
        }
        if other.report.separator_char.is_some() {
            base.report.separator_char = other.report.separator_char;
        }
        if other.report.float_precision.is_some() {
            base.report.float_precision = other.report.float_precision;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `KRIPP_STRICT_VALUES`, `KRIPP_REPORT_SEPARATOR_WIDTH`, etc.
    /// Unparseable values are logged and skipped.
    fn apply_env_overrides(config: &mut KrippendorffConfig) {
        if let Some(v) = env_parse::<bool>("KRIPP_STRICT_VALUES") {
            config.analysis.strict_values = Some(v);
        }
        if let Some(v) = env_parse::<usize>("KRIPP_REPORT_SEPARATOR_WIDTH") {
            config.report.separator_width = Some(v);
        }
        if let Some(v) = env_parse::<usize>("KRIPP_REPORT_FLOAT_PRECISION") {
            config.report.float_precision = Some(v);
        }
    }

    fn apply_overrides(config: &mut KrippendorffConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.strict_values {
            config.analysis.strict_values = Some(v);
        }
        if let Some(v) = overrides.separator_width {
            config.report.separator_width = Some(v);
        }
        if let Some(v) = overrides.float_precision {
            config.report.float_precision = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            ::tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
