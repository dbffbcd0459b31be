//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STRICT_VALUES;

/// Configuration for coincidence model construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Reject rating code 0 at construction. Default: true.
    pub strict_values: Option<bool>,
}

impl AnalysisConfig {
    /// Returns the effective strictness, defaulting to true.
    pub fn effective_strict_values(&self) -> bool {
        self.strict_values.unwrap_or(DEFAULT_STRICT_VALUES)
    }
}
