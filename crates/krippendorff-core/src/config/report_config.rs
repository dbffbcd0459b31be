//! Report rendering configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEPARATOR_CHAR, DEFAULT_SEPARATOR_WIDTH};

/// Layout of the tab-delimited coincidence report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Repetitions of the separator character per separator line. Default: 80.
    pub separator_width: Option<usize>,
    /// Separator character. Default: `―` (U+2015).
    pub separator_char: Option<char>,
    /// Fractional digits for the approximate alpha. `None` prints the
    /// shortest representation that round-trips.
    pub float_precision: Option<usize>,
}

impl ReportConfig {
    pub fn effective_separator_width(&self) -> usize {
        self.separator_width.unwrap_or(DEFAULT_SEPARATOR_WIDTH)
    }

    pub fn effective_separator_char(&self) -> char {
        self.separator_char.unwrap_or(DEFAULT_SEPARATOR_CHAR)
    }

    /// The full separator line.
    pub fn separator_line(&self) -> String {
        std::iter::repeat(self.effective_separator_char())
            .take(self.effective_separator_width())
            .collect()
    }

    /// Format an approximate value honoring `float_precision`.
    pub fn format_float(&self, value: f64) -> String {
        match self.float_precision {
            Some(digits) => format!("{value:.digits$}"),
            None => value.to_string(),
        }
    }
}
