//! Shared constants for the Krippendorff alpha engine.

/// Name of the project-level config file looked up in the config root.
pub const PROJECT_CONFIG_FILE: &str = "krippendorff.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "KRIPP_LOG";

/// Filter used when `KRIPP_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "krippendorff=info";

/// Default width of the separator lines in the coincidence report.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 80;

/// Default separator character (U+2015 HORIZONTAL BAR).
pub const DEFAULT_SEPARATOR_CHAR: char = '\u{2015}';

/// Rating codes are validated as positive by default.
pub const DEFAULT_STRICT_VALUES: bool = true;

/// Smallest value universe: `{1}`, even when no ratings exceed 1.
pub const MIN_VALUE: u32 = 1;

/// A unit needs at least this many ratings to be pairable.
pub const MIN_PAIRABLE_RATINGS: usize = 2;
