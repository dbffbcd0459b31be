//! Configuration system for the Krippendorff engine.
//! TOML-based, 3-layer resolution: overrides > env > project file > defaults.

pub mod analysis_config;
pub mod krippendorff_config;
pub mod report_config;

pub use analysis_config::AnalysisConfig;
pub use krippendorff_config::{ConfigOverrides, KrippendorffConfig};
pub use report_config::ReportConfig;
