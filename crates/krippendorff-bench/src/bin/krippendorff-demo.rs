//! Prints the coincidence report and alpha for the canonical dataset.
//!
//! Reads `krippendorff.toml` from the working directory if present and
//! honors `KRIPP_LOG` / `KRIPP_*` overrides.

use std::process::ExitCode;

use krippendorff_analysis::CoincidenceModel;
use krippendorff_bench::canonical_dataset;
use krippendorff_core::config::KrippendorffConfig;
use krippendorff_core::errors::KrippErrorCode;
use krippendorff_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let config = match KrippendorffConfig::load(std::path::Path::new("."), None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return ExitCode::FAILURE;
        }
    };

    let model = match CoincidenceModel::with_config(canonical_dataset(), &config.analysis) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(units = model.units().len(), observers = model.observers().len(), "demo dataset loaded");

    println!("{}", model.report(&config.report));
    match model.alpha() {
        Ok(alpha) => {
            println!();
            println!("alpha = {alpha}");
            println!("alpha ~= {}", config.report.format_float(alpha.to_f64()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
