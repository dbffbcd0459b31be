//! # krippendorff-bench
//!
//! Shared reliability-data fixtures for benchmarks and tests, including
//! the canonical four-observer dataset used by the demo binary.

pub mod fixtures;

pub use fixtures::{canonical_dataset, generate_fixture, FixtureSize, SimpleRng};
