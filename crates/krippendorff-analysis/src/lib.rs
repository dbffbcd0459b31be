//! # krippendorff-analysis
//!
//! Krippendorff's alpha for nominal data with missing ratings.
//!
//! Observers rate units with positive integer codes. A [`CoincidenceModel`]
//! derives the unit and value universes, builds the observed coincidence
//! matrix, and computes alpha as an exact rational:
//!
//! ```
//! use krippendorff_analysis::{CoincidenceModel, ObserverRecord};
//!
//! let observers = vec![
//!     ObserverRecord::new().rate(1u32, 1).rate(2u32, 2),
//!     ObserverRecord::new().rate(1u32, 1).rate(2u32, 2),
//! ];
//! let model = CoincidenceModel::new(observers).unwrap();
//! assert_eq!(model.alpha().unwrap().to_string(), "1");
//! ```

pub mod alpha;
pub mod coincidence;
pub mod data;
pub mod model;
pub mod report;
pub mod universe;

pub use alpha::{compute_alpha, Alpha, AlphaSummary};
pub use coincidence::{build_coincidence_matrix, CoincidenceMatrix, UnitTally};
pub use data::{observer_label, ObserverRecord, Rating, UnitId};
pub use model::CoincidenceModel;
pub use report::{render_matrix, render_report};

/// Exact rational used for every coincidence, marginal, and total.
pub use num_rational::BigRational;
