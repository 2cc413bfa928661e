//! This directory provides some features for research.
//! Measure the followings of boosting algorithm per round
//! - Error rate and combination coefficient
//! - Weak learner / committee error
//! - Running time
//!
//! and evaluate a trained model against betting cutoffs.

/// Defines a logger that runs a boosting algorithm with logging.
pub mod logger;

/// Defines the over/under evaluation.
pub mod cutoff_report;


pub use logger::{
    Logger,
    Research,
};

pub use cutoff_report::CutoffReport;
