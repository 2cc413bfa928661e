#![warn(missing_docs)]

//!
//! A crate that provides boosting algorithms for regression.
//!
//! A booster repeatedly asks a weak learner for a regressor
//! that fits the current distribution over the training examples,
//! accepts it if its error rate is small enough,
//! and reweights the examples so that
//! the next weak learner focuses on the hard ones.
//! The result is the weighted average of the accepted regressors.
//!
//! - [`RegBoost`] is the booster.
//!     Its reweighting rule is a [`Policy`]:
//!     AdaBoost.R, AdaBoost.RT, or a linear-penalty variant.
//!
//! - [`PolynomialRegression`] is the weak learner.
//!     It selects a feature subset,
//!     expands it into a polynomial basis,
//!     and fits the coefficients by regularized gradient descent.
//!
//! # Example
//!
//! ```no_run
//! use regboosts::prelude::*;
//!
//! # fn main() -> regboosts::Result<()> {
//! let rows = vec![vec![1.0, 2.0], vec![2.0, 1.0], vec![3.0, 5.0]];
//! let target = vec![4.0, 5.0, 11.0];
//! let sample = Sample::from_rows(rows, target)?;
//!
//! let weak_learner = PolynomialRegressionBuilder::new(&sample)
//!     .subset_size(2)
//!     .quadratic(false)
//!     .build()?;
//!
//! let mut booster = RegBoost::init(sample)
//!     .policy(Policy::threshold(0.2, 2))
//!     .max_learners(10);
//!
//! let f = booster.run(&weak_learner)?;
//! println!("prediction: {}", f.predict(&[2.0, 2.0]));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod config;
pub mod sample;
pub mod common;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod research;
pub mod prelude;


pub use error::{BoostError, Result};
pub use config::{BoostConfig, PolicyKind};

pub use sample::{
    Example,
    Sample,
    Transformer,
    Correlation,
    estimate_correlations,
};

pub use common::{
    ErrorMetric,
    GoldenSectionSearch,
    LineSearchResult,
    boosting_cost,
};

pub use hypothesis::{
    Regressor,
    WeakRegressor,
    WeightedAverage,
    CombinedRegressor,
};

pub use weak_learner::{
    WeakLearner,
    Basis,
    BasisTerm,
    DescentReport,
    FeatureSelection,
    GradientDescent,
    PolynomialRegression,
    PolynomialRegressionBuilder,
    PolynomialRegressor,
};

pub use booster::{
    Booster,
    RegBoost,
    RoundRecord,
    Termination,
    BoostPolicy,
    Policy,
};

pub use research::{
    Logger,
    Research,
    CutoffReport,
};
