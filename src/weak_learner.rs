//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines the polynomial weak regressor.
pub mod polynomial_regression;


pub use self::core::WeakLearner;

pub use self::polynomial_regression::{
    Basis,
    BasisTerm,
    DescentReport,
    FeatureSelection,
    GradientDescent,
    PolynomialRegression,
    PolynomialRegressionBuilder,
    PolynomialRegressor,
};
