//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // Regression -------------------------------
    RegBoost,
    Policy,
    BoostPolicy,
    Termination,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Polynomial regression
    PolynomialRegression,
    PolynomialRegressionBuilder,
    PolynomialRegressor,
    FeatureSelection,
};


pub use crate::hypothesis::{
    Regressor,
    WeakRegressor,
    WeightedAverage,
    CombinedRegressor,
};


pub use crate::sample::{
    Example,
    Sample,
    Transformer,
};


pub use crate::common::ErrorMetric;
pub use crate::config::BoostConfig;
pub use crate::error::BoostError;
