//! The core library for `Hypothesis` traits.

pub(crate) mod hypothesis_traits;
pub(crate) mod weighted_average;
pub(crate) mod combined_regressor;


pub use hypothesis_traits::{
    Regressor,
    WeakRegressor,
};

pub use weighted_average::WeightedAverage;
pub use combined_regressor::CombinedRegressor;
