//! Defines some common functions used in this library.

/// Defines the per-example error metrics.
pub mod error_metric;

/// Defines the golden-section line search.
pub mod line_search;

/// Defines some useful functions such as inner product.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;


pub use error_metric::ErrorMetric;
pub use line_search::{
    GoldenSectionSearch,
    LineSearchResult,
    boosting_cost,
};
