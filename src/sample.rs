//! Struct `Sample` holds the training examples together with
//! their (relative) weights.

// Provides a single training example.
pub(crate) mod example;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides the min-max transformer.
pub(crate) mod transformer;

// Provides weighted univariate regression estimates.
pub(crate) mod correlation;


pub use example::Example;
pub use sample_struct::Sample;
pub use transformer::{
    Transformer,
    NORMALIZED_LOWER,
    NORMALIZED_UPPER,
};
pub use correlation::{
    Correlation,
    estimate_correlations,
};
