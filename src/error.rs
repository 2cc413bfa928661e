//! Defines the error type shared by every module of this crate.

/// Errors that may occur while configuring or running a boosting algorithm.
///
/// Non-convergence of an inner search is **not** an error;
/// searches return a best-effort result and log a warning instead.
/// Running out of acceptable weak learners is not an error either,
/// see [`Termination::Exhausted`](crate::booster::Termination).
#[derive(Debug, thiserror::Error)]
pub enum BoostError {
    /// The training sample has no examples or no features.
    #[error("The training sample is empty")]
    EmptySample,

    /// An example has a feature vector of a different length.
    #[error("Example {row} has {actual} features, expected {expected}")]
    DimensionMismatch {
        /// Row of the offending example.
        row: usize,
        /// Expected number of features.
        expected: usize,
        /// Actual number of features.
        actual: usize,
    },

    /// The requested feature subset cannot be drawn.
    #[error("Cannot select {subset_size} features out of {n_feature}")]
    InvalidSubsetSize {
        /// Requested subset size.
        subset_size: usize,
        /// Number of features in the sample.
        n_feature: usize,
    },

    /// The acceptance ceiling is outside of `(0, 1)`.
    #[error("Error ceiling must lie in (0, 1), got {0}")]
    InvalidErrorCeiling(f64),

    /// Some other parameter is out of its domain.
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Given value.
        value: f64,
        /// What the parameter must satisfy.
        reason: &'static str,
    },

    /// An example makes the error computation degenerate,
    /// e.g., a zero target under the relative error metric.
    #[error("Degenerate example at row {row}: {reason}")]
    DegenerateSample {
        /// Row of the offending example.
        row: usize,
        /// What went wrong.
        reason: &'static str,
    },

    /// Renormalization of the example weights found no mass.
    #[error("The total weight of the sample is zero or not finite")]
    ZeroTotalWeight,

    /// The combination coefficient of a weak regressor is write-once.
    #[error("The combination coefficient is already set to {0}")]
    CoefficientAlreadySet(f64),

    /// I/O failure while reading a config or writing a history file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON config.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, BoostError>;
