//! Defines the configuration surface of a boosting run.
//!
//! `BoostConfig` is plain data;
//! [`RegBoost::from_config`](crate::RegBoost::from_config) and
//! [`PolynomialRegressionBuilder::from_config`](crate::PolynomialRegressionBuilder::from_config)
//! turn it into the actual components.

use serde::{Serialize, Deserialize};

use std::fs;
use std::path::Path;

use crate::{
    error::{BoostError, Result},
    common::checker,
    FeatureSelection,
};


/// Selects the reweighting rule of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// AdaBoost.R style exponential reweighting.
    Exponential,
    /// AdaBoost.RT style thresholded reweighting.
    Threshold,
    /// Exponential reweighting of a linear error ramp.
    Linear,
}


/// Every recognized option of a boosting run.
///
/// Missing fields take their default values,
/// so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    /// Number of accepted weak learners to collect.
    pub max_learners: usize,
    /// Number of consecutive rejections before giving up.
    pub max_bad_learners: usize,
    /// A weak learner is accepted iff its error rate is below this value.
    pub error_ceiling: f64,

    /// Number of features each weak learner uses.
    pub subset_size: usize,
    /// Use the pairwise terms of the selected features.
    pub quadratic: bool,
    /// How the weak learner picks its features.
    pub selection: FeatureSelection,

    /// Reweighting rule.
    pub policy: PolicyKind,
    /// Relative error above which an example counts as wrong
    /// (threshold policy).
    pub threshold: f64,
    /// Exponent of the error rate (threshold policy).
    pub boost_power: i32,
    /// Error below which the linear ramp is zero.
    pub min_error: f64,
    /// Error above which the linear ramp is one.
    pub max_error: f64,

    /// Min-max normalize the sample before training.
    pub normalize: bool,
    /// Report relative errors instead of absolute errors.
    pub relative_error: bool,
    /// Pick combination coefficients by golden-section search.
    pub line_search: bool,

    /// L2-regularization parameter of the weak learner.
    pub lambda: f64,
    /// Initial step size of the gradient descent.
    pub step_size: f64,
    /// Relative tolerance of the gradient descent.
    pub tolerance: f64,
    /// Iteration cap of the gradient descent.
    pub max_iter: usize,

    /// Seed of the feature selection.
    pub seed: Option<u64>,
}


impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            max_learners: 100,
            max_bad_learners: 200,
            error_ceiling: 0.495,

            subset_size: 8,
            quadratic: true,
            selection: FeatureSelection::Random,

            policy: PolicyKind::Exponential,
            threshold: 0.19,
            boost_power: 2,
            min_error: 5.0,
            max_error: 25.0,

            normalize: false,
            relative_error: true,
            line_search: false,

            lambda: 0.0,
            step_size: 0.1,
            tolerance: 0.01,
            max_iter: 100_000,

            seed: None,
        }
    }
}


impl BoostConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        Ok(config)
    }


    /// Read a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }


    /// Check the options that do not depend on the sample.
    pub fn validate(&self) -> Result<()> {
        checker::check_error_ceiling(self.error_ceiling)?;
        if self.subset_size == 0 {
            return Err(BoostError::InvalidSubsetSize {
                subset_size: 0, n_feature: 0,
            });
        }
        checker::check_non_negative("threshold", self.threshold)?;
        checker::check_positive("boost_power", self.boost_power as f64)?;
        checker::check_non_negative("min_error", self.min_error)?;
        if self.max_error <= self.min_error {
            return Err(BoostError::InvalidParameter {
                name: "max_error",
                value: self.max_error,
                reason: "must be larger than min_error",
            });
        }
        checker::check_non_negative("lambda", self.lambda)?;
        checker::check_positive("step_size", self.step_size)?;
        checker::check_positive("tolerance", self.tolerance)?;
        Ok(())
    }
}
