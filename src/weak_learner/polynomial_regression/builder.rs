use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    error::Result,
    common::checker,
    config::BoostConfig,
    Sample,
};
use super::{
    feature_selection::FeatureSelection,
    gradient_descent::GradientDescent,
    polynomial_regression_algorithm::PolynomialRegression,
};


/// The number of selected features set as default.
pub const DEFAULT_SUBSET_SIZE: usize = 8;


/// A struct that builds `PolynomialRegression`.
/// `PolynomialRegressionBuilder` keeps parameters
/// for constructing `PolynomialRegression`.
///
/// # Example
///
/// ```no_run
/// use regboosts::prelude::*;
///
/// # let sample = Sample::from_rows(vec![vec![1.0, 2.0]], vec![3.0]).unwrap();
/// let weak_learner = PolynomialRegressionBuilder::new(&sample)
///     .subset_size(2)
///     .quadratic(false)
///     .selection(FeatureSelection::Correlation)
///     .lambda(0.01)
///     .seed(1234)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PolynomialRegressionBuilder {
    n_feature: usize,

    subset_size: usize,
    quadratic: bool,
    selection: FeatureSelection,

    descent: GradientDescent,

    keep_trace: bool,
    fallback_to_all: bool,
    seed: Option<u64>,
}


impl PolynomialRegressionBuilder {
    /// Construct a new instance of `PolynomialRegressionBuilder`.
    /// By default,
    /// `PolynomialRegressionBuilder` sets the parameters as follows;
    /// ```text
    /// subset_size: DEFAULT_SUBSET_SIZE == 8,
    /// quadratic: true,
    /// selection: FeatureSelection::Random,
    /// descent: GradientDescent::default(),
    /// fallback_to_all: true,
    /// ```
    pub fn new(sample: &Sample) -> Self {
        Self {
            n_feature: sample.shape().1,
            subset_size: DEFAULT_SUBSET_SIZE,
            quadratic: true,
            selection: FeatureSelection::Random,
            descent: GradientDescent::default(),
            keep_trace: false,
            fallback_to_all: true,
            seed: None,
        }
    }


    /// Take every weak-learner option from `config`.
    pub fn from_config(sample: &Sample, config: &BoostConfig) -> Self {
        let mut builder = Self::new(sample)
            .subset_size(config.subset_size)
            .quadratic(config.quadratic)
            .selection(config.selection)
            .lambda(config.lambda)
            .step_size(config.step_size)
            .tolerance(config.tolerance)
            .max_iter(config.max_iter);
        builder.seed = config.seed;
        builder
    }


    /// Set the number of selected features.
    pub fn subset_size(mut self, subset_size: usize) -> Self {
        self.subset_size = subset_size;
        self
    }


    /// Enable or disable the pairwise terms.
    pub fn quadratic(mut self, flag: bool) -> Self {
        self.quadratic = flag;
        self
    }


    /// Specify how to pick the subset.
    pub fn selection(mut self, selection: FeatureSelection) -> Self {
        self.selection = selection;
        self
    }


    /// Set the L2-regularization parameter.
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.descent = self.descent.lambda(lambda);
        self
    }


    /// Set the initial step size of the gradient descent.
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.descent = self.descent.step_size(step_size);
        self
    }


    /// Set the relative tolerance of the gradient descent.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.descent = self.descent.tolerance(tolerance);
        self
    }


    /// Set the iteration cap of the gradient descent.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.descent = self.descent.max_iter(max_iter);
        self
    }


    /// Set the number of consecutive small steps before stopping.
    pub fn patience(mut self, patience: usize) -> Self {
        self.descent = self.descent.patience(patience);
        self
    }


    /// Keep the coefficient trace of every produced regressor.
    pub fn keep_trace(mut self, flag: bool) -> Self {
        self.keep_trace = flag;
        self
    }


    /// If `true` (default), a subset size larger than
    /// the number of features selects all features.
    /// Otherwise such a size is an error.
    pub fn fallback_to_all(mut self, flag: bool) -> Self {
        self.fallback_to_all = flag;
        self
    }


    /// Seed the random number generator.
    /// Without a seed, the generator is seeded from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }


    /// Build a `PolynomialRegression`.
    /// This method consumes `self`.
    pub fn build(self) -> Result<PolynomialRegression> {
        checker::check_subset_size(
            self.subset_size, self.n_feature, self.fallback_to_all
        )?;
        self.descent.validate()?;

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let weak_learner = PolynomialRegression::from_components(
            self.subset_size,
            self.quadratic,
            self.selection,
            self.descent,
            self.keep_trace,
            self.fallback_to_all,
            rng,
        );
        Ok(weak_learner)
    }
}
