use rand::rngs::StdRng;

use crate::{
    error::Result,
    common::checker,
    Sample,
    WeakLearner,
};
use super::{
    feature_selection::FeatureSelection,
    gradient_descent::GradientDescent,
    polynomial_regressor::PolynomialRegressor,
};

use std::fmt;
use std::cell::RefCell;


/// This struct produces a [`PolynomialRegressor`]
/// for the given distribution.
///
/// Each call of [`WeakLearner::produce`] selects a fresh subset
/// and trains a new regressor on it.
/// Construct it with [`PolynomialRegressionBuilder`](super::PolynomialRegressionBuilder).
pub struct PolynomialRegression {
    subset_size: usize,
    quadratic: bool,
    selection: FeatureSelection,
    descent: GradientDescent,
    keep_trace: bool,
    fallback_to_all: bool,

    // Random subsets draw from this.
    rng: RefCell<StdRng>,
}


impl PolynomialRegression {
    #[inline]
    pub(super) fn from_components(
        subset_size: usize,
        quadratic: bool,
        selection: FeatureSelection,
        descent: GradientDescent,
        keep_trace: bool,
        fallback_to_all: bool,
        rng: StdRng,
    ) -> Self
    {
        Self {
            subset_size,
            quadratic,
            selection,
            descent,
            keep_trace,
            fallback_to_all,
            rng: RefCell::new(rng),
        }
    }


    /// Returns the subset size.
    #[inline]
    pub fn subset_size(&self) -> usize {
        self.subset_size
    }


    /// Returns the gradient descent parameters.
    #[inline]
    pub fn descent(&self) -> &GradientDescent {
        &self.descent
    }
}


impl WeakLearner for PolynomialRegression {
    type Hypothesis = PolynomialRegressor;


    fn name(&self) -> &str {
        "Polynomial Regression"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Subset size", format!("{}", self.subset_size)),
            ("Quadratic terms", format!("{}", self.quadratic)),
            ("Feature selection", format!("{}", self.selection)),
            ("Lambda", format!("{}", self.descent.get_lambda())),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        let n_feature = sample.shape().1;
        checker::check_subset_size(
            self.subset_size, n_feature, self.fallback_to_all
        )?;

        let selection = {
            let mut rng = self.rng.borrow_mut();
            self.selection.select(sample, self.subset_size, &mut *rng)
        };

        let mut regressor = PolynomialRegressor::with_initial_theta(
            selection.subset, self.quadratic, selection.linear_guess,
        )?
        .keep_trace(self.keep_trace);

        regressor.train(sample, &self.descent)?;
        Ok(regressor)
    }
}


impl fmt::Display for PolynomialRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Polynomial Regression\n\n\
            - Subset size: {}\n\
            - Quadratic terms: {}\n\
            - Feature selection: {}\n\
            - Lambda: {}\n\
            ----------\
            ",
            self.subset_size,
            self.quadratic,
            self.selection,
            self.descent.get_lambda(),
        )
    }
}
