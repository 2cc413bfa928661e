use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::{
    error::{BoostError, Result},
    common::utils,
    Sample,
    Regressor,
    WeakRegressor,
};
use super::basis::{Basis, BasisTerm};
use super::gradient_descent::{GradientDescent, DescentReport};


/// A polynomial regressor over a feature subset,
/// `f(x) = θ · φ(x)` where `φ` is the [`Basis`] of the subset.
///
/// The subset and the basis are fixed at construction.
/// `θ` changes only through [`PolynomialRegressor::train`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialRegressor {
    subset: Vec<usize>,
    basis: Basis,
    theta: Vec<f64>,
    comb_coef: Option<f64>,

    #[serde(skip)]
    keep_trace: bool,
    #[serde(skip)]
    trace: Vec<Vec<f64>>,
}


impl PolynomialRegressor {
    /// Construct a regressor over `subset` with all coefficients zero.
    pub fn new(subset: Vec<usize>, quadratic: bool) -> Self {
        let basis = Basis::new(subset.len(), quadratic);
        let theta = vec![0.0; basis.len()];
        Self {
            subset,
            basis,
            theta,
            comb_coef: None,
            keep_trace: false,
            trace: Vec::new(),
        }
    }


    /// Construct a regressor over `subset` starting from `theta`.
    ///
    /// `theta` may cover the bias and linear terms only,
    /// in which case the quadratic coefficients start at zero.
    /// Returns `Err` if `theta` is longer than the basis
    /// or shorter than its linear part.
    pub fn with_initial_theta(
        subset: Vec<usize>,
        quadratic: bool,
        mut theta: Vec<f64>,
    ) -> Result<Self>
    {
        let mut regressor = Self::new(subset, quadratic);
        let len = regressor.basis.len();
        let linear = 1 + regressor.subset.len();
        if theta.len() > len || theta.len() < linear {
            return Err(BoostError::DimensionMismatch {
                row: 0, expected: len, actual: theta.len(),
            });
        }
        theta.resize(len, 0.0);
        regressor.theta = theta;
        Ok(regressor)
    }


    /// Record `θ` after every accepted gradient step
    /// during the next call of [`PolynomialRegressor::train`].
    pub fn keep_trace(mut self, flag: bool) -> Self {
        self.keep_trace = flag;
        self
    }


    /// Fit `θ` to `sample` under its current relative weights.
    ///
    /// Non-convergence is not an error;
    /// check [`DescentReport::converged`].
    pub fn train(&mut self, sample: &Sample, descent: &GradientDescent)
        -> Result<DescentReport>
    {
        let n_feature = sample.shape().1;
        if let Some(&i) = self.subset.iter().find(|&&i| i >= n_feature) {
            return Err(BoostError::InvalidSubsetSize {
                subset_size: i + 1, n_feature,
            });
        }

        let design = sample.examples()
            .par_iter()
            .map(|ex| self.basis.expand(ex.features(), &self.subset))
            .collect::<Vec<_>>();
        let target = sample.target();
        let dist = sample.relative_weights();

        self.trace.clear();
        let trace = self.keep_trace.then_some(&mut self.trace);
        let report = descent.minimize(
            &design, &target, &dist, &mut self.theta, trace
        );

        tracing::debug!(
            subset = ?self.subset,
            iterations = report.iterations,
            accepted = report.accepted,
            objective = report.objective,
            converged = report.converged,
            "trained a polynomial regressor"
        );
        if !report.converged {
            tracing::warn!(
                subset = ?self.subset,
                "gradient descent stopped before convergence"
            );
        }
        Ok(report)
    }


    /// Returns `θ · φ(x)`.
    #[inline]
    pub fn hypothesis(&self, x: &[f64]) -> f64 {
        let phi = self.basis.expand(x, &self.subset);
        utils::inner_product(&phi, &self.theta)
    }


    /// Returns the coefficient vector.
    #[inline]
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }


    /// Returns the selected features.
    #[inline]
    pub fn subset(&self) -> &[usize] {
        &self.subset
    }


    /// Returns the basis.
    #[inline]
    pub fn basis(&self) -> &Basis {
        &self.basis
    }


    /// Returns the coefficient snapshots of the last training run.
    /// Empty unless the trace is kept.
    #[inline]
    pub fn trace(&self) -> &[Vec<f64>] {
        &self.trace
    }


    /// Returns the term at position `index` of the basis.
    pub fn basis_term(&self, index: usize) -> Option<BasisTerm> {
        self.basis.term(index, &self.subset)
    }


    /// Returns the index of the basis term with
    /// the largest positive total contribution `sum_i θ[j] φ[j](x[i])`
    /// over `sample`, if any.
    pub fn major_basis(&self, sample: &Sample) -> Option<usize> {
        let mut total = vec![0.0; self.basis.len()];
        let mut phi = Vec::with_capacity(self.basis.len());
        for ex in sample.examples() {
            self.basis.expand_into(ex.features(), &self.subset, &mut phi);
            total.iter_mut()
                .zip(phi.iter().zip(&self.theta))
                .for_each(|(s, (p, t))| { *s += p * t; });
        }

        total.into_iter()
            .enumerate()
            .filter(|(_, s)| *s > 0.0)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(j, _)| j)
    }
}


impl Regressor for PolynomialRegressor {
    fn predict(&self, x: &[f64]) -> f64 {
        self.hypothesis(x)
    }
}


impl WeakRegressor for PolynomialRegressor {
    fn comb_coef(&self) -> f64 {
        self.comb_coef.unwrap_or(0.0)
    }


    fn set_comb_coef(&mut self, coef: f64) -> Result<()> {
        if let Some(old) = self.comb_coef {
            return Err(BoostError::CoefficientAlreadySet(old));
        }
        self.comb_coef = Some(coef);
        Ok(())
    }
}


impl fmt::Display for PolynomialRegressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.4}", self.theta[0])?;
        for (j, t) in self.theta.iter().enumerate().skip(1) {
            if let Some(term) = self.basis_term(j) {
                write!(f, " {t:+.4} {term}")?;
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_guess_is_padded() {
        let h = PolynomialRegressor::with_initial_theta(
            vec![0, 1], true, vec![1.0, 2.0, 3.0]
        ).unwrap();
        assert_eq!(h.theta(), &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
        assert_eq!(h.hypothesis(&[1.0, 1.0]), 6.0);

        let err = PolynomialRegressor::with_initial_theta(
            vec![0, 1], false, vec![1.0; 4]
        );
        assert!(err.is_err());
    }

    #[test]
    fn comb_coef_is_write_once() {
        let mut h = PolynomialRegressor::new(vec![0], false);
        assert_eq!(h.comb_coef(), 0.0);
        h.set_comb_coef(0.7).unwrap();
        assert!(matches!(
            h.set_comb_coef(0.1),
            Err(BoostError::CoefficientAlreadySet(c)) if c == 0.7
        ));
        assert_eq!(h.comb_coef(), 0.7);
    }

    #[test]
    fn major_basis_picks_the_largest_contribution() {
        let rows = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
        let sample = Sample::from_rows(rows, vec![0.0, 0.0]).unwrap();
        let h = PolynomialRegressor::with_initial_theta(
            vec![0, 1], false, vec![-5.0, 1.0, 2.0]
        ).unwrap();
        // contributions: bias -10, x0 3, x1 6
        assert_eq!(h.major_basis(&sample), Some(2));
        assert_eq!(h.basis_term(2), Some(BasisTerm::Linear(1)));
    }
}
