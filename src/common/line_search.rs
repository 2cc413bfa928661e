//! Golden-section minimization over a bounded interval.
use serde::{Serialize, Deserialize};

use crate::error::{BoostError, Result};


/// `(sqrt(5) - 1) / 2`.
const GOLDEN_R: f64 = 0.618_033_988_749_894_9;
const GOLDEN_C: f64 = 1.0 - GOLDEN_R;

/// Default lower end of the search interval.
pub const DEFAULT_LOWER: f64 = 0.01;
/// Default upper end of the search interval.
pub const DEFAULT_UPPER: f64 = 1.0;
/// Default relative tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// Default iteration budget.
pub const DEFAULT_MAX_ITER: usize = 100;


/// The output of [`GoldenSectionSearch::minimize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchResult {
    /// Midpoint of the final bracket.
    pub coef: f64,
    /// `false` if the iteration budget ran out
    /// before the bracket became narrow enough.
    /// `coef` is still the best available estimate.
    pub converged: bool,
    /// Number of bracket reductions.
    pub iterations: usize,
}


/// Derivative-free minimization of a unimodal function
/// on `[lower, upper]`.
///
/// The bracket `[x0, x3]` holds two interior points `x1 < x2`
/// placed at golden-ratio positions.
/// Each iteration drops the sub-interval that cannot contain
/// the minimum and evaluates one new point.
/// The search stops when
/// ```text
/// |x3 - x0| <= tolerance * (|x1| + |x2|)
/// ```
/// and returns the midpoint of the bracket.
/// Unimodality is assumed, not verified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoldenSectionSearch {
    lower: f64,
    upper: f64,
    tolerance: f64,
    max_iter: usize,
}


impl Default for GoldenSectionSearch {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            tolerance: DEFAULT_TOLERANCE,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}


impl GoldenSectionSearch {
    /// Construct a new instance with the default parameters:
    /// ```text
    /// lower: 0.01, upper: 1.0, tolerance: 0.01, max_iter: 100
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the search interval.
    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }


    /// Set the relative tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }


    /// Set the iteration budget.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }


    /// Check the parameters.
    pub fn validate(&self) -> Result<()> {
        let valid_bounds = self.lower.is_finite()
            && self.upper.is_finite()
            && self.lower > 0.0
            && self.lower < self.upper;
        if !valid_bounds {
            return Err(BoostError::InvalidParameter {
                name: "bounds",
                value: self.lower,
                reason: "the interval must satisfy 0 < lower < upper",
            });
        }
        crate::common::checker::check_positive("tolerance", self.tolerance)
    }


    /// Minimize `f` over the interval.
    pub fn minimize<F>(&self, f: F) -> LineSearchResult
        where F: Fn(f64) -> f64,
    {
        let (a, c) = (self.lower, self.upper);
        let b = a + GOLDEN_C * (c - a);

        let mut x0 = a;
        let mut x3 = c;
        let (mut x1, mut x2) = if (c - b).abs() > (b - a).abs() {
            (b, b + GOLDEN_C * (c - b))
        } else {
            (b - GOLDEN_C * (b - a), b)
        };

        let mut f1 = f(x1);
        let mut f2 = f(x2);

        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.max_iter {
            if (x3 - x0).abs() <= self.tolerance * (x1.abs() + x2.abs()) {
                converged = true;
                break;
            }
            iterations += 1;

            if f2 < f1 {
                x0 = x1;
                x1 = x2;
                x2 = GOLDEN_R * x2 + GOLDEN_C * x3;
                f1 = f2;
                f2 = f(x2);
            } else {
                x3 = x2;
                x2 = x1;
                x1 = GOLDEN_R * x1 + GOLDEN_C * x0;
                f2 = f1;
                f1 = f(x1);
            }
        }

        if !converged {
            tracing::warn!(
                iterations,
                width = (x3 - x0).abs(),
                "golden-section search hit its iteration budget"
            );
        }

        LineSearchResult {
            coef: 0.5 * (x0 + x3),
            converged,
            iterations,
        }
    }
}


/// Returns the boosting cost functional
/// ```text
/// J(c) = sum_i w[i] * c^(-1/2) * exp(c * e[i])
/// ```
/// for weights `w` and per-example errors `e`.
pub fn boosting_cost<'a>(weights: &'a [f64], errors: &'a [f64])
    -> impl Fn(f64) -> f64 + 'a
{
    move |c: f64| {
        let scale = c.powf(-0.5);
        weights.iter()
            .zip(errors)
            .map(|(w, e)| w * scale * (c * e).exp())
            .sum::<f64>()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parabola() {
        let result = GoldenSectionSearch::new()
            .minimize(|c| (c - 0.37).powi(2));
        assert!(result.converged);
        assert!((result.coef - 0.37).abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn boundary_minimum() {
        let result = GoldenSectionSearch::new().minimize(|c| c);
        assert!(result.converged);
        assert!((result.coef - DEFAULT_LOWER).abs() < DEFAULT_TOLERANCE);
    }

    #[test]
    fn budget_exhaustion_is_best_effort() {
        let result = GoldenSectionSearch::new()
            .max_iter(2)
            .minimize(|c| (c - 0.5).powi(2));
        assert!(!result.converged);
        assert_eq!(result.iterations, 2);
        assert!((DEFAULT_LOWER..=DEFAULT_UPPER).contains(&result.coef));
    }
}
