use serde::{Serialize, Deserialize};

use crate::common::{checker, utils};
use crate::error::Result;


/// Default L2-regularization parameter.
pub const DEFAULT_LAMBDA: f64 = 0.0;
/// Default initial step size.
pub const DEFAULT_STEP_SIZE: f64 = 0.1;
/// Default relative tolerance for a "small" step.
pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// Default number of consecutive small steps before stopping.
pub const DEFAULT_PATIENCE: usize = 10;
/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 100_000;
/// Default lower bound of the step size.
pub const DEFAULT_MIN_STEP_SIZE: f64 = 1e-15;

const STEP_GROWTH: f64 = 1.2;
const STEP_SHRINK: f64 = 0.5;


/// Regularized batch gradient descent on the weighted squared error
/// ```text
/// E(θ) = sum_i p[i] 0.5 (θ·φ(x[i]) - y[i])^2 + 0.5 λ sum_{j>0} θ[j]^2
/// ```
/// where `p` is the distribution over the examples.
///
/// Each iteration moves along the unit-length negative gradient
/// with step size `α`.
/// An improving step is taken and grows `α` by `1.2`;
/// otherwise `α` is halved and the step is retried.
/// The descent stops after `patience` consecutive accepted steps
/// shorter than `tolerance * |θ|`,
/// or when the gradient vanishes.
/// `max_iter` and `min_step_size` bound the work on
/// pathological input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientDescent {
    lambda: f64,
    step_size: f64,
    tolerance: f64,
    patience: usize,
    max_iter: usize,
    min_step_size: f64,
}


/// The summary of a single run of [`GradientDescent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentReport {
    /// Number of trial steps.
    pub iterations: usize,
    /// Number of accepted steps.
    pub accepted: usize,
    /// Objective value at the final coefficients.
    pub objective: f64,
    /// `false` if a safety cap stopped the descent.
    /// The coefficients are still the best found so far.
    pub converged: bool,
}


impl Default for GradientDescent {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
            step_size: DEFAULT_STEP_SIZE,
            tolerance: DEFAULT_TOLERANCE,
            patience: DEFAULT_PATIENCE,
            max_iter: DEFAULT_MAX_ITER,
            min_step_size: DEFAULT_MIN_STEP_SIZE,
        }
    }
}


impl GradientDescent {
    /// Construct a new instance with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the L2-regularization parameter.
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }


    /// Set the initial step size.
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }


    /// Set the relative tolerance for a small step.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }


    /// Set the number of consecutive small steps before stopping.
    pub fn patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }


    /// Set the iteration cap.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }


    /// Set the lower bound of the step size.
    pub fn min_step_size(mut self, min_step_size: f64) -> Self {
        self.min_step_size = min_step_size;
        self
    }


    /// Returns the L2-regularization parameter.
    pub fn get_lambda(&self) -> f64 {
        self.lambda
    }


    /// Check the parameters.
    pub fn validate(&self) -> Result<()> {
        checker::check_non_negative("lambda", self.lambda)?;
        checker::check_positive("step_size", self.step_size)?;
        checker::check_positive("tolerance", self.tolerance)?;
        checker::check_positive("min_step_size", self.min_step_size)?;
        Ok(())
    }


    /// Weighted objective value at `theta`.
    fn objective(
        &self,
        design: &[Vec<f64>],
        target: &[f64],
        dist: &[f64],
        theta: &[f64],
    ) -> f64
    {
        let loss = design.iter()
            .zip(target.iter().zip(dist))
            .map(|(phi, (y, p))| {
                let diff = utils::inner_product(phi, theta) - y;
                0.5 * p * diff * diff
            })
            .sum::<f64>();
        let penalty = theta.iter()
            .skip(1)
            .map(|t| t * t)
            .sum::<f64>();
        loss + 0.5 * self.lambda * penalty
    }


    /// Returns the unit-length gradient at `theta` and its original norm.
    fn gradient(
        &self,
        design: &[Vec<f64>],
        target: &[f64],
        dist: &[f64],
        theta: &[f64],
    ) -> (Vec<f64>, f64)
    {
        let mut grad = vec![0.0; theta.len()];
        for (phi, (y, p)) in design.iter().zip(target.iter().zip(dist)) {
            let diff = utils::inner_product(phi, theta) - y;
            grad.iter_mut()
                .zip(phi)
                .for_each(|(g, b)| { *g += p * diff * b; });
        }
        // No penalty on the bias.
        grad.iter_mut()
            .zip(theta)
            .skip(1)
            .for_each(|(g, t)| { *g += self.lambda * t; });

        let norm = utils::l2_norm(&grad);
        if norm > 0.0 && norm.is_finite() {
            grad.iter_mut().for_each(|g| { *g /= norm; });
        }
        (grad, norm)
    }


    /// Minimize the objective over `theta` in place.
    ///
    /// `design[i]` is the basis vector of the `i`th example.
    /// If `trace` is given, the coefficients after each accepted step
    /// are appended to it.
    pub(crate) fn minimize(
        &self,
        design: &[Vec<f64>],
        target: &[f64],
        dist: &[f64],
        theta: &mut Vec<f64>,
        mut trace: Option<&mut Vec<Vec<f64>>>,
    ) -> DescentReport
    {
        let mut alpha = self.step_size;
        let mut error = self.objective(design, target, dist, theta);
        let (mut grad, mut norm) = self.gradient(design, target, dist, theta);

        let mut iterations = 0;
        let mut accepted = 0;
        let mut n_small_steps = 0;

        let converged = loop {
            if n_small_steps >= self.patience || norm == 0.0 {
                break true;
            }
            if !norm.is_finite() {
                tracing::warn!("gradient is not finite, stop the descent");
                break false;
            }
            if iterations >= self.max_iter {
                tracing::warn!(
                    max_iter = self.max_iter,
                    objective = error,
                    "gradient descent reached the iteration cap"
                );
                break false;
            }
            if alpha < self.min_step_size {
                tracing::warn!(
                    step_size = alpha,
                    objective = error,
                    "gradient descent step size underflow"
                );
                break false;
            }
            iterations += 1;

            let candidate = theta.iter()
                .zip(&grad)
                .map(|(t, g)| t - alpha * g)
                .collect::<Vec<_>>();
            let new_error = self.objective(design, target, dist, &candidate);

            if new_error < error {
                let step = theta.iter()
                    .zip(&candidate)
                    .map(|(a, b)| (a - b).powi(2))
                    .sum::<f64>()
                    .sqrt();
                *theta = candidate;
                let size = utils::l2_norm(theta);

                if step < self.tolerance * size {
                    n_small_steps += 1;
                } else {
                    n_small_steps = 0;
                }

                if let Some(trace) = trace.as_mut() {
                    trace.push(theta.clone());
                }

                error = new_error;
                (grad, norm) = self.gradient(design, target, dist, theta);
                alpha *= STEP_GROWTH;
                accepted += 1;
            } else {
                alpha *= STEP_SHRINK;
            }
        };

        DescentReport { iterations, accepted, objective: error, converged, }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> (Vec<Vec<f64>>, Vec<f64>, Vec<f64>) {
        // y = 2 + 3 x
        let design = (0..5)
            .map(|x| vec![1.0, x as f64])
            .collect::<Vec<_>>();
        let target = design.iter().map(|phi| 2.0 + 3.0 * phi[1]).collect();
        let dist = vec![0.2; 5];
        (design, target, dist)
    }

    #[test]
    fn optimal_start_is_converged() {
        let (design, target, dist) = line();
        let mut theta = vec![2.0, 3.0];
        let report = GradientDescent::new()
            .minimize(&design, &target, &dist, &mut theta, None);
        assert!(report.converged);
        assert_eq!(report.iterations, 0);
        assert_eq!(theta, vec![2.0, 3.0]);
    }

    #[test]
    fn iteration_cap_is_not_converged() {
        let (design, target, dist) = line();
        let mut theta = vec![0.0, 0.0];
        let gd = GradientDescent::new().max_iter(3);
        let start = gd.objective(&design, &target, &dist, &theta);

        let mut trace = Vec::new();
        let report = gd.minimize(
            &design, &target, &dist, &mut theta, Some(&mut trace)
        );
        assert!(!report.converged);
        assert_eq!(report.iterations, 3);
        assert_eq!(trace.len(), report.accepted);
        assert!(report.objective < start);
    }

    #[test]
    fn invalid_parameters() {
        assert!(GradientDescent::new().lambda(-1.0).validate().is_err());
        assert!(GradientDescent::new().step_size(0.0).validate().is_err());
        assert!(GradientDescent::new().validate().is_ok());
    }
}
