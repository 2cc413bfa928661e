//! Reweighting rules of [`RegBoost`](super::RegBoost).
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::{
    error::Result,
    common::ErrorMetric,
    config::{BoostConfig, PolicyKind},
};


/// The part of a boosting round that differs between
/// the regression variants of AdaBoost.
///
/// A round computes `e[i] = per_sample_error(..)` for every example,
/// the error rate `r = error_rate(e, p)`, `β = beta(r)`,
/// and, if the learner is accepted,
/// multiplies the weight of the `i`th example by
/// `reweight_factor(e[i], β)`.
/// The controller applies the factors through
/// `log_reweight_factor`, shifted by their maximum,
/// since only their ratios matter after renormalization.
pub trait BoostPolicy {
    /// Returns the name of the rule.
    fn name(&self) -> &str;


    /// Error signal of a single prediction.
    fn per_sample_error(&self, row: usize, prediction: f64, target: f64)
        -> Result<f64>;


    /// Aggregate error rate under the distribution `dist`.
    fn error_rate(&self, errors: &[f64], dist: &[f64]) -> f64;


    /// `β` for the given error rate.
    fn beta(&self, error_rate: f64) -> f64;


    /// Combination coefficient of an accepted learner.
    fn comb_coef(&self, beta: f64) -> f64;


    /// Multiplicative update of the weight of an example.
    fn reweight_factor(&self, error: f64, beta: f64) -> f64;


    /// Natural logarithm of [`BoostPolicy::reweight_factor`].
    /// Override it if the factor itself may overflow.
    fn log_reweight_factor(&self, error: f64, beta: f64) -> f64 {
        self.reweight_factor(error, beta).ln()
    }


    /// Per-example error plugged into the line-search cost.
    fn line_search_metric(&self) -> ErrorMetric;
}


/// The reweighting rules shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Policy {
    /// AdaBoost.R. `β = (1 - r) / r`,
    /// the coefficient is `ln β`,
    /// and every weight is multiplied by `β^(e - 1/2)`.
    Exponential {
        /// Per-example error.
        metric: ErrorMetric,
    },

    /// AdaBoost.RT by Shrestha & Solomatine.
    /// An example is wrong iff its error exceeds `threshold`,
    /// `r` is the mass of the wrong examples, `β = r^power`,
    /// the coefficient is `ln(1 / β)`,
    /// and only the correct examples are multiplied by `β`.
    Threshold {
        /// Demarcation between correct and wrong predictions.
        threshold: f64,
        /// Exponent of the error rate.
        power: i32,
        /// Per-example error.
        metric: ErrorMetric,
    },

    /// Same as `Exponential`, but the error is the ramp
    /// that is `0` below `min_error`, `1` above `max_error`,
    /// and linear in between.
    LinearPenalty {
        /// Lower end of the ramp.
        min_error: f64,
        /// Upper end of the ramp.
        max_error: f64,
        /// Error fed into the ramp.
        metric: ErrorMetric,
    },
}


impl Default for Policy {
    fn default() -> Self {
        Self::Exponential { metric: ErrorMetric::Relative }
    }
}


impl Policy {
    /// Threshold policy with the relative error metric.
    pub fn threshold(threshold: f64, power: i32) -> Self {
        Self::Threshold { threshold, power, metric: ErrorMetric::Relative }
    }


    /// Linear-penalty policy with the absolute error metric.
    pub fn linear_penalty(min_error: f64, max_error: f64) -> Self {
        Self::LinearPenalty {
            min_error, max_error, metric: ErrorMetric::Absolute,
        }
    }


    /// Build the policy selected by `config`.
    ///
    /// `relative_error` picks the relative metric for
    /// the exponential and threshold rules;
    /// otherwise they use the squared and absolute metric respectively.
    /// The linear ramp is always on the absolute error.
    pub fn from_config(config: &BoostConfig) -> Self {
        match config.policy {
            PolicyKind::Exponential => {
                let metric = if config.relative_error {
                    ErrorMetric::Relative
                } else {
                    ErrorMetric::Squared
                };
                Self::Exponential { metric }
            },
            PolicyKind::Threshold => {
                let metric = if config.relative_error {
                    ErrorMetric::Relative
                } else {
                    ErrorMetric::Absolute
                };
                Self::Threshold {
                    threshold: config.threshold,
                    power: config.boost_power,
                    metric,
                }
            },
            PolicyKind::Linear => {
                Self::linear_penalty(config.min_error, config.max_error)
            },
        }
    }


    #[inline(always)]
    fn metric(&self) -> ErrorMetric {
        match self {
            Self::Exponential { metric }
            | Self::Threshold { metric, .. }
            | Self::LinearPenalty { metric, .. } => *metric,
        }
    }
}


impl BoostPolicy for Policy {
    fn name(&self) -> &str {
        match self {
            Self::Exponential { .. } => "AdaBoost.R",
            Self::Threshold { .. } => "AdaBoost.RT",
            Self::LinearPenalty { .. } => "AdaBoost.L",
        }
    }


    fn per_sample_error(&self, row: usize, prediction: f64, target: f64)
        -> Result<f64>
    {
        let error = self.metric().checked(row, prediction, target)?;
        let error = match *self {
            Self::LinearPenalty { min_error, max_error, .. } => {
                if error <= min_error {
                    0.0
                } else if error >= max_error {
                    1.0
                } else {
                    (error - min_error) / (max_error - min_error)
                }
            },
            _ => error,
        };
        Ok(error)
    }


    fn error_rate(&self, errors: &[f64], dist: &[f64]) -> f64 {
        match *self {
            Self::Threshold { threshold, .. } => {
                errors.iter()
                    .zip(dist)
                    .filter(|(e, _)| **e > threshold)
                    .map(|(_, p)| p)
                    .sum::<f64>()
            },
            _ => {
                errors.iter()
                    .zip(dist)
                    .map(|(e, p)| e * p)
                    .sum::<f64>()
            },
        }
    }


    fn beta(&self, error_rate: f64) -> f64 {
        match *self {
            Self::Threshold { power, .. } => error_rate.powi(power),
            _ => (1.0 - error_rate) / error_rate,
        }
    }


    fn comb_coef(&self, beta: f64) -> f64 {
        match self {
            Self::Threshold { .. } => (1.0 / beta).ln(),
            _ => beta.ln(),
        }
    }


    fn reweight_factor(&self, error: f64, beta: f64) -> f64 {
        match *self {
            Self::Threshold { threshold, .. } => {
                if error <= threshold { beta } else { 1.0 }
            },
            _ => beta.powf(error - 0.5),
        }
    }


    fn log_reweight_factor(&self, error: f64, beta: f64) -> f64 {
        match *self {
            Self::Threshold { threshold, .. } => {
                if error <= threshold { beta.ln() } else { 0.0 }
            },
            _ => (error - 0.5) * beta.ln(),
        }
    }


    fn line_search_metric(&self) -> ErrorMetric {
        self.metric()
    }
}


impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exponential { metric } => {
                write!(f, "{} ({metric})", self.name())
            },
            Self::Threshold { threshold, power, metric } => {
                write!(
                    f,
                    "{} ({metric}, threshold {threshold}, power {power})",
                    self.name()
                )
            },
            Self::LinearPenalty { min_error, max_error, metric } => {
                write!(
                    f,
                    "{} ({metric}, ramp [{min_error}, {max_error}])",
                    self.name()
                )
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_rule() {
        let policy = Policy::Exponential { metric: ErrorMetric::Absolute };
        let errors = [0.2, 0.4];
        let dist = [0.5, 0.5];
        let r = policy.error_rate(&errors, &dist);
        assert!((r - 0.3).abs() < 1e-12);

        let beta = policy.beta(r);
        assert!((beta - 0.7 / 0.3).abs() < 1e-12);
        assert!((policy.comb_coef(beta) - beta.ln()).abs() < 1e-12);
        // Examples with error above 1/2 gain weight.
        assert!(policy.reweight_factor(0.9, beta) > 1.0);
        assert!(policy.reweight_factor(0.1, beta) < 1.0);
    }

    #[test]
    fn threshold_rule() {
        let policy = Policy::threshold(0.2, 2);
        let errors = [
            policy.per_sample_error(0, 11.0, 10.0).unwrap(),
            policy.per_sample_error(1, 15.0, 10.0).unwrap(),
        ];
        let dist = [0.75, 0.25];
        let r = policy.error_rate(&errors, &dist);
        assert_eq!(r, 0.25);

        let beta = policy.beta(r);
        assert_eq!(beta, 0.0625);
        assert!((policy.comb_coef(beta) - 16f64.ln()).abs() < 1e-12);
        assert_eq!(policy.reweight_factor(errors[0], beta), beta);
        assert_eq!(policy.reweight_factor(errors[1], beta), 1.0);
    }

    #[test]
    fn log_factor_of_an_outlier_is_finite() {
        let policy = Policy::default();
        let beta = policy.beta(1e-6);
        // An outlier with relative error 200.
        assert!(policy.reweight_factor(200.0, beta).is_infinite());
        let log = policy.log_reweight_factor(200.0, beta);
        assert!(log.is_finite());
        assert!((log - 199.5 * beta.ln()).abs() < 1e-9);

        let policy = Policy::threshold(0.2, 2);
        let beta = policy.beta(0.25);
        assert_eq!(policy.log_reweight_factor(0.1, beta), beta.ln());
        assert_eq!(policy.log_reweight_factor(0.3, beta), 0.0);
    }

    #[test]
    fn linear_ramp() {
        let policy = Policy::linear_penalty(5.0, 25.0);
        let e = |pred| policy.per_sample_error(0, pred, 0.0).unwrap();
        assert_eq!(e(3.0), 0.0);
        assert_eq!(e(-15.0), 0.5);
        assert_eq!(e(40.0), 1.0);
    }

    #[test]
    fn relative_error_needs_nonzero_target() {
        let policy = Policy::threshold(0.2, 2);
        assert!(policy.per_sample_error(3, 1.0, 0.0).is_err());
    }
}
