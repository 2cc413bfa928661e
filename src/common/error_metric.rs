use serde::{Serialize, Deserialize};
use std::fmt;

use crate::error::{BoostError, Result};


/// Per-example error between a prediction and its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMetric {
    /// `|f(x) - y|`.
    Absolute,

    /// `|f(x) - y| / |y|`.
    /// Undefined for a zero target.
    Relative,

    /// `(f(x) - y)^2`.
    Squared,
}


impl ErrorMetric {
    /// The name of the metric.
    pub fn name(&self) -> &str {
        match self {
            Self::Absolute => "Absolute error",
            Self::Relative => "Relative error",
            Self::Squared  => "Squared error",
        }
    }


    /// Error value for a single point.
    /// May be infinite or `NaN` for degenerate input,
    /// see [`ErrorMetric::checked`].
    #[inline]
    pub fn eval_at_point(&self, prediction: f64, target: f64) -> f64 {
        match self {
            Self::Absolute => (prediction - target).abs(),
            Self::Relative => (prediction - target).abs() / target.abs(),
            Self::Squared  => (prediction - target).powi(2),
        }
    }


    /// Error value for the example at `row`.
    /// Returns `Err` instead of a non-finite value.
    #[inline]
    pub fn checked(&self, row: usize, prediction: f64, target: f64)
        -> Result<f64>
    {
        if *self == Self::Relative && target == 0.0 {
            return Err(BoostError::DegenerateSample {
                row, reason: "zero target under the relative error metric",
            });
        }
        let error = self.eval_at_point(prediction, target);
        if error.is_finite() {
            Ok(error)
        } else {
            Err(BoostError::DegenerateSample {
                row, reason: "non-finite prediction error",
            })
        }
    }


    /// Mean error over the given predictions.
    pub fn mean(&self, predictions: &[f64], target: &[f64]) -> Result<f64> {
        let n_items = predictions.len();
        if n_items != target.len() {
            return Err(BoostError::DimensionMismatch {
                row: n_items.min(target.len()),
                expected: target.len(),
                actual: n_items,
            });
        }

        let mut total = 0.0;
        for (row, (&p, &y)) in predictions.iter().zip(target).enumerate() {
            total += self.checked(row, p, y)?;
        }
        Ok(total / n_items as f64)
    }
}


impl fmt::Display for ErrorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_error_rejects_zero_target() {
        let metric = ErrorMetric::Relative;
        assert!((metric.checked(0, 3.0, 2.0).unwrap() - 0.5).abs() < 1e-12);
        assert!(matches!(
            metric.checked(7, 1.0, 0.0),
            Err(BoostError::DegenerateSample { row: 7, .. })
        ));
        // The other metrics do not care.
        assert_eq!(ErrorMetric::Squared.checked(0, 1.0, 0.0).unwrap(), 1.0);
    }
}
