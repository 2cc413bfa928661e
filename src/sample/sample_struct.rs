use std::ops::Index;

use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::error::{BoostError, Result};
use super::example::Example;


/// Struct `Sample` holds a batch of training examples.
///
/// Every example carries a weight and a relative weight.
/// After [`Sample::new`] and after every reweighting step,
/// the relative weights form a probability distribution
/// over the examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    examples: Vec<Example>,
    n_feature: usize,
}


impl Sample {
    /// Construct a new `Sample` from the given examples.
    /// All the examples get the uniform weight `1 / n_sample`.
    ///
    /// Returns `Err` if there are no examples,
    /// the examples have no feature,
    /// or the feature vectors differ in length.
    pub fn new(examples: Vec<Example>) -> Result<Self> {
        let n_feature = examples.first()
            .map(|ex| ex.features().len())
            .ok_or(BoostError::EmptySample)?;

        if n_feature == 0 {
            return Err(BoostError::EmptySample);
        }

        for (row, ex) in examples.iter().enumerate() {
            let actual = ex.features().len();
            if actual != n_feature {
                return Err(BoostError::DimensionMismatch {
                    row, expected: n_feature, actual,
                });
            }
            let finite = ex.target().is_finite()
                && ex.features().iter().all(|x| x.is_finite());
            if !finite {
                return Err(BoostError::DegenerateSample {
                    row, reason: "non-finite feature or target value",
                });
            }
        }

        let mut sample = Self { examples, n_feature };
        sample.reset_uniform();
        Ok(sample)
    }


    /// Construct a new `Sample` from row vectors and targets.
    pub fn from_rows(rows: Vec<Vec<f64>>, target: Vec<f64>) -> Result<Self> {
        if rows.len() != target.len() {
            return Err(BoostError::DimensionMismatch {
                row: rows.len().min(target.len()),
                expected: rows.len(),
                actual: target.len(),
            });
        }
        let examples = rows.into_iter()
            .zip(target)
            .map(|(x, y)| Example::new(x, y))
            .collect::<Vec<_>>();
        Self::new(examples)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.n_feature)
    }


    /// Returns the slice of examples.
    #[inline]
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns the target values.
    pub fn target(&self) -> Vec<f64> {
        self.examples.iter()
            .map(|ex| ex.target())
            .collect()
    }


    /// Returns the current relative weights.
    pub fn relative_weights(&self) -> Vec<f64> {
        self.examples.iter()
            .map(|ex| ex.relative_weight())
            .collect()
    }


    /// Set every weight and relative weight to `1 / n_sample`.
    pub fn reset_uniform(&mut self) {
        let uni = 1.0 / self.examples.len() as f64;
        self.examples.par_iter_mut()
            .for_each(|ex| {
                ex.set_weight(uni);
                ex.set_relative_weight(uni);
            });
    }


    /// Multiply the weight of the `i`th example by `factors[i]`
    /// and renormalize.
    /// The weights are rescaled to sum to `1` as well,
    /// so they stay representable over any number of rounds.
    ///
    /// Returns `Err` if the new total weight is zero or not finite,
    /// or if the lengths differ.
    /// In that case, the weights are left untouched.
    pub(crate) fn reweight(&mut self, factors: &[f64]) -> Result<()> {
        if factors.len() != self.examples.len() {
            return Err(BoostError::DimensionMismatch {
                row: factors.len().min(self.examples.len()),
                expected: self.examples.len(),
                actual: factors.len(),
            });
        }

        let total = self.examples.iter()
            .zip(factors)
            .map(|(ex, f)| ex.weight() * f)
            .sum::<f64>();

        let valid = factors.iter().all(|f| f.is_finite() && *f >= 0.0);
        if !valid || !total.is_finite() || total <= 0.0 {
            return Err(BoostError::ZeroTotalWeight);
        }

        self.examples.par_iter_mut()
            .zip(factors)
            .for_each(|(ex, f)| {
                let weight = ex.weight() * f / total;
                ex.set_weight(weight);
                ex.set_relative_weight(weight);
            });
        Ok(())
    }


    #[inline]
    pub(crate) fn examples_mut(&mut self) -> &mut [Example] {
        &mut self.examples[..]
    }
}


impl Index<usize> for Sample {
    type Output = Example;
    fn index(&self, row: usize) -> &Self::Output {
        &self.examples[row]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Sample {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        Sample::from_rows(rows, vec![1.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn uniform_after_construction() {
        let sample = toy();
        let sum = sample.relative_weights().iter().sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(sample.examples().iter().all(|ex| ex.weight() == 1.0 / 3.0));
    }

    #[test]
    fn reweight_keeps_distribution() {
        let mut sample = toy();
        sample.reweight(&[0.5, 2.0, 1.0]).unwrap();
        let dist = sample.relative_weights();
        assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(dist[1] > dist[2] && dist[2] > dist[0]);
    }

    #[test]
    fn weights_stay_representable() {
        let mut sample = toy();
        for _ in 0..100 {
            sample.reweight(&[1e-5, 1e-5, 2e-5]).unwrap();
        }
        let weights = sample.examples()
            .iter()
            .map(|ex| ex.weight())
            .collect::<Vec<_>>();
        assert_eq!(weights, sample.relative_weights());
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(weights.iter().all(|&w| w > 0.0));
    }

    #[test]
    fn zero_mass_is_an_error() {
        let mut sample = toy();
        let before = sample.relative_weights();
        assert!(matches!(
            sample.reweight(&[0.0, 0.0, 0.0]),
            Err(BoostError::ZeroTotalWeight)
        ));
        assert_eq!(before, sample.relative_weights());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Sample::from_rows(rows, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, BoostError::DimensionMismatch { row: 1, .. }));
    }
}
