use serde::{Serialize, Deserialize};
use crate::Regressor;


/// A struct that the boosting algorithms in this library return.
/// The prediction is the weighted average
/// ```text
/// f(x) = sum_t c[t] h[t](x) / sum_t c[t]
/// ```
/// of the hypotheses `h[t]` with combination coefficients `c[t]`.
/// An empty committee predicts `0`.
///
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedAverage<H> {
    /// Combination coefficients on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> Default for WeightedAverage<H> {
    fn default() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new(), }
    }
}


impl<H> WeightedAverage<H> {
    /// Construct an empty committee.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Append a pair `(weight, H)` to the current committee.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if the committee has no hypothesis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the committee
    /// into the two vectors `Vec<f64>` and `Vec<H>`.
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> WeightedAverage<H>
    where H: Regressor,
{
    /// Returns the committee prediction after each prefix of hypotheses,
    /// i.e., the `t`th item is the prediction of the first `t + 1`
    /// hypotheses.
    pub fn cumulative_predictions(&self, x: &[f64]) -> Vec<f64> {
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .map(|(w, h)| {
                numerator += w * h.predict(x);
                denominator += w;
                average(numerator, denominator)
            })
            .collect()
    }
}


impl<H> Regressor for WeightedAverage<H>
    where H: Regressor,
{
    fn predict(&self, x: &[f64]) -> f64 {
        let (numerator, denominator) = self.weights.iter()
            .zip(&self.hypotheses[..])
            .fold((0.0, 0.0), |(num, den), (w, h)| {
                (num + w * h.predict(x), den + w)
            });
        average(numerator, denominator)
    }
}


#[inline(always)]
fn average(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 { 0.0 } else { numerator / denominator }
}


#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);
    impl Regressor for Constant {
        fn predict(&self, _x: &[f64]) -> f64 { self.0 }
    }

    #[test]
    fn empty_committee_predicts_zero() {
        let f = WeightedAverage::<Constant>::new();
        assert_eq!(f.predict(&[1.0, 2.0]), 0.0);
        assert!(f.cumulative_predictions(&[1.0]).is_empty());
    }

    #[test]
    fn weighted_average() {
        let mut f = WeightedAverage::new();
        f.push(1.0, Constant(2.0));
        f.push(3.0, Constant(6.0));
        assert!((f.predict(&[0.0]) - 5.0).abs() < 1e-12);
        assert_eq!(f.cumulative_predictions(&[0.0]), vec![2.0, 5.0]);
    }
}
