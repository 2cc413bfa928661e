use crate::{
    error::Result,
    Sample,
};


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict` method.
pub trait Regressor {
    /// Predicts the target value of a raw feature vector.
    fn predict(&self, x: &[f64]) -> f64;


    /// Predicts the target value of the `row`th example of `sample`.
    fn predict_row(&self, sample: &Sample, row: usize) -> f64 {
        self.predict(sample[row].features())
    }


    /// Predicts the target values of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<f64> {
        sample.examples()
            .iter()
            .map(|ex| self.predict(ex.features()))
            .collect::<Vec<_>>()
    }
}


/// A regressor that can join a weighted committee.
///
/// The combination coefficient is set once,
/// after the booster accepts the hypothesis.
pub trait WeakRegressor: Regressor {
    /// Returns the combination coefficient.
    /// Returns `0.0` while it is not set.
    fn comb_coef(&self) -> f64;


    /// Set the combination coefficient.
    /// Returns `Err` if the coefficient is already set.
    fn set_comb_coef(&mut self, coef: f64) -> Result<()>;
}
