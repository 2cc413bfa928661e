use serde::{Serialize, Deserialize};


/// A training example `(x, y)` with its current importance.
///
/// `weight` is the unnormalized importance accumulated over the rounds,
/// and `relative_weight` is `weight / sum(weight)`.
/// Both are written only by [`Sample`](crate::Sample) methods
/// that the booster calls between rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    features: Vec<f64>,
    target: f64,
    weight: f64,
    relative_weight: f64,
    test_cutoffs: Option<(f64, f64)>,
}


impl Example {
    /// Construct a new example with zero weight.
    /// The weights are initialized when the example joins a
    /// [`Sample`](crate::Sample).
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        Self {
            features,
            target,
            weight: 0.0,
            relative_weight: 0.0,
            test_cutoffs: None,
        }
    }


    /// Attach a pair of betting cutoffs `(low, high)`.
    /// The cutoffs are used only by
    /// [`CutoffReport`](crate::research::CutoffReport).
    pub fn with_cutoffs(mut self, low: f64, high: f64) -> Self {
        self.test_cutoffs = Some((low, high));
        self
    }


    /// Returns the feature vector.
    #[inline]
    pub fn features(&self) -> &[f64] {
        &self.features[..]
    }


    /// Returns the target value.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }


    /// Returns the unnormalized weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }


    /// Returns the normalized weight.
    #[inline]
    pub fn relative_weight(&self) -> f64 {
        self.relative_weight
    }


    /// Returns the betting cutoffs, if any.
    #[inline]
    pub fn test_cutoffs(&self) -> Option<(f64, f64)> {
        self.test_cutoffs
    }


    #[inline]
    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }


    #[inline]
    pub(crate) fn set_relative_weight(&mut self, relative_weight: f64) {
        self.relative_weight = relative_weight;
    }


    #[inline]
    pub(crate) fn features_mut(&mut self) -> &mut [f64] {
        &mut self.features[..]
    }


    #[inline]
    pub(crate) fn set_target(&mut self, target: f64) {
        self.target = target;
    }
}
