use rand::Rng;
use rand::seq::index;
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::sample::{Sample, estimate_correlations};


/// How a weak regressor picks its feature subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSelection {
    /// `k` distinct features drawn uniformly at random.
    Random,

    /// The `k` features with the largest weighted univariate slope
    /// against the target.
    /// See [`estimate_correlations`].
    Correlation,
}


/// A selected subset with the initial guess of the linear part
/// of the coefficient vector.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Selection {
    pub(crate) subset: Vec<usize>,
    /// `[bias, w_1, ..., w_k]`.
    pub(crate) linear_guess: Vec<f64>,
}


impl FeatureSelection {
    /// Select `subset_size` features of `sample`.
    /// If `subset_size >= n_feature`, all features are used
    /// in index order.
    pub(crate) fn select<R>(
        &self,
        sample: &Sample,
        subset_size: usize,
        rng: &mut R,
    ) -> Selection
        where R: Rng + ?Sized,
    {
        let n_feature = sample.shape().1;
        let k = subset_size.min(n_feature);

        match self {
            Self::Random => {
                let subset = if k == n_feature {
                    (0..n_feature).collect::<Vec<_>>()
                } else {
                    index::sample(rng, n_feature, k).into_vec()
                };
                let linear_guess = vec![0.0; k + 1];
                Selection { subset, linear_guess }
            },
            Self::Correlation => {
                let mut estimates = estimate_correlations(sample);
                if k == n_feature {
                    estimates.sort_by_key(|c| c.index);
                }
                estimates.truncate(k);

                // Average of the `k` univariate fits.
                let kf = k as f64;
                let bias = estimates.iter()
                    .map(|c| c.offset)
                    .sum::<f64>() / kf;
                let mut linear_guess = Vec::with_capacity(k + 1);
                linear_guess.push(bias);
                linear_guess.extend(estimates.iter().map(|c| c.factor / kf));

                let subset = estimates.into_iter()
                    .map(|c| c.index)
                    .collect();
                Selection { subset, linear_guess }
            },
        }
    }
}


impl fmt::Display for FeatureSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "Uniformly random",
            Self::Correlation => "Correlation ranked",
        };
        write!(f, "{name}")
    }
}
