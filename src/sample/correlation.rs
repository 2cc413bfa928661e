use serde::{Serialize, Deserialize};

use super::sample_struct::Sample;


/// Weighted univariate linear fit `y ≈ offset + factor * x[index]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    /// Feature index.
    pub index: usize,
    /// Intercept of the fit.
    pub offset: f64,
    /// Slope of the fit.
    pub factor: f64,
}


/// Estimate a univariate linear fit of the target against every feature
/// under the current relative weights.
/// The returned vector is sorted in descending order of `factor`;
/// ties keep the feature order.
///
/// The slope is
/// ```text
/// factor = (E[x] E[y] - E[xy]) / (E[x]^2 - E[x^2])
/// ```
/// and is set to `0` when the denominator vanishes.
pub fn estimate_correlations(sample: &Sample) -> Vec<Correlation> {
    let n_feature = sample.shape().1;

    let mut x_mean = vec![0.0; n_feature];
    let mut x2_mean = vec![0.0; n_feature];
    let mut xy_mean = vec![0.0; n_feature];
    let mut y_mean = 0.0;

    for ex in sample.examples() {
        let w = ex.relative_weight();
        let y = ex.target();
        y_mean += w * y;
        for (i, &x) in ex.features().iter().enumerate() {
            x_mean[i] += w * x;
            x2_mean[i] += w * x * x;
            xy_mean[i] += w * x * y;
        }
    }

    let mut estimates = (0..n_feature).map(|i| {
            let dev = x_mean[i] * x_mean[i] - x2_mean[i];
            let factor = if dev != 0.0 {
                (x_mean[i] * y_mean - xy_mean[i]) / dev
            } else {
                0.0
            };
            let offset = y_mean - factor * x_mean[i];
            Correlation { index: i, offset, factor }
        })
        .collect::<Vec<_>>();

    estimates.sort_by(|a, b| b.factor.total_cmp(&a.factor));
    estimates
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_slopes() {
        // y = 1 + 3 x0, x1 is constant.
        let rows = (0..4).map(|i| vec![i as f64, 2.0]).collect::<Vec<_>>();
        let target = (0..4).map(|i| 1.0 + 3.0 * i as f64).collect();
        let sample = Sample::from_rows(rows, target).unwrap();

        let est = estimate_correlations(&sample);
        assert_eq!(est[0].index, 0);
        assert!((est[0].factor - 3.0).abs() < 1e-9);
        assert!((est[0].offset - 1.0).abs() < 1e-9);

        // Zero variance feature.
        assert_eq!(est[1].index, 1);
        assert_eq!(est[1].factor, 0.0);
    }
}
