use serde::{Serialize, Deserialize};

use crate::error::{BoostError, Result};
use super::sample_struct::Sample;


/// Lower bound of the normalized range.
pub const NORMALIZED_LOWER: f64 = 0.0;
/// Upper bound of the normalized range.
pub const NORMALIZED_UPPER: f64 = 3.0;


/// Min-max affine normalization of features and target.
///
/// A raw value `v` relates to its normalized value `w` by
/// ```text
/// v = offset + scale * w
/// ```
/// where `offset` and `scale` are chosen so that
/// the minimum and the maximum over the sample map to
/// the lower and the upper bound of the normalized range.
/// A constant dimension has `scale == 0` and maps to `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformer {
    input_offset: Vec<f64>,
    input_scale: Vec<f64>,
    target_offset: f64,
    target_scale: f64,
}


impl Transformer {
    /// Derive the transformer from the min/max of `sample`
    /// with the default range `[0, 3]`.
    pub fn fit(sample: &Sample) -> Self {
        Self::fit_range(sample, NORMALIZED_LOWER, NORMALIZED_UPPER)
    }


    /// Derive the transformer from the min/max of `sample`
    /// with the range `[lower, upper]`.
    pub fn fit_with_bounds(sample: &Sample, lower: f64, upper: f64)
        -> Result<Self>
    {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(BoostError::InvalidParameter {
                name: "upper",
                value: upper,
                reason: "the normalized range must satisfy lower < upper",
            });
        }
        Ok(Self::fit_range(sample, lower, upper))
    }


    fn fit_range(sample: &Sample, lower: f64, upper: f64) -> Self {
        let n_feature = sample.shape().1;

        let mut x_min = vec![f64::MAX; n_feature];
        let mut x_max = vec![f64::MIN; n_feature];
        let mut y_min = f64::MAX;
        let mut y_max = f64::MIN;

        for ex in sample.examples() {
            y_min = y_min.min(ex.target());
            y_max = y_max.max(ex.target());
            ex.features()
                .iter()
                .enumerate()
                .for_each(|(i, &x)| {
                    x_min[i] = x_min[i].min(x);
                    x_max[i] = x_max[i].max(x);
                });
        }

        let width = upper - lower;
        let (target_offset, target_scale) = affine(y_min, y_max, lower, width);
        let (input_offset, input_scale): (Vec<f64>, Vec<f64>) = x_min
            .into_iter()
            .zip(x_max)
            .map(|(lo, hi)| affine(lo, hi, lower, width))
            .unzip();

        Self { input_offset, input_scale, target_offset, target_scale, }
    }


    /// Normalize the features and the target of every example in `sample`.
    pub fn transform(&self, sample: &mut Sample) {
        for ex in sample.examples_mut() {
            let target = self.transform_target(ex.target());
            ex.set_target(target);
            ex.features_mut()
                .iter_mut()
                .zip(self.input_offset.iter().zip(&self.input_scale))
                .for_each(|(x, (&offset, &scale))| {
                    *x = normalize(*x, offset, scale);
                });
        }
    }


    /// Normalize a raw feature vector.
    pub fn transform_input(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.input_offset.iter().zip(&self.input_scale))
            .map(|(&v, (&offset, &scale))| normalize(v, offset, scale))
            .collect()
    }


    /// Normalize a raw target value.
    #[inline]
    pub fn transform_target(&self, y: f64) -> f64 {
        normalize(y, self.target_offset, self.target_scale)
    }


    /// Convert a normalized target value to the real one.
    #[inline]
    pub fn to_real_target(&self, normalized: f64) -> f64 {
        self.target_offset + self.target_scale * normalized
    }


    /// Returns the per-feature offsets.
    pub fn input_offset(&self) -> &[f64] {
        &self.input_offset[..]
    }


    /// Returns the per-feature scales.
    pub fn input_scale(&self) -> &[f64] {
        &self.input_scale[..]
    }


    /// Returns the offset of the target.
    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }


    /// Returns the scale of the target.
    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }
}


/// Returns `(offset, scale)` mapping `[lo, hi]` onto
/// `[lower, lower + width]`.
#[inline]
fn affine(lo: f64, hi: f64, lower: f64, width: f64) -> (f64, f64) {
    let scale = (hi - lo) / width;
    let offset = lo - scale * lower;
    (offset, scale)
}


#[inline]
fn normalize(v: f64, offset: f64, scale: f64) -> f64 {
    if scale > 0.0 { (v - offset) / scale } else { 0.0 }
}
