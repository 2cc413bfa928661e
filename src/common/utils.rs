//! This file provides some common numerical helpers.


/// Compute the inner-product of the given two slices.
#[inline(always)]
pub fn inner_product(v1: &[f64], v2: &[f64]) -> f64 {
    v1.iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


/// Compute the Euclidean norm of the given slice.
#[inline(always)]
pub fn l2_norm(v: &[f64]) -> f64 {
    inner_product(v, v).sqrt()
}


/// Returns `true` if `dist` is a probability vector
/// up to the given tolerance.
#[inline(always)]
pub fn is_distribution(dist: &[f64], tolerance: f64) -> bool {
    let sum = dist.iter().sum::<f64>();
    (sum - 1.0).abs() <= tolerance
        && dist.iter().all(|d| *d >= 0.0)
}
