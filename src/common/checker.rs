//! This file defines some functions that checks some pre-conditions
//! E.g., the range of parameters.

use crate::error::{BoostError, Result};


/// Check the acceptance ceiling for the error rate.
#[inline(always)]
pub(crate) fn check_error_ceiling(ceiling: f64) -> Result<()> {
    if ceiling > 0.0 && ceiling < 1.0 {
        Ok(())
    } else {
        Err(BoostError::InvalidErrorCeiling(ceiling))
    }
}


/// Check that `value` is finite and strictly positive.
#[inline(always)]
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BoostError::InvalidParameter {
            name, value, reason: "must be finite and positive",
        })
    }
}


/// Check that `value` is finite and non-negative.
#[inline(always)]
pub(crate) fn check_non_negative(name: &'static str, value: f64)
    -> Result<()>
{
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BoostError::InvalidParameter {
            name, value, reason: "must be finite and non-negative",
        })
    }
}


/// Check the subset size against the number of features.
#[inline(always)]
pub(crate) fn check_subset_size(
    subset_size: usize,
    n_feature: usize,
    fallback_to_all: bool,
) -> Result<()>
{
    let too_large = subset_size > n_feature && !fallback_to_all;
    if subset_size == 0 || too_large {
        return Err(BoostError::InvalidSubsetSize { subset_size, n_feature });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_must_be_open_unit_interval() {
        assert!(check_error_ceiling(0.495).is_ok());
        assert!(check_error_ceiling(0.0).is_err());
        assert!(check_error_ceiling(1.0).is_err());
        assert!(check_error_ceiling(f64::NAN).is_err());
    }

    #[test]
    fn subset_size() {
        assert!(check_subset_size(3, 3, false).is_ok());
        assert!(check_subset_size(4, 3, true).is_ok());
        assert!(check_subset_size(4, 3, false).is_err());
        assert!(check_subset_size(0, 3, true).is_err());
    }
}
