use anyhow::Result;
use num_traits::Float;

use crate::JaggedError;

/// `number` limited to `min..=max`. A NaN `number` stays NaN.
pub fn clamp<F: Float>(number: F, min: F, max: F) -> Result<F> {
    if min > max {
        return Err(JaggedError::range(
            "minimum value must be less than or equal to the maximum value",
        ));
    }
    if min.is_nan() {
        return Err(JaggedError::range("minimum value must be a number"));
    }
    if max.is_nan() {
        return Err(JaggedError::range("maximum value must be a number"));
    }

    if number.is_nan() {
        return Ok(number);
    }
    Ok(number.min(max).max(min))
}

/// Round half away from zero to `digits` decimal places.
///
/// Past the precision of `F` there is nothing left to round and `number` comes back as is.
pub fn round_float<F: Float>(number: F, digits: u32) -> F {
    let ten = F::from(10).unwrap_or_else(F::one);
    let scale = ten.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = number * scale;
    if !scale.is_finite() || !scaled.is_finite() {
        return number;
    }
    scaled.round() / scale
}
