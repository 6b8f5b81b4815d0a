//! gpd::validation — argument checks for GPD evaluation and fitting.
//!
//! Purpose
//! -------
//! Centralize the scalar and data checks shared by the distribution
//! functions and the fitter so every entry point rejects bad input the
//! same way.
//!
//! Conventions
//! -----------
//! - Checks return `Ok(())` on success and a [`GPDError`] naming the
//!   offending value otherwise.
//! - Probability arguments live in [0, 1): mass-at-one queries have no
//!   finite quantile and are rejected rather than mapped to infinity.

use crate::gpd::errors::{GPDError, GPDResult};

/// Minimum number of excesses the fitter will accept.
pub const MIN_EXCESSES: usize = 2;

/// Reject non-finite or non-positive scale parameters.
pub fn validate_scale(scale: f64) -> GPDResult<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(GPDError::InvalidScale { scale });
    }
    Ok(())
}

/// Reject non-finite shape parameters.
pub fn validate_shape(shape: f64) -> GPDResult<()> {
    if !shape.is_finite() {
        return Err(GPDError::InvalidShape { shape });
    }
    Ok(())
}

/// Reject probabilities outside [0, 1).
pub fn validate_probability(p: f64) -> GPDResult<()> {
    if !p.is_finite() || !(0.0..1.0).contains(&p) {
        return Err(GPDError::InvalidProbability { p });
    }
    Ok(())
}

/// Upper endpoint of the GPD support: finite −β/ξ when ξ < 0,
/// +∞ otherwise.
pub fn support_upper(shape: f64, scale: f64) -> f64 {
    if shape < 0.0 {
        -scale / shape
    } else {
        f64::INFINITY
    }
}

/// Reject evaluation points outside [0, upper).
///
/// Notes
/// -----
/// - The finite upper endpoint itself is excluded; the density is 0 or
///   unbounded there depending on ξ and the CDF is exactly 1, so callers
///   that want the closed endpoint handle it explicitly.
pub fn validate_support(x: f64, shape: f64, scale: f64) -> GPDResult<()> {
    let upper = support_upper(shape, scale);
    if !x.is_finite() || x < 0.0 || x >= upper {
        return Err(GPDError::OutsideSupport { x, upper });
    }
    Ok(())
}

/// Reject excess samples that are too short or contain non-finite or
/// non-positive entries.
pub fn validate_excesses(excesses: &[f64]) -> GPDResult<()> {
    if excesses.len() < MIN_EXCESSES {
        return Err(GPDError::InsufficientData { len: excesses.len() });
    }
    for (index, &value) in excesses.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(GPDError::InvalidExcess { index, value });
        }
    }
    Ok(())
}
