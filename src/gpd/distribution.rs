//! gpd::distribution — CDF, quantile, and density of the GPD.
//!
//! Purpose
//! -------
//! Evaluate the generalized Pareto distribution of excesses over a
//! threshold: CDF, quantile (inverse CDF), density, and log-density,
//! parameterized by shape ξ and scale β > 0.
//!
//! Key behaviors
//! -------------
//! - Shapes within `SHAPE_ZERO_TOL` of zero are routed to the exact
//!   exponential-limit formulas instead of the generic power-law ones,
//!   so the ξ → 0 limit never divides by a vanishing shape.
//! - The generic branch works through `ln_1p`/`exp_m1` so small ξ·x/β
//!   does not lose precision to cancellation.
//! - For ξ < 0 the support is truncated at −β/ξ; evaluation at or past
//!   the truncation point is a domain error, as is any negative x.
//!
//! Conventions
//! -----------
//! - Probabilities live in [0, 1); the mass-at-one query has no finite
//!   quantile and is rejected.
//!
//! Downstream usage
//! ----------------
//! The fitter's objective reuses the same log-density algebra inline;
//! `risk::measures` builds VaR and ES on top of the quantile algebra.
//!
//! Testing notes
//! -------------
//! Round-trip, exponential-limit, and integrate-to-one checks live in
//! the colocated test module.

use crate::{
    gpd::{
        errors::GPDResult,
        validation::{validate_probability, validate_scale, validate_shape, validate_support},
    },
    optimization::numerical_stability::transformations::SHAPE_ZERO_TOL,
};

/// CDF of the GPD at an excess x ≥ 0.
///
/// Parameters
/// ----------
/// - `x`: evaluation point, in [0, −β/ξ) when ξ < 0 and [0, ∞) otherwise.
/// - `shape`: tail index ξ.
/// - `scale`: β > 0.
///
/// Returns
/// -------
/// - `Ok(p)` with p = 1 − (1 + ξx/β)^(−1/ξ), or the exponential limit
///   1 − exp(−x/β) when |ξ| < `SHAPE_ZERO_TOL`.
///
/// Errors
/// ------
/// - `GPDError::InvalidShape` / `InvalidScale` on bad parameters.
/// - `GPDError::OutsideSupport` when x is outside the support.
pub fn gpd_cdf(x: f64, shape: f64, scale: f64) -> GPDResult<f64> {
    validate_shape(shape)?;
    validate_scale(scale)?;
    validate_support(x, shape, scale)?;
    if shape.abs() < SHAPE_ZERO_TOL {
        return Ok(-(-x / scale).exp_m1());
    }
    let log_survival = (-1.0 / shape) * (shape * x / scale).ln_1p();
    Ok(-log_survival.exp_m1())
}

/// Quantile (inverse CDF) of the GPD at probability p ∈ [0, 1).
///
/// Returns
/// -------
/// - `Ok(x)` with x = (β/ξ)((1 − p)^(−ξ) − 1), or the exponential limit
///   −β·ln(1 − p) when |ξ| < `SHAPE_ZERO_TOL`.
///
/// Errors
/// ------
/// - `GPDError::InvalidProbability` when p ∉ [0, 1).
/// - `GPDError::InvalidShape` / `InvalidScale` on bad parameters.
pub fn gpd_quantile(p: f64, shape: f64, scale: f64) -> GPDResult<f64> {
    validate_shape(shape)?;
    validate_scale(scale)?;
    validate_probability(p)?;
    let log_tail = (-p).ln_1p();
    if shape.abs() < SHAPE_ZERO_TOL {
        return Ok(-scale * log_tail);
    }
    Ok(scale / shape * (-shape * log_tail).exp_m1())
}

/// Density of the GPD at an excess x.
///
/// Notes
/// -----
/// - Thin wrapper over [`gpd_ln_pdf`]; prefer the log form inside
///   likelihood sums.
pub fn gpd_pdf(x: f64, shape: f64, scale: f64) -> GPDResult<f64> {
    Ok(gpd_ln_pdf(x, shape, scale)?.exp())
}

/// Log-density of the GPD at an excess x.
///
/// Returns
/// -------
/// - `Ok(ln f(x))` with ln f(x) = −ln β − (1/ξ + 1)·ln(1 + ξx/β), or
///   the exponential limit −ln β − x/β when |ξ| < `SHAPE_ZERO_TOL`.
///
/// Errors
/// ------
/// - Same taxonomy as [`gpd_cdf`].
pub fn gpd_ln_pdf(x: f64, shape: f64, scale: f64) -> GPDResult<f64> {
    validate_shape(shape)?;
    validate_scale(scale)?;
    validate_support(x, shape, scale)?;
    if shape.abs() < SHAPE_ZERO_TOL {
        return Ok(-scale.ln() - x / scale);
    }
    Ok(-scale.ln() - (1.0 / shape + 1.0) * (shape * x / scale).ln_1p())
}
