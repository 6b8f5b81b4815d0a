//! risk::measures — semi-parametric VaR and expected shortfall.
//!
//! Purpose
//! -------
//! Turn a fitted GPD tail into loss-level risk measures via the
//! peaks-over-threshold identity: with u the threshold, p the empirical
//! exceedance probability P(X > u), and (ξ, β) the fitted excess
//! distribution,
//!
//!   VaR_α = u + (β/ξ)·(((1 − α)/p)^(−ξ) − 1)
//!   ES_α  = (VaR_α + β − ξ·u) / (1 − ξ)        for ξ < 1.
//!
//! Key behaviors
//! -------------
//! - [`pot_sample`] partitions a raw loss series at a threshold into the
//!   excesses and empirical exceedance probability the formulas consume.
//! - Shapes within `SHAPE_ZERO_TOL` of zero use the exponential-limit
//!   VaR, u + β·ln(p/(1 − α)).
//! - ES with ξ ≥ 1 is a `ModelDegenerate` error in the checked API; the
//!   unchecked variant returns +∞ there instead.
//! - α must clear the model floor 1 − p strictly: at or below it the
//!   implied quantile does not rise above the threshold, where the GPD
//!   tail says nothing.
//!
//! Conventions
//! -----------
//! - The `_unchecked` variants mirror the checked ones but fold every
//!   rejection into NaN, for callers streaming over parameter grids.
//!
//! Testing notes
//! -------------
//! Monotonicity in α and the ES ≥ VaR ordering are asserted directly in
//! the colocated tests.

use crate::{
    gpd::params::GPDParams,
    optimization::numerical_stability::transformations::SHAPE_ZERO_TOL,
    risk::errors::{RiskError, RiskResult},
};

/// Threshold exceedances of a loss series, paired with the empirical
/// exceedance probability the POT formulas consume.
#[derive(Debug, Clone, PartialEq)]
pub struct PotSample {
    /// Amounts by which observations exceed the threshold, in series order.
    pub excesses: Vec<f64>,
    /// Empirical exceedance probability p = |{x > u}| / |series|.
    pub p_exceed: f64,
}

/// Partition a loss series at a threshold into POT inputs.
///
/// Observations strictly above `threshold` contribute their excess
/// `x - u`; the exceedance probability is the exceedance count over the
/// full series length. NaN observations never exceed and are dropped.
///
/// Errors
/// ------
/// - `RiskError::InvalidThreshold` for a non-finite threshold.
/// - `RiskError::EmptySeries` when the series has no observations.
pub fn pot_sample(series: &[f64], threshold: f64) -> RiskResult<PotSample> {
    if !threshold.is_finite() {
        return Err(RiskError::InvalidThreshold { threshold });
    }
    if series.is_empty() {
        return Err(RiskError::EmptySeries);
    }
    let excesses: Vec<f64> =
        series.iter().filter(|&&x| x > threshold).map(|&x| x - threshold).collect();
    let p_exceed = excesses.len() as f64 / series.len() as f64;
    Ok(PotSample { excesses, p_exceed })
}

fn validate_tail_args(alpha: f64, threshold: f64, exceed_prob: f64) -> RiskResult<()> {
    if !threshold.is_finite() {
        return Err(RiskError::InvalidThreshold { threshold });
    }
    if !exceed_prob.is_finite() || exceed_prob <= 0.0 || exceed_prob > 1.0 {
        return Err(RiskError::InvalidExceedanceProb { p: exceed_prob });
    }
    let floor = 1.0 - exceed_prob;
    if !alpha.is_finite() || alpha <= floor || alpha >= 1.0 {
        return Err(RiskError::InvalidConfidence { alpha, floor });
    }
    Ok(())
}

/// Value-at-risk at confidence α from a fitted GPD tail.
///
/// Parameters
/// ----------
/// - `alpha`: confidence level, in (1 − p, 1) exclusive on both ends.
/// - `threshold`: the POT threshold u on the loss scale.
/// - `params`: fitted (ξ, β) of the excess distribution.
/// - `exceed_prob`: empirical exceedance probability p = P(X > u), in
///   (0, 1].
///
/// Returns
/// -------
/// - The loss level exceeded with probability 1 − α. Approaches
///   `threshold` as α falls to the floor 1 − p and increases in α.
///
/// Errors
/// ------
/// - `RiskError::InvalidConfidence` / `InvalidExceedanceProb` /
///   `InvalidThreshold` on bad arguments.
pub fn var_gpd_tail(
    alpha: f64, threshold: f64, params: &GPDParams, exceed_prob: f64,
) -> RiskResult<f64> {
    validate_tail_args(alpha, threshold, exceed_prob)?;
    let tail_ratio = (1.0 - alpha) / exceed_prob;
    if params.shape.abs() < SHAPE_ZERO_TOL {
        return Ok(threshold - params.scale * tail_ratio.ln());
    }
    Ok(threshold + params.scale / params.shape * ((-params.shape) * tail_ratio.ln()).exp_m1())
}

/// Expected shortfall at confidence α from a fitted GPD tail.
///
/// Returns
/// -------
/// - The mean loss conditional on exceeding VaR_α. Always at least
///   VaR_α for valid arguments.
///
/// Errors
/// ------
/// - `RiskError::ModelDegenerate` when ξ ≥ 1 (infinite tail mean).
/// - Argument errors as in [`var_gpd_tail`].
pub fn es_gpd_tail(
    alpha: f64, threshold: f64, params: &GPDParams, exceed_prob: f64,
) -> RiskResult<f64> {
    if params.infinite_mean() {
        return Err(RiskError::ModelDegenerate { shape: params.shape });
    }
    let var = var_gpd_tail(alpha, threshold, params, exceed_prob)?;
    Ok((var + params.scale - params.shape * threshold) / (1.0 - params.shape))
}

/// Value-at-risk over a batch of confidence levels.
///
/// Fails fast: the first invalid α rejects the whole batch.
pub fn var_gpd_tail_many(
    alphas: &[f64], threshold: f64, params: &GPDParams, exceed_prob: f64,
) -> RiskResult<Vec<f64>> {
    alphas
        .iter()
        .map(|&alpha| var_gpd_tail(alpha, threshold, params, exceed_prob))
        .collect()
}

/// Expected shortfall over a batch of confidence levels.
///
/// Fails fast, like [`var_gpd_tail_many`]; ξ ≥ 1 rejects the batch
/// before any α is examined.
pub fn es_gpd_tail_many(
    alphas: &[f64], threshold: f64, params: &GPDParams, exceed_prob: f64,
) -> RiskResult<Vec<f64>> {
    if params.infinite_mean() {
        return Err(RiskError::ModelDegenerate { shape: params.shape });
    }
    alphas
        .iter()
        .map(|&alpha| es_gpd_tail(alpha, threshold, params, exceed_prob))
        .collect()
}

/// [`var_gpd_tail`] with rejections folded into NaN.
pub fn var_gpd_tail_unchecked(
    alpha: f64, threshold: f64, params: &GPDParams, exceed_prob: f64,
) -> f64 {
    var_gpd_tail(alpha, threshold, params, exceed_prob).unwrap_or(f64::NAN)
}

/// [`es_gpd_tail`] with rejections folded into NaN, except ξ ≥ 1 which
/// maps to +∞ (the tail mean diverges rather than being ill-posed).
pub fn es_gpd_tail_unchecked(
    alpha: f64, threshold: f64, params: &GPDParams, exceed_prob: f64,
) -> f64 {
    match es_gpd_tail(alpha, threshold, params, exceed_prob) {
        Ok(es) => es,
        Err(RiskError::ModelDegenerate { .. }) => {
            if var_gpd_tail(alpha, threshold, params, exceed_prob).is_ok() {
                f64::INFINITY
            } else {
                f64::NAN
            }
        }
        Err(_) => f64::NAN,
    }
}
