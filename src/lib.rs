//! tail_risk — extreme value theory for tail risk estimation.
//!
//! Purpose
//! -------
//! Serve as the crate root for the two halves of the library: a
//! peaks-over-threshold (POT) pipeline that fits a generalized Pareto
//! distribution to threshold excesses and turns the fit into
//! value-at-risk and expected shortfall, and a block-maxima engine that
//! verifies the Gumbel convergence underpinning that modelling choice.
//!
//! Key behaviors
//! -------------
//! - `gpd`: GPD evaluation (CDF, quantile, density) and maximum-
//!   likelihood fitting of (ξ, β) to excesses over a threshold.
//! - `risk`: semi-parametric VaR and expected shortfall from a fitted
//!   tail, the threshold, and the empirical exceedance probability.
//! - `extremes`: normalizing sequences, exact and simulated densities
//!   of normalized block maxima, and the standard Gumbel reference.
//! - `optimization`: the L-BFGS maximum-likelihood machinery the fitter
//!   runs on.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every public entry point validates its inputs and reports failures
//!   through the per-module error enums; no NaN is silently produced by
//!   the checked APIs.
//! - Numerically hazardous quantities (β > 0 under optimization, the
//!   F^(n−1) factor in block-maxima densities, the ξ → 0 limit) are
//!   handled through reparameterization and log-space evaluation rather
//!   than ad-hoc clamping.
//!
//! Conventions
//! -----------
//! - Losses are on the positive scale: excesses are amounts above a
//!   threshold u, and risk measures return loss levels above u.
//! - Confidence levels α and probabilities are plain `f64` in their
//!   documented half-open ranges.
//! - Simulation is driven exclusively by seeded generators
//!   ([`extremes::UniformStream`]); identical seeds give bitwise
//!   identical results.
//!
//! Downstream usage
//! ----------------
//! - Typical POT flow: `risk::pot_sample(series, u)` to derive excesses
//!   and the exceedance probability, `gpd::fit_gpd` on the excesses,
//!   then `risk::var_gpd_tail` / `risk::es_gpd_tail`.
//! - Typical convergence check: `extremes::parametric_density` on a
//!   grid, compared against [`extremes::gumbel_density`].
//!
//! Testing notes
//! -------------
//! - Each module carries its own unit tests; the end-to-end POT pipeline
//!   and the four-family Gumbel convergence sweep live in
//!   `tests/integration_pot_pipeline.rs`.

pub mod extremes;
pub mod gpd;
pub mod optimization;
pub mod risk;

pub use extremes::{
    block_maxima_density, gumbel_density, normalizing_sequence, DensityCurve, DensityMode,
    ExtremesError, Grid, ParentDistribution, ParentFamily, UniformStream,
};
pub use gpd::{fit_gpd, fit_gpd_with, FitResult, GPDError, GPDParams};
pub use risk::{es_gpd_tail, pot_sample, var_gpd_tail, PotSample, RiskError};
