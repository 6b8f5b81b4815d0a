//! gpd — the generalized Pareto distribution: evaluation and fitting.
//!
//! Purpose
//! -------
//! Everything GPD-shaped lives here: validated parameters, the CDF /
//! quantile / density family, and the maximum-likelihood fitter over
//! threshold excesses. The peaks-over-threshold risk measures in
//! [`crate::risk`] are built on the fits produced here.
//!
//! Layout
//! ------
//! - `params`: validated (ξ, β) pair and the fit output record.
//! - `distribution`: CDF, quantile, density, log-density.
//! - `fit`: L-BFGS maximum-likelihood estimation.
//! - `validation`: shared argument checks.
//! - `errors`: `GPDError` and `GPDResult`.

pub mod distribution;
pub mod errors;
pub mod fit;
pub mod params;
pub mod validation;

pub use distribution::{gpd_cdf, gpd_ln_pdf, gpd_pdf, gpd_quantile};
pub use errors::{GPDError, GPDResult};
pub use fit::{fit_gpd, fit_gpd_with, GPDLogLik};
pub use params::{FitResult, GPDParams};
