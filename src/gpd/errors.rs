//! gpd::errors — error types for GPD distribution functions and fitting.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the GPD distribution
//! functions (`gpd::distribution`) and the maximum-likelihood fitter
//! (`gpd::fit`). Domain violations (scale, probability, support), data
//! problems, and fit failures all surface here as typed values rather
//! than NaNs or panics.
//!
//! Conventions
//! -----------
//! - Variants carry the offending value(s) so messages are meaningful
//!   without extra context.
//! - Optimizer-internal failures are wrapped verbatim in
//!   [`GPDError::Optimizer`]; callers who need the detail can inspect the
//!   embedded text.

use crate::optimization::errors::OptError;

pub type GPDResult<T> = Result<T, GPDError>;

/// GPDError — failures in GPD evaluation and fitting.
///
/// Variants
/// --------
/// - `InvalidScale`: scale β is non-positive or non-finite.
/// - `InvalidShape`: shape ξ is non-finite.
/// - `InvalidProbability`: probability argument outside [0, 1).
/// - `OutsideSupport`: evaluation point below 0 or at/past the ξ < 0
///   truncation point −β/ξ.
/// - `InvalidExcess`: an excess observation is non-finite or non-positive.
/// - `InsufficientData`: fewer than 2 excesses supplied to the fitter.
/// - `NonConvergence`: the solver exhausted its iteration budget without
///   meeting a stopping criterion.
/// - `DegenerateFit`: the fitted scale mapped back to a non-positive or
///   non-finite value.
/// - `Optimizer`: wrapped failure from the optimization layer.
#[derive(Debug, Clone, PartialEq)]
pub enum GPDError {
    //------ Domain errors ------
    InvalidScale { scale: f64 },
    InvalidShape { shape: f64 },
    InvalidProbability { p: f64 },
    OutsideSupport { x: f64, upper: f64 },

    //------ Fitter input ------
    InvalidExcess { index: usize, value: f64 },
    InsufficientData { len: usize },

    //------ Fitter outcome ------
    NonConvergence { iterations: usize, status: String },
    DegenerateFit { scale: f64 },
    Optimizer { text: String },
}

impl std::error::Error for GPDError {}

impl std::fmt::Display for GPDError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GPDError::InvalidScale { scale } => {
                write!(f, "Invalid GPD scale {scale}: must be finite and > 0.")
            }
            GPDError::InvalidShape { shape } => {
                write!(f, "Invalid GPD shape {shape}: must be finite.")
            }
            GPDError::InvalidProbability { p } => {
                write!(f, "Invalid probability {p}: must lie in [0, 1).")
            }
            GPDError::OutsideSupport { x, upper } => {
                write!(f, "Point {x} outside the GPD support [0, {upper}).")
            }
            GPDError::InvalidExcess { index, value } => {
                write!(f, "Invalid excess at index {index}: {value}. Must be finite and > 0.")
            }
            GPDError::InsufficientData { len } => {
                write!(f, "Need at least 2 excesses to fit a GPD; got {len}.")
            }
            GPDError::NonConvergence { iterations, status } => {
                write!(f, "GPD fit did not converge after {iterations} iterations: {status}")
            }
            GPDError::DegenerateFit { scale } => {
                write!(f, "GPD fit produced a degenerate scale: {scale}.")
            }
            GPDError::Optimizer { text } => {
                write!(f, "Optimizer failure during GPD fit: {text}")
            }
        }
    }
}

impl From<OptError> for GPDError {
    fn from(err: OptError) -> Self {
        GPDError::Optimizer { text: err.to_string() }
    }
}
