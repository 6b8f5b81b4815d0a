//! optimization — MLE stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer behind GPD fitting: an Argmin-backed
//! log-likelihood optimizer, numerically stable parameter transforms, and
//! a single error/result surface. The fitter implements a log-likelihood,
//! chooses tolerances, and obtains fitted parameters and diagnostics
//! without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`), including solver and stopping-criterion
//!   configuration.
//! - Supply shared numerical primitives (`numerical_stability`) for
//!   mapping unconstrained parameters into model space.
//! - Normalize configuration issues, numerical failures, and backend
//!   solver errors into a single enum (`errors::OptError`) with a common
//!   result alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate in an unconstrained parameter space `θ` and assume
//!   inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Likelihood implementations treat domain violations (non-positive
//!   excesses, infeasible shape/scale pairs) as recoverable errors or
//!   finite penalties surfaced through this layer.
//!
//! Downstream usage
//! ----------------
//! - `gpd::fit` implements [`loglik_optimizer::LogLikelihood`] for the GPD
//!   excess likelihood and calls [`loglik_optimizer::maximize`].
//! - Nothing in this module knows about thresholds, risk measures, or
//!   block maxima; it is a generic MLE substrate.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;
