//! loglik_optimizer — MLE-friendly, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)`. Callers implement a single trait,
//! [`LogLikelihood`], and invoke [`maximize`] to run L-BFGS with a
//! configurable line search, tolerances, and finite-difference fallbacks.
//! In this crate the GPD excess likelihood is the implementor; the layer
//! itself is model-agnostic.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single entrypoint [`maximize`] that validates the initial
//!   guess, selects a solver via [`builders`] based on
//!   [`traits::LineSearcher`], executes it via [`run::run_lbfgs`], and
//!   normalizes results into an [`OptimOutcome`].
//! - Fall back to robust finite differences (central, then forward) for
//!   gradients when the model provides none.
//! - Centralize configuration ([`Tolerances`], [`MLEOptions`]) and
//!   validation ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** `ℓ(θ)` by minimizing `c(θ) = -ℓ(θ)`;
//!   models implement `ℓ(θ)` (and `∇ℓ(θ)` when available), never the cost.
//! - [`LogLikelihood::value`] must treat invalid inputs as recoverable
//!   [`crate::optimization::errors::OptError`] values, not panics, and must
//!   encode infeasible parameter regions as large finite penalties.
//! - Configuration types are validated on construction and treated as
//!   internally consistent by the solver layer.
//!
//! Conventions
//! -----------
//! - Parameters live in an unconstrained optimizer space as
//!   [`types::Theta`] (`Array1<f64>`). Any constrained → unconstrained
//!   mapping (e.g., scale positivity via softplus) happens in the model
//!   layer.
//! - All user-facing diagnostics, including [`OptimOutcome`]'s `value`,
//!   are expressed in log-likelihood terms.
//! - Errors bubble up as `OptResult<T>`; this module and its children
//!   never intentionally panic or use `unsafe`.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover sign conventions and FD fallback in
//!   [`adapter`], solver construction in [`builders`], validation rules in
//!   [`validation`], and configuration invariants in [`traits`].
//! - [`maximize`] is exercised end-to-end by the GPD fitter's unit and
//!   integration tests.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};
