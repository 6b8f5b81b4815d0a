//! numerical_stability — numerically robust transformations.
//!
//! Purpose
//! -------
//! Collect numerically stable scalar transforms and the small tolerances
//! shared by the GPD likelihood, distribution functions, and risk
//! formulas, so those layers agree on clamping and limit behavior.
//!
//! Key behaviors
//! -------------
//! - Provide stable softplus transforms (`safe_softplus`,
//!   `safe_softplus_inv`) for mapping unconstrained optimizer reals into
//!   the strictly positive GPD scale and back.
//! - Centralize the ξ → 0 limit cutoff (`SHAPE_ZERO_TOL`) used everywhere
//!   a removable singularity at zero shape appears.
//!
//! Conventions
//! -----------
//! - All transforms assume finite `f64` inputs; domain validation happens
//!   at the entry points that use them.

pub mod transformations;
