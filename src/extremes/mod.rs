//! extremes — block maxima and their Gumbel limit.
//!
//! Purpose
//! -------
//! Everything needed to study the maximum of n i.i.d. draws from a
//! supported parent distribution: the normalizing constants (d_n, c_n),
//! the exact density of the normalized maximum, and a simulation-based
//! kernel estimate of the same density. All four supported parents sit
//! in the Gumbel max-domain of attraction, so both curves approach
//! exp(−x − e^(−x)) as blocks grow.
//!
//! Layout
//! ------
//! - `parent`: the closed family of parent distributions.
//! - `norming`: closed-form normalizing sequences per family.
//! - `block_maxima`: parametric and nonparametric density engines.
//! - `kde`: Gaussian kernel density estimation.
//! - `errors`: `ExtremesError` and `ExtResult`.

pub mod block_maxima;
pub mod errors;
pub mod kde;
pub mod norming;
pub mod parent;

pub use block_maxima::{
    block_maxima_density, gumbel_density, normalized_block_maxima, nonparametric_density,
    parametric_density, CurveMode, DensityCurve, DensityMode, Grid, UniformStream,
};
pub use errors::{ExtResult, ExtremesError};
pub use kde::{gaussian_kde, silverman_bandwidth, DEFAULT_BANDWIDTH_ADJUST, DEFAULT_GRID_POINTS};
pub use norming::{normalizing_sequence, NormalizingSequence};
pub use parent::{ParentDistribution, ParentFamily};
