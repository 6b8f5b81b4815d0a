//! risk — peaks-over-threshold tail risk measures.
//!
//! Purpose
//! -------
//! Map a GPD fitted by [`crate::gpd`] onto loss-scale value-at-risk and
//! expected shortfall, with the threshold and empirical exceedance
//! probability supplied by the caller.
//!
//! Layout
//! ------
//! - `measures`: threshold partitioning plus VaR/ES formulas, checked
//!   and NaN-folding variants.
//! - `errors`: `RiskError` and `RiskResult`.

pub mod errors;
pub mod measures;

pub use errors::{RiskError, RiskResult};
pub use measures::{
    es_gpd_tail, es_gpd_tail_many, es_gpd_tail_unchecked, pot_sample, var_gpd_tail,
    var_gpd_tail_many, var_gpd_tail_unchecked, PotSample,
};
