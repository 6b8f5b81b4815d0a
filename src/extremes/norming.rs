//! extremes::norming — Gumbel-domain normalizing sequences.
//!
//! Purpose
//! -------
//! Compute the location/scale pair (d_n, c_n) under which the maximum of
//! n i.i.d. draws from a supported parent converges in distribution:
//! (M_n − d_n)/c_n → standard Gumbel.
//!
//! Key behaviors
//! -------------
//! - Closed forms per family:
//!     exponential(λ):  d_n = ln n / λ,                    c_n = 1/λ
//!     gamma(α, λ):     d_n = (ln n + (α−1)·ln ln n − ln Γ(α)) / λ,
//!                      c_n = 1/λ
//!     normal(μ, σ):    with b_n = √(2 ln n),
//!                      d_n = μ + σ·(b_n − (ln ln n + ln 4π)/(2 b_n)),
//!                      c_n = σ/b_n
//!     lognormal(μ, σ): exponentiates the normal pair on the log scale,
//!                      d_n = exp(μ + σ·a_n), c_n = (σ/b_n)·d_n, where
//!                      a_n is the standard-normal location.
//! - The gamma and normal forms involve ln ln n, so n ≥ 2 is required.
//!
//! Testing notes
//! -------------
//! The exponential pair is checked against its exact closed form; the
//! convergence of the induced densities is exercised in
//! `extremes::block_maxima` and the integration suite.

use crate::extremes::{
    errors::{ExtResult, ExtremesError},
    parent::ParentDistribution,
};
use statrs::function::gamma::ln_gamma;

/// NormalizingSequence — the (d_n, c_n) pair for one parent and block
/// size.
///
/// Fields
/// ------
/// - `location`: d_n, the centering constant.
/// - `scale`: c_n > 0, the scaling constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizingSequence {
    pub location: f64,
    pub scale: f64,
}

impl NormalizingSequence {
    /// Constants for the maximum of `n` draws from `parent`. Equivalent
    /// to [`normalizing_sequence`].
    pub fn new(parent: &ParentDistribution, n: usize) -> ExtResult<Self> {
        normalizing_sequence(parent, n)
    }

    /// Normalize a raw block maximum: (m − d_n)/c_n.
    pub fn normalize(&self, max: f64) -> f64 {
        (max - self.location) / self.scale
    }

    /// Map a normalized coordinate back to the parent scale:
    /// d_n + c_n·x.
    pub fn denormalize(&self, x: f64) -> f64 {
        self.location + self.scale * x
    }
}

/// Normalizing constants for the maximum of `n` draws from `parent`.
///
/// Parameters
/// ----------
/// - `parent`: the parent distribution.
/// - `n`: block size, at least 2.
///
/// Errors
/// ------
/// - `ExtremesError::InvalidBlockSize` when n < 2.
pub fn normalizing_sequence(
    parent: &ParentDistribution, n: usize,
) -> ExtResult<NormalizingSequence> {
    if n < 2 {
        return Err(ExtremesError::InvalidBlockSize { n });
    }
    let ln_n = (n as f64).ln();
    Ok(match parent {
        ParentDistribution::Exponential { rate } => NormalizingSequence {
            location: ln_n / rate,
            scale: 1.0 / rate,
        },
        ParentDistribution::Gamma { shape, rate } => NormalizingSequence {
            location: (ln_n + (shape - 1.0) * ln_n.ln() - ln_gamma(*shape)) / rate,
            scale: 1.0 / rate,
        },
        ParentDistribution::Normal { mean, std_dev } => {
            let std = standard_normal_pair(ln_n);
            NormalizingSequence {
                location: mean + std_dev * std.location,
                scale: std_dev * std.scale,
            }
        }
        ParentDistribution::Lognormal { location, scale } => {
            let std = standard_normal_pair(ln_n);
            let centering = (location + scale * std.location).exp();
            NormalizingSequence {
                location: centering,
                scale: scale * std.scale * centering,
            }
        }
    })
}

/// Standard-normal (d_n, c_n) from ln n, with b_n = √(2 ln n).
fn standard_normal_pair(ln_n: f64) -> NormalizingSequence {
    let b_n = (2.0 * ln_n).sqrt();
    let correction = (ln_n.ln() + (4.0 * std::f64::consts::PI).ln()) / (2.0 * b_n);
    NormalizingSequence { location: b_n - correction, scale: 1.0 / b_n }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact closed forms for the exponential pair.
    // - Degeneration of gamma(1, λ) to the exponential pair.
    // - Normal/lognormal consistency on the log scale.
    // - The block-size rejection.
    //
    // They intentionally DO NOT cover:
    // - Distributional convergence under these constants, exercised by
    //   the block-maxima density tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the exponential pair matches its closed form.
    //
    // Given
    // -----
    // - Exponential rate λ = 2, block size n = 100.
    //
    // Expect
    // ------
    // - d_n = ln(100)/2 and c_n = 0.5 exactly.
    fn exponential_pair_closed_form() {
        // Arrange
        let parent = ParentDistribution::exponential(2.0).unwrap();

        // Act
        let seq = normalizing_sequence(&parent, 100).unwrap();

        // Assert
        assert_eq!(seq.location, 100.0f64.ln() / 2.0);
        assert_eq!(seq.scale, 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Verify gamma with unit shape reduces to the exponential pair.
    //
    // Given
    // -----
    // - Gamma(α = 1, λ = 2) and Exponential(λ = 2), n = 500.
    //
    // Expect
    // ------
    // - Identical constants to 1e-12 (ln Γ(1) = 0 kills the extra terms).
    fn gamma_unit_shape_matches_exponential() {
        // Arrange
        let gamma = ParentDistribution::gamma(1.0, 2.0).unwrap();
        let exponential = ParentDistribution::exponential(2.0).unwrap();

        // Act
        let g = normalizing_sequence(&gamma, 500).unwrap();
        let e = normalizing_sequence(&exponential, 500).unwrap();

        // Assert
        assert!((g.location - e.location).abs() < 1e-12);
        assert!((g.scale - e.scale).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the lognormal constants are the exponentiated normal ones.
    //
    // Given
    // -----
    // - Lognormal(μ = 0.3, σ = 0.8) and Normal(0.3, 0.8), n = 1000.
    //
    // Expect
    // ------
    // - location_LN = exp(location_N) and scale_LN = scale_N · location_LN,
    //   the chain-rule factor applied to the normal scale.
    fn lognormal_exponentiates_normal_pair() {
        // Arrange
        let lognormal = ParentDistribution::lognormal(0.3, 0.8).unwrap();
        let normal = ParentDistribution::normal(0.3, 0.8).unwrap();

        // Act
        let ln_seq = normalizing_sequence(&lognormal, 1000).unwrap();
        let n_seq = normalizing_sequence(&normal, 1000).unwrap();

        // Assert
        assert!((ln_seq.location - n_seq.location.exp()).abs() < 1e-12);
        assert!((ln_seq.scale - n_seq.scale * ln_seq.location).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify block sizes below 2 are rejected and normalize/denormalize
    // invert each other.
    //
    // Given
    // -----
    // - n = 1 on an exponential parent; a round trip at x = 1.7.
    //
    // Expect
    // ------
    // - InvalidBlockSize for n = 1; round trip exact to 1e-12.
    fn block_size_and_round_trip() {
        // Arrange
        let parent = ParentDistribution::exponential(1.0).unwrap();

        // Act & Assert
        assert!(matches!(
            normalizing_sequence(&parent, 1),
            Err(ExtremesError::InvalidBlockSize { n: 1 })
        ));
        let seq = normalizing_sequence(&parent, 50).unwrap();
        let x = 1.7;
        assert!((seq.normalize(seq.denormalize(x)) - x).abs() < 1e-12);
    }
}
