//! Parent distributions whose block maxima lie in the Gumbel domain.
//!
//! This module defines [`ParentDistribution`], the closed family of
//! parents supported by the block-maxima machinery: exponential, gamma,
//! normal, and lognormal. All four sit in the Gumbel max-domain of
//! attraction, so their normalized block maxima share a common limit.
//!
//! ## Supported distributions
//! - [`ParentDistribution::Exponential`]: rate λ > 0.
//! - [`ParentDistribution::Gamma`]: shape α > 0, rate λ > 0.
//! - [`ParentDistribution::Normal`]: mean μ, standard deviation σ > 0.
//! - [`ParentDistribution::Lognormal`]: log-scale location μ, log-scale
//!   standard deviation σ > 0.
//!
//! ## Numerics
//! - Evaluation delegates to `statrs`; quantiles go through its
//!   `inverse_cdf`.
//! - Parameters are validated at construction, so the per-call statrs
//!   constructions in the evaluation methods cannot fail in practice.
use crate::extremes::errors::{ExtResult, ExtremesError};
use statrs::distribution::{Continuous, ContinuousCDF, Exp, Gamma, LogNormal, Normal};
use std::str::FromStr;

fn verify_positive(name: &'static str, value: f64) -> ExtResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ExtremesError::InvalidParameter { name, value });
    }
    Ok(value)
}

fn verify_finite(name: &'static str, value: f64) -> ExtResult<f64> {
    if !value.is_finite() {
        return Err(ExtremesError::InvalidParameter { name, value });
    }
    Ok(value)
}

/// Parent families supported by the block-maxima machinery.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"exponential"`, `"gamma"`, `"normal"`, `"lognormal"`). Anything
/// else returns [`ExtremesError::UnsupportedDistribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentFamily {
    Exponential,
    Gamma,
    Normal,
    Lognormal,
}

impl FromStr for ParentFamily {
    type Err = ExtremesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exponential" | "exp" => Ok(ParentFamily::Exponential),
            "gamma" => Ok(ParentFamily::Gamma),
            "normal" | "gaussian" => Ok(ParentFamily::Normal),
            "lognormal" | "log-normal" => Ok(ParentFamily::Lognormal),
            _ => Err(ExtremesError::UnsupportedDistribution { name: s.to_string() }),
        }
    }
}

/// A validated parent distribution in the Gumbel domain of attraction.
///
/// Variants carry the raw parameters; evaluation constructs the statrs
/// distribution on demand, mirroring how the parameters were checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParentDistribution {
    /// Exponential with rate λ > 0.
    Exponential { rate: f64 },
    /// Gamma with shape α > 0 and rate λ > 0.
    Gamma { shape: f64, rate: f64 },
    /// Normal with mean μ and standard deviation σ > 0.
    Normal { mean: f64, std_dev: f64 },
    /// Lognormal: ln X ~ N(μ, σ²) with σ > 0.
    Lognormal { location: f64, scale: f64 },
}

impl ParentDistribution {
    /// Exponential parent with rate λ > 0.
    ///
    /// # Errors
    /// Returns [`ExtremesError::InvalidParameter`] for a non-finite or
    /// non-positive rate.
    pub fn exponential(rate: f64) -> ExtResult<Self> {
        Ok(ParentDistribution::Exponential { rate: verify_positive("rate", rate)? })
    }

    /// Gamma parent with shape α > 0 and rate λ > 0.
    ///
    /// # Errors
    /// Returns [`ExtremesError::InvalidParameter`] for a non-finite or
    /// non-positive shape or rate.
    pub fn gamma(shape: f64, rate: f64) -> ExtResult<Self> {
        Ok(ParentDistribution::Gamma {
            shape: verify_positive("shape", shape)?,
            rate: verify_positive("rate", rate)?,
        })
    }

    /// Normal parent with mean μ and standard deviation σ > 0.
    ///
    /// # Errors
    /// Returns [`ExtremesError::InvalidParameter`] for a non-finite mean
    /// or a non-finite or non-positive standard deviation.
    pub fn normal(mean: f64, std_dev: f64) -> ExtResult<Self> {
        Ok(ParentDistribution::Normal {
            mean: verify_finite("mean", mean)?,
            std_dev: verify_positive("std_dev", std_dev)?,
        })
    }

    /// Lognormal parent: ln X ~ N(μ, σ²) with σ > 0.
    ///
    /// # Errors
    /// Returns [`ExtremesError::InvalidParameter`] for a non-finite
    /// location or a non-finite or non-positive scale.
    pub fn lognormal(location: f64, scale: f64) -> ExtResult<Self> {
        Ok(ParentDistribution::Lognormal {
            location: verify_finite("location", location)?,
            scale: verify_positive("scale", scale)?,
        })
    }

    /// The family this parent belongs to.
    pub fn family(&self) -> ParentFamily {
        match self {
            ParentDistribution::Exponential { .. } => ParentFamily::Exponential,
            ParentDistribution::Gamma { .. } => ParentFamily::Gamma,
            ParentDistribution::Normal { .. } => ParentFamily::Normal,
            ParentDistribution::Lognormal { .. } => ParentFamily::Lognormal,
        }
    }

    //------ Evaluation ------

    /// CDF F(x) of the parent.
    pub fn cdf(&self, x: f64) -> ExtResult<f64> {
        Ok(match self {
            ParentDistribution::Exponential { rate } => Exp::new(*rate)?.cdf(x),
            ParentDistribution::Gamma { shape, rate } => Gamma::new(*shape, *rate)?.cdf(x),
            ParentDistribution::Normal { mean, std_dev } => Normal::new(*mean, *std_dev)?.cdf(x),
            ParentDistribution::Lognormal { location, scale } => {
                LogNormal::new(*location, *scale)?.cdf(x)
            }
        })
    }

    /// Density f(x) of the parent.
    pub fn pdf(&self, x: f64) -> ExtResult<f64> {
        Ok(match self {
            ParentDistribution::Exponential { rate } => Exp::new(*rate)?.pdf(x),
            ParentDistribution::Gamma { shape, rate } => Gamma::new(*shape, *rate)?.pdf(x),
            ParentDistribution::Normal { mean, std_dev } => Normal::new(*mean, *std_dev)?.pdf(x),
            ParentDistribution::Lognormal { location, scale } => {
                LogNormal::new(*location, *scale)?.pdf(x)
            }
        })
    }

    /// Log-density ln f(x) of the parent. −∞ off the support.
    pub fn ln_pdf(&self, x: f64) -> ExtResult<f64> {
        Ok(match self {
            ParentDistribution::Exponential { rate } => Exp::new(*rate)?.ln_pdf(x),
            ParentDistribution::Gamma { shape, rate } => Gamma::new(*shape, *rate)?.ln_pdf(x),
            ParentDistribution::Normal { mean, std_dev } => {
                Normal::new(*mean, *std_dev)?.ln_pdf(x)
            }
            ParentDistribution::Lognormal { location, scale } => {
                LogNormal::new(*location, *scale)?.ln_pdf(x)
            }
        })
    }

    /// Quantile F⁻¹(p) of the parent for p ∈ [0, 1].
    ///
    /// # Errors
    /// Returns [`ExtremesError::InvalidProbability`] for p outside
    /// [0, 1]; the closed endpoints map to the support bounds.
    pub fn quantile(&self, p: f64) -> ExtResult<f64> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ExtremesError::InvalidProbability { p });
        }
        Ok(match self {
            ParentDistribution::Exponential { rate } => Exp::new(*rate)?.inverse_cdf(p),
            ParentDistribution::Gamma { shape, rate } => {
                Gamma::new(*shape, *rate)?.inverse_cdf(p)
            }
            ParentDistribution::Normal { mean, std_dev } => {
                Normal::new(*mean, *std_dev)?.inverse_cdf(p)
            }
            ParentDistribution::Lognormal { location, scale } => {
                LogNormal::new(*location, *scale)?.inverse_cdf(p)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Family parsing, including the unsupported-name rejection.
    // - Parameter validation at construction.
    // - Quantile/CDF coherence for each family.
    //
    // They intentionally DO NOT cover:
    // - The statrs evaluation routines themselves, which are upstream.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify family names parse case-insensitively and unknown names
    // are rejected.
    //
    // Given
    // -----
    // - "Exponential", "LOGNORMAL", and "cauchy".
    //
    // Expect
    // ------
    // - The first two parse; "cauchy" yields UnsupportedDistribution.
    fn family_parsing() {
        // Act & Assert
        assert_eq!("Exponential".parse::<ParentFamily>().unwrap(), ParentFamily::Exponential);
        assert_eq!("LOGNORMAL".parse::<ParentFamily>().unwrap(), ParentFamily::Lognormal);
        assert!(matches!(
            "cauchy".parse::<ParentFamily>(),
            Err(ExtremesError::UnsupportedDistribution { name }) if name == "cauchy"
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify constructors reject out-of-domain parameters.
    //
    // Given
    // -----
    // - A zero rate, a negative gamma shape, and a zero normal sigma.
    //
    // Expect
    // ------
    // - InvalidParameter naming the offending field.
    fn constructors_validate_parameters() {
        assert!(matches!(
            ParentDistribution::exponential(0.0),
            Err(ExtremesError::InvalidParameter { name: "rate", .. })
        ));
        assert!(matches!(
            ParentDistribution::gamma(-1.0, 2.0),
            Err(ExtremesError::InvalidParameter { name: "shape", .. })
        ));
        assert!(matches!(
            ParentDistribution::normal(0.0, 0.0),
            Err(ExtremesError::InvalidParameter { name: "std_dev", .. })
        ));
        assert!(ParentDistribution::lognormal(0.0, 1.0).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify quantile and CDF invert each other for each family.
    //
    // Given
    // -----
    // - One parent per family, probabilities {0.1, 0.5, 0.9}.
    //
    // Expect
    // ------
    // - cdf(quantile(p)) recovers p to 1e-9.
    fn quantile_cdf_coherence() {
        // Arrange
        let parents = [
            ParentDistribution::exponential(2.0).unwrap(),
            ParentDistribution::gamma(3.0, 1.5).unwrap(),
            ParentDistribution::normal(1.0, 2.0).unwrap(),
            ParentDistribution::lognormal(0.0, 0.5).unwrap(),
        ];

        for parent in &parents {
            for &p in &[0.1, 0.5, 0.9] {
                // Act
                let x = parent.quantile(p).unwrap();
                let back = parent.cdf(x).unwrap();

                // Assert
                assert!(
                    (back - p).abs() < 1e-9,
                    "{:?} at p = {p}: round-trip gave {back}",
                    parent.family()
                );
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify quantile rejects probabilities outside [0, 1].
    //
    // Given
    // -----
    // - p = 1.5 on an exponential parent.
    //
    // Expect
    // ------
    // - InvalidProbability.
    fn quantile_rejects_out_of_range() {
        let parent = ParentDistribution::exponential(1.0).unwrap();
        assert!(matches!(
            parent.quantile(1.5),
            Err(ExtremesError::InvalidProbability { p }) if p == 1.5
        ));
    }
}
