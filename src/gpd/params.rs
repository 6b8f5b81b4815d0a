//! gpd::params — validated GPD parameters and fit output.
//!
//! Purpose
//! -------
//! Hold the (ξ, β) pair behind a constructor that enforces the domain
//! constraints once, so downstream code (risk measures, density
//! evaluation) can rely on a well-formed pair without re-checking.

use crate::gpd::{
    errors::GPDResult,
    validation::{validate_scale, validate_shape},
};

/// GPDParams — shape/scale pair of a generalized Pareto distribution.
///
/// Purpose
/// -------
/// Carry a validated (ξ, β) pair between the fitter and the consumers
/// of the fit: tail risk measures and distribution evaluation.
///
/// Fields
/// ------
/// - `shape`: tail index ξ; any finite value.
/// - `scale`: β > 0.
///
/// Invariants
/// ----------
/// - `shape` is finite and `scale` is finite and strictly positive,
///   enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GPDParams {
    pub shape: f64,
    pub scale: f64,
}

impl GPDParams {
    /// Build a validated parameter pair.
    ///
    /// Errors
    /// ------
    /// - `GPDError::InvalidShape` when ξ is non-finite.
    /// - `GPDError::InvalidScale` when β is non-positive or non-finite.
    pub fn new(shape: f64, scale: f64) -> GPDResult<Self> {
        validate_shape(shape)?;
        validate_scale(scale)?;
        Ok(GPDParams { shape, scale })
    }

    /// Whether the fitted distribution has infinite variance (ξ ≥ 1/2).
    pub fn infinite_variance(&self) -> bool {
        self.shape >= 0.5
    }

    /// Whether the fitted distribution has infinite mean (ξ ≥ 1).
    ///
    /// Notes
    /// -----
    /// - Expected shortfall is undefined in this regime; the risk layer
    ///   rejects such fits.
    pub fn infinite_mean(&self) -> bool {
        self.shape >= 1.0
    }
}

/// FitResult — outcome of a converged GPD maximum-likelihood fit.
///
/// Fields
/// ------
/// - `params`: the fitted (ξ, β) pair.
/// - `log_likelihood`: maximized log-likelihood at `params`.
/// - `converged`: true for every value returned by the fitter; kept as a
///   diagnostic record alongside `iterations`.
/// - `iterations`: solver iterations consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub params: GPDParams,
    pub log_likelihood: f64,
    pub converged: bool,
    pub iterations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpd::errors::GPDError;

    #[test]
    // Purpose
    // -------
    // Verify construction validates both parameters.
    //
    // Given
    // -----
    // - A valid pair (0.3, 2.0), a non-positive scale, and a NaN shape.
    //
    // Expect
    // ------
    // - The valid pair constructs; the others fail with the matching
    //   variant.
    fn params_construction_validates() {
        // Act
        let ok = GPDParams::new(0.3, 2.0);
        let bad_scale = GPDParams::new(0.3, 0.0);
        let bad_shape = GPDParams::new(f64::NAN, 2.0);

        // Assert
        assert!(ok.is_ok());
        assert!(matches!(bad_scale, Err(GPDError::InvalidScale { .. })));
        assert!(matches!(bad_shape, Err(GPDError::InvalidShape { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify the moment-existence predicates flag their thresholds.
    //
    // Given
    // -----
    // - Shapes 0.3, 0.5, and 1.0 with unit scale.
    //
    // Expect
    // ------
    // - infinite_variance true from 0.5, infinite_mean true from 1.0.
    fn moment_predicates_at_thresholds() {
        // Arrange
        let light = GPDParams::new(0.3, 1.0).unwrap();
        let heavy = GPDParams::new(0.5, 1.0).unwrap();
        let extreme = GPDParams::new(1.0, 1.0).unwrap();

        // Assert
        assert!(!light.infinite_variance());
        assert!(heavy.infinite_variance());
        assert!(!heavy.infinite_mean());
        assert!(extreme.infinite_mean());
    }
}
