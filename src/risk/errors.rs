//! risk::errors — error types for tail risk measures.

pub type RiskResult<T> = Result<T, RiskError>;

/// RiskError — failures in VaR/ES evaluation.
///
/// Variants
/// --------
/// - `InvalidConfidence`: α outside (floor, 1), where floor = 1 − p is
///   the level at which the implied quantile sits exactly on the
///   threshold, outside the extrapolation regime.
/// - `InvalidExceedanceProb`: tail probability p outside (0, 1].
/// - `InvalidThreshold`: non-finite threshold.
/// - `EmptySeries`: a loss series with no observations, for which no
///   exceedance probability exists.
/// - `ModelDegenerate`: expected shortfall requested with ξ ≥ 1, where
///   the fitted distribution has no finite mean.
#[derive(Debug, Clone, PartialEq)]
pub enum RiskError {
    InvalidConfidence { alpha: f64, floor: f64 },
    InvalidExceedanceProb { p: f64 },
    InvalidThreshold { threshold: f64 },
    EmptySeries,
    ModelDegenerate { shape: f64 },
}

impl std::error::Error for RiskError {}

impl std::fmt::Display for RiskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskError::InvalidConfidence { alpha, floor } => {
                write!(f, "Invalid confidence level {alpha}: must lie in ({floor}, 1).")
            }
            RiskError::InvalidExceedanceProb { p } => {
                write!(f, "Invalid exceedance probability {p}: must lie in (0, 1].")
            }
            RiskError::InvalidThreshold { threshold } => {
                write!(f, "Invalid threshold {threshold}: must be finite.")
            }
            RiskError::EmptySeries => {
                write!(f, "Empty loss series: no exceedance probability can be formed.")
            }
            RiskError::ModelDegenerate { shape } => {
                write!(
                    f,
                    "Fitted shape {shape} >= 1: the tail mean is infinite, expected shortfall is undefined."
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify Display messages embed the offending values.
    //
    // Given
    // -----
    // - InvalidConfidence with alpha = 0.5, floor = 0.95 and
    //   ModelDegenerate with shape = 1.2.
    //
    // Expect
    // ------
    // - Both payloads appear in the formatted text.
    fn risk_error_display_includes_payloads() {
        // Act
        let conf = RiskError::InvalidConfidence { alpha: 0.5, floor: 0.95 }.to_string();
        let degen = RiskError::ModelDegenerate { shape: 1.2 }.to_string();

        // Assert
        assert!(conf.contains("0.5") && conf.contains("0.95"), "got: {conf}");
        assert!(degen.contains("1.2"), "got: {degen}");
    }
}
