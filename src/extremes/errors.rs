//! extremes::errors — error types for the block-maxima machinery.

pub type ExtResult<T> = Result<T, ExtremesError>;

/// ExtremesError — failures across parent distributions, normalizing
/// sequences, and density construction.
///
/// Variants
/// --------
/// - `UnsupportedDistribution`: a distribution name outside the closed
///   family set, from string parsing.
/// - `InvalidParameter`: a parent-distribution parameter outside its
///   domain (e.g. a non-positive rate).
/// - `InvalidProbability`: quantile argument outside [0, 1].
/// - `InvalidBlockSize`: block size below 2.
/// - `InvalidStreamLength`: uniform stream that does not divide into
///   whole blocks, or is empty.
/// - `InvalidGrid`: evaluation grid with a non-increasing range or too
///   few points.
/// - `InsufficientSample`: fewer than 2 points offered to the KDE.
/// - `ZeroBandwidth`: bandwidth collapsed to zero (degenerate sample)
///   or supplied as non-positive.
/// - `Distribution`: wrapped statrs construction failure. Parameters are
///   validated before construction, so this indicates a bug.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtremesError {
    UnsupportedDistribution { name: String },
    InvalidParameter { name: &'static str, value: f64 },
    InvalidProbability { p: f64 },
    InvalidBlockSize { n: usize },
    InvalidStreamLength { len: usize, block_size: usize },
    InvalidGrid { lo: f64, hi: f64, points: usize },
    InsufficientSample { len: usize },
    ZeroBandwidth { bandwidth: f64 },
    Distribution { text: String },
}

impl std::error::Error for ExtremesError {}

impl std::fmt::Display for ExtremesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtremesError::UnsupportedDistribution { name } => {
                write!(
                    f,
                    "Unsupported parent distribution '{name}'. Supported: exponential, gamma, normal, lognormal."
                )
            }
            ExtremesError::InvalidParameter { name, value } => {
                write!(f, "Invalid parent parameter {name} = {value}.")
            }
            ExtremesError::InvalidProbability { p } => {
                write!(f, "Invalid probability {p}: must lie in [0, 1].")
            }
            ExtremesError::InvalidBlockSize { n } => {
                write!(f, "Invalid block size {n}: need at least 2 observations per block.")
            }
            ExtremesError::InvalidStreamLength { len, block_size } => {
                write!(
                    f,
                    "Uniform stream of length {len} does not divide into non-empty blocks of size {block_size}."
                )
            }
            ExtremesError::InvalidGrid { lo, hi, points } => {
                write!(f, "Invalid grid [{lo}, {hi}] with {points} points.")
            }
            ExtremesError::InsufficientSample { len } => {
                write!(f, "Need at least 2 block maxima for a kernel density; got {len}.")
            }
            ExtremesError::ZeroBandwidth { bandwidth } => {
                write!(f, "Kernel bandwidth {bandwidth} is not strictly positive.")
            }
            ExtremesError::Distribution { text } => {
                write!(f, "Distribution backend failure: {text}")
            }
        }
    }
}

impl From<statrs::StatsError> for ExtremesError {
    fn from(err: statrs::StatsError) -> Self {
        ExtremesError::Distribution { text: err.to_string() }
    }
}
