//! Error types for sampling, estimation and frame scheduling.
//!
//! Every failure mode is fatal for a run: the computation is pure and
//! deterministic given its inputs, so nothing here is retried.

use thiserror::Error;

/// Result alias for pi_* operations.
pub type PiResult<T> = Result<T, PiError>;

/// Errors raised while building sources, histories and frame schedules.
///
/// # Variants
///
/// - `SourceExhausted`: A point was requested after all N were produced
/// - `InvalidSobolCount`: N is not a power of two for the quasirandom source
/// - `SobolCapacity`: N exceeds what 32-bit direction numbers can index
/// - `InvalidDimension`: Sobol dimension outside the direction-number table
/// - `InvalidFrameCount`: F is zero
/// - `InvalidParameter`: Any other configuration validation failure
/// - `HistoryMismatch`: Label and estimate histories differ in length
///
/// # Examples
///
/// ```
/// use pi_core::PiError;
///
/// let err = PiError::InvalidSobolCount(1000);
/// assert!(err.to_string().contains("1000"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PiError {
    /// A source was pulled more than N times.
    #[error("Point source exhausted after {produced} points")]
    SourceExhausted {
        /// Number of points produced before the failing request
        produced: usize,
    },

    /// Quasirandom point count is not a power of two.
    #[error("Invalid Sobol point count {0}: must be a non-zero power of two")]
    InvalidSobolCount(usize),

    /// Quasirandom point count exceeds the generator's index range.
    #[error("Sobol point count {requested} exceeds maximum {max}")]
    SobolCapacity {
        /// Requested point count
        requested: usize,
        /// Largest supported point count
        max: usize,
    },

    /// Sobol dimension is zero or has no direction numbers.
    #[error("Invalid Sobol dimension {dimension}: must be in [1, {max}]")]
    InvalidDimension {
        /// Requested dimension
        dimension: usize,
        /// Largest supported dimension
        max: usize,
    },

    /// Frame count is zero.
    #[error("Invalid frame count {0}: must be at least 1")]
    InvalidFrameCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },

    /// Classification and estimate histories are not the same length.
    #[error("History length mismatch: {labels} labels, {estimates} estimates")]
    HistoryMismatch {
        /// Length of the label history
        labels: usize,
        /// Length of the estimate history
        estimates: usize,
    },
}

impl PiError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
