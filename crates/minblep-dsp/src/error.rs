//! Error types for kernel generation.
//!
//! The numeric primitives never fail: degeneracies (division by zero,
//! logarithm of a spectral null) show up as IEEE infinities or NaNs in their
//! output. Errors are raised only by the checked entry points.

use minblep_types::ParamError;
use thiserror::Error;

/// Errors that can occur during kernel generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DspError {
    /// Paired buffers have different lengths.
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Kernel parameters out of range.
    #[error("Invalid kernel parameters: {0}")]
    InvalidParams(#[from] ParamError),

    /// The integrated step ends at zero or a non-finite value and cannot be normalized.
    #[error("Cannot normalize step response: final value is {0}")]
    DegenerateNormalization(f64),

    /// A pipeline stage produced NaN or infinity.
    #[error("Non-finite value in {stage} at index {index}")]
    NonFinite { stage: &'static str, index: usize },
}

/// Result type for kernel generation.
pub type DspResult<T> = Result<T, DspError>;
