//! Kernel parameters with validated construction.
//!
//! A MinBLEP table is fully determined by two integers: the number of sinc
//! zero crossings on each side of center, and the number of table entries
//! per zero-crossing interval. The table length follows from both:
//!
//! ```text
//! n = 2 * zero_crossings * over_sampling + 1
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing [`KernelParams`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Zero crossings must be at least 1.
    #[error("zero crossings must be >= 1, got {0}")]
    ZeroCrossingsOutOfRange(usize),

    /// Oversampling must be at least 1.
    #[error("oversampling must be >= 1, got {0}")]
    OverSamplingOutOfRange(usize),

    /// The table length does not fit in `usize`.
    #[error("table length overflows for {zero_crossings} zero crossings x {over_sampling} oversampling")]
    LengthOverflow {
        zero_crossings: usize,
        over_sampling: usize,
    },
}

/// Shape of a MinBLEP table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KernelParams {
    /// Half-width of the sinc in zero-crossing units.
    pub zero_crossings: usize,

    /// Samples per zero crossing.
    pub over_sampling: usize,
}

impl KernelParams {
    /// Validate and create a parameter pair.
    pub fn new(zero_crossings: usize, over_sampling: usize) -> Result<Self, ParamError> {
        let params = Self {
            zero_crossings,
            over_sampling,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check both parameters are in range and the table length is representable.
    ///
    /// Useful after deserialization, which bypasses [`KernelParams::new`].
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.zero_crossings == 0 {
            return Err(ParamError::ZeroCrossingsOutOfRange(self.zero_crossings));
        }
        if self.over_sampling == 0 {
            return Err(ParamError::OverSamplingOutOfRange(self.over_sampling));
        }
        self.checked_table_len().map(|_| ())
    }

    /// Table length, `2 * zero_crossings * over_sampling + 1`.
    ///
    /// Wraps silently on overflow; call [`KernelParams::validate`] first for
    /// untrusted input.
    #[inline]
    pub fn table_len(&self) -> usize {
        2 * self.zero_crossings * self.over_sampling + 1
    }

    /// Table length with overflow checking.
    pub fn checked_table_len(&self) -> Result<usize, ParamError> {
        self.zero_crossings
            .checked_mul(self.over_sampling)
            .and_then(|v| v.checked_mul(2))
            .and_then(|v| v.checked_add(1))
            .ok_or(ParamError::LengthOverflow {
                zero_crossings: self.zero_crossings,
                over_sampling: self.over_sampling,
            })
    }
}

impl Default for KernelParams {
    /// 16 zero crossings at 32x oversampling, a common oscillator setting.
    fn default() -> Self {
        Self {
            zero_crossings: 16,
            over_sampling: 32,
        }
    }
}

impl std::fmt::Display for KernelParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.zero_crossings, self.over_sampling)
    }
}

/// Floating-point precision of a generated table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Single precision.
    F32,
    /// Double precision.
    #[default]
    F64,
}
