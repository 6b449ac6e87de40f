//! Floating-point sample type shared by the whole pipeline.
//!
//! Every stage is generic over [`Sample`], so single and double precision
//! tables come out of the same code path.

use num_traits::{Float, FloatConst};
use rustfft::FftNum;
use std::fmt::{Display, LowerExp};

/// A real sample type usable by every pipeline stage and transform backend.
///
/// Implemented for `f32` and `f64`.
pub trait Sample:
    Float + FloatConst + FftNum + Default + Display + LowerExp + Into<f64>
{
    /// Convert a literal constant to this precision.
    fn from_const(x: f64) -> Self;

    /// Convert a buffer index to this precision.
    fn from_index(i: usize) -> Self;
}

impl Sample for f32 {
    #[inline]
    fn from_const(x: f64) -> Self {
        x as f32
    }

    #[inline]
    fn from_index(i: usize) -> Self {
        i as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn from_const(x: f64) -> Self {
        x
    }

    #[inline]
    fn from_index(i: usize) -> Self {
        i as f64
    }
}

/// Index of the first NaN or infinite value in a buffer.
pub(crate) fn first_non_finite<T: Sample>(buf: &[T]) -> Option<usize> {
    buf.iter().position(|v| !v.is_finite())
}
