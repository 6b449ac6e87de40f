//! Blackman window for tapering the sinc to finite support.
//!
//! The window reaches zero at both endpoints, which suppresses the
//! truncation ripple a rectangular cut of the sinc would leave in the
//! spectrum (Gibbs phenomenon).

use crate::error::{DspError, DspResult};
use crate::sample::Sample;

/// Generate `length` Blackman window coefficients.
///
/// ```text
/// w[i] = 0.42 - 0.5·cos(2πi/(n-1)) + 0.08·cos(4πi/(n-1))
/// ```
///
/// The window is symmetric, near zero at both ends and peaks at the center.
/// A zero-length request yields an empty window, and a single-point window is `[1.0]`.
pub fn blackman_window<T: Sample>(length: usize) -> Vec<T> {
    if length == 0 {
        return Vec::new();
    }
    if length == 1 {
        return vec![T::one()];
    }

    let two_pi = T::PI() + T::PI();
    let m = T::from_index(length - 1);
    let a0 = T::from_const(0.42);
    let a1 = T::from_const(0.5);
    let a2 = T::from_const(0.08);

    (0..length)
        .map(|i| {
            let f1 = two_pi * T::from_index(i) / m;
            let f2 = f1 + f1;
            a0 - a1 * f1.cos() + a2 * f2.cos()
        })
        .collect()
}

/// Multiply a signal by a window in place.
pub fn apply_window<T: Sample>(signal: &mut [T], window: &[T]) -> DspResult<()> {
    if signal.len() != window.len() {
        return Err(DspError::LengthMismatch {
            expected: signal.len(),
            actual: window.len(),
        });
    }

    for (s, &w) in signal.iter_mut().zip(window.iter()) {
        *s = *s * w;
    }
    Ok(())
}
