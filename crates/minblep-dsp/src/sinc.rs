//! Normalized sinc, the ideal band-limited impulse.

use crate::sample::Sample;

/// Normalized sinc: `sin(πx) / (πx)`, with `sinc(0) = 1`.
///
/// Zero crossings fall on the non-zero integers.
#[inline]
pub fn sinc<T: Sample>(x: T) -> T {
    if x == T::zero() {
        return T::one();
    }
    let pix = T::PI() * x;
    pix.sin() / pix
}

/// Sample `sinc` at `len` evenly spaced points spanning
/// `[-zero_crossings, +zero_crossings]`, endpoints included.
///
/// A single-point table has no spacing: `0 / 0` makes its only sample NaN.
pub fn sinc_table<T: Sample>(zero_crossings: usize, len: usize) -> Vec<T> {
    let b = T::from_index(zero_crossings);
    let a = -b;
    let span = b - a;
    let last = T::from_index(len.saturating_sub(1));

    (0..len)
        .map(|i| {
            let r = T::from_index(i) / last;
            sinc(a + r * span)
        })
        .collect()
}
