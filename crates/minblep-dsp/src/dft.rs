//! Direct discrete Fourier transform pair.
//!
//! Reference-accuracy O(n²) summation, used by default for every transform
//! in the pipeline. Tables are small and generated once, so accuracy and a
//! stable summation order matter more than speed.
//!
//! Convention (shared with [`crate::fft::FftEngine`]):
//!
//! ```text
//! forward:  X[k] =       Σ x[i]·e^{-2πj·k·i/n}
//! inverse:  x[i] = 1/n · Σ X[k]·e^{+2πj·k·i/n}
//! ```

use crate::error::{DspError, DspResult};
use crate::sample::Sample;
use num_complex::Complex;

/// A forward/inverse transform pair over complex buffers.
///
/// Implementations must use the convention documented in this module so
/// that backends can be swapped without changing pipeline output beyond
/// rounding.
pub trait FourierTransform<T: Sample> {
    /// Forward transform, negative exponent, unscaled.
    fn forward(&mut self, data: &[Complex<T>]) -> Vec<Complex<T>>;

    /// Inverse transform, positive exponent, scaled by `1/n`.
    fn inverse(&mut self, data: &[Complex<T>]) -> Vec<Complex<T>>;
}

/// Direct-summation transform backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectDft;

impl<T: Sample> FourierTransform<T> for DirectDft {
    fn forward(&mut self, data: &[Complex<T>]) -> Vec<Complex<T>> {
        dft_complex(data)
    }

    fn inverse(&mut self, data: &[Complex<T>]) -> Vec<Complex<T>> {
        inverse_dft_complex(data)
    }
}

/// Twiddle factors `e^{-2πj·m/n}` for `m = 0..n`.
///
/// `k·i` is reduced modulo `n` before indexing, which keeps the trigonometric
/// argument inside `[0, 2π)` for every term.
fn twiddles<T: Sample>(n: usize) -> Vec<Complex<T>> {
    let two_pi = T::PI() + T::PI();
    let n_inv = T::one() / T::from_index(n);
    (0..n)
        .map(|m| {
            let p = two_pi * T::from_index(m) * n_inv;
            let (s, c) = p.sin_cos();
            Complex::new(c, -s)
        })
        .collect()
}

/// Forward transform of a complex signal.
pub fn dft_complex<T: Sample>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = input.len();
    let w = twiddles::<T>(n);
    let mut output = vec![Complex::new(T::zero(), T::zero()); n];

    for (k, out) in output.iter_mut().enumerate() {
        for (i, x) in input.iter().enumerate() {
            let t = w[(k * i) % n];
            out.re = out.re + (x.re * t.re - x.im * t.im);
            out.im = out.im + (x.re * t.im + x.im * t.re);
        }
    }

    output
}

/// Inverse transform of a complex spectrum.
pub fn inverse_dft_complex<T: Sample>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = input.len();
    let w = twiddles::<T>(n);
    let n_inv = T::one() / T::from_index(n);
    let mut output = vec![Complex::new(T::zero(), T::zero()); n];

    for (k, out) in output.iter_mut().enumerate() {
        for (i, x) in input.iter().enumerate() {
            // Multiply by the conjugate twiddle, e^{+2πj·k·i/n}.
            let t = w[(k * i) % n];
            out.re = out.re + (x.re * t.re + x.im * t.im);
            out.im = out.im + (x.im * t.re - x.re * t.im);
        }
        out.re = out.re * n_inv;
        out.im = out.im * n_inv;
    }

    output
}

fn check_pair<T>(re: &[T], im: &[T]) -> DspResult<()> {
    if re.len() != im.len() {
        return Err(DspError::LengthMismatch {
            expected: re.len(),
            actual: im.len(),
        });
    }
    Ok(())
}

fn zip_complex<T: Sample>(re: &[T], im: &[T]) -> Vec<Complex<T>> {
    re.iter()
        .zip(im.iter())
        .map(|(&r, &i)| Complex::new(r, i))
        .collect()
}

fn unzip_complex<T: Sample>(data: Vec<Complex<T>>) -> (Vec<T>, Vec<T>) {
    data.into_iter().map(|c| (c.re, c.im)).unzip()
}

/// Forward transform of a signal held as separate real and imaginary buffers.
///
/// Returns `(real, imaginary)` frequency-domain buffers.
pub fn dft<T: Sample>(re: &[T], im: &[T]) -> DspResult<(Vec<T>, Vec<T>)> {
    check_pair(re, im)?;
    Ok(unzip_complex(dft_complex(&zip_complex(re, im))))
}

/// Inverse transform of a spectrum held as separate real and imaginary buffers.
///
/// Returns `(real, imaginary)` time-domain buffers.
pub fn inverse_dft<T: Sample>(re: &[T], im: &[T]) -> DspResult<(Vec<T>, Vec<T>)> {
    check_pair(re, im)?;
    Ok(unzip_complex(inverse_dft_complex(&zip_complex(re, im))))
}

/// Lift a real signal to a complex one with zero imaginary part.
pub fn to_complex<T: Sample>(signal: &[T]) -> Vec<Complex<T>> {
    signal
        .iter()
        .map(|&v| Complex::new(v, T::zero()))
        .collect()
}

/// Magnitude spectrum `|X[k]|` of a real signal.
pub fn magnitude_spectrum_with<T, F>(transform: &mut F, signal: &[T]) -> Vec<T>
where
    T: Sample,
    F: FourierTransform<T>,
{
    transform
        .forward(&to_complex(signal))
        .iter()
        .map(|c| (c.re * c.re + c.im * c.im).sqrt())
        .collect()
}
