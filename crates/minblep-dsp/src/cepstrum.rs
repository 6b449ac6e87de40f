//! Real cepstrum extraction.
//!
//! The real cepstrum is the inverse transform of the log magnitude spectrum.
//! For a real input it is real and even, and it separates the spectral
//! envelope from the phase structure that minimum-phase reconstruction
//! replaces.

use crate::dft::{to_complex, DirectDft, FourierTransform};
use crate::sample::Sample;
use num_complex::Complex;

/// What to do when a spectral bin has zero magnitude and `ln` is undefined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SpectralNullPolicy {
    /// Take `ln(0) = -inf` and let it propagate through the pipeline.
    ///
    /// Matches the reference vectors. A windowed sinc has no exact nulls in
    /// practice, so this only matters for pathological inputs.
    #[default]
    Propagate,

    /// Clamp magnitudes to at least this value before taking the logarithm.
    Floor(f64),
}

impl SpectralNullPolicy {
    #[inline]
    fn log_magnitude<T: Sample>(self, magnitude: T) -> T {
        match self {
            Self::Propagate => magnitude.ln(),
            Self::Floor(min) => magnitude.max(T::from_const(min)).ln(),
        }
    }
}

/// Real cepstrum of a real signal using the direct transform.
///
/// Spectral nulls propagate as non-finite values.
pub fn real_cepstrum<T: Sample>(signal: &[T]) -> Vec<T> {
    real_cepstrum_with(&mut DirectDft, signal, SpectralNullPolicy::Propagate)
}

/// Real cepstrum of a real signal with an explicit transform backend and
/// spectral-null policy.
///
/// 1. Forward transform of the signal (zero imaginary part).
/// 2. Replace every bin by `ln|X[k]|`, imaginary part zero.
/// 3. Inverse transform; keep the real part.
pub fn real_cepstrum_with<T, F>(transform: &mut F, signal: &[T], policy: SpectralNullPolicy) -> Vec<T>
where
    T: Sample,
    F: FourierTransform<T>,
{
    let spectrum = transform.forward(&to_complex(signal));

    let log_mag: Vec<Complex<T>> = spectrum
        .iter()
        .map(|c| {
            let magnitude = (c.re * c.re + c.im * c.im).sqrt();
            Complex::new(policy.log_magnitude(magnitude), T::zero())
        })
        .collect();

    transform.inverse(&log_mag).into_iter().map(|c| c.re).collect()
}
