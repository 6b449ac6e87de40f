//! Minimum-phase reconstruction from a real cepstrum.
//!
//! Folding the (even) cepstrum onto its causal half gives the complex
//! cepstrum of the minimum-phase signal with the same magnitude spectrum.
//! Exponentiating its transform and transforming back yields that signal:
//! causal, with its energy packed against the start.

use crate::dft::{to_complex, DirectDft, FourierTransform};
use crate::sample::Sample;
use num_complex::Complex;

/// Fold a real cepstrum onto its causal half.
///
/// With `h = n / 2`:
/// - index 0 is kept as-is
/// - indices `1..h` are doubled
/// - odd `n`: indices `h..n` are zeroed
/// - even `n`: index `h` is kept as-is, indices `h+1..n` are zeroed
pub fn fold_cepstrum<T: Sample>(cepstrum: &[T]) -> Vec<T> {
    let n = cepstrum.len();
    let h = n / 2;
    let two = T::from_const(2.0);
    let mut folded = vec![T::zero(); n];

    if n == 0 {
        return folded;
    }

    // Quefrency zero: keep
    folded[0] = cepstrum[0];

    // Causal part: double
    for i in 1..h {
        folded[i] = two * cepstrum[i];
    }

    // Even length: the midpoint maps onto itself
    if n % 2 == 0 && h > 0 {
        folded[h] = cepstrum[h];
    }

    folded
}

/// Minimum-phase signal for a real cepstrum, using the direct transform.
pub fn minimum_phase<T: Sample>(cepstrum: &[T]) -> Vec<T> {
    minimum_phase_with(&mut DirectDft, cepstrum)
}

/// Minimum-phase signal for a real cepstrum with an explicit transform backend.
///
/// 1. Fold the cepstrum causally.
/// 2. Forward transform (zero imaginary part).
/// 3. Complex exponential per bin: `(a, b) -> (e^a·cos b, e^a·sin b)`.
/// 4. Inverse transform; keep the real part.
pub fn minimum_phase_with<T, F>(transform: &mut F, cepstrum: &[T]) -> Vec<T>
where
    T: Sample,
    F: FourierTransform<T>,
{
    let folded = fold_cepstrum(cepstrum);
    let spectrum = transform.forward(&to_complex(&folded));

    let exponentiated: Vec<Complex<T>> = spectrum
        .iter()
        .map(|c| {
            let mag = c.re.exp();
            let (s, co) = c.im.sin_cos();
            Complex::new(mag * co, mag * s)
        })
        .collect();

    transform
        .inverse(&exponentiated)
        .into_iter()
        .map(|c| c.re)
        .collect()
}

/// Fraction of a signal's energy located in `signal[..split]`.
///
/// Returns 0 for a zero-energy signal. A minimum-phase signal scores
/// higher than any other signal with the same magnitude spectrum.
pub fn front_energy_ratio<T: Sample>(signal: &[T], split: usize) -> f64 {
    let energy = |s: &[T]| -> f64 {
        s.iter()
            .map(|&v| {
                let v: f64 = v.into();
                v * v
            })
            .sum()
    };

    let total = energy(signal);
    if total == 0.0 {
        return 0.0;
    }
    energy(&signal[..split.min(signal.len())]) / total
}
