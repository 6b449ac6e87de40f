//! FFT backend using rustfft.
//!
//! A drop-in replacement for [`DirectDft`](crate::dft::DirectDft) when tables
//! get large. rustfft handles any length (odd kernel lengths included) and
//! uses the same sign convention; its inverse is unscaled, so this wrapper
//! applies the `1/n` factor itself.
//!
//! Results match the direct transform to rounding error only, so golden
//! vectors are compared against the direct backend.

use crate::dft::FourierTransform;
use crate::sample::Sample;
use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// FFT engine with a cached planner.
///
/// Plans are reused across calls on the same engine; sample data is not.
pub struct FftEngine<T: Sample> {
    planner: FftPlanner<T>,
}

impl<T: Sample> FftEngine<T> {
    /// Create a new FFT engine.
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Perform forward FFT on complex data in-place.
    pub fn fft_inplace(&mut self, data: &mut [Complex<T>]) {
        if data.is_empty() {
            return;
        }
        let fft = self.planner.plan_fft_forward(data.len());
        fft.process(data);
    }

    /// Perform inverse FFT on complex data in-place, scaled by `1/n`.
    pub fn ifft_inplace(&mut self, data: &mut [Complex<T>]) {
        let len = data.len();
        if len == 0 {
            return;
        }

        let fft = self.planner.plan_fft_inverse(len);
        fft.process(data);

        // Normalize
        let scale = T::one() / T::from_index(len);
        for x in data.iter_mut() {
            *x = *x * scale;
        }
    }
}

impl<T: Sample> Default for FftEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> FourierTransform<T> for FftEngine<T> {
    fn forward(&mut self, data: &[Complex<T>]) -> Vec<Complex<T>> {
        let mut result = data.to_vec();
        self.fft_inplace(&mut result);
        result
    }

    fn inverse(&mut self, data: &[Complex<T>]) -> Vec<Complex<T>> {
        let mut result = data.to_vec();
        self.ifft_inplace(&mut result);
        result
    }
}
