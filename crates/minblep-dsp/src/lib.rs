//! # minblep-dsp
//!
//! Minimum-phase band-limited step (MinBLEP) generation.
//!
//! This crate provides the numeric pipeline that turns two integers into an
//! anti-aliasing step-correction table, plus every stage on its own so that
//! intermediate buffers can be checked against reference vectors:
//!
//! - **Sinc**: normalized sinc, the ideal band-limited impulse
//! - **Window**: Blackman taper to finite support
//! - **DFT/IDFT**: direct-summation transform pair (rustfft backend optional)
//! - **Cepstrum**: real cepstrum via the log magnitude spectrum
//! - **Minimum phase**: causal cepstral folding and re-synthesis
//! - **MinBLEP**: integration, normalization and parallel batch generation
//!
//! All stages are generic over [`Sample`] (`f32` and `f64`).

pub mod error;
pub mod sample;
pub mod sinc;
pub mod window;
pub mod dft;
pub mod fft;
pub mod cepstrum;
pub mod min_phase;
pub mod minblep;

pub use error::{DspError, DspResult};
pub use sample::Sample;
pub use sinc::{sinc, sinc_table};
pub use window::{apply_window, blackman_window};
pub use dft::{dft, inverse_dft, DirectDft, FourierTransform};
pub use fft::FftEngine;
pub use cepstrum::{real_cepstrum, real_cepstrum_with, SpectralNullPolicy};
pub use min_phase::{fold_cepstrum, front_energy_ratio, minimum_phase, minimum_phase_with};
pub use minblep::{
    generate_many, generate_many_with, generate_minblep, integrate, normalize, windowed_sinc,
    MinBlepGenerator,
};
