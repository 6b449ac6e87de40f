//! Generated MinBLEP table.
//!
//! # Sample Semantics
//!
//! A table of `n` samples is the band-limited step response of a unit
//! discontinuity, sampled at `over_sampling` entries per zero crossing:
//!
//! ```text
//! samples[i] ~ step response at t = i / over_sampling   (in zero-crossing units)
//! ```
//!
//! The last sample is exactly `1.0`. Earlier samples may overshoot or dip
//! below 1.0 because of minimum-phase ringing, so the table is not monotone.

use crate::params::KernelParams;
use serde::{Deserialize, Serialize};

/// A generated step-correction table together with its parameters.
///
/// The table owns its samples; nothing else holds a reference to them once
/// generation returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinBlepTable<T> {
    params: KernelParams,
    samples: Vec<T>,
}

impl<T> MinBlepTable<T> {
    /// Wrap generated samples.
    ///
    /// No validation is done here; the generator is responsible for the
    /// length and normalization invariants.
    pub fn new(params: KernelParams, samples: Vec<T>) -> Self {
        Self { params, samples }
    }

    /// Parameters the table was generated from.
    #[inline]
    pub fn params(&self) -> KernelParams {
        self.params
    }

    /// Table samples.
    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Take ownership of the samples.
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.samples.iter()
    }
}

impl<T: Copy + Into<f64>> MinBlepTable<T> {
    /// Index of the first NaN or infinite sample, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.samples.iter().position(|&v| !v.into().is_finite())
    }

    /// Largest sample value.
    ///
    /// Returns `f64::NEG_INFINITY` for an empty table.
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .map(|&v| v.into())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Amount by which the step response overshoots its final value of 1.0.
    ///
    /// Zero when the table never exceeds 1.0.
    pub fn overshoot(&self) -> f64 {
        (self.peak() - 1.0).max(0.0)
    }
}

impl<T> AsRef<[T]> for MinBlepTable<T> {
    fn as_ref(&self) -> &[T] {
        &self.samples
    }
}

impl<'a, T> IntoIterator for &'a MinBlepTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
