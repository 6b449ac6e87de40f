//! MinBLEP assembly: windowed sinc → cepstrum → minimum phase → integrate → normalize.
//!
//! The free function [`generate_minblep`] is the unchecked reference entry
//! point: degenerate inputs surface as NaN/infinity in the output.
//! [`MinBlepGenerator`] adds parameter validation, backend selection and a
//! checked [`MinBlepGenerator::try_generate`] that rejects malformed tables.

use crate::cepstrum::{real_cepstrum_with, SpectralNullPolicy};
use crate::dft::{DirectDft, FourierTransform};
use crate::error::{DspError, DspResult};
use crate::min_phase::{front_energy_ratio, minimum_phase_with};
use crate::sample::{first_non_finite, Sample};
use crate::sinc::sinc_table;
use crate::window::blackman_window;
use minblep_types::{KernelParams, MinBlepTable};
use rayon::prelude::*;
use std::marker::PhantomData;

/// Generate a MinBLEP table of `2 * zero_crossings * over_sampling + 1` samples.
///
/// The last sample is exactly 1.0 whenever the table is finite. No
/// validation is done: zero parameters or spectral nulls produce
/// non-finite values rather than an error.
pub fn generate_minblep<T: Sample>(zero_crossings: usize, over_sampling: usize) -> Vec<T> {
    let params = KernelParams {
        zero_crossings,
        over_sampling,
    };
    run_pipeline(&params, &mut DirectDft, SpectralNullPolicy::Propagate)
}

/// Blackman-windowed sinc spanning `±zero_crossings`, sampled at the table length.
pub fn windowed_sinc<T: Sample>(params: &KernelParams) -> Vec<T> {
    let n = params.table_len();
    let window = blackman_window::<T>(n);
    sinc_table::<T>(params.zero_crossings, n)
        .into_iter()
        .zip(window)
        .map(|(s, w)| s * w)
        .collect()
}

/// Running sum: `out[i] = impulse[0] + ... + impulse[i]`.
pub fn integrate<T: Sample>(impulse: &[T]) -> Vec<T> {
    impulse
        .iter()
        .scan(T::zero(), |acc, &v| {
            *acc = *acc + v;
            Some(*acc)
        })
        .collect()
}

/// Divide every sample by the last one so the step ends at exactly 1.0.
///
/// A zero final value yields infinities/NaNs; an empty buffer is left alone.
pub fn normalize<T: Sample>(step: &mut [T]) {
    let Some(&last) = step.last() else {
        return;
    };
    for v in step.iter_mut() {
        *v = *v / last;
    }
}

/// Windowed sinc through the cepstrum to the minimum-phase impulse.
fn min_phase_impulse<T, F>(params: &KernelParams, transform: &mut F, policy: SpectralNullPolicy) -> Vec<T>
where
    T: Sample,
    F: FourierTransform<T>,
{
    tracing::debug!(
        zero_crossings = params.zero_crossings,
        over_sampling = params.over_sampling,
        n = params.table_len(),
        "Generating MinBLEP"
    );

    let sinc = windowed_sinc::<T>(params);
    let cepstrum = real_cepstrum_with(transform, &sinc, policy);
    minimum_phase_with(transform, &cepstrum)
}

fn run_pipeline<T, F>(params: &KernelParams, transform: &mut F, policy: SpectralNullPolicy) -> Vec<T>
where
    T: Sample,
    F: FourierTransform<T>,
{
    let impulse = min_phase_impulse(params, transform, policy);

    tracing::trace!(
        front_energy = front_energy_ratio(&impulse, impulse.len() / 4),
        "Minimum-phase impulse"
    );

    let mut step = integrate(&impulse);
    normalize(&mut step);
    step
}

/// Configurable MinBLEP generator.
///
/// Owns its transform backend; every call allocates fresh working buffers,
/// so separate generators can run concurrently.
///
/// # Example
///
/// ```
/// use minblep_dsp::MinBlepGenerator;
/// use minblep_types::KernelParams;
///
/// let params = KernelParams::new(6, 4).unwrap();
/// let table = MinBlepGenerator::<f64>::new(params).try_generate().unwrap();
/// assert_eq!(table.len(), 49);
/// assert_eq!(table.samples()[48], 1.0);
/// ```
pub struct MinBlepGenerator<T: Sample, F: FourierTransform<T> = DirectDft> {
    params: KernelParams,
    transform: F,
    policy: SpectralNullPolicy,
    _sample: PhantomData<T>,
}

impl<T: Sample> MinBlepGenerator<T, DirectDft> {
    /// Create a generator using the direct transform.
    pub fn new(params: KernelParams) -> Self {
        Self {
            params,
            transform: DirectDft,
            policy: SpectralNullPolicy::default(),
            _sample: PhantomData,
        }
    }
}

impl<T: Sample, F: FourierTransform<T>> MinBlepGenerator<T, F> {
    /// Swap the transform backend.
    pub fn with_transform<G: FourierTransform<T>>(self, transform: G) -> MinBlepGenerator<T, G> {
        MinBlepGenerator {
            params: self.params,
            transform,
            policy: self.policy,
            _sample: PhantomData,
        }
    }

    /// Set how the cepstrum stage handles zero-magnitude bins.
    pub fn null_policy(mut self, policy: SpectralNullPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parameters this generator produces tables for.
    pub fn params(&self) -> KernelParams {
        self.params
    }

    /// Run the pipeline without checking the result.
    pub fn generate(&mut self) -> Vec<T> {
        run_pipeline(&self.params, &mut self.transform, self.policy)
    }

    /// Run the pipeline and reject malformed tables.
    ///
    /// # Errors
    ///
    /// - [`DspError::InvalidParams`] for out-of-range parameters
    /// - [`DspError::DegenerateNormalization`] if the integrated step ends
    ///   at zero or a non-finite value
    /// - [`DspError::NonFinite`] if any table sample is NaN or infinite
    pub fn try_generate(&mut self) -> DspResult<MinBlepTable<T>> {
        self.params.validate()?;

        let n = self.params.table_len();
        let impulse = min_phase_impulse(&self.params, &mut self.transform, self.policy);

        let mut step = integrate(&impulse);
        let last = step[n - 1];
        if last == T::zero() || !last.is_finite() {
            tracing::warn!(params = %self.params, final_value = %last, "Rejected MinBLEP table");
            return Err(DspError::DegenerateNormalization(last.into()));
        }

        normalize(&mut step);
        if let Some(index) = first_non_finite(&step) {
            tracing::warn!(params = %self.params, index, "Rejected MinBLEP table");
            return Err(DspError::NonFinite {
                stage: "normalized step",
                index,
            });
        }

        tracing::debug!(
            params = %self.params,
            front_energy = front_energy_ratio(&impulse, n / 4),
            "Generated MinBLEP table"
        );

        Ok(MinBlepTable::new(self.params, step))
    }
}

/// Generate several tables in parallel with the direct transform.
///
/// Results come back in input order; a failure in one entry does not affect
/// the others.
pub fn generate_many<T: Sample>(params: &[KernelParams]) -> Vec<DspResult<MinBlepTable<T>>> {
    generate_many_with::<T, DirectDft>(params)
}

/// Generate several tables in parallel, each with its own fresh `F` backend.
pub fn generate_many_with<T, F>(params: &[KernelParams]) -> Vec<DspResult<MinBlepTable<T>>>
where
    T: Sample,
    F: FourierTransform<T> + Default,
{
    tracing::debug!(tables = params.len(), "Generating MinBLEP batch");
    params
        .par_iter()
        .map(|&p| {
            MinBlepGenerator::<T>::new(p)
                .with_transform(F::default())
                .try_generate()
        })
        .collect()
}
