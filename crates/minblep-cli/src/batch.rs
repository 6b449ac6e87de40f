//! Batch table generation.

use crate::config::{Backend, BatchConfig};
use minblep_dsp::{generate_many_with, DirectDft, DspResult, FftEngine, MinBlepGenerator, Sample};
use minblep_types::{KernelParams, MinBlepTable, Precision};

/// A generated table at either precision.
#[derive(Clone, Debug)]
pub enum GeneratedTable {
    F32(MinBlepTable<f32>),
    F64(MinBlepTable<f64>),
}

impl GeneratedTable {
    pub fn len(&self) -> usize {
        match self {
            GeneratedTable::F32(t) => t.len(),
            GeneratedTable::F64(t) => t.len(),
        }
    }

    pub fn overshoot(&self) -> f64 {
        match self {
            GeneratedTable::F32(t) => t.overshoot(),
            GeneratedTable::F64(t) => t.overshoot(),
        }
    }
}

/// Generate one table with the requested precision and backend.
pub fn generate_table(
    params: KernelParams,
    precision: Precision,
    backend: Backend,
) -> DspResult<GeneratedTable> {
    match precision {
        Precision::F32 => generate_typed::<f32>(params, backend).map(GeneratedTable::F32),
        Precision::F64 => generate_typed::<f64>(params, backend).map(GeneratedTable::F64),
    }
}

fn generate_typed<T: Sample>(params: KernelParams, backend: Backend) -> DspResult<MinBlepTable<T>> {
    match backend {
        Backend::Direct => MinBlepGenerator::<T>::new(params).try_generate(),
        Backend::Fft => MinBlepGenerator::<T>::new(params)
            .with_transform(FftEngine::new())
            .try_generate(),
    }
}

fn generate_all<T: Sample>(
    params: &[KernelParams],
    backend: Backend,
) -> Vec<DspResult<MinBlepTable<T>>> {
    match backend {
        Backend::Direct => generate_many_with::<T, DirectDft>(params),
        Backend::Fft => generate_many_with::<T, FftEngine<T>>(params),
    }
}

/// Outcome for one configured table.
#[derive(Debug)]
pub struct BatchEntry {
    pub name: String,
    pub params: KernelParams,
    pub result: DspResult<GeneratedTable>,
}

/// Results of a batch run, in configuration order.
#[derive(Debug)]
pub struct BatchResults {
    pub name: String,
    pub precision: Precision,
    pub backend: Backend,
    pub entries: Vec<BatchEntry>,
}

impl BatchResults {
    /// Number of tables that failed to generate.
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_err()).count()
    }
}

/// Runs every table in a batch configuration.
pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Generate all tables. Tables run in parallel; a failure in one does not
    /// affect the others.
    pub fn run(&self) -> BatchResults {
        let config = &self.config;
        tracing::info!(
            "Starting batch '{}': {} tables ({:?}, {:?} backend)",
            config.name,
            config.tables.len(),
            config.precision,
            config.backend
        );

        let params: Vec<KernelParams> = config.tables.iter().map(|t| t.params).collect();

        let results: Vec<DspResult<GeneratedTable>> = match config.precision {
            Precision::F32 => generate_all::<f32>(&params, config.backend)
                .into_iter()
                .map(|r| r.map(GeneratedTable::F32))
                .collect(),
            Precision::F64 => generate_all::<f64>(&params, config.backend)
                .into_iter()
                .map(|r| r.map(GeneratedTable::F64))
                .collect(),
        };

        let entries: Vec<BatchEntry> = config
            .tables
            .iter()
            .zip(results)
            .map(|(spec, result)| {
                match &result {
                    Ok(table) => tracing::debug!("Table '{}': {} samples", spec.name, table.len()),
                    Err(e) => tracing::error!("Table '{}' ({}) failed: {}", spec.name, spec.params, e),
                }
                BatchEntry {
                    name: spec.name.clone(),
                    params: spec.params,
                    result,
                }
            })
            .collect();

        BatchResults {
            name: config.name.clone(),
            precision: config.precision,
            backend: config.backend,
            entries,
        }
    }
}
