//! MinBLEP CLI: band-limited step tables for anti-aliased oscillators.
//!
//! This is the main entry point for the `minblep` table generator.

mod batch;
mod config;
mod output;
mod vectors;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Backend;
use minblep_types::{KernelParams, Precision};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "minblep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
    Rust,
}

impl OutputFormat {
    /// File extension used when writing tables to a directory.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Rust => "rs",
        }
    }
}

/// Sample precision selection on the command line.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum PrecisionArg {
    F32,
    #[default]
    F64,
}

impl From<PrecisionArg> for Precision {
    fn from(p: PrecisionArg) -> Self {
        match p {
            PrecisionArg::F32 => Precision::F32,
            PrecisionArg::F64 => Precision::F64,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single MinBLEP table
    Generate {
        /// Sinc zero crossings on each side of center
        #[arg(short, long, default_value_t = KernelParams::default().zero_crossings)]
        zero_crossings: usize,

        /// Table entries per zero crossing
        #[arg(short = 's', long, default_value_t = KernelParams::default().over_sampling)]
        over_sampling: usize,

        /// Sample precision
        #[arg(short, long, value_enum, default_value = "f64")]
        precision: PrecisionArg,

        /// Transform backend
        #[arg(short, long, value_enum, default_value = "direct")]
        backend: Backend,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate every table listed in a configuration file
    Batch {
        /// Path to the batch configuration file (TOML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output directory for the tables
        #[arg(short, long, default_value = "tables")]
        output: PathBuf,
    },

    /// Print reference vectors for every pipeline stage
    Vectors {
        /// Seed for the random input buffers
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Length of the random input buffers
        #[arg(short, long, default_value = "32")]
        len: usize,

        /// Zero crossings of the reference table
        #[arg(short, long, default_value = "6")]
        zero_crossings: usize,

        /// Oversampling of the reference table
        #[arg(short = 's', long, default_value = "4")]
        over_sampling: usize,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        Commands::Generate {
            zero_crossings,
            over_sampling,
            precision,
            backend,
            output,
        } => {
            let params = KernelParams::new(zero_crossings, over_sampling)
                .context("Invalid kernel parameters")?;
            generate(params, precision.into(), backend, output.as_deref(), cli.format)?;
        }
        Commands::Batch { config, output } => {
            run_batch(&config, &output, cli.format)?;
        }
        Commands::Vectors {
            seed,
            len,
            zero_crossings,
            over_sampling,
            output,
        } => {
            let params = KernelParams::new(zero_crossings, over_sampling)
                .context("Invalid kernel parameters")?;
            write_vectors(seed, len, params, output.as_deref())?;
        }
    }

    Ok(())
}

fn generate(
    params: KernelParams,
    precision: Precision,
    backend: Backend,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    tracing::info!("Generating {} table ({:?}, {:?} backend)", params, precision, backend);

    let table = batch::generate_table(params, precision, backend)
        .with_context(|| format!("Failed to generate MinBLEP {}", params))?;
    let name = format!("minblep_{}", params);

    match output {
        Some(path) => {
            let mut f = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {:?}", path))?;
            output::write_table(&mut f, &name, &table, format)?;

            println!("Generated MinBLEP {}:", params);
            println!("  Samples:   {}", table.len());
            println!("  Overshoot: {:.6}", table.overshoot());
            println!("  Written to: {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            output::write_table(&mut stdout.lock(), &name, &table, format)?;
        }
    }

    Ok(())
}

fn run_batch(config_path: &Path, output_dir: &Path, format: OutputFormat) -> Result<()> {
    tracing::info!("Loading configuration from {:?}", config_path);

    let config = config::load_config(config_path)?;
    let runner = batch::BatchRunner::new(config);

    let results = runner.run();

    // Create output directory
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

    // Write results
    output::write_results(&results, output_dir, format)?;
    output::print_results(&results);

    let failed = results.failures();
    if failed > 0 {
        anyhow::bail!("{} of {} tables failed to generate", failed, results.entries.len());
    }

    tracing::info!("Batch complete. Tables written to {:?}", output_dir);
    Ok(())
}

fn write_vectors(seed: u64, len: usize, params: KernelParams, output: Option<&Path>) -> Result<()> {
    tracing::info!("Generating reference vectors (seed {}, length {})", seed, len);

    let set = vectors::VectorSet::generate(seed, len, params)?;

    match output {
        Some(path) => {
            let mut f = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {:?}", path))?;
            set.write_rust(&mut f)?;
            println!("Wrote {} reference vectors to {:?}", set.len(), path);
        }
        None => {
            let stdout = std::io::stdout();
            set.write_rust(&mut stdout.lock())?;
        }
    }

    Ok(())
}
