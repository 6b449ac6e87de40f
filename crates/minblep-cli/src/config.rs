//! Batch configuration loading and validation.

use anyhow::{Context, Result};
use minblep_types::{KernelParams, Precision};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Top-level batch configuration.
///
/// ```toml
/// name = "synth tables"
/// precision = "f32"
/// backend = "fft"
///
/// [[tables]]
/// name = "saw_hq"
/// zero_crossings = 16
/// over_sampling = 64
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Batch name/description.
    pub name: String,

    /// Sample precision for every table.
    #[serde(default)]
    pub precision: Precision,

    /// Transform backend.
    #[serde(default)]
    pub backend: Backend,

    /// Tables to generate.
    pub tables: Vec<TableSpec>,
}

/// One table in a batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableSpec {
    /// Table name, used for the output file and the Rust constant.
    pub name: String,

    /// Kernel shape.
    #[serde(flatten)]
    pub params: KernelParams,
}

/// Transform backend selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Direct O(n²) reference transform.
    #[default]
    Direct,
    /// rustfft.
    Fft,
}

/// Load configuration from a file.
pub fn load_config(path: &Path) -> Result<BatchConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content, path.extension().map_or(false, |e| e == "json"))?;

    validate_config(&config)?;

    Ok(config)
}

fn parse_config(content: &str, json: bool) -> Result<BatchConfig> {
    let config: BatchConfig = if json {
        serde_json::from_str(content).with_context(|| "Failed to parse config as JSON")?
    } else {
        // Assume TOML
        toml::from_str(content).with_context(|| "Failed to parse config as TOML")?
    };
    Ok(config)
}

/// Validate configuration.
fn validate_config(config: &BatchConfig) -> Result<()> {
    if config.tables.is_empty() {
        anyhow::bail!("Batch '{}' lists no tables", config.name);
    }

    let mut seen = HashSet::new();
    for table in &config.tables {
        if !is_valid_name(&table.name) {
            anyhow::bail!(
                "Invalid table name '{}': use letters, digits and underscores, not starting with a digit",
                table.name
            );
        }
        if !seen.insert(table.name.as_str()) {
            anyhow::bail!("Duplicate table name '{}'", table.name);
        }
        table
            .params
            .validate()
            .with_context(|| format!("Invalid parameters for table '{}'", table.name))?;
    }

    if config.backend == Backend::Direct {
        if let Some(big) = config.tables.iter().find(|t| t.params.table_len() > 4097) {
            tracing::warn!(
                "Table '{}' has {} samples; the direct transform is O(n²), consider backend = \"fft\"",
                big.name,
                big.params.table_len()
            );
        }
    }

    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
