//! Table output formatting and writing.

use crate::batch::{BatchResults, GeneratedTable};
use crate::OutputFormat;
use anyhow::{Context, Result};
use minblep_dsp::Sample;
use minblep_types::MinBlepTable;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Values per line in Rust constant output.
const RUST_VALUES_PER_LINE: usize = 4;

/// Write one table in the requested format.
pub fn write_table<W: Write>(
    w: &mut W,
    name: &str,
    table: &GeneratedTable,
    format: OutputFormat,
) -> Result<()> {
    match table {
        GeneratedTable::F32(t) => write_samples(w, name, t, format),
        GeneratedTable::F64(t) => write_samples(w, name, t, format),
    }
}

fn write_samples<T, W>(w: &mut W, name: &str, table: &MinBlepTable<T>, format: OutputFormat) -> Result<()>
where
    T: Sample + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Text => {
            writeln!(w, "# {} ({}, {} samples)", name, table.params(), table.len())?;
            for v in table {
                writeln!(w, "{}", v)?;
            }
        }
        OutputFormat::Csv => {
            writeln!(w, "index,value")?;
            for (i, v) in table.iter().enumerate() {
                writeln!(w, "{},{}", i, v)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "name": name,
                "zero_crossings": table.params().zero_crossings,
                "over_sampling": table.params().over_sampling,
                "samples": table.samples(),
            });
            writeln!(w, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        OutputFormat::Rust => {
            writeln!(
                w,
                "/// MinBLEP step table, {} zero crossings x {} oversampling.",
                table.params().zero_crossings,
                table.params().over_sampling
            )?;
            writeln!(
                w,
                "pub const {}: [{}; {}] = [",
                name.to_uppercase(),
                std::any::type_name::<T>(),
                table.len()
            )?;
            for chunk in table.samples().chunks(RUST_VALUES_PER_LINE) {
                let line: Vec<String> = chunk.iter().map(|v| format!("{:?},", v)).collect();
                writeln!(w, "    {}", line.join(" "))?;
            }
            writeln!(w, "];")?;
        }
    }
    Ok(())
}

/// Write every generated table plus a summary to the output directory.
pub fn write_results(results: &BatchResults, output_dir: &Path, format: OutputFormat) -> Result<()> {
    for entry in &results.entries {
        let Ok(table) = &entry.result else { continue };

        let path = output_dir.join(format!("{}.{}", entry.name, format.extension()));
        let mut f = std::fs::File::create(&path)
            .with_context(|| format!("Failed to create {:?}", path))?;
        write_table(&mut f, &entry.name, table, format)?;

        tracing::info!("Wrote table '{}' to {:?}", entry.name, path);
    }

    // Write summary
    let summary_path = output_dir.join("summary.txt");
    let mut f = std::fs::File::create(&summary_path)?;
    write_summary(&mut f, results)?;

    tracing::info!("Wrote summary to {:?}", summary_path);

    Ok(())
}

fn write_summary<W: Write>(w: &mut W, results: &BatchResults) -> Result<()> {
    writeln!(w, "MinBLEP Batch Summary: {}", results.name)?;
    writeln!(w, "======================")?;
    writeln!(w, "Precision: {:?}", results.precision)?;
    writeln!(w, "Backend:   {:?}", results.backend)?;
    writeln!(w)?;

    for entry in &results.entries {
        match &entry.result {
            Ok(table) => writeln!(
                w,
                "{:<20} {:>8} {:>8} samples  overshoot {:.6}",
                entry.name,
                entry.params,
                table.len(),
                table.overshoot()
            )?,
            Err(e) => writeln!(w, "{:<20} {:>8} FAILED: {}", entry.name, entry.params, e)?,
        }
    }

    writeln!(w)?;
    let failed = results.failures();
    if failed == 0 {
        writeln!(w, "Status: OK ({} tables)", results.entries.len())?;
    } else {
        writeln!(w, "Status: {} of {} tables FAILED", failed, results.entries.len())?;
    }

    Ok(())
}

/// Print results to stdout.
pub fn print_results(results: &BatchResults) {
    println!("\n=== Batch '{}' ===\n", results.name);

    for entry in &results.entries {
        match &entry.result {
            Ok(table) => println!(
                "  {:<20} {} samples, overshoot {:.6}",
                entry.name,
                table.len(),
                table.overshoot()
            ),
            Err(e) => println!("  {:<20} FAILED: {}", entry.name, e),
        }
    }

    println!();
}
