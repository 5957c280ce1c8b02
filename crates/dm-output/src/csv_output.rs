//! CSV output for the DM dataset and its diagnostics.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use dm_model::{DM_COLUMNS, Diagnostic, StandardizedDemographicRecord};
use tracing::debug;

use crate::common::ensure_parent_dir;

const DIAGNOSTIC_HEADERS: [&str; 4] = ["SUBJID", "SEVERITY", "KIND", "MESSAGE"];

/// Write the DM dataset as CSV.
///
/// The header row is always present, so an empty dataset still yields a
/// file with the full column layout.
pub fn write_dm_csv(path: &Path, records: &[StandardizedDemographicRecord]) -> Result<()> {
    let file = create(path)?;
    write_dm_csv_to(BufWriter::new(file), records)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "DM CSV written");
    Ok(())
}

fn write_dm_csv_to<W: Write>(writer: W, records: &[StandardizedDemographicRecord]) -> Result<()> {
    // Headers come from DM_COLUMNS; serde field order matches it.
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(DM_COLUMNS.iter().map(|column| column.name))?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write diagnostics as CSV with one finding per row.
pub fn write_diagnostics_csv(path: &Path, diagnostics: &[Diagnostic]) -> Result<()> {
    let file = create(path)?;
    let mut csv = WriterBuilder::new().from_writer(BufWriter::new(file));
    csv.write_record(DIAGNOSTIC_HEADERS)?;
    for diagnostic in diagnostics {
        csv.write_record([
            diagnostic.subject_id.as_str(),
            diagnostic.severity.to_string().as_str(),
            diagnostic.kind.as_str(),
            diagnostic.message.as_str(),
        ])?;
    }
    csv.flush()
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    ensure_parent_dir(path)?;
    File::create(path).with_context(|| format!("create {}", path.display()))
}
