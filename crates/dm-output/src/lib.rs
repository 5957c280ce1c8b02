//! Output generation for the DM dataset.
//!
//! - **CSV**: one row per subject, columns in SDTM order
//! - **JSON**: pretty-printed array of records keyed by SDTM variable
//! - **Diagnostics CSV**: data-quality findings of the run

use std::path::Path;

use anyhow::Result;
use dm_model::{Diagnostic, StandardizedDemographicRecord};
use tracing::info;

mod common;
mod csv_output;
mod json_output;

pub use common::{OutputFormat, OutputPaths, dm_output_path};
pub use csv_output::{write_diagnostics_csv, write_dm_csv};
pub use dm_model::DM_COLUMNS;
pub use json_output::write_dm_json;

/// File name of the diagnostics report written next to the dataset.
pub const DIAGNOSTICS_FILE_NAME: &str = "diagnostics.csv";

/// Write the dataset in every requested format plus the diagnostics file.
pub fn write_outputs(
    output_dir: &Path,
    formats: &[OutputFormat],
    records: &[StandardizedDemographicRecord],
    diagnostics: &[Diagnostic],
) -> Result<OutputPaths> {
    common::ensure_output_dir(output_dir)?;
    let mut paths = OutputPaths::default();
    for format in formats {
        let path = dm_output_path(output_dir, *format);
        match format {
            OutputFormat::Csv => {
                write_dm_csv(&path, records)?;
                paths.csv = Some(path);
            }
            OutputFormat::Json => {
                write_dm_json(&path, records)?;
                paths.json = Some(path);
            }
        }
    }
    let diagnostics_path = output_dir.join(DIAGNOSTICS_FILE_NAME);
    write_diagnostics_csv(&diagnostics_path, diagnostics)?;
    paths.diagnostics = Some(diagnostics_path);
    info!(
        output_dir = %output_dir.display(),
        records = records.len(),
        diagnostics = diagnostics.len(),
        "outputs written"
    );
    Ok(paths)
}
