//! Conversion of CSV rows into raw demographics and exposure records.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use dm_model::{
    Diagnostic, DiagnosticKind, RawDemographicRecord, RawExposureRecord, SubjectId,
};
use tracing::debug;

use crate::columns::{
    BIRTH_DATE_ALIASES, EXPOSURE_DATE_ALIASES, GENDER_ALIASES, SUBJECT_ID_ALIASES,
    TREATMENT_ALIASES, resolve_column,
};
use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::{IngestError, Result};

/// Records read from one source plus the rows that had to be skipped.
#[derive(Debug, Clone)]
pub struct IngestResult<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> IngestResult<T> {
    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Read demographics records from a CSV file.
pub fn read_demographics(path: &Path) -> Result<IngestResult<RawDemographicRecord>> {
    let file = open(path)?;
    read_demographics_from_reader(file, &source_name(path))
}

/// Read exposure records from a CSV file.
pub fn read_exposures(path: &Path) -> Result<IngestResult<RawExposureRecord>> {
    let file = open(path)?;
    read_exposures_from_reader(file, &source_name(path))
}

pub fn read_demographics_from_reader<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<IngestResult<RawDemographicRecord>> {
    let table = read_csv_table(reader, source_name)?;
    let subject_idx = required_column(&table, SUBJECT_ID_ALIASES, source_name)?;
    let gender_idx = resolve_column(&table.headers, GENDER_ALIASES);
    let birth_idx = resolve_column(&table.headers, BIRTH_DATE_ALIASES);

    let result = collect_rows(&table, subject_idx, source_name, |subject_id, row| {
        RawDemographicRecord::new(subject_id, cell(row, gender_idx), cell(row, birth_idx))
    });
    debug!(
        source = source_name,
        records = result.records.len(),
        skipped = result.skipped(),
        "demographics ingested"
    );
    Ok(result)
}

pub fn read_exposures_from_reader<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<IngestResult<RawExposureRecord>> {
    let table = read_csv_table(reader, source_name)?;
    let subject_idx = required_column(&table, SUBJECT_ID_ALIASES, source_name)?;
    let date_idx = resolve_column(&table.headers, EXPOSURE_DATE_ALIASES);
    let treatment_idx = resolve_column(&table.headers, TREATMENT_ALIASES);

    let result = collect_rows(&table, subject_idx, source_name, |subject_id, row| {
        RawExposureRecord::new(subject_id, cell(row, date_idx), cell(row, treatment_idx))
    });
    debug!(
        source = source_name,
        records = result.records.len(),
        skipped = result.skipped(),
        "exposures ingested"
    );
    Ok(result)
}

fn collect_rows<T>(
    table: &CsvTable,
    subject_idx: usize,
    source_name: &str,
    build: impl Fn(SubjectId, &[String]) -> T,
) -> IngestResult<T> {
    let mut records = Vec::with_capacity(table.rows.len());
    let mut diagnostics = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        match SubjectId::new(cell(row, Some(subject_idx))) {
            Ok(subject_id) => records.push(build(subject_id, row)),
            Err(error) => {
                // Record numbers are 1-based and exclude the header row.
                diagnostics.push(Diagnostic::new(
                    format!("{source_name}:{}", idx + 1),
                    DiagnosticKind::MissingSubjectId,
                    format!("{error}; row skipped"),
                ));
            }
        }
    }
    IngestResult {
        records,
        diagnostics,
    }
}

fn required_column(table: &CsvTable, aliases: &[&str], source_name: &str) -> Result<usize> {
    resolve_column(&table.headers, aliases).ok_or_else(|| IngestError::MissingColumn {
        column: aliases[0].to_string(),
        source_name: source_name.to_string(),
    })
}

fn cell(row: &[String], idx: Option<usize>) -> String {
    idx.and_then(|idx| row.get(idx)).cloned().unwrap_or_default()
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string)
}
