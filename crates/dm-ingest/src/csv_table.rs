use std::io::Read;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A CSV file as trimmed text cells.
///
/// Every row has exactly `headers.len()` cells; short rows are padded with
/// empty strings and extra cells are dropped.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV stream whose first non-blank row is the header.
///
/// Blank rows are skipped. `source_name` only appears in error messages.
pub fn read_csv_table<R: Read>(reader: R, source_name: &str) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            source_name: source_name.to_string(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(headers) => {
                let row = (0..headers.len())
                    .map(|idx| record.get(idx).map(normalize_cell).unwrap_or_default())
                    .collect();
                rows.push(row);
            }
        }
    }
    Ok(CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}
