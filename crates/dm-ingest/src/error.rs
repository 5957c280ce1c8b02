//! Error types for raw record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a whole input file from being read.
///
/// Problems confined to a single row are reported as diagnostics instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {source_name}: {source}")]
    CsvParse {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// Required column not found under any of its accepted names.
    #[error("required column '{column}' not found in {source_name}")]
    MissingColumn { column: String, source_name: String },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
