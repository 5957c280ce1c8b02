//! Ingestion of raw demographics and exposure CSV files.
//!
//! Files are read as trimmed text; columns are located through a small set
//! of accepted names. Rows without a subject identifier are skipped and
//! reported as diagnostics, never given a placeholder id.

pub mod columns;
pub mod csv_table;
pub mod error;
pub mod records;

pub use columns::resolve_column;
pub use csv_table::{CsvTable, read_csv_table};
pub use error::{IngestError, Result};
pub use records::{
    IngestResult, read_demographics, read_demographics_from_reader, read_exposures,
    read_exposures_from_reader,
};
