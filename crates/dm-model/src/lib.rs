//! Data model for the SDTM Demographics (DM) builder.
//!
//! - **records**: raw demographics and exposure rows, per-subject exposure summary
//! - **dm**: the standardized DM record and its column layout
//! - **diagnostics**: data-quality findings returned alongside the dataset
//! - **config**: study identifiers and deployment constants

pub mod config;
pub mod diagnostics;
pub mod dm;
pub mod error;
pub mod ids;
pub mod records;

pub use config::StudyConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticReport, DiagnosticSeverity};
pub use dm::{
    ARM_NOT_ASSIGNED, DM_COLUMNS, DM_DOMAIN_CODE, DmColumn, RACE_UNKNOWN,
    StandardizedDemographicRecord,
};
pub use error::ModelError;
pub use ids::{SubjectId, unique_subject_id};
pub use records::{ExposureSummary, RawDemographicRecord, RawExposureRecord};
