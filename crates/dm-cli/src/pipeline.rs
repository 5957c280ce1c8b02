//! Ingest, transform and diagnostics logging for one run.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use dm_model::{DiagnosticReport, DiagnosticSeverity, StandardizedDemographicRecord, StudyConfig};
use tracing::{error, info, info_span, warn};

use crate::logging::redact_value;

/// Everything the CLI needs after the dataset has been built.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub demographics_read: usize,
    pub exposures_read: usize,
    pub records: Vec<StandardizedDemographicRecord>,
    /// Ingestion findings first, then transformation findings.
    pub report: DiagnosticReport,
    pub arm_counts: BTreeMap<String, usize>,
}

pub fn run_pipeline(
    demographics_path: &Path,
    exposure_path: &Path,
    config: &StudyConfig,
) -> Result<PipelineOutput> {
    let span = info_span!("pipeline", study_id = %config.study_id);
    let _guard = span.enter();

    let demographics = dm_ingest::read_demographics(demographics_path)
        .with_context(|| format!("ingest {}", demographics_path.display()))?;
    let exposures = dm_ingest::read_exposures(exposure_path)
        .with_context(|| format!("ingest {}", exposure_path.display()))?;
    info!(
        demographics = demographics.records.len(),
        exposures = exposures.records.len(),
        "ingest complete"
    );

    let output = dm_transform::transform(&demographics.records, &exposures.records, config);
    let arm_counts = output.arm_counts();

    let mut report = DiagnosticReport::default();
    report.extend(demographics.diagnostics);
    report.extend(exposures.diagnostics);
    report.extend(output.diagnostics);
    info!(
        records = output.records.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "transform complete"
    );

    Ok(PipelineOutput {
        demographics_read: demographics.records.len(),
        exposures_read: exposures.records.len(),
        records: output.records,
        report,
        arm_counts,
    })
}

/// Emit one log event per diagnostic at its severity.
pub fn log_diagnostics(report: &DiagnosticReport) {
    for diagnostic in &report.diagnostics {
        let subject = redact_value(&diagnostic.subject_id);
        let message = redact_value(&diagnostic.message);
        match diagnostic.severity {
            DiagnosticSeverity::Error => {
                error!(subject, kind = %diagnostic.kind, message, "data error");
            }
            DiagnosticSeverity::Warning => {
                warn!(subject, kind = %diagnostic.kind, message, "data warning");
            }
        }
    }
}
