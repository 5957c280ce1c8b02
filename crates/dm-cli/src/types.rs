use std::collections::BTreeMap;
use std::path::PathBuf;

use dm_model::DiagnosticReport;
use dm_output::OutputPaths;

#[derive(Debug)]
pub struct RunResult {
    pub study_id: String,
    pub output_dir: PathBuf,
    pub demographics_read: usize,
    pub exposures_read: usize,
    pub records: usize,
    pub arm_counts: BTreeMap<String, usize>,
    pub report: DiagnosticReport,
    /// `None` on a dry run.
    pub outputs: Option<OutputPaths>,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.report.has_errors()
    }
}
