use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A demographics date could not be read; the field is written empty.
    UnparseableDate,
    /// An exposure event date could not be read; the event is left out of
    /// the earliest/latest ordering.
    UnparseableExposureDate,
    /// Treatment code outside the arm table; the arm is NOT ASSIGNED.
    UnrecognizedTreatment,
    /// Derived age below zero or above the plausible maximum.
    ImplausibleAge,
    /// Subject has no usable exposure events.
    NoExposure,
    /// Source row without a subject identifier; the row was skipped.
    MissingSubjectId,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnparseableDate => "unparseable_date",
            Self::UnparseableExposureDate => "unparseable_exposure_date",
            Self::UnrecognizedTreatment => "unrecognized_treatment",
            Self::ImplausibleAge => "implausible_age",
            Self::NoExposure => "no_exposure",
            Self::MissingSubjectId => "missing_subject_id",
        }
    }

    pub fn severity(self) -> DiagnosticSeverity {
        match self {
            Self::MissingSubjectId => DiagnosticSeverity::Error,
            _ => DiagnosticSeverity::Warning,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A data-quality finding raised while building the DM dataset.
///
/// `subject_id` is the raw subject identifier, or a source locator such as
/// `demographics.csv:4` when the row has no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub subject_id: String,
    pub severity: DiagnosticSeverity,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        subject_id: impl Into<String>,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            severity: kind.severity(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] subject {}: {}",
            self.kind, self.subject_id, self.message
        )
    }
}

/// All diagnostics of one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn counts_by_kind(&self) -> BTreeMap<DiagnosticKind, usize> {
        let mut counts = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            *counts.entry(diagnostic.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn for_subject<'a>(&'a self, subject_id: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.subject_id == subject_id)
    }
}

impl Extend<Diagnostic> for DiagnosticReport {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.diagnostics.extend(iter);
    }
}
