//! Raw source records and the per-subject exposure summary.

use serde::{Deserialize, Serialize};

use crate::ids::SubjectId;

/// One subject row from the demographics source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDemographicRecord {
    pub subject_id: SubjectId,
    /// Free-text gender code; may be empty.
    pub gender_code: String,
    /// Free-text birth date in any supported format; may be empty.
    pub birth_date: String,
}

impl RawDemographicRecord {
    pub fn new(
        subject_id: SubjectId,
        gender_code: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            subject_id,
            gender_code: gender_code.into(),
            birth_date: birth_date.into(),
        }
    }
}

/// One drug exposure event. A subject may have any number of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExposureRecord {
    pub subject_id: SubjectId,
    pub event_date: String,
    pub treatment_code: String,
}

impl RawExposureRecord {
    pub fn new(
        subject_id: SubjectId,
        event_date: impl Into<String>,
        treatment_code: impl Into<String>,
    ) -> Self {
        Self {
            subject_id,
            event_date: event_date.into(),
            treatment_code: treatment_code.into(),
        }
    }
}

/// First and last exposure event of one subject, ordered by event date.
///
/// Dates are kept exactly as they appeared in the source; consumers
/// normalize them. With a single event, earliest and latest are the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureSummary {
    pub subject_id: SubjectId,
    pub earliest_date: String,
    pub earliest_treatment_code: String,
    pub latest_date: String,
    pub latest_treatment_code: String,
    /// Number of events that took part in the ordering.
    pub event_count: usize,
}
