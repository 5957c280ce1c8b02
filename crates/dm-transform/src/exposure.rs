//! Per-subject exposure aggregation.
//!
//! Groups exposure events by subject and picks the first and last event by
//! date. These feed RFSTDTC/RFENDTC (and RFXSTDTC/RFXENDTC) and the planned
//! arm, which follows the treatment of the first event.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use dm_model::{Diagnostic, DiagnosticKind, ExposureSummary, RawExposureRecord, SubjectId};

use crate::normalization::parse_date;

/// Exposure summaries keyed by subject, plus findings about events that
/// could not take part in the ordering.
#[derive(Debug, Clone, Default)]
pub struct ExposureAggregation {
    pub summaries: BTreeMap<SubjectId, ExposureSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExposureAggregation {
    pub fn get(&self, subject_id: &SubjectId) -> Option<&ExposureSummary> {
        self.summaries.get(subject_id)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

/// Build one [`ExposureSummary`] per subject.
///
/// Events are ordered by parsed date with a stable sort, so events on the
/// same day keep their input order. Events whose date cannot be parsed are
/// left out of the ordering and reported as
/// [`DiagnosticKind::UnparseableExposureDate`]; a subject with no dated
/// event gets no summary.
pub fn aggregate_exposures(events: &[RawExposureRecord]) -> ExposureAggregation {
    let mut grouped: BTreeMap<&SubjectId, Vec<(NaiveDate, &RawExposureRecord)>> = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for event in events {
        match parse_date(&event.event_date) {
            Some(date) => grouped
                .entry(&event.subject_id)
                .or_default()
                .push((date, event)),
            None => diagnostics.push(undated_event(event)),
        }
    }

    let summaries = grouped
        .into_iter()
        .filter_map(|(subject_id, mut dated)| {
            dated.sort_by_key(|(date, _)| *date);
            let (_, first) = dated.first()?;
            let (_, last) = dated.last()?;
            let summary = ExposureSummary {
                subject_id: subject_id.clone(),
                earliest_date: first.event_date.trim().to_string(),
                earliest_treatment_code: first.treatment_code.trim().to_string(),
                latest_date: last.event_date.trim().to_string(),
                latest_treatment_code: last.treatment_code.trim().to_string(),
                event_count: dated.len(),
            };
            Some((subject_id.clone(), summary))
        })
        .collect();

    ExposureAggregation {
        summaries,
        diagnostics,
    }
}

fn undated_event(event: &RawExposureRecord) -> Diagnostic {
    let date = event.event_date.trim();
    let message = if date.is_empty() {
        format!(
            "exposure event for treatment '{}' has no date; excluded from reference dates",
            event.treatment_code.trim()
        )
    } else {
        format!(
            "exposure event date '{date}' could not be parsed; excluded from reference dates"
        )
    };
    Diagnostic::new(
        event.subject_id.as_str(),
        DiagnosticKind::UnparseableExposureDate,
        message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(subject: &str, date: &str, treatment: &str) -> RawExposureRecord {
        RawExposureRecord::new(SubjectId::new(subject).unwrap(), date, treatment)
    }

    fn id(subject: &str) -> SubjectId {
        SubjectId::new(subject).unwrap()
    }

    #[test]
    fn test_earliest_and_latest() {
        let events = vec![
            event("101", "2023-01-15", "Placebo"),
            event("101", "2023-01-01", "Placebo"),
        ];
        let aggregation = aggregate_exposures(&events);
        let summary = aggregation.get(&id("101")).unwrap();
        assert_eq!(summary.earliest_date, "2023-01-01");
        assert_eq!(summary.latest_date, "2023-01-15");
        assert_eq!(summary.earliest_treatment_code, "Placebo");
        assert_eq!(summary.latest_treatment_code, "Placebo");
        assert_eq!(summary.event_count, 2);
        assert!(aggregation.diagnostics.is_empty());
    }

    #[test]
    fn test_orders_by_date_not_text() {
        // Text order would put 03/01/2023 before 2023-02-01
        let events = vec![
            event("102", "03/01/2023", "DRUG_B"),
            event("102", "2023-02-01", "DRUG_A"),
            event("102", "15FEB2023", "DRUG_A"),
        ];
        let aggregation = aggregate_exposures(&events);
        let summary = aggregation.get(&id("102")).unwrap();
        assert_eq!(summary.earliest_date, "2023-02-01");
        assert_eq!(summary.earliest_treatment_code, "DRUG_A");
        assert_eq!(summary.latest_date, "03/01/2023");
        assert_eq!(summary.latest_treatment_code, "DRUG_B");
    }

    #[test]
    fn test_single_event_is_both_ends() {
        let aggregation = aggregate_exposures(&[event("103", "2023-03-10", "Drug_B")]);
        let summary = aggregation.get(&id("103")).unwrap();
        assert_eq!(summary.earliest_date, summary.latest_date);
        assert_eq!(summary.earliest_treatment_code, summary.latest_treatment_code);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let events = vec![
            event("105", "2023-04-01", "DRUG_A"),
            event("105", "2023-04-01", "PLACEBO"),
        ];
        let aggregation = aggregate_exposures(&events);
        let summary = aggregation.get(&id("105")).unwrap();
        assert_eq!(summary.earliest_treatment_code, "DRUG_A");
        assert_eq!(summary.latest_treatment_code, "PLACEBO");
    }

    #[test]
    fn test_unparseable_dates_are_excluded_with_warning() {
        let events = vec![
            event("106", "not a date", "DRUG_B"),
            event("106", "2023-05-02", "DRUG_A"),
            event("107", "", "PLACEBO"),
        ];
        let aggregation = aggregate_exposures(&events);
        let summary = aggregation.get(&id("106")).unwrap();
        assert_eq!(summary.earliest_treatment_code, "DRUG_A");
        assert_eq!(summary.event_count, 1);
        assert!(aggregation.get(&id("107")).is_none());
        assert_eq!(aggregation.diagnostics.len(), 2);
        assert!(
            aggregation
                .diagnostics
                .iter()
                .all(|d| d.kind == DiagnosticKind::UnparseableExposureDate)
        );
        assert!(aggregation.diagnostics[0].message.contains("not a date"));
    }

    #[test]
    fn test_empty_input() {
        let aggregation = aggregate_exposures(&[]);
        assert!(aggregation.is_empty());
        assert!(aggregation.diagnostics.is_empty());
    }
}
