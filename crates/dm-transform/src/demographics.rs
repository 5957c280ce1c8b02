//! Demographics (DM) assembly.
//!
//! Joins each demographics record with its subject's exposure summary and
//! derives the DM variables per SDTMIG v3.4 Section 5.1. Demographics is the
//! driving side of the join: every input record yields exactly one output
//! record, in input order, whether or not the subject has exposure data.

use std::collections::BTreeMap;

use dm_model::{
    DM_DOMAIN_CODE, Diagnostic, DiagnosticKind, DiagnosticReport, ExposureSummary,
    RACE_UNKNOWN, RawDemographicRecord, RawExposureRecord, StandardizedDemographicRecord,
    StudyConfig, unique_subject_id,
};
use tracing::{debug, debug_span};

use crate::exposure::aggregate_exposures;
use crate::normalization::{
    DateNormalization, MAX_PLAUSIBLE_AGE, TreatmentMapping, compute_age, map_sex, map_treatment,
    normalize_date,
};

/// DM records and the diagnostics raised while building them.
#[derive(Debug, Clone, Default)]
pub struct TransformOutput {
    pub records: Vec<StandardizedDemographicRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TransformOutput {
    pub fn report(&self) -> DiagnosticReport {
        DiagnosticReport::new(self.diagnostics.clone())
    }

    /// Number of records per planned arm code; unassigned subjects count
    /// under an empty key.
    pub fn arm_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.arm_code.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Build the DM dataset from raw demographics and exposure records.
///
/// Exposure diagnostics come first, followed by per-record diagnostics in
/// record order.
pub fn transform(
    demographics: &[RawDemographicRecord],
    exposures: &[RawExposureRecord],
    config: &StudyConfig,
) -> TransformOutput {
    let span = debug_span!(
        "transform_dm",
        demographics = demographics.len(),
        exposures = exposures.len()
    );
    let _guard = span.enter();

    let aggregation = aggregate_exposures(exposures);
    debug!(
        subjects_with_exposure = aggregation.len(),
        "exposure aggregation complete"
    );

    let mut diagnostics = aggregation.diagnostics.clone();
    let records = demographics
        .iter()
        .map(|record| {
            let summary = aggregation.get(&record.subject_id);
            build_record(record, summary, config, &mut diagnostics)
        })
        .collect::<Vec<_>>();

    debug!(
        records = records.len(),
        diagnostics = diagnostics.len(),
        "dm transform complete"
    );
    TransformOutput {
        records,
        diagnostics,
    }
}

fn build_record(
    record: &RawDemographicRecord,
    summary: Option<&ExposureSummary>,
    config: &StudyConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> StandardizedDemographicRecord {
    let subject = record.subject_id.as_str();

    let (first_date, last_date, first_treatment) = match summary {
        Some(summary) => (
            summary.earliest_date.as_str(),
            summary.latest_date.as_str(),
            summary.earliest_treatment_code.as_str(),
        ),
        None => {
            diagnostics.push(Diagnostic::new(
                subject,
                DiagnosticKind::NoExposure,
                "no dated exposure records; reference dates and arm left empty",
            ));
            ("", "", "")
        }
    };

    let reference_start = normalize_date(first_date).iso();
    let reference_end = normalize_date(last_date).iso();

    let birth = normalize_date(&record.birth_date);
    if let DateNormalization::Unparseable(raw) = &birth {
        diagnostics.push(Diagnostic::new(
            subject,
            DiagnosticKind::UnparseableDate,
            format!("birth date '{raw}' could not be parsed; BRTHDTC left empty"),
        ));
    }

    let age = compute_age(&record.birth_date, first_date);
    if let Some(years) = age.years
        && !age.is_plausible()
    {
        diagnostics.push(Diagnostic::new(
            subject,
            DiagnosticKind::ImplausibleAge,
            format!("derived age {years} is outside 0..={MAX_PLAUSIBLE_AGE} years"),
        ));
    }

    let treatment = map_treatment(first_treatment);
    if let TreatmentMapping::Unrecognized(code) = &treatment {
        diagnostics.push(Diagnostic::new(
            subject,
            DiagnosticKind::UnrecognizedTreatment,
            format!("unrecognized treatment code '{code}'; arm set to NOT ASSIGNED"),
        ));
    }
    let arm_code = treatment.arm_code().to_string();
    let arm = treatment.arm_label().to_string();

    StandardizedDemographicRecord {
        study_id: config.study_id.clone(),
        domain: DM_DOMAIN_CODE.to_string(),
        unique_subject_id: unique_subject_id(&config.study_id, &config.site_id, &record.subject_id),
        subject_id: record.subject_id.clone(),
        exposure_start_date: reference_start.clone(),
        exposure_end_date: reference_end.clone(),
        reference_start_date: reference_start,
        reference_end_date: reference_end,
        informed_consent_date: String::new(),
        participation_end_date: String::new(),
        death_date: String::new(),
        death_flag: String::new(),
        site_id: config.site_id.clone(),
        birth_date: birth.iso(),
        age: age.years,
        age_unit: age.unit.unwrap_or_default().to_string(),
        sex: map_sex(&record.gender_code).to_string(),
        race: RACE_UNKNOWN.to_string(),
        actual_arm_code: arm_code.clone(),
        actual_arm: arm.clone(),
        arm_code,
        arm,
        arm_not_assigned_reason: treatment.not_assigned_reason().to_string(),
        country: config.country.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_model::SubjectId;

    fn demo(subject: &str, sex: &str, birth: &str) -> RawDemographicRecord {
        RawDemographicRecord::new(SubjectId::new(subject).unwrap(), sex, birth)
    }

    fn exposure(subject: &str, date: &str, treatment: &str) -> RawExposureRecord {
        RawExposureRecord::new(SubjectId::new(subject).unwrap(), date, treatment)
    }

    #[test]
    fn test_fixed_fields() {
        let output = transform(
            &[demo("101", "Male", "1990-05-15")],
            &[exposure("101", "2023-01-01", "Placebo")],
            &StudyConfig::default(),
        );
        let record = &output.records[0];
        assert_eq!(record.domain, "DM");
        assert_eq!(record.race, "UNKNOWN");
        assert_eq!(record.country, "USA");
        assert_eq!(record.unique_subject_id, "STUDY01-SITE01-101");
        assert_eq!(record.informed_consent_date, "");
        assert_eq!(record.participation_end_date, "");
        assert_eq!(record.death_date, "");
        assert_eq!(record.death_flag, "");
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_implausible_age_is_kept_and_flagged() {
        let output = transform(
            &[demo("108", "F", "1850-01-01")],
            &[exposure("108", "2023-01-01", "DRUG_A")],
            &StudyConfig::default(),
        );
        assert_eq!(output.records[0].age, Some(173));
        assert_eq!(output.records[0].age_unit, "YEARS");
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::ImplausibleAge);
        assert!(output.diagnostics[0].message.contains("173"));
    }

    #[test]
    fn test_arm_counts() {
        let output = transform(
            &[demo("1", "M", ""), demo("2", "F", ""), demo("3", "", "")],
            &[
                exposure("1", "2023-01-01", "DRUG_A"),
                exposure("2", "2023-01-01", "DRUG_A"),
            ],
            &StudyConfig::default(),
        );
        let counts = output.arm_counts();
        assert_eq!(counts.get("TRTA"), Some(&2));
        assert_eq!(counts.get(""), Some(&1));
    }
}
