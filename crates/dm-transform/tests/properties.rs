//! Property tests for the DM transformation.

use dm_model::{RawDemographicRecord, RawExposureRecord, StudyConfig, SubjectId};
use dm_transform::{map_sex, transform};
use proptest::prelude::*;

fn demographics_strategy() -> impl Strategy<Value = Vec<RawDemographicRecord>> {
    prop::collection::vec(
        (
            "[0-9]{1,3}",
            prop_oneof![Just(""), Just("M"), Just("female"), Just("x")],
            prop_oneof![Just(""), Just("1990-05-15"), Just("10JAN1985"), Just("bad")],
        ),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(subject, sex, birth)| {
                RawDemographicRecord::new(SubjectId::new(subject).unwrap(), sex, birth)
            })
            .collect()
    })
}

fn exposures_strategy() -> impl Strategy<Value = Vec<RawExposureRecord>> {
    prop::collection::vec(
        (
            "[0-9]{1,3}",
            prop_oneof![Just(""), Just("2023-01-01"), Just("03/22/2023"), Just("??")],
            prop_oneof![Just("PLACEBO"), Just("Drug_A"), Just("DRUG_X"), Just("")],
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(subject, date, treatment)| {
                RawExposureRecord::new(SubjectId::new(subject).unwrap(), date, treatment)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn output_count_equals_demographics_count(
        demographics in demographics_strategy(),
        exposures in exposures_strategy(),
    ) {
        let output = transform(&demographics, &exposures, &StudyConfig::default());
        prop_assert_eq!(output.records.len(), demographics.len());
        for (input, record) in demographics.iter().zip(&output.records) {
            prop_assert_eq!(&input.subject_id, &record.subject_id);
            prop_assert_eq!(&record.arm_code, &record.actual_arm_code);
            prop_assert_eq!(&record.arm, &record.actual_arm);
            prop_assert!(record.reference_start_date <= record.reference_end_date);
        }
    }

    #[test]
    fn sex_mapping_is_total(raw in ".*") {
        let sex = map_sex(&raw);
        prop_assert!(matches!(sex, "M" | "F" | "U"));
    }
}
