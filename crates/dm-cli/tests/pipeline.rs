//! End-to-end tests over the demo input files.

use std::fs;

use dm_cli::config::{StudyOverrides, load_study_config};
use dm_cli::pipeline::run_pipeline;
use dm_cli::sample::write_sample;
use dm_model::{DiagnosticKind, StudyConfig};
use dm_output::{OutputFormat, write_outputs};
use tempfile::tempdir;

#[test]
fn sample_builds_four_subjects() {
    let dir = tempdir().expect("tempdir");
    let files = write_sample(dir.path()).expect("write sample");

    let output = run_pipeline(&files.demographics, &files.exposure, &StudyConfig::default())
        .expect("run pipeline");

    assert_eq!(output.demographics_read, 4);
    assert_eq!(output.exposures_read, 5);
    assert_eq!(output.records.len(), 4);
    assert_eq!(output.arm_counts.get("PLACEBO"), Some(&1));
    assert_eq!(output.arm_counts.get("TRTA"), Some(&1));
    assert_eq!(output.arm_counts.get("TRTB"), Some(&1));
    assert_eq!(output.arm_counts.get(""), Some(&1));

    let ages: Vec<Option<i64>> = output.records.iter().map(|record| record.age).collect();
    assert_eq!(ages, vec![Some(32), Some(38), Some(50), None]);

    assert!(!output.report.has_errors());
    assert_eq!(output.report.diagnostics.len(), 1);
    let diagnostic = &output.report.diagnostics[0];
    assert_eq!(diagnostic.subject_id, "104");
    assert_eq!(diagnostic.kind, DiagnosticKind::NoExposure);
}

#[test]
fn sample_outputs_match_expected_rows() {
    let dir = tempdir().expect("tempdir");
    let files = write_sample(&dir.path().join("input")).expect("write sample");
    let output = run_pipeline(&files.demographics, &files.exposure, &StudyConfig::default())
        .expect("run pipeline");
    let out_dir = dir.path().join("output");
    let paths = write_outputs(
        &out_dir,
        &[OutputFormat::Csv],
        &output.records,
        &output.report.diagnostics,
    )
    .expect("write outputs");

    let csv = fs::read_to_string(paths.csv.expect("csv path")).expect("read dm.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[1],
        "STUDY01,DM,STUDY01-SITE01-101,101,2023-01-01,2023-01-15,2023-01-01,2023-01-15,,,,,SITE01,1990-05-15,32,YEARS,M,UNKNOWN,PLACEBO,Placebo,PLACEBO,Placebo,,USA"
    );
    assert_eq!(
        lines[3],
        "STUDY01,DM,STUDY01-SITE01-103,103,2023-03-10,2023-03-10,2023-03-10,2023-03-10,,,,,SITE01,1972-03-22,50,YEARS,M,UNKNOWN,TRTB,Drug B,TRTB,Drug B,,USA"
    );
    assert_eq!(
        lines[4],
        "STUDY01,DM,STUDY01-SITE01-104,104,,,,,,,,,SITE01,,,,U,UNKNOWN,,,,,NOT ASSIGNED,USA"
    );

    let diagnostics =
        fs::read_to_string(paths.diagnostics.expect("diagnostics path")).expect("read diagnostics");
    insta::assert_snapshot!(diagnostics.trim_end(), @r"
    SUBJID,SEVERITY,KIND,MESSAGE
    104,warning,no_exposure,no dated exposure records; reference dates and arm left empty
    ");
}

#[test]
fn config_overrides_flow_into_identifiers() {
    let dir = tempdir().expect("tempdir");
    let files = write_sample(dir.path()).expect("write sample");
    let config_path = dir.path().join("study.toml");
    fs::write(&config_path, "study_id = \"ABC\"\ncountry = \"deu\"\n").expect("write config");
    let overrides = StudyOverrides {
        site_id: Some("S07".to_string()),
        ..StudyOverrides::default()
    };
    let config = load_study_config(Some(&config_path), &overrides).expect("load config");

    let output = run_pipeline(&files.demographics, &files.exposure, &config).expect("pipeline");
    let record = &output.records[0];
    assert_eq!(record.unique_subject_id, "ABC-S07-101");
    assert_eq!(record.site_id, "S07");
    assert_eq!(record.country, "DEU");
}

#[test]
fn blank_subject_rows_surface_as_errors() {
    let dir = tempdir().expect("tempdir");
    let dm_path = dir.path().join("demographics.csv");
    let ex_path = dir.path().join("exposure.csv");
    fs::write(&dm_path, "SUBJID,SEX,BRTHDTC\n101,M,1990-05-15\n,F,1985-01-10\n").expect("write dm");
    fs::write(&ex_path, "SUBJID,EXSTDTC,EXTRT\n101,2023-01-01,PLACEBO\n").expect("write ex");

    let output = run_pipeline(&dm_path, &ex_path, &StudyConfig::default()).expect("pipeline");
    assert_eq!(output.records.len(), 1);
    assert!(output.report.has_errors());
    assert_eq!(output.report.diagnostics[0].subject_id, "demographics.csv:2");
    assert_eq!(
        output.report.diagnostics[0].kind,
        DiagnosticKind::MissingSubjectId
    );
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let error = run_pipeline(
        &dir.path().join("absent.csv"),
        &dir.path().join("exposure.csv"),
        &StudyConfig::default(),
    )
    .expect_err("missing input");
    assert!(format!("{error:#}").contains("CSV file not found"));
}
