//! Standardized Demographics (DM) record per SDTMIG v3.4 Section 5.1.
//!
//! The field order of [`StandardizedDemographicRecord`] is the column order
//! of the persisted dataset; [`DM_COLUMNS`] lists the same variables with
//! their labels. Fields this data source cannot populate (informed consent,
//! end of participation, death) stay in the schema and are written empty.

use serde::{Deserialize, Serialize};

use crate::ids::SubjectId;

pub const DM_DOMAIN_CODE: &str = "DM";
pub const RACE_UNKNOWN: &str = "UNKNOWN";
pub const ARM_NOT_ASSIGNED: &str = "NOT ASSIGNED";

/// A DM variable name and its SDTM label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmColumn {
    pub name: &'static str,
    pub label: &'static str,
}

const fn column(name: &'static str, label: &'static str) -> DmColumn {
    DmColumn { name, label }
}

/// DM dataset columns in output order.
pub const DM_COLUMNS: &[DmColumn] = &[
    column("STUDYID", "Study Identifier"),
    column("DOMAIN", "Domain Abbreviation"),
    column("USUBJID", "Unique Subject Identifier"),
    column("SUBJID", "Subject Identifier for the Study"),
    column("RFSTDTC", "Subject Reference Start Date/Time"),
    column("RFENDTC", "Subject Reference End Date/Time"),
    column("RFXSTDTC", "Date/Time of First Study Treatment"),
    column("RFXENDTC", "Date/Time of Last Study Treatment"),
    column("RFICDTC", "Date/Time of Informed Consent"),
    column("RFPENDTC", "Date/Time of End of Participation"),
    column("DTHDTC", "Date/Time of Death"),
    column("DTHFL", "Subject Death Flag"),
    column("SITEID", "Study Site Identifier"),
    column("BRTHDTC", "Date/Time of Birth"),
    column("AGE", "Age"),
    column("AGEU", "Age Units"),
    column("SEX", "Sex"),
    column("RACE", "Race"),
    column("ARMCD", "Planned Arm Code"),
    column("ARM", "Description of Planned Arm"),
    column("ACTARMCD", "Actual Arm Code"),
    column("ACTARM", "Description of Actual Arm"),
    column("ARMNRS", "Reason Arm and/or Actual Arm is Null"),
    column("COUNTRY", "Country"),
];

/// One output row of the DM dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizedDemographicRecord {
    #[serde(rename = "STUDYID")]
    pub study_id: String,
    #[serde(rename = "DOMAIN")]
    pub domain: String,
    #[serde(rename = "USUBJID")]
    pub unique_subject_id: String,
    #[serde(rename = "SUBJID")]
    pub subject_id: SubjectId,
    #[serde(rename = "RFSTDTC")]
    pub reference_start_date: String,
    #[serde(rename = "RFENDTC")]
    pub reference_end_date: String,
    #[serde(rename = "RFXSTDTC")]
    pub exposure_start_date: String,
    #[serde(rename = "RFXENDTC")]
    pub exposure_end_date: String,
    #[serde(rename = "RFICDTC")]
    pub informed_consent_date: String,
    #[serde(rename = "RFPENDTC")]
    pub participation_end_date: String,
    #[serde(rename = "DTHDTC")]
    pub death_date: String,
    #[serde(rename = "DTHFL")]
    pub death_flag: String,
    #[serde(rename = "SITEID")]
    pub site_id: String,
    #[serde(rename = "BRTHDTC")]
    pub birth_date: String,
    #[serde(rename = "AGE")]
    pub age: Option<i64>,
    #[serde(rename = "AGEU")]
    pub age_unit: String,
    #[serde(rename = "SEX")]
    pub sex: String,
    #[serde(rename = "RACE")]
    pub race: String,
    #[serde(rename = "ARMCD")]
    pub arm_code: String,
    #[serde(rename = "ARM")]
    pub arm: String,
    #[serde(rename = "ACTARMCD")]
    pub actual_arm_code: String,
    #[serde(rename = "ACTARM")]
    pub actual_arm: String,
    #[serde(rename = "ARMNRS")]
    pub arm_not_assigned_reason: String,
    #[serde(rename = "COUNTRY")]
    pub country: String,
}
