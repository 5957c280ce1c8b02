//! Controlled terminology lookups for DM.SEX and the planned arm.
//!
//! Both tables are matched on the trimmed, upper-cased raw value. The sex
//! mapping is total; the arm mapping reports values it does not know so the
//! caller can raise a diagnostic.

use dm_model::ARM_NOT_ASSIGNED;

/// SEX submission value for anything not in [`SEX_TERMS`].
pub const SEX_UNKNOWN: &str = "U";

/// Raw gender code -> SEX submission value (Codelist C66731 subset).
const SEX_TERMS: &[(&str, &str)] = &[("M", "M"), ("MALE", "M"), ("F", "F"), ("FEMALE", "F")];

/// Planned arm code (ARMCD) and description (ARM).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arm {
    pub code: &'static str,
    pub label: &'static str,
}

/// Raw treatment code -> planned arm.
const ARM_TERMS: &[(&str, Arm)] = &[
    (
        "PLACEBO",
        Arm {
            code: "PLACEBO",
            label: "Placebo",
        },
    ),
    (
        "DRUG_A",
        Arm {
            code: "TRTA",
            label: "Drug A",
        },
    ),
    (
        "DRUG_B",
        Arm {
            code: "TRTB",
            label: "Drug B",
        },
    ),
];

fn lookup_key(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Map a raw gender code to M, F or U.
pub fn map_sex(raw: &str) -> &'static str {
    let key = lookup_key(raw);
    SEX_TERMS
        .iter()
        .find(|(term, _)| *term == key)
        .map_or(SEX_UNKNOWN, |(_, value)| *value)
}

/// Result of mapping a treatment code to a planned arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreatmentMapping {
    Assigned(Arm),
    /// No treatment code at all.
    NotAssigned,
    /// A treatment code outside the arm table (trimmed original kept).
    Unrecognized(String),
}

impl TreatmentMapping {
    pub fn arm_code(&self) -> &'static str {
        match self {
            Self::Assigned(arm) => arm.code,
            Self::NotAssigned | Self::Unrecognized(_) => "",
        }
    }

    pub fn arm_label(&self) -> &'static str {
        match self {
            Self::Assigned(arm) => arm.label,
            Self::NotAssigned | Self::Unrecognized(_) => "",
        }
    }

    /// ARMNRS value: empty when an arm was assigned.
    pub fn not_assigned_reason(&self) -> &'static str {
        match self {
            Self::Assigned(_) => "",
            Self::NotAssigned | Self::Unrecognized(_) => ARM_NOT_ASSIGNED,
        }
    }
}

/// Map a raw treatment code to a planned arm.
pub fn map_treatment(raw: &str) -> TreatmentMapping {
    let key = lookup_key(raw);
    if key.is_empty() {
        return TreatmentMapping::NotAssigned;
    }
    ARM_TERMS
        .iter()
        .find(|(term, _)| *term == key)
        .map_or_else(
            || TreatmentMapping::Unrecognized(raw.trim().to_string()),
            |(_, arm)| TreatmentMapping::Assigned(*arm),
        )
}
