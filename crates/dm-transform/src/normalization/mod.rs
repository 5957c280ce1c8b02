//! Normalization functions for DM data transformation.
//!
//! - **datetime**: date parsing across source layouts and ISO 8601 formatting
//! - **age**: whole-year age derivation
//! - **ct**: controlled terminology lookups for sex and planned arm

pub mod age;
pub mod ct;
pub mod datetime;

pub use age::{AGE_UNIT_YEARS, AgeResult, MAX_PLAUSIBLE_AGE, compute_age, whole_years_between};
pub use ct::{Arm, SEX_UNKNOWN, TreatmentMapping, map_sex, map_treatment};
pub use datetime::{DateNormalization, format_iso8601_date, normalize_date, parse_date};
