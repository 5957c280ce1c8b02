//! Age derivation for DM.AGE / DM.AGEU.
//!
//! AGE is the number of whole years between BRTHDTC and RFSTDTC: the year
//! difference, minus one when the reference date falls before the birthday
//! anniversary in its own year. A 29 February birthday reaches its
//! anniversary on 1 March in common years.

use chrono::{Datelike, NaiveDate};

use super::datetime::parse_date;

/// Unit written to AGEU when AGE is derived.
pub const AGE_UNIT_YEARS: &str = "YEARS";

/// Ages above this are flagged as implausible.
pub const MAX_PLAUSIBLE_AGE: i64 = 125;

/// Derived age, empty when either date is missing or unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgeResult {
    pub years: Option<i64>,
    pub unit: Option<&'static str>,
}

impl AgeResult {
    /// False when an age was derived but lies outside `0..=MAX_PLAUSIBLE_AGE`.
    pub fn is_plausible(&self) -> bool {
        self.years
            .is_none_or(|years| (0..=MAX_PLAUSIBLE_AGE).contains(&years))
    }
}

/// Whole elapsed years from `birth` to `reference`. Negative when the
/// reference date precedes the birth date.
pub fn whole_years_between(birth: NaiveDate, reference: NaiveDate) -> i64 {
    let mut years = i64::from(reference.year()) - i64::from(birth.year());
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Compute age from raw (not yet normalized) birth and reference dates.
///
/// Both values are parsed from source so the result does not depend on any
/// earlier ISO formatting step having succeeded.
pub fn compute_age(birth_date: &str, reference_date: &str) -> AgeResult {
    match (parse_date(birth_date), parse_date(reference_date)) {
        (Some(birth), Some(reference)) => AgeResult {
            years: Some(whole_years_between(birth, reference)),
            unit: Some(AGE_UNIT_YEARS),
        },
        _ => AgeResult::default(),
    }
}
