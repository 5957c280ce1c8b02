//! Calendar date parsing and ISO 8601 formatting.
//!
//! Source systems hand over dates in whatever layout they were keyed in
//! (`2023-01-01`, `10JAN1985`, `03/22/1972`, ...). Parsing is permissive
//! across a fixed list of layouts; output is always the ISO 8601 extended
//! date `YYYY-MM-DD` required by SDTMIG 4.4.1.
//!
//! Ambiguous numeric dates with slashes are read as US `MM/DD/YYYY` first and
//! only fall back to `DD/MM/YYYY` when the US reading is impossible.
//!
//! Years must have four digits. chrono's `%Y` also accepts one to three
//! digits, so `02/01/23` would otherwise read as year 2; such values are
//! unparseable instead.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Smallest year a four-digit `%Y` token can produce.
const MIN_FOUR_DIGIT_YEAR: i32 = 1000;

/// Outcome of normalizing one raw date value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateNormalization {
    /// Empty or whitespace-only input. Not an error.
    Missing,
    /// Parsed calendar date.
    Date(NaiveDate),
    /// Non-empty input that matched no known layout (trimmed original kept).
    Unparseable(String),
}

impl DateNormalization {
    /// ISO 8601 date, or an empty string when there is no date.
    pub fn iso(&self) -> String {
        match self {
            Self::Date(date) => format_iso8601_date(*date),
            Self::Missing | Self::Unparseable(_) => String::new(),
        }
    }

    /// False only for input that was present but could not be read.
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Unparseable(_))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Missing | Self::Unparseable(_) => None,
        }
    }

    /// `(iso_date, ok)` pair.
    pub fn into_parts(self) -> (String, bool) {
        let ok = self.is_ok();
        (self.iso(), ok)
    }
}

/// Normalize a raw date value to ISO 8601.
pub fn normalize_date(raw: &str) -> DateNormalization {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DateNormalization::Missing;
    }
    match try_parse_date(trimmed).or_else(|| try_parse_datetime(trimmed)) {
        Some(date) => DateNormalization::Date(date),
        None => DateNormalization::Unparseable(trimmed.to_string()),
    }
}

/// Parse a raw date value, returning `None` when it is missing or unreadable.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    normalize_date(raw).date()
}

/// Format a NaiveDate to ISO 8601 date string.
pub fn format_iso8601_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Try to parse date-only formats.
fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d%b%Y",    // SAS DATE9: 10JAN1985
        "%d-%b-%Y",  // 15-Jan-2024
        "%d %b %Y",  // 15 Jan 2024
        "%d-%B-%Y",  // 15-January-2024
        "%d %B %Y",  // 15 January 2024
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d/%m/%Y",  // European: 15/01/2024
        "%m-%d-%Y",  // 01-15-2024
        "%d.%m.%Y",  // German: 15.01.2024
        "%Y%m%d",    // Compact: 20240115
    ];

    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .find(|date| has_four_digit_year(*date))
}

/// Try datetime formats and keep the date part.
fn try_parse_datetime(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%d%b%Y:%H:%M:%S", // SAS DATETIME: 10JAN1985:08:30:00
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ];

    formats
        .iter()
        .filter_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .find(|date| has_four_digit_year(*date))
}

fn has_four_digit_year(date: NaiveDate) -> bool {
    date.year() >= MIN_FOUR_DIGIT_YEAR
}
