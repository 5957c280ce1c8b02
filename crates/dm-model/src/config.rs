//! Study-level constants applied to every DM record.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STUDY_ID: &str = "STUDY01";
pub const DEFAULT_SITE_ID: &str = "SITE01";
pub const DEFAULT_COUNTRY: &str = "USA";

/// Identifiers and deployment constants for one study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// STUDYID, also the first component of USUBJID.
    pub study_id: String,
    /// SITEID. This data source has a single site.
    pub site_id: String,
    /// COUNTRY as an ISO 3166-1 alpha-3 code.
    pub country: String,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            study_id: DEFAULT_STUDY_ID.to_string(),
            site_id: DEFAULT_SITE_ID.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl StudyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_study_id(mut self, study_id: impl Into<String>) -> Self {
        self.study_id = study_id.into();
        self
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = site_id.into();
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Trims every value and puts the default back for blank ones.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn or_default(value: &str, default: &str) -> String {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }
        Self {
            study_id: or_default(&self.study_id, DEFAULT_STUDY_ID),
            site_id: or_default(&self.site_id, DEFAULT_SITE_ID),
            country: or_default(&self.country, DEFAULT_COUNTRY).to_uppercase(),
        }
    }
}
