use std::fmt;

use crate::ModelError;

/// Subject identifier as collected at the site (SUBJID).
///
/// Always trimmed and non-empty: a record without an identifier is rejected
/// where it enters the system instead of being given a made-up one.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptySubjectId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubjectId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SubjectId {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubjectId> for String {
    fn from(value: SubjectId) -> Self {
        value.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds USUBJID as `STUDYID-SITEID-SUBJID`.
///
/// Empty components are dropped so a blank site id does not leave a
/// doubled separator behind.
pub fn unique_subject_id(study_id: &str, site_id: &str, subject_id: &SubjectId) -> String {
    [study_id.trim(), site_id.trim(), subject_id.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_id_is_trimmed() {
        let id = SubjectId::new("  101 ").unwrap();
        assert_eq!(id.as_str(), "101");
    }

    #[test]
    fn blank_subject_id_is_rejected() {
        assert_eq!(SubjectId::new(""), Err(ModelError::EmptySubjectId));
        assert_eq!(SubjectId::new("   "), Err(ModelError::EmptySubjectId));
    }

    #[test]
    fn usubjid_joins_components() {
        let id = SubjectId::new("103").unwrap();
        assert_eq!(unique_subject_id("STUDY01", "SITE01", &id), "STUDY01-SITE01-103");
        assert_eq!(unique_subject_id("STUDY01", " ", &id), "STUDY01-103");
    }

    #[test]
    fn deserialize_rejects_blank() {
        let parsed: Result<SubjectId, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
        let parsed: SubjectId = serde_json::from_str("\"102\"").unwrap();
        assert_eq!(parsed.as_str(), "102");
    }
}
