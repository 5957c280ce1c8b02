//! Accepted source column names for each raw field.
//!
//! Matching is case-insensitive, treats whitespace in a header like `_`
//! (`Birth Date` matches `BIRTH_DATE`), and the first alias present wins, so
//! a file carrying both `SUBJID` and `USUBJID` reads the subject from `SUBJID`.

pub const SUBJECT_ID_ALIASES: &[&str] = &["SUBJID", "SUBJECT_ID", "SUBJECTID", "USUBJID", "SUBJECT"];
pub const GENDER_ALIASES: &[&str] = &["SEX", "GENDER", "GENDER_CODE"];
pub const BIRTH_DATE_ALIASES: &[&str] = &["BRTHDTC", "BIRTHDATE", "BIRTH_DATE", "DOB"];
pub const EXPOSURE_DATE_ALIASES: &[&str] =
    &["EXSTDTC", "EXPOSURE_DATE", "EVENT_DATE", "EXDATE", "DATE"];
pub const TREATMENT_ALIASES: &[&str] = &["EXTRT", "TREATMENT", "TREATMENT_CODE", "TRT"];

/// Index of the first header matching one of `aliases`.
pub fn resolve_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    let keys: Vec<String> = headers.iter().map(|header| header_key(header)).collect();
    aliases
        .iter()
        .find_map(|alias| keys.iter().position(|key| key.eq_ignore_ascii_case(alias)))
}

fn header_key(header: &str) -> String {
    header.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn resolves_case_insensitively() {
        let headers = headers(&["subject_id", "Gender", "dob"]);
        assert_eq!(resolve_column(&headers, SUBJECT_ID_ALIASES), Some(0));
        assert_eq!(resolve_column(&headers, GENDER_ALIASES), Some(1));
        assert_eq!(resolve_column(&headers, BIRTH_DATE_ALIASES), Some(2));
        assert_eq!(resolve_column(&headers, TREATMENT_ALIASES), None);
    }

    #[test]
    fn spaced_headers_match_underscore_aliases() {
        let headers = headers(&["Subject Id", "Birth  Date", "Treatment Code"]);
        assert_eq!(resolve_column(&headers, SUBJECT_ID_ALIASES), Some(0));
        assert_eq!(resolve_column(&headers, BIRTH_DATE_ALIASES), Some(1));
        assert_eq!(resolve_column(&headers, TREATMENT_ALIASES), Some(2));
    }

    #[test]
    fn earlier_alias_wins() {
        let headers = headers(&["USUBJID", "SUBJID"]);
        assert_eq!(resolve_column(&headers, SUBJECT_ID_ALIASES), Some(1));
    }
}
