//! Study configuration from an optional TOML file and CLI overrides.
//!
//! ```toml
//! study_id = "ABC-123"
//! site_id = "SITE07"
//! country = "DEU"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dm_model::StudyConfig;

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct StudyOverrides {
    pub study_id: Option<String>,
    pub site_id: Option<String>,
    pub country: Option<String>,
}

pub fn parse_study_config(text: &str) -> Result<StudyConfig> {
    toml::from_str(text).context("parse study configuration")
}

/// Load the configuration file (if any), apply overrides, then normalize.
pub fn load_study_config(path: Option<&Path>, overrides: &StudyOverrides) -> Result<StudyConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            parse_study_config(&text).with_context(|| format!("in {}", path.display()))?
        }
        None => StudyConfig::default(),
    };
    if let Some(study_id) = &overrides.study_id {
        config.study_id.clone_from(study_id);
    }
    if let Some(site_id) = &overrides.site_id {
        config.site_id.clone_from(site_id);
    }
    if let Some(country) = &overrides.country {
        config.country.clone_from(country);
    }
    Ok(config.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study.toml");
        fs::write(&path, "study_id = \"ABC\"\nsite_id = \"S9\"\n").unwrap();
        let overrides = StudyOverrides {
            site_id: Some("S1".to_string()),
            country: Some("deu".to_string()),
            ..StudyOverrides::default()
        };
        let config = load_study_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.study_id, "ABC");
        assert_eq!(config.site_id, "S1");
        assert_eq!(config.country, "DEU");
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        let overrides = StudyOverrides {
            study_id: Some("  ".to_string()),
            ..StudyOverrides::default()
        };
        let config = load_study_config(None, &overrides).unwrap();
        assert_eq!(config, StudyConfig::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let error = load_study_config(Some(&path), &StudyOverrides::default()).unwrap_err();
        assert!(error.to_string().contains("absent.toml"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_study_config("study_id = ").is_err());
    }
}
