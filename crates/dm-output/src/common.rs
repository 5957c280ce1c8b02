use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Files produced by one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputPaths {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub diagnostics: Option<PathBuf>,
}

impl OutputPaths {
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.csv, &self.json, &self.diagnostics]
            .into_iter()
            .flatten()
    }
}

/// `dm.csv` or `dm.json` inside `output_dir`.
pub fn dm_output_path(output_dir: &Path, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("dm.{}", format.extension()))
}

pub(crate) fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_output_dir(parent)?;
    }
    Ok(())
}
