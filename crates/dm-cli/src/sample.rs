//! Demo input files for trying the builder without real data.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const SAMPLE_DEMOGRAPHICS_CSV: &str = "\
SUBJID,SEX,BRTHDTC
101,Male,1990-05-15
102,FEMALE,10JAN1985
103,M,03/22/1972
104,,
";

pub const SAMPLE_EXPOSURE_CSV: &str = "\
SUBJID,EXSTDTC,EXTRT
101,2023-01-01,Placebo
101,2023-01-15,Placebo
102,2023-02-01,Drug_A
102,2023-02-20,Drug_A
103,2023-03-10,Drug_B
";

pub const SAMPLE_DEMOGRAPHICS_FILE: &str = "demographics.csv";
pub const SAMPLE_EXPOSURE_FILE: &str = "exposure.csv";

#[derive(Debug, Clone)]
pub struct SampleFiles {
    pub demographics: PathBuf,
    pub exposure: PathBuf,
}

/// Write the demo demographics and exposure files into `dir`.
pub fn write_sample(dir: &Path) -> Result<SampleFiles> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let files = SampleFiles {
        demographics: dir.join(SAMPLE_DEMOGRAPHICS_FILE),
        exposure: dir.join(SAMPLE_EXPOSURE_FILE),
    };
    fs::write(&files.demographics, SAMPLE_DEMOGRAPHICS_CSV)
        .with_context(|| format!("write {}", files.demographics.display()))?;
    fs::write(&files.exposure, SAMPLE_EXPOSURE_CSV)
        .with_context(|| format!("write {}", files.exposure.display()))?;
    Ok(files)
}
