use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use dm_model::StandardizedDemographicRecord;
use tracing::debug;

use crate::common::ensure_parent_dir;

/// Write the DM dataset as a pretty-printed JSON array.
pub fn write_dm_json(path: &Path, records: &[StandardizedDemographicRecord]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("write {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(path = %path.display(), records = records.len(), "DM JSON written");
    Ok(())
}
