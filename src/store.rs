use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ReportError;
use crate::record::{PackageRecord, RecordSet};

/// Load the curated Special Input File. A missing file is an empty
/// supplement; malformed JSON is fatal, since a silently truncated
/// report is worse than no report.
///
/// The Input File shares this wire format but is write-only here: the
/// report always reflects the current merge, so nothing reads the
/// persisted snapshot back.
pub fn load_special_records(path: &Path) -> Result<Vec<PackageRecord>> {
    if !path.exists() {
        println!("no special input file at {}, continuing without supplements", path.display());
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read special input file: {}", path.display()))?;
    let mut records: Vec<PackageRecord> =
        serde_json::from_str(&content).map_err(|e| ReportError::MalformedSpecialInput {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
    for record in &mut records {
        if let Some(text) = &record.license_text {
            record.license_text = Some(text.trim().to_string());
        }
    }
    println!("loaded special input file: {}", path.display());
    Ok(records)
}

/// Persist the merged record set as the new Input File.
pub fn save_records(path: &Path, records: &RecordSet) -> Result<()> {
    let list: Vec<&PackageRecord> = records.iter().collect();
    let content = serde_json::to_string_pretty(&list).context("Failed to serialize record set")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write input file: {}", path.display()))?;
    println!("created input file: {}", path.display());
    Ok(())
}

/// Write the rendered report, replacing any previous one.
pub fn write_output(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    println!("created output file: {}", path.display());
    Ok(())
}
