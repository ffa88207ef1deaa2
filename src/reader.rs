use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use crate::record::PackageRecord;

/// Read fresh metadata for every installed package by running
/// `pip-licenses` against the target environment. The reader is a thin
/// wrapper: all reconciliation happens downstream on the records it
/// returns.
pub fn read_installed_packages(repository: Option<&Path>) -> Result<Vec<PackageRecord>> {
    let mut command = Command::new("pip-licenses");
    command.args(["--format=json", "--with-license-file", "--no-license-path"]);
    if let Some(python) = repository {
        command.arg("--python").arg(python);
    }

    let output = command
        .output()
        .context("Failed to run pip-licenses; is it installed and on PATH?")?;

    if !output.status.success() {
        anyhow::bail!(
            "pip-licenses exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    parse_reader_output(&output.stdout)
}

fn parse_reader_output(stdout: &[u8]) -> Result<Vec<PackageRecord>> {
    let mut records: Vec<PackageRecord> =
        serde_json::from_slice(stdout).context("Failed to parse pip-licenses JSON output")?;
    for record in &mut records {
        if let Some(text) = &record.license_text {
            record.license_text = Some(text.trim().to_string());
        }
    }
    Ok(records)
}
