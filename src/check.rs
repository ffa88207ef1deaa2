use std::collections::HashSet;

use crate::record::RecordSet;
use crate::requirements::RequirementEntry;

/// A name present on one side of the records/manifest comparison but
/// absent on the other. Computed once per run, printed, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Declared in the manifest but not found among merged packages;
    /// likely an uninstalled or misspelled dependency.
    MissingFromRecordSet { name: String },
    /// Installed/merged but not declared in the manifest; likely a
    /// transitive dependency or drift.
    MissingFromManifest { name: String },
}

impl Mismatch {
    pub fn name(&self) -> &str {
        match self {
            Mismatch::MissingFromRecordSet { name } => name,
            Mismatch::MissingFromManifest { name } => name,
        }
    }

    /// Warning line printed on standard output. Mismatches never abort
    /// the run.
    pub fn message(&self) -> String {
        match self {
            Mismatch::MissingFromRecordSet { name } => {
                format!("Warning: required package not found among merged packages: {}", name)
            }
            Mismatch::MissingFromManifest { name } => {
                format!("Warning: package not declared in requirements manifest: {}", name)
            }
        }
    }
}

/// A merged record whose metadata has gaps the report cannot paper
/// over: an empty name, version or license, or a license the metadata
/// reader gave up on (`UNKNOWN`). Reported as a warning, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteRecord {
    pub name: String,
    pub reasons: Vec<String>,
}

impl IncompleteRecord {
    pub fn message(&self) -> String {
        format!(
            "Warning: incomplete package metadata for {}: {}",
            self.name,
            self.reasons.join(", ")
        )
    }
}

/// Scan the merged record set for records with missing or unusable
/// fields. pip-licenses reports packages without license metadata as
/// `UNKNOWN`; those are exactly the entries a license report should
/// surface rather than silently include.
pub fn find_incomplete(records: &RecordSet) -> Vec<IncompleteRecord> {
    let mut incomplete = Vec::new();
    for record in records.iter() {
        let mut reasons = Vec::new();
        if record.name.trim().is_empty() {
            reasons.push("empty name".to_string());
        }
        if record.version.trim().is_empty() {
            reasons.push("empty version".to_string());
        }
        if record.license.trim().is_empty() {
            reasons.push("empty license".to_string());
        } else if record.license.contains("UNKNOWN") {
            reasons.push(format!("license is {}", record.license));
        }
        if !reasons.is_empty() {
            let name = if record.name.trim().is_empty() {
                "(unnamed)".to_string()
            } else {
                record.name.clone()
            };
            incomplete.push(IncompleteRecord { name, reasons });
        }
    }
    incomplete
}

/// Symmetric difference of normalized names between the merged record
/// set and the requirements manifest. Version constraints are ignored;
/// only presence is checked.
///
/// An empty manifest yields one `MissingFromManifest` per record:
/// nothing is declared, so everything is undeclared.
pub fn check(records: &RecordSet, manifest: &[RequirementEntry]) -> Vec<Mismatch> {
    let record_names: HashSet<String> = records.keys().map(|k| k.to_string()).collect();
    let manifest_names: HashSet<String> = manifest.iter().map(|r| r.key()).collect();

    let mut mismatches = Vec::new();
    // Manifest order first, then record order, so output is stable
    for entry in manifest {
        let key = entry.key();
        if !record_names.contains(&key) && !mismatches.iter().any(|m: &Mismatch| m.name() == key) {
            mismatches.push(Mismatch::MissingFromRecordSet { name: key });
        }
    }
    for key in records.keys() {
        if !manifest_names.contains(key) {
            mismatches.push(Mismatch::MissingFromManifest {
                name: key.to_string(),
            });
        }
    }
    mismatches
}
