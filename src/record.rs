use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One installed package as reported by the metadata reader.
///
/// Field names on the wire follow the pip-licenses JSON output
/// (`Name`, `Version`, `License`, `LicenseText`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "License")]
    pub license: String,
    #[serde(rename = "LicenseText", skip_serializing_if = "Option::is_none")]
    pub license_text: Option<String>,
}

impl PackageRecord {
    pub fn new(name: &str, version: &str, license: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            license: license.to_string(),
            license_text: None,
        }
    }

    /// Identity key for deduplication and manifest comparison.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize a package name into its identity key: lowercase, with any
/// run of `-`, `_` or `.` collapsed to a single `-` (PEP 503 rules).
/// `Pip-Tools`, `pip_tools` and `pip.tools` all name the same package.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut prev_sep = false;
    for c in name.trim().chars() {
        if c == '-' || c == '_' || c == '.' {
            if !prev_sep && !normalized.is_empty() {
                normalized.push('-');
            }
            prev_sep = true;
        } else {
            normalized.extend(c.to_lowercase());
            prev_sep = false;
        }
    }
    // A trailing separator never survives normalization
    if normalized.ends_with('-') {
        normalized.pop();
    }
    normalized
}

/// Insertion-ordered set of package records, unique by normalized name.
///
/// The first record inserted under a given key wins; later inserts with
/// the same key are ignored. Order is the order keys were first seen.
#[derive(Debug, Default, Clone)]
pub struct RecordSet {
    records: IndexMap<String, PackageRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its normalized name is already present.
    /// Returns true if the record was inserted.
    pub fn insert(&mut self, record: PackageRecord) -> bool {
        let key = record.key();
        if self.records.contains_key(&key) {
            return false;
        }
        self.records.insert(key, record);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(&normalize_name(name))
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.records.get(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageRecord> {
        self.records.values()
    }

    /// Normalized names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|k| k.as_str())
    }

    /// Records sorted ascending by normalized name. Used by the formatter,
    /// which is the one place global ordering is imposed.
    pub fn sorted_records(&self) -> Vec<&PackageRecord> {
        let mut sorted: Vec<(&String, &PackageRecord)> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted.into_iter().map(|(_, r)| r).collect()
    }

    pub fn into_records(self) -> Vec<PackageRecord> {
        self.records.into_values().collect()
    }
}

impl FromIterator<PackageRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = PackageRecord>>(iter: I) -> Self {
        let mut set = RecordSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}
