use anyhow::Result;

use crate::error::ReportError;
use crate::record::{PackageRecord, RecordSet};

/// Combine freshly-read metadata with the curated special input records.
///
/// Fresh records are inserted first, in reader order. Special records
/// whose normalized name is not already present are appended after, in
/// their own order. First-wins: the special list exists only to fill
/// gaps the metadata reader cannot see, so on a collision the fresh
/// record is kept unchanged.
///
/// An empty `fresh` sequence signals a misconfigured environment and is
/// an error, not an empty report.
pub fn merge(fresh: Vec<PackageRecord>, special: Vec<PackageRecord>) -> Result<RecordSet> {
    if fresh.is_empty() {
        return Err(ReportError::EmptyMetadataResult.into());
    }

    let mut merged = RecordSet::new();
    for record in fresh {
        merged.insert(record);
    }
    for record in special {
        // no-op when fresh already declared this package
        merged.insert(record);
    }
    Ok(merged)
}
