use anyhow::Result;

use crate::check::{check, find_incomplete};
use crate::config::ReportConfig;
use crate::merge::merge;
use crate::record::PackageRecord;
use crate::report::format;
use crate::requirements::load_manifest;
use crate::store::{load_special_records, save_records, write_output};

/// Run the whole pipeline on freshly-read metadata: merge with the
/// special input file, optionally persist the merged set, cross-check
/// the requirements manifest, and write the rendered report.
///
/// The report always reflects the current merge. The input file on disk
/// is only touched when `override_input_file` is set; it is a cache and
/// audit artifact, never the source of the report.
pub fn generate(fresh: Vec<PackageRecord>, config: &ReportConfig) -> Result<()> {
    let special = load_special_records(&config.special)?;
    let merged = merge(fresh, special)?;

    if config.override_input_file {
        save_records(&config.input, &merged)?;
    }

    for incomplete in find_incomplete(&merged) {
        println!("{}", incomplete.message());
    }

    let manifest = load_manifest(&config.require)?;
    for mismatch in check(&merged, &manifest) {
        println!("{}", mismatch.message());
    }

    let report = format(&merged, &config.targets);
    write_output(&config.output, &report)?;
    Ok(())
}
