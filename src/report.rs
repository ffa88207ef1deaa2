use crate::record::{PackageRecord, RecordSet};

const RULE_HEAVY: &str = "================================================================================";
const RULE_LIGHT: &str = "--------------------------------------------------------------------------------";

/// Render the final report text.
///
/// When `targets` is non-empty only records whose license contains one of
/// the target identifiers (case-insensitively) are included, so a target
/// of `BSD` keeps `BSD-3-Clause` records. Blocks are sorted ascending by
/// normalized name; this is the one place global ordering is imposed.
/// Output is byte-identical across runs for identical input.
pub fn format(records: &RecordSet, targets: &[String]) -> String {
    let lowered: Vec<String> = targets.iter().map(|t| t.to_lowercase()).collect();

    let selected: Vec<&PackageRecord> = records
        .sorted_records()
        .into_iter()
        .filter(|record| {
            if lowered.is_empty() {
                return true;
            }
            let license = record.license.to_lowercase();
            lowered.iter().any(|target| license.contains(target))
        })
        .collect();

    let mut output = String::new();
    output.push_str(RULE_HEAVY);
    output.push('\n');
    output.push_str("Third-party package licenses\n");
    output.push_str(RULE_HEAVY);
    output.push('\n');

    for (index, record) in selected.iter().enumerate() {
        if index > 0 {
            output.push_str(RULE_LIGHT);
            output.push('\n');
        }
        output.push_str(&format!("Package: {}\n", record.name));
        output.push_str(&format!("Version: {}\n", record.version));
        output.push_str(&format!("License: {}\n", record.license));
        if let Some(text) = &record.license_text {
            output.push_str("License Text:\n");
            output.push_str(text.trim_end());
            output.push('\n');
        }
        output.push('\n');
    }

    output
}
