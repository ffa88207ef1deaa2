use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ReportError;
use crate::record::normalize_name;

/// Version comparison operators accepted in a requirements manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Exact,      // ==
    NotEqual,   // !=
    GreaterEq,  // >=
    LessEq,     // <=
    Greater,    // >
    Less,       // <
    Compatible, // ~=
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Exact => "==",
            Operator::NotEqual => "!=",
            Operator::GreaterEq => ">=",
            Operator::LessEq => "<=",
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::Compatible => "~=",
        }
    }
}

// Two-character operators must be tried before their one-character prefixes
const OPERATORS: &[(&str, Operator)] = &[
    ("==", Operator::Exact),
    ("!=", Operator::NotEqual),
    (">=", Operator::GreaterEq),
    ("<=", Operator::LessEq),
    ("~=", Operator::Compatible),
    (">", Operator::Greater),
    ("<", Operator::Less),
];

/// One declared dependency from the requirements manifest.
///
/// The constraint is parsed so malformed lines can be rejected, but it is
/// never evaluated against installed versions; the consistency check
/// compares names only.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementEntry {
    pub name: String,
    pub constraint: Option<(Operator, String)>,
}

impl RequirementEntry {
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Parse one manifest line. Returns None for lines that carry no
/// requirement (blank lines and `#` comments).
pub fn parse_line(line: &str) -> Result<Option<RequirementEntry>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    // pip option lines (-r, -e, --hash, ...) are not package requirements
    if line.starts_with('-') {
        return Err(format!("not a package requirement: '{}'", line));
    }

    for (symbol, operator) in OPERATORS {
        if let Some(pos) = line.find(symbol) {
            let name = line[..pos].trim();
            let version = line[pos + symbol.len()..].trim();
            if name.is_empty() {
                return Err(format!("missing package name: '{}'", line));
            }
            if version.is_empty() {
                return Err(format!("operator without version: '{}'", line));
            }
            return Ok(Some(RequirementEntry {
                name: name.to_string(),
                constraint: Some((*operator, version.to_string())),
            }));
        }
    }

    Ok(Some(RequirementEntry {
        name: line.to_string(),
        constraint: None,
    }))
}

/// Parse a whole manifest. Malformed lines are skipped with a warning on
/// standard output; they never abort the run.
pub fn parse_manifest(content: &str) -> Vec<RequirementEntry> {
    let mut entries = Vec::new();
    for (number, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(reason) => {
                println!("Warning: skipping manifest line {}: {}", number + 1, reason);
            }
        }
    }
    entries
}

/// Load and parse the requirements manifest from disk.
pub fn load_manifest(path: &Path) -> Result<Vec<RequirementEntry>> {
    if !path.exists() {
        return Err(ReportError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read requirements manifest: {}", path.display()))?;
    println!("loaded requirements manifest: {}", path.display());
    Ok(parse_manifest(&content))
}
