use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors. Each of these aborts the run before the
/// output file is written; a partial report is worse than no report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("special input file is not valid JSON: {path}\ndetails: {details}")]
    MalformedSpecialInput { path: PathBuf, details: String },

    #[error("metadata reader returned zero packages; the target environment looks empty or misconfigured")]
    EmptyMetadataResult,

    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },
}
