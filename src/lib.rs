pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod report;
pub mod requirements;
pub mod store;

// Re-export main types for easy access
pub use check::{IncompleteRecord, Mismatch};
pub use config::{FileConfig, ReportConfig};
pub use error::ReportError;
pub use record::{normalize_name, PackageRecord, RecordSet};
pub use requirements::RequirementEntry;
