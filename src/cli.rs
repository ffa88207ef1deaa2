use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "py-license-report")]
#[command(about = "Generate a consolidated third-party license report for a Python environment")]
#[command(version)]
pub struct Cli {
    /// Input file location (persisted snapshot of package metadata)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file location for the rendered report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Requirements manifest location
    #[arg(short, long)]
    pub require: Option<PathBuf>,

    /// Persist the merged record set back to the input file
    #[arg(short = 'O', long = "override_input_file")]
    pub override_input_file: bool,

    /// Restrict the report to these license identifiers
    #[arg(short, long, num_args = 1..)]
    pub targets: Option<Vec<String>>,

    /// Special input file with curated supplemental records
    #[arg(long)]
    pub special: Option<PathBuf>,

    /// Python interpreter or environment handed to pip-licenses
    #[arg(long)]
    pub repository: Option<PathBuf>,
}
