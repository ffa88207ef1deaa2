use anyhow::Result;
use clap::Parser;

use py_license_report::cli::Cli;
use py_license_report::config::{load_config, ReportConfig};
use py_license_report::pipeline::generate;
use py_license_report::reader::read_installed_packages;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = load_config()?;
    let config = ReportConfig::resolve(cli, file_config);

    let fresh = read_installed_packages(config.repository.as_deref())?;
    generate(fresh, &config)
}
