//! finder — invalid-filename scanner.
//!
//! Thin binary entry point. All logic lives in the `finder-core` crate.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finder")]
#[command(about = "Recursively scans a directory and reports invalid file and directory names")]
#[command(version)]
struct Cli {
    /// The directory to be scanned recursively
    #[arg(long)]
    parse_path: PathBuf,

    /// The path to the csv file for the result
    #[arg(long, default_value = "/tmp/finder-invalid-filenames.csv")]
    output_csv_path: PathBuf,
}

fn main() {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    if let Err(err) = run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.parse_path.as_os_str().is_empty() {
        anyhow::bail!("please specify a path for recursive scanning");
    }

    let report = finder_core::scan_path(&cli.parse_path)?;

    finder_core::write_csv(&cli.output_csv_path, &report.rows)?;
    if !report.rows.is_empty() {
        tracing::info!(
            "{} flagged entries written to {}",
            report.rows.len(),
            cli.output_csv_path.display()
        );
    }

    print!("{}", finder_core::render_summary(&report.stats));

    Ok(())
}
