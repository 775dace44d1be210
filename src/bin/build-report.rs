use anyhow::{Context, Result};
use clap::Parser;
use hydrocarbon::*;
use std::fs::File;
use std::path::PathBuf;

/// Build a CSV report describing every hydrocarbon name in a CSV file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file with a header row
    input: PathBuf,

    /// Where the report is written
    output: PathBuf,

    /// Column holding the names
    #[arg(long, default_value = DEFAULT_NAME_COLUMN)]
    column: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let csv_data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let names = read_names(&csv_data, &args.column)?;

    let output = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_report(&names, output)?;

    Ok(())
}
