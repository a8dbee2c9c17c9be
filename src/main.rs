use std::path::PathBuf;

use anyhow::{Context, Result};
use bank_statement_ofx::{ConvertOptions, convert};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Converts ING (www.ing.nl) CSV files to OFX format.
///
/// The default output filename is the input filename.
#[derive(Parser, Debug)]
#[command(name = "bank-statement-ofx", version, about)]
struct Cli {
    /// A csv file to process
    csvfile: PathBuf,

    /// Output filename
    #[arg(short = 'o', long = "outfile")]
    outfile: Option<String>,

    /// Directory to store output
    #[arg(short = 'd', long = "directory", default_value = "ofx")]
    directory: PathBuf,

    /// Convert decimal separator to dots (.)
    #[arg(short = 'c', long)]
    convert: bool,

    /// Convert dates with dd-mm-yyyy notation to yyyymmdd
    #[arg(short = 'b', long)]
    convert_date: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = cli.csvfile.clone();

    let summary = convert(ConvertOptions {
        source_path: cli.csvfile,
        output_file_name: cli.outfile,
        output_dir: cli.directory,
        convert_decimal_separator: cli.convert,
        convert_date_format: cli.convert_date,
    })
    .with_context(|| format!("failed to convert {}", source.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}
