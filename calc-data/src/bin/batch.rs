use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_core::{BracketTable, ProgressiveCalculator};
use calc_data::PayrollLoader;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compute progressive payroll deductions for every row of a CSV file.
///
/// The input CSV must have the columns `employee` and `gross`. Results are
/// written as CSV with `deduction`, `net` and `ceiling_applied` appended.
#[derive(Parser, Debug)]
#[command(name = "calc-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing gross amounts
    #[arg(short, long)]
    file: PathBuf,

    /// TOML file with an alternative bracket table (defaults to INSS 2025)
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Where to write the results (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Logs go to stderr so stdout stays clean for CSV output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn load_table(path: Option<&PathBuf>) -> Result<BracketTable> {
    let Some(path) = path else {
        return Ok(BracketTable::inss_2025());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table: {}", path.display()))?;
    let table: BracketTable = toml::from_str(&text)
        .with_context(|| format!("Failed to parse table: {}", path.display()))?;
    table
        .validate()
        .with_context(|| format!("Invalid bracket table: {}", path.display()))?;
    Ok(table)
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let calculator = ProgressiveCalculator::new(load_table(args.table.as_ref())?);

    info!("Reading payroll from: {}", args.file.display());
    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;
    let records = PayrollLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;
    info!("Parsed {} records from CSV", records.len());

    let results = PayrollLoader::compute(&calculator, &records)
        .context("Failed to compute deductions")?;

    match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            PayrollLoader::write(out, &results)?;
        }
        None => PayrollLoader::write(io::stdout().lock(), &results)?,
    }

    let totals = PayrollLoader::totals(&results);
    info!(
        employees = totals.employees,
        gross = %totals.gross,
        deduction = %totals.deduction,
        net = %totals.net,
        "batch complete"
    );

    Ok(())
}
