//! CLI commands for saldo-cli
//!
//! Subcommand argument types and handlers. Handlers wire the boundary
//! collaborators together: load the CSV, reconstruct the ledger, filter,
//! aggregate, and render — reporting skipped and invalid rows along the way.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_snapshot_table, format_transaction_table};
use crate::error::{SaldoError, SaldoResult};
use crate::export::export_transactions_csv;
use crate::import::{self, ColumnMapping, LoadReport};
use crate::models::{FilteredLedger, Ledger};
use crate::reports::{BalanceSeries, FinancialSummary, MonthlySummary};
use crate::services::{filter, parse_keywords, reconstruct};

/// Options shared by every analysis command
#[derive(Args, Debug, Clone)]
pub struct FilterOpts {
    /// Path to the transactions CSV file
    pub file: PathBuf,

    /// Start date (YYYY-MM-DD); defaults to the earliest transaction
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD); defaults to the latest transaction
    #[arg(short, long)]
    pub end: Option<String>,

    /// Comma-separated keywords; a row matches if its description contains
    /// any of them (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub keywords: String,

    /// Use the Sparkasse statement layout (semicolon-delimited, German
    /// dates) instead of auto-detecting columns from the header
    #[arg(long)]
    pub sparkasse: bool,
}

/// An analysis run: the reconstructed ledger, the filtered view, the range
/// it was filtered to, and the loader's skipped rows
pub struct Analysis {
    pub ledger: Ledger,
    pub filtered: FilteredLedger,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub skipped: Vec<SaldoError>,
}

/// Load, reconstruct, and filter according to the shared options
pub fn run_analysis(opts: &FilterOpts, settings: &Settings) -> SaldoResult<Analysis> {
    let mapping = if opts.sparkasse {
        ColumnMapping::sparkasse()
    } else {
        // Auto-detect columns from the header, but prefer the configured
        // date format over the common fallbacks.
        import::detect_mapping(&opts.file)?.with_date_format(&settings.csv_date_format)
    };
    let LoadReport { records, skipped } = import::load_path(&opts.file, Some(&mapping))?;

    let ledger = reconstruct(records, &settings.snapshot_marker);

    let span = ledger.date_span();
    let start = match &opts.start {
        Some(s) => parse_cli_date(s)?,
        None => span.map(|(min, _)| min).unwrap_or_default(),
    };
    let end = match &opts.end {
        Some(s) => parse_cli_date(s)?,
        None => span.map(|(_, max)| max).unwrap_or_default(),
    };

    let keywords = parse_keywords(&opts.keywords);
    let filtered = filter(&ledger, start, end, &keywords)?;

    Ok(Analysis {
        ledger,
        filtered,
        start,
        end,
        skipped,
    })
}

/// Print loader and filter warnings (skipped rows, invalid dates) to stderr
pub fn print_warnings(analysis: &Analysis) {
    for err in &analysis.skipped {
        eprintln!("Warning: {}", err);
    }

    if !analysis.filtered.invalid_date.is_empty() {
        eprintln!(
            "Warning: {} row(s) with invalid or missing dates (not included in analysis):",
            analysis.filtered.invalid_date.len()
        );
        for txn in &analysis.filtered.invalid_date {
            eprintln!("  '{}' - {}", txn.date_raw, txn.description);
        }
    }
}

/// Handle `saldo analyze`: full dashboard output
pub fn handle_analyze(opts: &FilterOpts, settings: &Settings) -> SaldoResult<()> {
    let analysis = run_analysis(opts, settings)?;
    print_warnings(&analysis);

    println!("Filtered Transactions");
    println!(
        "{}",
        format_transaction_table(
            &analysis.filtered.included,
            &settings.currency_symbol,
            &settings.display_date_format
        )
    );

    println!("Balance Snapshots");
    println!(
        "{}",
        format_snapshot_table(
            &analysis.ledger,
            &settings.currency_symbol,
            &settings.display_date_format
        )
    );

    let summary =
        FinancialSummary::generate(&analysis.filtered.included, analysis.start, analysis.end);
    println!("{}", summary.format_terminal(&settings.currency_symbol));

    println!("Monthly Income and Expenses");
    let monthly = MonthlySummary::generate(&analysis.filtered.included);
    println!("{}", monthly.format_terminal(&settings.currency_symbol));

    Ok(())
}

/// Handle `saldo summary`: scalar summary only
pub fn handle_summary(
    opts: &FilterOpts,
    settings: &Settings,
    output: Option<&PathBuf>,
) -> SaldoResult<()> {
    let analysis = run_analysis(opts, settings)?;
    print_warnings(&analysis);

    let summary =
        FinancialSummary::generate(&analysis.filtered.included, analysis.start, analysis.end);

    match output {
        Some(path) => {
            let mut writer = csv_writer(path)?;
            summary.export_csv(&mut writer)?;
            writer.flush()?;
            println!("Summary exported to {}", path.display());
        }
        None => println!("{}", summary.format_terminal(&settings.currency_symbol)),
    }

    Ok(())
}

/// Handle `saldo monthly`: monthly income/expense buckets
pub fn handle_monthly(
    opts: &FilterOpts,
    settings: &Settings,
    output: Option<&PathBuf>,
) -> SaldoResult<()> {
    let analysis = run_analysis(opts, settings)?;
    print_warnings(&analysis);

    let monthly = MonthlySummary::generate(&analysis.filtered.included);

    match output {
        Some(path) => {
            let mut writer = csv_writer(path)?;
            monthly.export_csv(&mut writer)?;
            writer.flush()?;
            println!("Monthly summary exported to {}", path.display());
        }
        None => println!("{}", monthly.format_terminal(&settings.currency_symbol)),
    }

    Ok(())
}

/// Handle `saldo series`: write the per-transaction chart series to CSV
pub fn handle_series(opts: &FilterOpts, settings: &Settings, output: &PathBuf) -> SaldoResult<()> {
    let analysis = run_analysis(opts, settings)?;
    print_warnings(&analysis);

    let series = BalanceSeries::generate(&analysis.filtered.included);

    let mut writer = csv_writer(output)?;
    series.export_csv(&mut writer)?;
    writer.flush()?;

    println!(
        "Exported {} chart point(s) to {}",
        series.points.len(),
        output.display()
    );

    Ok(())
}

/// Handle `saldo export`: write the filtered transactions to CSV
pub fn handle_export(opts: &FilterOpts, settings: &Settings, output: &PathBuf) -> SaldoResult<()> {
    let analysis = run_analysis(opts, settings)?;
    print_warnings(&analysis);

    let mut writer = csv_writer(output)?;
    export_transactions_csv(
        &analysis.filtered.included,
        &mut writer,
        &settings.display_date_format,
    )?;
    writer.flush()?;

    println!(
        "Exported {} transaction(s) to {}",
        analysis.filtered.included.len(),
        output.display()
    );

    Ok(())
}

fn csv_writer(path: &PathBuf) -> SaldoResult<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| SaldoError::Export(format!("cannot create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

/// Parse a `YYYY-MM-DD` command-line date argument
pub fn parse_cli_date(s: &str) -> SaldoResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SaldoError::Config(format!("invalid date '{}', expected YYYY-MM-DD", s)))
}
