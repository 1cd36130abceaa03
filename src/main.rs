use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use saldo::cli::{
    handle_analyze, handle_export, handle_monthly, handle_series, handle_summary, FilterOpts,
};
use saldo::config::{paths::SaldoPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "saldo",
    author = "Kaylee Beyene",
    version,
    about = "Bank ledger reconciliation and analysis from the command line",
    long_about = "saldo reconstructs a running account balance from a bank CSV \
                  export, cross-references bank-reported balance snapshots, and \
                  produces filtered views, financial summaries, and monthly \
                  income/expense tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct, filter, and show the full analysis
    Analyze {
        #[command(flatten)]
        opts: FilterOpts,
    },

    /// Show the financial summary for a period
    Summary {
        #[command(flatten)]
        opts: FilterOpts,

        /// Export to CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show monthly income and expense buckets
    Monthly {
        #[command(flatten)]
        opts: FilterOpts,

        /// Export to CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the per-transaction chart series (income, expense, balance)
    Series {
        #[command(flatten)]
        opts: FilterOpts,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export filtered transactions to CSV
    Export {
        #[command(flatten)]
        opts: FilterOpts,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SaldoPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Analyze { opts } => handle_analyze(&opts, &settings)?,
        Commands::Summary { opts, output } => handle_summary(&opts, &settings, output.as_ref())?,
        Commands::Monthly { opts, output } => handle_monthly(&opts, &settings, output.as_ref())?,
        Commands::Series { opts, output } => handle_series(&opts, &settings, &output)?,
        Commands::Export { opts, output } => handle_export(&opts, &settings, &output)?,
        Commands::Config => {
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Snapshot marker:  {}", settings.snapshot_marker);
            println!("Currency symbol:  {}", settings.currency_symbol);
            println!("CSV dates:        {}", settings.csv_date_format);
            println!("Display dates:    {}", settings.display_date_format);
        }
    }

    Ok(())
}
