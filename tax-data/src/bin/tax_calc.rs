use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tax_core::calculations::TaxEngine;
use tax_core::{TaxSchedule, Taxpayer};
use tax_data::{IncomeLoader, ScheduleLoader, TaxReport};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compute income tax owed or refunded from a CSV file of income items.
///
/// The CSV file should have the following columns:
/// - category: wages, interest or dividend
/// - description: payer or source (optional)
/// - amount: the income amount
/// - tax_withheld: tax already withheld (optional, defaults to 0)
#[derive(Parser, Debug)]
#[command(name = "tax-calc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing income items
    #[arg(short, long)]
    file: PathBuf,

    /// TOML file with an alternative tax schedule (defaults to the statutory one)
    #[arg(short, long)]
    schedule: Option<PathBuf>,

    /// Taxpayer identification number, for the report header
    #[arg(long, default_value = "")]
    taxpayer_id: String,

    /// Taxpayer first name, for the report header
    #[arg(long, default_value = "Taxpayer")]
    first_name: String,

    /// Taxpayer last name, for the report header
    #[arg(long, default_value = "")]
    last_name: String,

    /// Print only the one-line summary instead of the full statement
    #[arg(long, default_value_t = false)]
    summary: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Writes to stderr so the report on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let schedule = match &args.schedule {
        Some(path) => {
            info!("loading tax schedule from {}", path.display());
            ScheduleLoader::load_from_path(path)
                .with_context(|| format!("Failed to load schedule: {}", path.display()))?
        }
        None => TaxSchedule::default(),
    };

    let ledger = IncomeLoader::load_from_path(&args.file)
        .with_context(|| format!("Failed to load income items: {}", args.file.display()))?;
    debug!("loaded {} income items from {}", ledger.len(), args.file.display());

    let taxpayer = Taxpayer::new(args.taxpayer_id, args.first_name, args.last_name);
    let assessment = TaxEngine::new(&schedule).assess(&ledger);
    let report = TaxReport::new(&taxpayer, &ledger, &assessment);

    if args.summary {
        println!("{}", report.summary_line());
    } else {
        print!("{report}");
    }

    Ok(())
}
