use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use igs_core::IgsSchedule;
use igs_data::IgsScheduleLoader;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// IGS levy calculator.
///
/// Resolves an annual revenue figure against the IGS schedule and prints
/// the tax class and amount owed. Members of an approved management
/// centre (CGA) owe half the standard amount.
#[derive(Debug, Parser)]
#[command(name = "igs")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Annual revenue to resolve, in whole FCFA.
    #[arg(long, required_unless_present = "schedule")]
    revenue: Option<Decimal>,

    /// Apply the reduced rate for CGA members.
    #[arg(long, default_value_t = false)]
    cga: bool,

    /// Load the schedule from a CSV file instead of the statutory table.
    #[arg(long)]
    table: Option<PathBuf>,

    /// Print the full schedule and exit.
    #[arg(long, default_value_t = false)]
    schedule: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let schedule = match &cli.table {
        Some(path) => {
            debug!("loading schedule from {}", path.display());
            let file =
                File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
            IgsScheduleLoader::load(file)
                .with_context(|| format!("Invalid schedule table: {}", path.display()))?
        }
        None => IgsSchedule::statutory(),
    };

    if cli.schedule {
        print_schedule(&schedule);
        return Ok(());
    }

    let Some(revenue) = cli.revenue else {
        // clap enforces this already; keep a readable error over a panic.
        anyhow::bail!("--revenue is required unless --schedule is given");
    };

    let resolution = schedule.resolve(revenue, cli.cga);

    if resolution.out_of_range {
        println!(
            "Revenue {} is at or above the {} ceiling: outside the IGS schedule, nothing due under this regime.",
            revenue,
            schedule.ceiling()
        );
    } else {
        println!("Class:  {}", resolution.tax_class);
        println!(
            "Amount: {} FCFA{}",
            resolution.amount,
            if cli.cga { " (reduced rate)" } else { "" }
        );
    }

    Ok(())
}

/// Prints the schedule with range labels and both regime amounts, the
/// reduced column being derived on the fly.
fn print_schedule(schedule: &IgsSchedule) {
    println!(
        "{:<6} {:<30} {:>12} {:>12}",
        "Class", "Annual revenue (FCFA)", "Standard", "Reduced"
    );
    for bracket in schedule.brackets() {
        let reduced = schedule.resolve(bracket.min_revenue, true).amount;
        println!(
            "{:<6} {:<30} {:>12} {:>12}",
            bracket.tax_class,
            bracket.range_label(),
            bracket.standard_amount,
            reduced,
        );
    }
    println!(
        "Revenue at or above {} is outside the schedule (hors barème).",
        schedule.ceiling()
    );
}
