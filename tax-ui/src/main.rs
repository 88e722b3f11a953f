use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use tax_core::build_series;
use tax_ui::app::{BatchReport, DEFAULT_CHART_POINTS, TaxSummary, chart_max_income};
use tax_ui::utils::parse_income;
use tax_ui::{csv_export, income_loader, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compare income tax under the old, new and flat regimes (4% cess included).
///
/// Prints the tax owed under each regime and the cheapest one. Chart series
/// (total tax and effective rate against income) can be exported as CSV.
#[derive(Debug, Parser)]
#[command(name = "tax-regimes", version, about)]
struct Cli {
    /// Annual income, e.g. `1200000` or `"1,200,000"`. Zero computes nothing.
    #[arg(required_unless_present = "file")]
    income: Option<String>,

    /// CSV file with an `income` column (and optional `label`) to compare in batch.
    #[arg(short, long, conflicts_with = "income")]
    file: Option<PathBuf>,

    /// Directory to write `income_vs_tax.csv` and `income_vs_effective_rate.csv` into.
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Number of chart samples between zero and the maximum income.
    #[arg(short, long, default_value_t = DEFAULT_CHART_POINTS)]
    points: usize,

    /// Upper end of the chart income axis. Defaults to the income itself.
    #[arg(long)]
    max_income: Option<String>,

    /// Log filter (e.g. `debug` or `warn,tax_core=trace`). Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_batch(path: &Path) -> Result<()> {
    let rows = income_loader::load_from_file(path)
        .with_context(|| format!("Failed to load incomes from: {}", path.display()))?;
    info!(rows = rows.len(), file = %path.display(), "comparing incomes");

    println!("{}", BatchReport::new(&rows));
    Ok(())
}

fn run_single(cli: &Cli, raw_income: &str) -> Result<()> {
    let income =
        parse_income(raw_income).with_context(|| format!("Invalid income: {raw_income}"))?;

    let Some(summary) = TaxSummary::new(income) else {
        info!("income is zero, nothing to compute");
        return Ok(());
    };
    println!("{summary}");

    if let Some(dir) = &cli.export_dir {
        let max_income = match &cli.max_income {
            Some(raw) => {
                parse_income(raw).with_context(|| format!("Invalid maximum income: {raw}"))?
            }
            None => chart_max_income(income),
        };
        debug!(%max_income, points = cli.points, "sampling chart series");

        let points: Vec<_> = build_series(max_income, cli.points).collect();
        let [tax_path, rate_path] = csv_export::export_charts(dir, &points)
            .with_context(|| format!("Failed to export charts to: {}", dir.display()))?;

        println!("Wrote {}", tax_path.display());
        println!("Wrote {}", rate_path.display());
    }

    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    match (&cli.file, &cli.income) {
        (Some(path), _) => run_batch(path),
        (None, Some(raw)) => run_single(&cli, raw),
        (None, None) => anyhow::bail!("either an income or --file is required"),
    }
}
