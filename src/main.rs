use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::{Asset, PortfolioMetrics};
use engine::Engine;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Quadrant allocation pipeline.
fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Enumerate(args) => handle_enumerate(args)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Evaluates every discrete portfolio allocation over five asset classes
/// against one year of daily price history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: align, enumerate, evaluate, persist.
    Run(RunArgs),
    /// Only enumerate the allocation set and persist the allocation table.
    Enumerate(EnumerateArgs),
}

#[derive(Parser)]
struct RunArgs {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// How many rows of the metrics table to preview after the run.
    #[arg(long, default_value_t = 10)]
    preview: usize,
}

#[derive(Parser)]
struct EnumerateArgs {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

/// Handles the orchestration of a full pipeline run.
fn handle_run(args: RunArgs) -> anyhow::Result<()> {
    let config = configuration::load_config_from(&args.config)?;
    println!(
        "Evaluating allocations over {} to {}",
        config.window.start_date, config.window.end_date
    );

    let outcome = Engine::new(config).run()?;

    println!(
        "Wrote {} metric rows to {} (allocations in {})",
        outcome.metrics.len(),
        outcome.metrics_path.display(),
        outcome.allocations_path.display()
    );

    if args.preview > 0 {
        println!("{}", preview_table(&outcome.metrics, args.preview));
    }
    Ok(())
}

/// Handles the standalone allocation enumeration command.
fn handle_enumerate(args: EnumerateArgs) -> anyhow::Result<()> {
    let config = configuration::load_config_from(&args.config)?;

    let allocations = allocator::generate_allocations(&config.grid)?;
    dataset::write_allocations(&config.output.allocations, &allocations)?;

    println!(
        "Wrote {} allocations to {}",
        allocations.len(),
        config.output.allocations.display()
    );
    Ok(())
}

/// Renders the head of the metrics table for a quick visual check.
fn preview_table(metrics: &[PortfolioMetrics], rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(
        Asset::ALL
            .iter()
            .map(|asset| asset.code().to_string())
            .chain(["RETURN".to_string(), "VOLAT".to_string()]),
    );

    for record in metrics.iter().take(rows) {
        table.add_row(
            record
                .allocation
                .weights()
                .iter()
                .map(|weight| weight.to_string())
                .chain([
                    record.return_pct.round_dp(4).to_string(),
                    record.volatility_pct.round_dp(4).to_string(),
                ]),
        );
    }
    table
}
