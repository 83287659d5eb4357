//! The run driver: a single synchronous pass from the harvester's price
//! files to the persisted metrics table.
//!
//! The stages run strictly in sequence — align all five series, enumerate
//! the allocation set, evaluate every allocation, persist — and the first
//! error aborts the run. The metrics table is only written after the full
//! evaluation pass, so a failed run leaves no partial output.

use crate::error::EngineError;
use allocator::generate_allocations;
use analytics::AnalyticsEngine;
use configuration::Config;
use core_types::{Asset, PortfolioMetrics, SeriesSet};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

pub mod error;

/// What a completed run produced, for display by the caller.
#[derive(Debug)]
pub struct RunOutcome {
    pub metrics: Vec<PortfolioMetrics>,
    pub allocations_path: std::path::PathBuf,
    pub metrics_path: std::path::PathBuf,
}

/// The batch engine. Owns the configuration and the analytics calculator for
/// the duration of a run; all series tables live on the stack of `run`.
pub struct Engine {
    config: Config,
    analytics: AnalyticsEngine,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            analytics: AnalyticsEngine::new(),
        }
    }

    /// Executes the full pipeline and returns the computed metrics.
    pub fn run(&self) -> Result<RunOutcome, EngineError> {
        let window = &self.config.window;

        // --- 1. Load and align every asset's series ---
        let mut aligned = Vec::with_capacity(Asset::COUNT);
        for asset in Asset::ALL {
            let path = self.config.data.path_for(asset);
            let raw = dataset::load_price_history(path)?;
            let daily = dataset::align(&raw, window)?;
            info!(
                asset = %asset,
                source_rows = raw.len(),
                aligned_days = daily.len(),
                "aligned price series"
            );
            aligned.push(daily);
        }
        let series = SeriesSet::from_vec(aligned)?;

        // --- 2. Enumerate the allocation set and persist it ---
        let allocations = generate_allocations(&self.config.grid)?;
        info!(count = allocations.len(), "enumerated allocation set");
        dataset::write_allocations(&self.config.output.allocations, &allocations)?;

        // --- 3. Evaluate every allocation ---
        let progress_bar = ProgressBar::new(allocations.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("=>-"),
        );

        let mut metrics = Vec::with_capacity(allocations.len());
        for allocation in &allocations {
            metrics.push(self.analytics.evaluate(allocation, &series, window)?);
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        // --- 4. Persist the metrics table ---
        dataset::write_metrics(&self.config.output.metrics, &metrics)?;
        info!(rows = metrics.len(), "run complete");

        Ok(RunOutcome {
            metrics,
            allocations_path: self.config.output.allocations.clone(),
            metrics_path: self.config.output.metrics.clone(),
        })
    }
}
