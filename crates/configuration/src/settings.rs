use core_types::{Asset, Window};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The root configuration structure for the entire pipeline run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The inclusive calendar window the analysis runs over.
    pub window: Window,
    pub grid: AllocationGrid,
    pub data: DataFiles,
    pub output: OutputFiles,
}

/// The discrete weight grid the enumerator walks.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AllocationGrid {
    /// The granularity of each weight, in percent (e.g., 20).
    pub step: u32,
    /// The exact sum every allocation must reach (e.g., 100).
    pub target: u32,
}

/// One harvester price file per asset class.
#[derive(Debug, Clone, Deserialize)]
pub struct DataFiles {
    pub stock: PathBuf,
    pub corporate_bond: PathBuf,
    pub gold: PathBuf,
    pub cash: PathBuf,
    pub government_bond: PathBuf,
}

impl DataFiles {
    /// The input file for the given asset.
    pub fn path_for(&self, asset: Asset) -> &Path {
        match asset {
            Asset::Stock => &self.stock,
            Asset::CorporateBond => &self.corporate_bond,
            Asset::Gold => &self.gold,
            Asset::Cash => &self.cash,
            Asset::GovernmentBond => &self.government_bond,
        }
    }
}

/// The tables produced by a run, consumed by the visualizer.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputFiles {
    /// The bare allocation table (weights only).
    pub allocations: PathBuf,
    /// The metrics table (weights plus RETURN and VOLAT).
    pub metrics: PathBuf,
}
