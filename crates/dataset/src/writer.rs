use crate::error::DatasetError;
use core_types::{Allocation, Asset, PortfolioMetrics};
use std::path::Path;
use tracing::info;

/// Writes the bare allocation table: one row per allocation, one weight
/// column per asset, in enumeration order.
pub fn write_allocations(path: &Path, allocations: &[Allocation]) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(Asset::ALL.iter().map(|asset| asset.code()))?;
    for allocation in allocations {
        writer.write_record(
            allocation
                .weights()
                .iter()
                .map(|weight| weight.to_string()),
        )?;
    }
    writer.flush().map_err(csv::Error::from)?;

    info!(path = %path.display(), rows = allocations.len(), "wrote allocation table");
    Ok(())
}

/// Writes the metrics table consumed by the visualizer: the weight columns
/// plus `RETURN` and `VOLAT`, both in percent.
pub fn write_metrics(path: &Path, metrics: &[PortfolioMetrics]) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;

    let header = Asset::ALL
        .iter()
        .map(|asset| asset.code().to_string())
        .chain(["RETURN".to_string(), "VOLAT".to_string()]);
    writer.write_record(header)?;

    for record in metrics {
        let row = record
            .allocation
            .weights()
            .iter()
            .map(|weight| weight.to_string())
            .chain([
                record.return_pct.to_string(),
                record.volatility_pct.to_string(),
            ]);
        writer.write_record(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    info!(path = %path.display(), rows = metrics.len(), "wrote metrics table");
    Ok(())
}
