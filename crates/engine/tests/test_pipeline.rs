//! End-to-end test of the batch pipeline over synthetic price files.

use chrono::NaiveDate;
use configuration::{AllocationGrid, Config, DataFiles, OutputFiles};
use core_types::Window;
use engine::Engine;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

fn write_csv(path: &Path, contents: &str) {
    fs::write(path, contents).expect("failed to write fixture CSV");
}

/// Builds a config over a 3-day window with one CSV per asset, exercising the
/// quirks the loader must cope with: export-style dates, thousands
/// separators, a missing calendar day, a missing price marker and the extra
/// columns of a harvester file.
fn fixture_config(dir: &Path) -> Config {
    let stock = dir.join("stock.csv");
    let corporate_bond = dir.join("corporate_bond.csv");
    let gold = dir.join("gold.csv");
    let cash = dir.join("cash.csv");
    let government_bond = dir.join("government_bond.csv");

    // Plain ISO dates, steady rise: 100 -> 110 is a 10% window return.
    write_csv(
        &stock,
        "Date,Price\n2020-01-01,100\n2020-01-02,105\n2020-01-03,110\n",
    );
    // Harvester-shaped file: index column, OHL noise, Change %, export dates.
    write_csv(
        &corporate_bond,
        ",Date,Price,Open,High,Low,Change %\n\
         0,\"Jan 01, 2020\",\"1,000.00\",999,1001,998,0.00%\n\
         1,\"Jan 02, 2020\",\"1,010.00\",1000,1012,999,1.00%\n\
         2,\"Jan 03, 2020\",\"1,020.00\",1010,1022,1009,0.99%\n",
    );
    // The middle calendar day is absent and must be forward-filled.
    write_csv(&gold, "Date,Price\n2020-01-01,50\n2020-01-03,55\n");
    // Flat series.
    write_csv(
        &cash,
        "Date,Price\n2020-01-01,1\n2020-01-02,1\n2020-01-03,1\n",
    );
    // The first price is a missing marker and must be backward-filled.
    write_csv(
        &government_bond,
        "Date,Price\n2020-01-01,-\n2020-01-02,200\n2020-01-03,198\n",
    );

    Config {
        window: Window {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 3).unwrap(),
        },
        grid: AllocationGrid {
            step: 20,
            target: 100,
        },
        data: DataFiles {
            stock,
            corporate_bond,
            gold,
            cash,
            government_bond,
        },
        output: OutputFiles {
            allocations: dir.join("portfolio_allocations.csv"),
            metrics: dir.join("portfolio_metrics.csv"),
        },
    }
}

#[test]
fn full_pipeline_populates_every_row() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = fixture_config(dir.path());
    let outcome = Engine::new(config).run().expect("pipeline run failed");

    // The full allocation set for 5 assets, step 20, target 100.
    assert_eq!(outcome.metrics.len(), 126);

    let lower = Decimal::from(-100);
    let upper = Decimal::from(1000);
    for record in &outcome.metrics {
        assert_eq!(record.allocation.total(), 100);
        assert!(record.return_pct > lower && record.return_pct < upper);
        assert!(record.volatility_pct >= Decimal::ZERO);
    }
}

#[test]
fn metrics_table_round_trips_as_decimals() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = fixture_config(dir.path());
    let metrics_path: PathBuf = config.output.metrics.clone();
    Engine::new(config).run().expect("pipeline run failed");

    let mut reader = csv::Reader::from_path(&metrics_path).expect("missing metrics table");
    let headers = reader.headers().expect("missing header row").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["ST", "CB", "GO", "CA", "PB", "RETURN", "VOLAT"]
    );

    let mut rows = 0;
    for record in reader.records() {
        let record = record.expect("unreadable metrics row");
        // Every cell must parse as a decimal: no blanks, no NaN-like values.
        for cell in record.iter() {
            Decimal::from_str(cell).expect("metrics cell is not a decimal");
        }
        rows += 1;
    }
    assert_eq!(rows, 126);
}

#[test]
fn single_asset_rows_match_their_price_change() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = fixture_config(dir.path());
    let outcome = Engine::new(config).run().expect("pipeline run failed");

    // All-in on stock: 100 -> 110 over the window.
    let all_stock = outcome
        .metrics
        .iter()
        .find(|m| m.allocation.weights() == &[100, 0, 0, 0, 0])
        .expect("all-stock allocation missing");
    assert_eq!(all_stock.return_pct, Decimal::from(10));

    // All-in on cash: a flat series has zero return and zero volatility.
    let all_cash = outcome
        .metrics
        .iter()
        .find(|m| m.allocation.weights() == &[0, 0, 0, 100, 0])
        .expect("all-cash allocation missing");
    assert_eq!(all_cash.return_pct, Decimal::ZERO);
    assert_eq!(all_cash.volatility_pct, Decimal::ZERO);
}

#[test]
fn allocation_table_is_persisted_alongside_the_metrics() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = fixture_config(dir.path());
    let allocations_path = config.output.allocations.clone();
    Engine::new(config).run().expect("pipeline run failed");

    let mut reader = csv::Reader::from_path(&allocations_path).expect("missing allocation table");
    assert_eq!(reader.records().count(), 126);
}

#[test]
fn a_missing_input_file_aborts_the_run() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let mut config = fixture_config(dir.path());
    config.data.gold = dir.path().join("does_not_exist.csv");

    let metrics_path = config.output.metrics.clone();
    assert!(Engine::new(config).run().is_err());
    // No partial metrics table may be left behind.
    assert!(!metrics_path.exists());
}
