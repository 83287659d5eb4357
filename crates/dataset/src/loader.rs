use crate::error::DatasetError;
use chrono::NaiveDate;
use core_types::{RawPoint, RawSeries};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Date layouts the harvester is known to emit: ISO, and the exchange site's
/// export format (e.g. "Dec 31, 2020").
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%b %d, %Y"];

/// One row of a harvester price file as it appears on disk.
///
/// Only `Date`, `Price` and `Change %` are mapped; the remaining columns
/// (`Open`, `High`, `Low`, the unnamed index) are dropped by deserialization.
#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Change %", default)]
    change_pct: Option<String>,
}

/// Reads one asset's price history from a harvester CSV into a `RawSeries`.
///
/// No alignment happens here: rows keep the file order, calendar gaps and
/// missing price markers survive into the returned series.
pub fn load_price_history(path: &Path) -> Result<RawSeries, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut points = Vec::new();

    for row in reader.deserialize::<PriceRow>() {
        let row = row?;
        let point = RawPoint {
            date: parse_date(&row.date)?,
            price: parse_price(&row.price)?,
            change_pct: parse_change(row.change_pct.as_deref())?,
        };
        points.push(point);
    }

    debug!(path = %path.display(), rows = points.len(), "loaded price history");
    Ok(RawSeries::new(points))
}

fn parse_date(value: &str) -> Result<NaiveDate, DatasetError> {
    let trimmed = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(DatasetError::InvalidDate(value.to_string()))
}

/// Parses a price cell. Empty cells and "-" are missing markers; thousands
/// separators are accepted.
fn parse_price(value: &str) -> Result<Option<Decimal>, DatasetError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(None);
    }
    let normalized = trimmed.replace(',', "");
    let price = Decimal::from_str(&normalized)
        .map_err(|_| DatasetError::InvalidPrice(value.to_string()))?;
    if price.is_sign_negative() {
        return Err(DatasetError::InvalidPrice(value.to_string()));
    }
    Ok(Some(price))
}

/// Parses a `Change %` cell, stripping the trailing percent sign.
fn parse_change(value: Option<&str>) -> Result<Option<Decimal>, DatasetError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(None);
    }
    let stripped = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let change = Decimal::from_str(stripped)
        .map_err(|_| DatasetError::InvalidChange(value.to_string()))?;
    Ok(Some(change))
}
