use crate::enums::Asset;
use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inclusive calendar window the whole analysis runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Window {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, CoreError> {
        if end_date < start_date {
            return Err(CoreError::InvalidInput(
                "window".to_string(),
                format!("end date {} precedes start date {}", end_date, start_date),
            ));
        }
        Ok(Self { start_date, end_date })
    }

    /// The number of calendar days in the window, both endpoints included.
    pub fn num_days(&self) -> usize {
        (self.end_date - self.start_date).num_days() as usize + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Iterates every calendar date in the window in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start_date.iter_days().take(self.num_days())
    }
}

/// A single record as loaded from a harvester price file, before alignment.
///
/// The price may be absent (missing marker in the source file). The daily
/// change percentage is carried through from the source but plays no part in
/// the metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub date: NaiveDate,
    pub price: Option<Decimal>,
    pub change_pct: Option<Decimal>,
}

/// An unaligned price series: ordered by whatever order the source file used,
/// possibly with calendar gaps and unknown prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    pub points: Vec<RawPoint>,
}

impl RawSeries {
    pub fn new(points: Vec<RawPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A fully aligned daily price series: exactly one known price per calendar
/// day of its window, stored densely so date lookup is an offset computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    start_date: NaiveDate,
    prices: Vec<Decimal>,
}

impl DailySeries {
    pub fn new(start_date: NaiveDate, prices: Vec<Decimal>) -> Result<Self, CoreError> {
        if prices.is_empty() {
            return Err(CoreError::InvalidInput(
                "daily series".to_string(),
                "must contain at least one price".to_string(),
            ));
        }
        Ok(Self { start_date, prices })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        // len >= 1 is guaranteed by the constructor.
        self.start_date + chrono::Duration::days(self.prices.len() as i64 - 1)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// The price on the given date, if the date falls inside the series.
    pub fn price_on(&self, date: NaiveDate) -> Option<Decimal> {
        let offset = (date - self.start_date).num_days();
        if offset < 0 {
            return None;
        }
        self.prices.get(offset as usize).copied()
    }

    /// The dense day-ordered price slice, one entry per calendar day.
    pub fn prices(&self) -> &[Decimal] {
        &self.prices
    }
}

/// A total mapping from every `Asset` to its aligned series.
///
/// Replaces stringly-keyed lookups with an exhaustive, typed table.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    series: [DailySeries; Asset::COUNT],
}

impl SeriesSet {
    pub fn new(series: [DailySeries; Asset::COUNT]) -> Self {
        Self { series }
    }

    /// Builds the set from a vector ordered like `Asset::ALL`.
    pub fn from_vec(series: Vec<DailySeries>) -> Result<Self, CoreError> {
        let len = series.len();
        let series: [DailySeries; Asset::COUNT] = series.try_into().map_err(|_| {
            CoreError::InvalidInput(
                "series set".to_string(),
                format!("expected {} series, got {}", Asset::COUNT, len),
            )
        })?;
        Ok(Self { series })
    }

    pub fn get(&self, asset: Asset) -> &DailySeries {
        &self.series[asset.index()]
    }
}

/// A candidate portfolio: one integer percentage weight per asset, in
/// `Asset::ALL` order. The enumerator guarantees the weights are multiples of
/// the grid step and sum to the grid target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Allocation {
    weights: [u32; Asset::COUNT],
}

impl Allocation {
    pub fn new(weights: [u32; Asset::COUNT]) -> Self {
        Self { weights }
    }

    pub fn weight(&self, asset: Asset) -> u32 {
        self.weights[asset.index()]
    }

    pub fn weights(&self) -> &[u32; Asset::COUNT] {
        &self.weights
    }

    /// The sum of all weights.
    pub fn total(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Whether the given asset carries a non-zero weight.
    pub fn is_active(&self, asset: Asset) -> bool {
        self.weight(asset) > 0
    }
}

/// The computed performance record for one allocation. Immutable once built;
/// one row of the persisted metrics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub allocation: Allocation,
    /// Window return, in percent.
    pub return_pct: Decimal,
    /// Dispersion of the weighted daily value series, in percent.
    pub volatility_pct: Decimal,
}
