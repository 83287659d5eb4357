use crate::error::AnalyticsError;
use core_types::{Allocation, Asset, PortfolioMetrics, SeriesSet, Window};
use rust_decimal::{Decimal, MathematicalOps};

/// A stateless calculator for deriving per-allocation performance metrics
/// from the aligned price series.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: computes the full metrics record for one
    /// allocation.
    ///
    /// # Arguments
    ///
    /// * `allocation` - The candidate portfolio's weight tuple.
    /// * `series` - The aligned daily series for every asset.
    /// * `window` - The analysis window the series are aligned to.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PortfolioMetrics` or an `AnalyticsError`.
    pub fn evaluate(
        &self,
        allocation: &Allocation,
        series: &SeriesSet,
        window: &Window,
    ) -> Result<PortfolioMetrics, AnalyticsError> {
        let return_pct = self.calculate_return(allocation, series, window)?;
        let volatility_pct = self.calculate_volatility(allocation, series)?;

        Ok(PortfolioMetrics {
            allocation: *allocation,
            return_pct,
            volatility_pct,
        })
    }

    /// Window return in percent: weights times the first and last day's
    /// prices, summed over all assets.
    fn calculate_return(
        &self,
        allocation: &Allocation,
        series: &SeriesSet,
        window: &Window,
    ) -> Result<Decimal, AnalyticsError> {
        let mut buy = Decimal::ZERO;
        let mut end = Decimal::ZERO;

        for asset in Asset::ALL {
            let weight = Decimal::from(allocation.weight(asset));
            let daily = series.get(asset);

            let start_price = daily.price_on(window.start_date).ok_or_else(|| {
                AnalyticsError::NotEnoughData(format!("{} has no price on {}", asset, window.start_date))
            })?;
            let end_price = daily.price_on(window.end_date).ok_or_else(|| {
                AnalyticsError::NotEnoughData(format!("{} has no price on {}", asset, window.end_date))
            })?;

            buy += weight * start_price;
            end += weight * end_price;
        }

        // Unreachable while the weights sum to a positive target and prices
        // are non-negative; guarded rather than assumed.
        if buy.is_zero() {
            return Err(AnalyticsError::DivisionByZero("return".to_string()));
        }

        Ok((end - buy) / buy * Decimal::ONE_HUNDRED)
    }

    /// Dispersion of the weighted daily portfolio value, in percent: the
    /// population standard deviation of the daily values divided by their
    /// mean. A zero mean yields zero volatility, not an error.
    ///
    /// Note this divides by the mean of weighted prices rather than using a
    /// return-based measure; the formula is part of the output contract and
    /// is kept as-is.
    fn calculate_volatility(
        &self,
        allocation: &Allocation,
        series: &SeriesSet,
    ) -> Result<Decimal, AnalyticsError> {
        let num_days = series.get(Asset::Stock).len();
        if num_days == 0 {
            return Err(AnalyticsError::NotEnoughData(
                "aligned series are empty".to_string(),
            ));
        }

        // The weighted daily value series. Only assets with a non-zero
        // weight contribute; an allocation with a single active asset still
        // yields one value per day.
        let mut values = vec![Decimal::ZERO; num_days];
        for asset in Asset::ALL {
            if !allocation.is_active(asset) {
                continue;
            }
            let weight = Decimal::from(allocation.weight(asset));
            for (value, price) in values.iter_mut().zip(series.get(asset).prices()) {
                *value += weight * price;
            }
        }

        let count = Decimal::from(values.len());
        let mean = values.iter().sum::<Decimal>() / count;
        if mean.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let variance = values
            .iter()
            .map(|value| (*value - mean) * (*value - mean))
            .sum::<Decimal>()
            / count;

        let std_dev = variance.sqrt().ok_or_else(|| {
            AnalyticsError::InternalError(
                "Failed to calculate square root for variance".to_string(),
            )
        })?;

        Ok(std_dev / mean * Decimal::ONE_HUNDRED)
    }
}
