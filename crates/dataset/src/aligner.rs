use crate::error::DatasetError;
use core_types::{DailySeries, RawSeries, Window};
use rust_decimal::Decimal;
use tracing::debug;

/// Aligns a raw price series to the full daily calendar of the window.
///
/// Records outside the window are discarded. Every calendar day absent from
/// the input becomes an unknown slot, which is then resolved by forward-fill
/// (last known price carries forward) followed by backward-fill (the first
/// known price covers any leading unknowns, which forward-fill cannot reach).
///
/// Guarantees on the output: exactly one price per calendar day of the
/// window, no unknowns remain, and every originally-known price is preserved
/// unchanged at its date.
pub fn align(series: &RawSeries, window: &Window) -> Result<DailySeries, DatasetError> {
    let mut slots: Vec<Option<Decimal>> = vec![None; window.num_days()];
    let mut known = 0usize;

    for point in &series.points {
        if !window.contains(point.date) {
            continue;
        }
        let offset = (point.date - window.start_date).num_days() as usize;
        if let Some(price) = point.price {
            if slots[offset].is_some() {
                return Err(DatasetError::DuplicateDate(point.date));
            }
            slots[offset] = Some(price);
            known += 1;
        }
    }

    if known == 0 {
        return Err(DatasetError::EmptySeries);
    }
    debug!(
        known,
        missing = slots.len() - known,
        "aligning series to calendar"
    );

    // Forward-fill: propagate the last known price into each unknown slot.
    let mut last_known: Option<Decimal> = None;
    for slot in slots.iter_mut() {
        match slot {
            Some(price) => last_known = Some(*price),
            None => *slot = last_known,
        }
    }

    // Backward-fill: only leading slots can still be unknown at this point.
    let first_known = slots
        .iter()
        .find_map(|slot| *slot)
        .ok_or(DatasetError::EmptySeries)?;
    let prices: Vec<Decimal> = slots
        .into_iter()
        .map(|slot| slot.unwrap_or(first_known))
        .collect();

    Ok(DailySeries::new(window.start_date, prices)?)
}
