use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::common::enums::Pressure;
use crate::common::error::{IndicatorError, Result};
use crate::kline::candle::Candle;

/// Mean Balance of Power per UTC calendar date, iterated in ascending date order.
///
/// Never empty: a computation with no usable candle is an
/// [`IndicatorError::EmptyResult`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct BopResult {
    daily: BTreeMap<NaiveDate, f64>,
}

#[allow(clippy::len_without_is_empty)]
impl BopResult {
    pub fn get(&self, date: &NaiveDate) -> Option<f64> {
        self.daily.get(date).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &f64)> {
        self.daily.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.daily.keys()
    }

    pub fn pressure(&self, date: &NaiveDate) -> Option<Pressure> {
        self.get(date).map(Pressure::of)
    }

    pub fn len(&self) -> usize {
        self.daily.len()
    }
}

#[derive(Debug, Default)]
struct DailySum {
    sum: f64,
    count: usize,
}

/// Average the BOP of every candle with a non-zero range, grouped by UTC date.
pub fn compute_bop(candles: &[Candle]) -> Result<BopResult> {
    let mut buckets: BTreeMap<NaiveDate, DailySum> = BTreeMap::new();
    let mut skipped = 0usize;

    for candle in candles {
        let Some(bop) = candle.bop() else {
            skipped += 1;
            continue;
        };
        let bucket = buckets.entry(candle.date()?).or_default();
        bucket.sum += bop;
        bucket.count += 1;
    }

    tracing::debug!(
        candles = candles.len(),
        skipped,
        dates = buckets.len(),
        "computed BOP"
    );

    if buckets.is_empty() {
        return Err(IndicatorError::EmptyResult);
    }

    let daily = buckets
        .into_iter()
        .map(|(date, b)| (date, b.sum / b.count as f64))
        .collect();
    Ok(BopResult { daily })
}
