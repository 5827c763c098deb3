use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::error::{IndicatorError, Result};
use crate::common::time::date_of_millis;

/// One OHLC bar. `timestamp` is milliseconds since the epoch, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }

    /// Build a candle from an upstream `[timestamp_ms, open, high, low, close]` row.
    pub fn from_row(row: &[f64]) -> Result<Self> {
        match *row {
            [ts, open, high, low, close] => Ok(Self::new(millis(ts)?, open, high, low, close)),
            _ => Err(IndicatorError::Format(format!(
                "OHLC row must have 5 elements, got {}",
                row.len()
            ))),
        }
    }

    /// A bar with no high/low range.
    pub fn is_degenerate(&self) -> bool {
        self.high == self.low
    }

    /// Balance of Power of this bar, `None` when it has no range.
    pub fn bop(&self) -> Option<f64> {
        if self.is_degenerate() {
            None
        } else {
            Some((self.close - self.open) / (self.high - self.low))
        }
    }

    pub fn date(&self) -> Result<NaiveDate> {
        date_of_millis(self.timestamp)
    }
}

/// Convert a JSON-number timestamp to integral milliseconds.
pub(crate) fn millis(ts: f64) -> Result<i64> {
    if !ts.is_finite() || ts.fract() != 0.0 || ts.abs() > i64::MAX as f64 {
        return Err(IndicatorError::Format(format!(
            "timestamp {} is not an integral millisecond value",
            ts
        )));
    }
    Ok(ts as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bop() {
        let c = Candle::new(0, 1.0, 2.0, 1.0, 1.5);
        assert_eq!(c.bop(), Some(0.5));

        let down = Candle::new(0, 10.0, 12.0, 8.0, 9.0);
        assert_eq!(down.bop(), Some(-0.25));
    }

    #[test]
    fn test_degenerate() {
        let c = Candle::new(0, 5.0, 5.0, 5.0, 5.0);
        assert!(c.is_degenerate());
        assert_eq!(c.bop(), None);
    }

    #[test]
    fn test_from_row() {
        let c = Candle::from_row(&[1_709_251_200_000.0, 1.0, 2.0, 0.5, 1.5]).unwrap();
        assert_eq!(c.timestamp, 1_709_251_200_000);
        assert_eq!(c.low, 0.5);

        assert!(matches!(
            Candle::from_row(&[1.0, 2.0, 3.0]),
            Err(IndicatorError::Format(_))
        ));
        assert!(matches!(
            Candle::from_row(&[1.5, 1.0, 2.0, 0.5, 1.5]),
            Err(IndicatorError::Format(_))
        ));
    }
}
