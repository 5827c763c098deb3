use crate::common::enums::RsiZone;
use crate::common::error::{IndicatorError, Result};

pub const OVERBOUGHT_THRESHOLD: f64 = 70.0;
pub const OVERSOLD_THRESHOLD: f64 = 30.0;

/// Wilder-smoothed RSI fed one price at a time.
///
/// The first `period` deltas seed the averages with their simple mean;
/// every later delta goes through `avg = (avg * (period - 1) + x) / period`.
/// Prices must arrive in chronological order.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    last_price: Option<f64>,
    seen: usize,
    gain_sum: f64,
    loss_sum: f64,
    avg_gain: f64,
    avg_loss: f64,
}

impl Rsi {
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(IndicatorError::InvalidPeriod(period));
        }
        Ok(Self {
            period,
            last_price: None,
            seen: 0,
            gain_sum: 0.0,
            loss_sum: 0.0,
            avg_gain: 0.0,
            avg_loss: 0.0,
        })
    }

    /// Returns `None` until `period` deltas have been seen.
    pub fn add(&mut self, price: f64) -> Option<f64> {
        let last_price = self.last_price.replace(price)?;
        let change = price - last_price;
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };

        self.seen += 1;
        let n = self.period as f64;
        if self.seen <= self.period {
            self.gain_sum += gain;
            self.loss_sum += loss;
            if self.seen < self.period {
                return None;
            }
            self.avg_gain = self.gain_sum / n;
            self.avg_loss = self.loss_sum / n;
        } else {
            let m = (self.period - 1) as f64;
            self.avg_gain = (self.avg_gain * m + gain) / n;
            self.avg_loss = (self.avg_loss * m + loss) / n;
        }

        Some(self.value())
    }

    fn value(&self) -> f64 {
        if self.avg_loss == 0.0 {
            // No losses at all: pure uptrend, or no movement whatsoever.
            return if self.avg_gain > 0.0 { 100.0 } else { 50.0 };
        }
        let rs = self.avg_gain / self.avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

/// RSI of a full price series, using every price in one ordered pass.
///
/// Fails with [`IndicatorError::InsufficientData`] when fewer than
/// `period + 1` prices are supplied, so a genuine RSI of 0 is never
/// confused with missing data.
pub fn compute_rsi(prices: &[f64], period: usize) -> Result<f64> {
    let mut rsi = Rsi::new(period)?;
    let insufficient = IndicatorError::InsufficientData {
        needed: period.saturating_add(1),
        got: prices.len(),
    };
    if prices.len() <= period {
        return Err(insufficient);
    }

    let value = prices
        .iter()
        .fold(None, |_, &price| rsi.add(price))
        .ok_or(insufficient)?;

    tracing::debug!(period, prices = prices.len(), rsi = value, "computed RSI");
    Ok(value)
}

pub fn classify_rsi(rsi: f64) -> RsiZone {
    if rsi > OVERBOUGHT_THRESHOLD {
        RsiZone::Overbought
    } else if rsi < OVERSOLD_THRESHOLD {
        RsiZone::Oversold
    } else {
        RsiZone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WILDER: [f64; 15] = [
        44.0, 44.5, 44.25, 44.5, 43.75, 44.65, 45.12, 45.34, 45.25, 45.85, 46.35, 46.05, 46.85,
        47.0, 46.5,
    ];

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_insufficient_data() {
        for p in 1..=20 {
            let prices: Vec<f64> = (0..p).map(|i| i as f64).collect();
            assert!(matches!(
                compute_rsi(&prices, p),
                Err(IndicatorError::InsufficientData { needed, got }) if needed == p + 1 && got == p
            ));
        }
        assert!(matches!(
            compute_rsi(&[], 14),
            Err(IndicatorError::InsufficientData { needed: 15, got: 0 })
        ));
    }

    #[test]
    fn test_huge_period() {
        assert!(matches!(
            compute_rsi(&[1.0, 2.0], usize::MAX),
            Err(IndicatorError::InsufficientData { needed: usize::MAX, got: 2 })
        ));
    }

    #[test]
    fn test_zero_period() {
        assert!(matches!(
            compute_rsi(&[1.0, 2.0], 0),
            Err(IndicatorError::InvalidPeriod(0))
        ));
    }

    #[test]
    fn test_monotonic_series() {
        let up: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let down: Vec<f64> = up.iter().rev().copied().collect();
        for p in [1, 5, 14] {
            assert_eq!(compute_rsi(&up, p).unwrap(), 100.0);
            assert_eq!(compute_rsi(&down, p).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_flat_series() {
        let flat = vec![42.0; 20];
        for p in [1, 7, 14, 19] {
            assert_eq!(compute_rsi(&flat, p).unwrap(), 50.0);
        }
    }

    #[test]
    fn test_wilder_reference() {
        let rsi = compute_rsi(&WILDER, 14).unwrap();
        assert!(approx(rsi, 69.90445859872607), "rsi = {}", rsi);
        assert_eq!(classify_rsi(rsi), RsiZone::Neutral);
    }

    #[test]
    fn test_wilder_smoothing_after_seed() {
        let mut prices = WILDER.to_vec();
        prices.extend_from_slice(&[46.25, 46.85, 47.5, 47.9, 47.4]);
        let rsi = compute_rsi(&prices, 14).unwrap();
        assert!(approx(rsi, 69.05862673166187), "rsi = {}", rsi);
    }

    #[test]
    fn test_small_periods() {
        // Equal gain and loss.
        assert_eq!(compute_rsi(&[1.0, 2.0, 1.0], 2).unwrap(), 50.0);
        // Period 1 keeps only the last delta.
        assert_eq!(compute_rsi(&[1.0, 3.0, 2.0, 4.0], 1).unwrap(), 100.0);
        assert_eq!(compute_rsi(&[1.0, 3.0, 4.0, 2.0], 1).unwrap(), 0.0);
    }

    #[test]
    fn test_streaming_matches_batch() {
        let mut rsi = Rsi::new(14).unwrap();
        let values: Vec<Option<f64>> = WILDER.iter().map(|&p| rsi.add(p)).collect();
        assert!(values[..14].iter().all(Option::is_none));
        assert_eq!(values[14], Some(compute_rsi(&WILDER, 14).unwrap()));
    }

    #[test]
    fn test_deterministic() {
        let a = compute_rsi(&WILDER, 9).unwrap();
        let b = compute_rsi(&WILDER, 9).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_rsi(70.0), RsiZone::Neutral);
        assert_eq!(classify_rsi(70.0001), RsiZone::Overbought);
        assert_eq!(classify_rsi(30.0), RsiZone::Neutral);
        assert_eq!(classify_rsi(29.9999), RsiZone::Oversold);
        assert_eq!(classify_rsi(100.0), RsiZone::Overbought);
        assert_eq!(classify_rsi(0.0), RsiZone::Oversold);
    }
}
