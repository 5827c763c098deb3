use serde::Deserialize;
use std::io::Read;

use super::candle::{millis, Candle};
use crate::common::error::{IndicatorError, Result};

/// Chronological closing prices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries(Vec<f64>);

#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Option<Vec<Vec<f64>>>,
}

#[derive(Debug, Deserialize)]
struct PricePoint {
    #[allow(dead_code)]
    timestamp: i64,
    price: f64,
}

#[allow(clippy::len_without_is_empty)]
impl PriceSeries {
    /// Parse a market-chart payload `{"prices": [[timestamp_ms, price], ...]}`.
    /// Only the price component is kept.
    pub fn from_market_chart(payload: &str) -> Result<Self> {
        let chart: MarketChart = serde_json::from_str(payload)?;
        let rows = chart
            .prices
            .ok_or_else(|| IndicatorError::Format("market chart has no `prices` field".into()))?;
        if rows.is_empty() {
            return Err(IndicatorError::EmptyResult);
        }

        let prices = rows
            .iter()
            .map(|row| match *row.as_slice() {
                [ts, price] => millis(ts).map(|_| price),
                _ => Err(IndicatorError::Format(format!(
                    "price row must have 2 elements, got {}",
                    row.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(points = prices.len(), "parsed market chart");
        Ok(Self(prices))
    }

    /// Read `timestamp,price` CSV rows (with header).
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut prices = Vec::new();
        for result in rdr.deserialize::<PricePoint>() {
            prices.push(result?.price);
        }
        if prices.is_empty() {
            return Err(IndicatorError::EmptyResult);
        }
        Ok(Self(prices))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Parse an OHLC payload: a JSON array of `[timestamp_ms, open, high, low, close]`.
pub fn parse_ohlc_payload(payload: &str) -> Result<Vec<Candle>> {
    let rows: Vec<Vec<f64>> = serde_json::from_str(payload)?;
    if rows.is_empty() {
        return Err(IndicatorError::EmptyResult);
    }

    let candles = rows
        .iter()
        .map(|row| Candle::from_row(row))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(candles = candles.len(), "parsed OHLC payload");
    Ok(candles)
}

/// Read `timestamp,open,high,low,close` CSV rows (with header).
pub fn read_candles_csv<R: Read>(reader: R) -> Result<Vec<Candle>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let candles = rdr
        .deserialize::<Candle>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if candles.is_empty() {
        return Err(IndicatorError::EmptyResult);
    }
    Ok(candles)
}
