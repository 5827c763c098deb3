use std::fmt::Write;

use crate::common::enums::Pressure;
use crate::common::error::IndicatorError;
use crate::math::bop::BopResult;
use crate::math::rsi::classify_rsi;

/// One line per date, oldest first.
pub fn render_bop(name: &str, days: u32, vs_currency: &str, bop: &BopResult) -> String {
    let mut out = format!(
        "Overall Buy/Sell Pressure (BOP) for {} ({}-day OHLC, {}):\n\n",
        name,
        days,
        vs_currency.to_uppercase()
    );
    for (date, value) in bop.iter() {
        let _ = writeln!(
            out,
            "- {}: {:.4} {}",
            date.format("%Y-%m-%d"),
            value,
            Pressure::of(*value)
        );
    }
    out
}

pub fn render_rsi(symbol: &str, days: usize, vs_currency: &str, rsi: f64) -> String {
    let zone = classify_rsi(rsi);
    format!(
        "Relative Strength Index (RSI) for {} (Last {} days, {}):\n\n\
         - RSI: {:.2} {}\n\n\
         Note: RSI is an indicator used to identify momentum strength, used to evaluate \
         whether an asset is overbought (>70) or oversold (<30).\n\
         RSI between 30 and 70 indicates neutral market conditions.\n",
        symbol.to_uppercase(),
        days,
        vs_currency.to_uppercase(),
        rsi,
        zone.interpretation()
    )
}

/// Message for the recoverable "nothing to compute on" errors.
pub fn render_no_data(err: &IndicatorError) -> String {
    match err {
        IndicatorError::InsufficientData { needed, got } => format!(
            "Not enough data: {} prices are needed for this period, only {} available.",
            needed, got
        ),
        IndicatorError::EmptyResult => {
            "No BOP data available: no candle in the window has a price range.".to_string()
        }
        other => format!("Error: {}", other),
    }
}
