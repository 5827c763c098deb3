pub mod common;
pub mod config;
pub mod kline;
pub mod math;
pub mod report;

pub use common::enums::{Pressure, RsiZone};
pub use common::error::{IndicatorError, Result};
pub use config::indicator_config::IndicatorConfig;
pub use kline::candle::Candle;
pub use kline::series::PriceSeries;
pub use math::bop::{compute_bop, BopResult};
pub use math::rsi::{classify_rsi, compute_rsi, Rsi};
