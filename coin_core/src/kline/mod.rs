pub mod candle;
pub mod series;
