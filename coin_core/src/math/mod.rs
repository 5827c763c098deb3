pub mod bop;
pub mod rsi;
