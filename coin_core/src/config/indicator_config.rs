use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::common::error::{IndicatorError, Result};

pub const BOP_DAY_CHOICES: [u32; 3] = [1, 7, 14];
pub const MAX_RSI_PERIOD: usize = 14;

/// Indicator configuration, passed explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    /// RSI smoothing window, also the number of daily prices requested.
    pub rsi_period: usize,
    /// Candle window for BOP: 1, 7 or 14 days.
    pub bop_days: u32,
    pub vs_currency: String,
    pub usage_log: PathBuf,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            bop_days: 1,
            vs_currency: "usd".to_string(),
            usage_log: PathBuf::from("usage.log"),
        }
    }
}

impl IndicatorConfig {
    pub fn new(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let default = Self::default();

        let config = Self {
            rsi_period: conf.get("rsi_period")?.unwrap_or(default.rsi_period),
            bop_days: conf.get("bop_days")?.unwrap_or(default.bop_days),
            vs_currency: conf.get("vs_currency")?.unwrap_or(default.vs_currency),
            usage_log: conf.get("usage_log")?.unwrap_or(default.usage_log),
        };

        conf.check()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let map: HashMap<String, serde_json::Value> = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), keys = map.len(), "loaded config");
        Self::new(Some(map))
    }

    pub fn validate(&self) -> Result<()> {
        validate_rsi_period(self.rsi_period)?;
        validate_bop_days(self.bop_days)?;
        if self.vs_currency.is_empty() {
            return Err(IndicatorError::config("vs_currency", "must not be empty"));
        }
        Ok(())
    }
}

pub fn validate_rsi_period(period: usize) -> Result<()> {
    if !(1..=MAX_RSI_PERIOD).contains(&period) {
        return Err(IndicatorError::config(
            "rsi_period",
            format!("must be between 1 and {}, got {}", MAX_RSI_PERIOD, period),
        ));
    }
    Ok(())
}

pub fn validate_bop_days(days: u32) -> Result<()> {
    if !BOP_DAY_CHOICES.contains(&days) {
        return Err(IndicatorError::config(
            "bop_days",
            format!("must be one of 1, 7 or 14, got {}", days),
        ));
    }
    Ok(())
}

/// Key/value config that remembers which keys were read, so unknown
/// keys can be reported.
struct ConfigWithCheck {
    conf: HashMap<String, serde_json::Value>,
}

impl ConfigWithCheck {
    fn new(conf: HashMap<String, serde_json::Value>) -> Self {
        Self { conf }
    }

    fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>> {
        match self.conf.remove(key) {
            None => Ok(None),
            Some(v) => serde_json::from_value(v)
                .map(Some)
                .map_err(|e| IndicatorError::config(key, e.to_string())),
        }
    }

    fn check(&self) -> Result<()> {
        let mut unknown: Vec<&str> = self.conf.keys().map(String::as_str).collect();
        if unknown.is_empty() {
            return Ok(());
        }
        unknown.sort_unstable();
        Err(IndicatorError::config(unknown.join(","), "unknown para"))
    }
}
