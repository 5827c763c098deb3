use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::fmt;

use super::error::{IndicatorError, Result};

/// A UTC instant taken from an upstream millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    pub timestamp_ms: i64,
    datetime: DateTime<Utc>,
}

impl Time {
    pub fn from_millis(timestamp_ms: i64) -> Result<Self> {
        // Truncate to whole seconds before building the datetime.
        let secs = timestamp_ms.div_euclid(1000);
        let datetime = Utc.timestamp_opt(secs, 0).single().ok_or_else(|| {
            IndicatorError::Format(format!("timestamp {} ms is out of range", timestamp_ms))
        })?;

        Ok(Self {
            timestamp_ms,
            datetime,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.datetime.date_naive()
    }

    pub fn to_str(&self) -> String {
        self.datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// UTC calendar date of a millisecond timestamp
pub fn date_of_millis(timestamp_ms: i64) -> Result<NaiveDate> {
    Time::from_millis(timestamp_ms).map(|t| t.date())
}
