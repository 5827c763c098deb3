use strum_macros::{Display, EnumString};

/// Error codes for the indicator system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Parameter and config errors (0-99)
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 5,
    #[strum(serialize = "CONFIG_ERROR")]
    ConfigError = 17,
    #[strum(serialize = "SRC_DATA_FORMAT_ERROR")]
    SrcDataFormatError = 18,

    // Data availability errors (200-299)
    #[strum(serialize = "NO_DATA")]
    NoData = 210,
    #[strum(serialize = "INSUFFICIENT_DATA")]
    InsufficientData = 213,

    // I/O errors (300-399)
    #[strum(serialize = "IO_ERROR")]
    IoError = 301,
}

impl ErrCode {
    /// Data availability errors are recoverable: the caller shows a
    /// "not enough data" message instead of failing.
    pub fn is_no_data(&self) -> bool {
        let code = *self as i32;
        (200..300).contains(&code)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndicatorError>;

#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    /// Fewer prices than one full smoothing window needs.
    #[error("insufficient data: need at least {needed} prices, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// No candle with a non-zero high/low range.
    #[error("no usable data: every candle is degenerate or the input is empty")]
    EmptyResult,

    #[error("invalid RSI period {0}: must be at least 1")]
    InvalidPeriod(usize),

    /// Upstream payload has the wrong shape.
    #[error("malformed source data: {0}")]
    Format(String),

    #[error("config error on `{key}`: {msg}")]
    Config { key: String, msg: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IndicatorError {
    pub fn config(key: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            msg: msg.into(),
        }
    }

    pub fn code(&self) -> ErrCode {
        match self {
            Self::InsufficientData { .. } => ErrCode::InsufficientData,
            Self::EmptyResult => ErrCode::NoData,
            Self::InvalidPeriod(_) => ErrCode::ParaError,
            Self::Config { .. } => ErrCode::ConfigError,
            Self::Format(_) | Self::Json(_) | Self::Csv(_) => ErrCode::SrcDataFormatError,
            Self::Io(_) => ErrCode::IoError,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.code().is_no_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_no_data_codes() {
        assert!(ErrCode::NoData.is_no_data());
        assert!(ErrCode::InsufficientData.is_no_data());
        assert!(!ErrCode::ParaError.is_no_data());
        assert!(!ErrCode::IoError.is_no_data());
    }

    #[test]
    fn test_errcode_strings() {
        assert_eq!(ErrCode::NoData.to_string(), "NO_DATA");
        assert_eq!(
            ErrCode::from_str("INSUFFICIENT_DATA").unwrap(),
            ErrCode::InsufficientData
        );
    }

    #[test]
    fn test_error_classification() {
        let err = IndicatorError::InsufficientData { needed: 15, got: 3 };
        assert!(err.is_no_data());
        assert_eq!(err.to_string(), "insufficient data: need at least 15 prices, got 3");

        assert!(IndicatorError::EmptyResult.is_no_data());
        assert!(!IndicatorError::InvalidPeriod(0).is_no_data());
        assert_eq!(
            IndicatorError::config("bop_days", "must be 1, 7 or 14").code(),
            ErrCode::ConfigError
        );
    }
}
