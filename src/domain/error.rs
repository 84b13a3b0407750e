//! Domain error types.

/// Top-level error type for dcacompare.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to fetch prices for {symbol}: {reason}")]
    Fetch { symbol: String, reason: String },

    #[error("price series out of order: {reason}")]
    SeriesOrder { reason: String },

    #[error("invalid frequency {value:?} (expected weekly, monthly or quarterly)")]
    InvalidFrequency { value: String },

    #[error("no price data available for {symbol}")]
    NoData { symbol: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CompareError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CompareError::Io(_) => 1,
            CompareError::ConfigParse { .. }
            | CompareError::ConfigMissing { .. }
            | CompareError::ConfigInvalid { .. } => 2,
            CompareError::Fetch { .. } => 3,
            CompareError::SeriesOrder { .. } | CompareError::InvalidFrequency { .. } => 4,
            CompareError::NoData { .. } => 5,
        }
    }
}

impl From<&CompareError> for std::process::ExitCode {
    fn from(err: &CompareError) -> Self {
        std::process::ExitCode::from(err.exit_code())
    }
}
