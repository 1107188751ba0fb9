//! Error taxonomy shared by every layer of the crate.

use chrono::NaiveDate;
use thiserror::Error;

/// Malformed or insufficient input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("candle series is empty")]
    EmptySeries,

    #[error("candle series is not strictly ascending by date at index {index}")]
    Unordered { index: usize },

    #[error("duplicate trading date {0}")]
    DuplicateDate(NaiveDate),

    #[error("unrecognized candle response shape: {0}")]
    UnrecognizedShape(String),

    #[error("record {index} is missing field '{field}'")]
    MissingField { field: String, index: usize },

    #[error("invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("indicator period must be greater than 0, got {0}")]
    InvalidPeriod(usize),

    #[error("insufficient history for {window}: need {required} records, have {available}")]
    InsufficientHistory {
        required: usize,
        available: usize,
        window: String,
    },
}

impl DataError {
    pub fn insufficient(required: usize, available: usize, window: impl Into<String>) -> Self {
        DataError::InsufficientHistory {
            required,
            available,
            window: window.into(),
        }
    }
}

/// External market-data source failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("FUGLE_API_KEY is not set")]
    MissingApiKey,

    #[error("market data request rejected with status {0} (check the API key)")]
    Unauthorized(u16),

    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("market data request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("market data transport error: {0}")]
    Transport(String),

    #[error("could not decode market data response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// Failure of a single-symbol fetch-and-evaluate operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScreenerError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
