//! Daily OHLCV records and the validated series every indicator consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Field names understood by the market-data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Open,
    High,
    Low,
    Close,
    Volume,
    Turnover,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Open => "open",
            Field::High => "high",
            Field::Low => "low",
            Field::Close => "close",
            Field::Volume => "volume",
            Field::Turnover => "turnover",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Field::Open),
            "high" => Ok(Field::High),
            "low" => Ok(Field::Low),
            "close" => Ok(Field::Close),
            "volume" => Ok(Field::Volume),
            "turnover" => Ok(Field::Turnover),
            other => Err(DataError::InvalidValue {
                field: "fields".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Ordered, de-duplicated list of requested fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet(Vec<Field>);

impl FieldSet {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut out = Vec::new();
        for field in fields {
            if !out.contains(&field) {
                out.push(field);
            }
        }
        Self(out)
    }

    /// Parse a comma-separated list such as `"open,high,low,close,volume"`.
    pub fn parse(list: &str) -> Result<Self, DataError> {
        let fields = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(Field::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(fields))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    /// Comma-separated form sent to the data source.
    pub fn to_query(&self) -> String {
        self.0
            .iter()
            .map(Field::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new([Field::Open, Field::High, Field::Low, Field::Close, Field::Volume])
    }
}

/// One trading day as returned by the normalizer.
///
/// Only requested fields are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnover: Option<f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close: None,
            volume: None,
            turnover: None,
        }
    }

    /// Convert into a fully-populated candle; `index` is used in the error.
    pub fn to_candle(&self, index: usize) -> Result<Candle, DataError> {
        let missing = |field: Field| DataError::MissingField {
            field: field.to_string(),
            index,
        };
        Ok(Candle {
            date: self.date,
            open: self.open.ok_or_else(|| missing(Field::Open))?,
            high: self.high.ok_or_else(|| missing(Field::High))?,
            low: self.low.ok_or_else(|| missing(Field::Low))?,
            close: self.close.ok_or_else(|| missing(Field::Close))?,
            volume: self.volume.ok_or_else(|| missing(Field::Volume))?,
        })
    }
}

/// Fully-populated daily bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Candle {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// High minus low.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Distance from the lower end of the real body down to the low.
    pub fn lower_shadow(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    /// Prices must be finite and positive, with the body inside `[low, high]`.
    pub fn validate(&self) -> Result<(), DataError> {
        let invalid = |field: Field, value: f64| DataError::InvalidValue {
            field: format!("{} on {}", field, self.date),
            value: value.to_string(),
        };
        for (field, value) in [
            (Field::Open, self.open),
            (Field::High, self.high),
            (Field::Low, self.low),
            (Field::Close, self.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, value));
            }
        }
        if self.high < self.open.max(self.close) {
            return Err(invalid(Field::High, self.high));
        }
        if self.low > self.open.min(self.close) {
            return Err(invalid(Field::Low, self.low));
        }
        Ok(())
    }
}

/// Non-empty sequence of candles, strictly ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new(candles: Vec<Candle>) -> Result<Self, DataError> {
        if candles.is_empty() {
            return Err(DataError::EmptySeries);
        }
        for candle in &candles {
            candle.validate()?;
        }
        for (index, pair) in candles.windows(2).enumerate() {
            if pair[1].date == pair[0].date {
                return Err(DataError::DuplicateDate(pair[1].date));
            }
            if pair[1].date < pair[0].date {
                return Err(DataError::Unordered { index: index + 1 });
            }
        }
        Ok(Self { candles })
    }

    /// Build from normalizer output; every record must carry full OHLCV.
    pub fn from_records(records: &[DailyRecord]) -> Result<Self, DataError> {
        let candles = records
            .iter()
            .enumerate()
            .map(|(i, r)| r.to_candle(i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(candles)
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn last(&self) -> &Candle {
        // Non-empty by construction.
        &self.candles[self.candles.len() - 1]
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.low).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.volume as f64).collect()
    }

    /// Most recent `n` candles, clamped to `1..=len`.
    ///
    /// A series is never empty, so `tail(0)` yields the latest candle alone.
    pub fn tail(&self, n: usize) -> CandleSeries {
        let n = n.max(1).min(self.candles.len());
        CandleSeries {
            candles: self.candles[self.candles.len() - n..].to_vec(),
        }
    }

    /// Fail with `InsufficientHistory` when shorter than `required`.
    pub fn require(&self, required: usize, window: &str) -> Result<(), DataError> {
        if self.candles.len() < required {
            return Err(DataError::insufficient(required, self.candles.len(), window));
        }
        Ok(())
    }
}
