//! Market data source interface and the fetch-then-normalize helpers.

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use serde_json::Value;
use tracing::debug;

use crate::error::{DataError, FetchError, ScreenerError};
use crate::models::candle::{CandleSeries, DailyRecord, FieldSet};
use crate::services::normalizer;

/// Minimum look-back used when no start date is given.
const MIN_LOOKBACK_DAYS: i64 = 90;
/// Calendar days padding on top of `limit * 1.5`.
const LOOKBACK_BUFFER_DAYS: i64 = 30;

/// Request for historical daily candles.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleQuery {
    pub symbol: String,
    pub limit: usize,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub fields: FieldSet,
}

impl CandleQuery {
    pub fn new(symbol: impl Into<String>, limit: usize) -> Self {
        Self {
            symbol: symbol.into(),
            limit,
            from: None,
            to: None,
            fields: FieldSet::default(),
        }
    }

    pub fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn with_fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }

    /// Concrete date range, filling gaps relative to `today`.
    ///
    /// A trading day is roughly 1.5 calendar days once weekends and
    /// holidays are counted.
    pub fn resolve_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let to = self.to.unwrap_or(today);
        let from = self.from.unwrap_or_else(|| {
            let scaled = (self.limit as f64 * 1.5) as i64 + LOOKBACK_BUFFER_DAYS;
            let days_back = MIN_LOOKBACK_DAYS.max(scaled);
            to - Duration::days(days_back)
        });
        (from, to)
    }

    /// Range resolved against the local calendar date.
    pub fn resolved_range(&self) -> (NaiveDate, NaiveDate) {
        self.resolve_range(Local::now().date_naive())
    }
}

/// External provider of historical candles.
///
/// Implementations return the raw response; callers normalize it through
/// [`fetch_records`] so no downstream code sees the response shape.
#[async_trait]
pub trait CandleSource: Send + Sync {
    async fn fetch_candles(&self, query: &CandleQuery) -> Result<Value, FetchError>;
}

#[async_trait]
impl<T: CandleSource + ?Sized> CandleSource for std::sync::Arc<T> {
    async fn fetch_candles(&self, query: &CandleQuery) -> Result<Value, FetchError> {
        (**self).fetch_candles(query).await
    }
}

/// Fetch, normalize, and keep the most recent `query.limit` records.
pub async fn fetch_records<S>(
    source: &S,
    query: &CandleQuery,
) -> Result<Vec<DailyRecord>, ScreenerError>
where
    S: CandleSource + ?Sized,
{
    let raw = source.fetch_candles(query).await?;
    let mut records = normalizer::normalize(&raw, &query.fields)?;
    if records.len() > query.limit {
        records.drain(..records.len() - query.limit);
    }
    debug!(symbol = %query.symbol, records = records.len(), "Fetched candle records");
    Ok(records)
}

/// Fetch and build a validated series; no data is a `DataError::EmptySeries`.
pub async fn fetch_series<S>(source: &S, query: &CandleQuery) -> Result<CandleSeries, ScreenerError>
where
    S: CandleSource + ?Sized,
{
    let records = fetch_records(source, query).await?;
    if records.is_empty() {
        return Err(DataError::EmptySeries.into());
    }
    Ok(CandleSeries::from_records(&records)?)
}
