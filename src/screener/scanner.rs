//! Watchlist scanner: fetch and evaluate one symbol at a time.
//!
//! Symbols are processed in order with a fixed pause between successive
//! fetches. A failing symbol is recorded in the result set and the scan
//! moves on.

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::error::{DataError, ScreenerError};
use crate::models::candle::CandleSeries;
use crate::models::scan::{FailureKind, ScanFailure, ScanResultSet};
use crate::models::strategy::{StrategyMatch, StrategyParams};
use crate::services::market_data::{fetch_records, CandleQuery, CandleSource};
use crate::strategies;

enum Outcome {
    Matched(StrategyMatch),
    NoMatch,
}

pub struct WatchlistScanner<S> {
    source: S,
    fetch_limit: usize,
    pacing_delay: Duration,
}

impl<S: CandleSource> WatchlistScanner<S> {
    pub fn new(source: S, fetch_limit: usize, pacing_delay: Duration) -> Self {
        Self {
            source,
            fetch_limit,
            pacing_delay,
        }
    }

    pub fn from_config(source: S, config: &ScanConfig) -> Self {
        Self::new(source, config.fetch_limit, config.pacing_delay)
    }

    pub fn fetch_limit(&self) -> usize {
        self.fetch_limit
    }

    pub fn pacing_delay(&self) -> Duration {
        self.pacing_delay
    }

    pub async fn scan(&self, symbols: &[String], params: &StrategyParams) -> ScanResultSet {
        self.scan_with_progress(symbols, params, |_, _, _| {}).await
    }

    /// Scan and report `(index, total, symbol)` before each symbol.
    pub async fn scan_with_progress<F>(
        &self,
        symbols: &[String],
        params: &StrategyParams,
        mut on_progress: F,
    ) -> ScanResultSet
    where
        F: FnMut(usize, usize, &str),
    {
        let total = symbols.len();
        let strategy = params.kind();
        info!(
            strategy = %strategy,
            symbols = total,
            limit = self.fetch_limit,
            "Starting watchlist scan"
        );

        let mut results = ScanResultSet::new();
        for (index, symbol) in symbols.iter().enumerate() {
            if index > 0 && !self.pacing_delay.is_zero() {
                tokio::time::sleep(self.pacing_delay).await;
            }
            on_progress(index, total, symbol);

            match self.evaluate_symbol(symbol, params).await {
                Ok(Outcome::Matched(found)) => {
                    debug!(symbol = %symbol, strategy = %strategy, "Strategy matched");
                    results.matches.insert(symbol.clone(), found);
                }
                Ok(Outcome::NoMatch) => results.no_match.push(symbol.clone()),
                Err(failure) => {
                    warn!(
                        symbol = %symbol,
                        kind = ?failure.kind,
                        reason = %failure.reason,
                        "Symbol skipped"
                    );
                    results.errors.insert(symbol.clone(), failure);
                }
            }
        }

        info!(
            strategy = %strategy,
            matches = results.matches.len(),
            no_match = results.no_match.len(),
            errors = results.errors.len(),
            "Watchlist scan finished"
        );
        results
    }

    async fn evaluate_symbol(
        &self,
        symbol: &str,
        params: &StrategyParams,
    ) -> Result<Outcome, ScanFailure> {
        let query = CandleQuery::new(symbol, self.fetch_limit);
        let records = fetch_records(&self.source, &query).await.map_err(failure_from)?;
        if records.is_empty() {
            return Err(ScanFailure {
                kind: FailureKind::NoData,
                reason: "no data".to_string(),
            });
        }

        let series = CandleSeries::from_records(&records).map_err(data_failure)?;
        match strategies::evaluate(&series, params).map_err(data_failure)? {
            Some(found) => Ok(Outcome::Matched(found)),
            None => Ok(Outcome::NoMatch),
        }
    }
}

fn failure_from(err: ScreenerError) -> ScanFailure {
    match err {
        ScreenerError::Fetch(e) => ScanFailure {
            kind: FailureKind::Fetch,
            reason: e.to_string(),
        },
        ScreenerError::Data(e) => data_failure(e),
    }
}

fn data_failure(err: DataError) -> ScanFailure {
    ScanFailure {
        kind: FailureKind::Data,
        reason: err.to_string(),
    }
}
