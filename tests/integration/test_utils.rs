use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use tokio::time::Instant;
use twstock::error::FetchError;
use twstock::services::market_data::{CandleQuery, CandleSource};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";

/// `count` daily rows starting 2024-01-01, close moving by `step` per day.
pub fn candle_rows(count: usize, base: f64, step: f64) -> Vec<Value> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let close = base + step * i as f64;
            json!({
                "date": (start + Duration::days(i as i64)).format("%Y-%m-%d").to_string(),
                "open": close,
                "high": close + 1.0,
                "low": close - 1.0,
                "close": close,
                "volume": 1000
            })
        })
        .collect()
}

/// In-memory candle source with canned responses per symbol.
#[allow(dead_code)]
pub struct StubSource {
    responses: HashMap<String, Result<Value, FetchError>>,
    calls: Mutex<Vec<(String, Instant)>>,
}

#[allow(dead_code)]
impl StubSource {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, symbol: &str, response: Result<Value, FetchError>) -> Self {
        self.responses.insert(symbol.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<(String, Instant)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CandleSource for StubSource {
    async fn fetch_candles(&self, query: &CandleQuery) -> Result<Value, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.symbol.clone(), Instant::now()));
        self.responses
            .get(&query.symbol)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::SymbolNotFound(query.symbol.clone())))
    }
}

#[allow(dead_code)]
pub async fn mock_fugle_candles(server: &MockServer, symbol: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/stock/historical/candles/{}", symbol)))
        .and(header("X-API-KEY", TEST_API_KEY))
        .and(query_param("fields", "open,high,low,close,volume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub async fn mock_fugle_status(server: &MockServer, symbol: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/stock/historical/candles/{}", symbol)))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
        .mount(server)
        .await;
}
