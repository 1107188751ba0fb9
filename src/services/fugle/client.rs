//! Thin client for the Fugle historical candles endpoint.
//!
//! One GET per query. No retry and no pagination: failures surface to the
//! caller as [`FetchError`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::FugleConfig;
use crate::error::FetchError;
use crate::services::market_data::{CandleQuery, CandleSource};

const API_KEY_HEADER: &str = "X-API-KEY";

pub struct FugleClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FugleClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(FetchError::MissingApiKey);
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &FugleConfig) -> Result<Self, FetchError> {
        let api_key = config.api_key.clone().ok_or(FetchError::MissingApiKey)?;
        Self::new(
            config.base_url.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn candles_url(&self, symbol: &str) -> String {
        format!("{}/stock/historical/candles/{}", self.base_url, symbol)
    }
}

#[async_trait]
impl CandleSource for FugleClient {
    async fn fetch_candles(&self, query: &CandleQuery) -> Result<Value, FetchError> {
        let (from, to) = query.resolved_range();
        let url = self.candles_url(&query.symbol);
        debug!(
            symbol = %query.symbol,
            %from,
            %to,
            fields = %query.fields.to_query(),
            "Requesting historical candles"
        );

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("from", from.format("%Y-%m-%d").to_string()),
                ("to", to.format("%Y-%m-%d").to_string()),
                ("fields", query.fields.to_query()),
            ])
            .send()
            .await?;

        let status = response.status();
        match status {
            s if s.is_success() => Ok(response.json::<Value>().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(FetchError::Unauthorized(status.as_u16()))
            }
            StatusCode::NOT_FOUND => Err(FetchError::SymbolNotFound(query.symbol.clone())),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(FetchError::Http {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
