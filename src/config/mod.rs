//! Runtime configuration loaded from the environment (and `.env`).

use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_FUGLE_BASE_URL: &str = "https://api.fugle.tw/marketdata/v1.0";

/// Current deployment environment (`ENVIRONMENT`), `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|v| v.trim().to_ascii_lowercase())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FugleConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FugleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_FUGLE_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Watchlist scan defaults
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub fetch_limit: usize,
    pub pacing_delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            fetch_limit: 35,
            pacing_delay: Duration::from_millis(200),
        }
    }
}

/// Composite scorer policy knobs
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Points for RSI in [30, 40) and [70, 80], bands with no agreed score.
    pub neutral_rsi_points: u32,
    pub fetch_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            neutral_rsi_points: 0,
            fetch_limit: 120,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: String,
    pub fugle: FugleConfig,
    pub scan: ScanConfig,
    pub scoring: ScoringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            fugle: FugleConfig::default(),
            scan: ScanConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Config {
    /// Build from process environment variables. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let fugle = FugleConfig {
            api_key: get("FUGLE_API_KEY"),
            base_url: get("FUGLE_BASE_URL").unwrap_or(defaults.fugle.base_url),
            timeout_secs: parse_or(&get, "FUGLE_TIMEOUT_SECS", defaults.fugle.timeout_secs),
        };

        let scan = ScanConfig {
            fetch_limit: parse_or(&get, "SCAN_FETCH_LIMIT", defaults.scan.fetch_limit),
            pacing_delay: Duration::from_millis(parse_or(
                &get,
                "SCAN_PACING_MS",
                defaults.scan.pacing_delay.as_millis() as u64,
            )),
        };

        let scoring = ScoringConfig {
            neutral_rsi_points: parse_or(
                &get,
                "SCORE_NEUTRAL_RSI_POINTS",
                defaults.scoring.neutral_rsi_points,
            ),
            fetch_limit: parse_or(&get, "SCORE_FETCH_LIMIT", defaults.scoring.fetch_limit),
        };

        Self {
            environment: get("ENVIRONMENT")
                .map(|v| v.to_ascii_lowercase())
                .unwrap_or(defaults.environment),
            fugle,
            scan,
            scoring,
        }
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Invalid config value, using default");
            default
        }),
    }
}
