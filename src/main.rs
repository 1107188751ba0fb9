//! twstock CLI
//!
//! ```bash
//! twstock candles 2330 --limit 120
//! twstock scan consolidation_breakout "2330,2317,2454" --params '{"volume_ratio": 2.0}'
//! twstock score 2330
//! ```

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, warn};

use twstock::config::Config;
use twstock::indicators::overview::{build_overview, overview_fetch_limit, overview_fields};
use twstock::logging;
use twstock::models::strategy::{StrategyKind, StrategyParams};
use twstock::scoring::compute_score_with;
use twstock::screener::{parse_watchlist, WatchlistScanner};
use twstock::services::fugle::FugleClient;
use twstock::services::market_data::{fetch_records, fetch_series, CandleQuery};
use twstock::strategies::{recommended_fetch_limit, StrategyRegistry};

#[derive(Parser)]
#[command(name = "twstock")]
#[command(about = "Technical screening and scoring for Taiwanese equities", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily candles and turnover with MA5/10/20, KD and the MA deduction table
    Candles {
        /// Stock symbol (e.g. 2330)
        symbol: String,

        /// Number of most recent records
        #[arg(short, long, default_value_t = 120)]
        limit: usize,
    },

    /// Run a screening strategy across a comma-separated watchlist
    Scan {
        /// consolidation_breakout, bullish_ma_alignment, volume_surge_bullish, oversold_reversal
        strategy: String,

        /// Symbols, e.g. "2330,2317,2454"
        watchlist: String,

        /// Records fetched per symbol (defaults to what the strategy needs)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Pause between fetches in milliseconds
        #[arg(long)]
        pacing_ms: Option<u64>,

        /// Parameter overrides as a JSON object
        #[arg(short, long)]
        params: Option<String>,
    },

    /// Composite 0-100 buy-signal score for one symbol
    Score {
        /// Stock symbol
        symbol: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::from_env();
    info!(environment = %config.environment, "Starting twstock");

    let client = FugleClient::from_config(&config.fugle)?;

    let output = match cli.command {
        Commands::Candles { symbol, limit } => {
            let query = CandleQuery::new(&symbol, overview_fetch_limit(limit))
                .with_fields(overview_fields());
            let records = fetch_records(&client, &query).await?;
            let overview = build_overview(&records, limit)?;
            json!({
                "symbol": symbol,
                "records": overview.records,
                "deductions": overview.deductions,
            })
        }
        Commands::Scan {
            strategy,
            watchlist,
            limit,
            pacing_ms,
            params,
        } => {
            let kind: StrategyKind = strategy.parse()?;
            let overrides: Value = match params {
                Some(raw) => serde_json::from_str(&raw)?,
                None => json!({}),
            };
            let params = StrategyParams::from_overrides(kind, &overrides)?;
            let symbols = parse_watchlist(&watchlist);
            if symbols.is_empty() {
                return Err("watchlist is empty".into());
            }

            let fetch_limit = limit
                .unwrap_or_else(|| recommended_fetch_limit(&params).max(config.scan.fetch_limit));
            let pacing = pacing_ms
                .map(Duration::from_millis)
                .unwrap_or(config.scan.pacing_delay);
            let scanner = WatchlistScanner::new(client, fetch_limit, pacing);
            let results = scanner
                .scan_with_progress(&symbols, &params, |index, total, symbol| {
                    info!(symbol, progress = %format!("{}/{}", index + 1, total), "Scanning");
                })
                .await;

            let registry = StrategyRegistry::new();
            let hint = results
                .matches
                .is_empty()
                .then(|| registry.get(kind).map(|entry| entry.no_match_hint))
                .flatten();
            json!({
                "strategy": kind,
                "params": params,
                "results": results,
                "hint": hint,
            })
        }
        Commands::Score { symbol } => {
            let query = CandleQuery::new(&symbol, config.scoring.fetch_limit);
            let series = fetch_series(&client, &query).await?;
            let score = compute_score_with(&series, &config.scoring);
            if score.is_none() {
                warn!(symbol = %symbol, records = series.len(), "Not enough history to score");
            }
            json!({
                "symbol": symbol,
                "score": score,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
