//! Composite 0-100 buy-signal score.
//!
//! | Dimension  | Rules                                            | Max |
//! |------------|--------------------------------------------------|-----|
//! | trend      | close above MA10 / MA20 / MA60, 10 each          | 30  |
//! | momentum   | RSI14 band 15, stochastic %K above %D 15         | 30  |
//! | oscillator | MACD histogram positive 10, DIF above DEA 10     | 20  |
//! | volume     | volume above the prior 5-session average         | 20  |

use tracing::debug;

use crate::common::math;
use crate::config::ScoringConfig;
use crate::indicators::columns;
use crate::indicators::momentum::{macd, rsi, stochastic};
use crate::indicators::trend::ma;
use crate::models::candle::CandleSeries;
use crate::models::indicators::IndicatorFrame;
use crate::models::score::{Dimension, DimensionScore, DimensionScores, ScoreDetail, ScoreResult};

/// History needed for the 60-day average; shorter series are not scored.
pub const MIN_SCORE_HISTORY: usize = 60;
const VOLUME_AVG_DAYS: usize = 5;
const RSI_POINTS: u32 = 15;

/// Latest indicator values the rules read.
struct Snapshot {
    close: f64,
    ma10: f64,
    ma20: f64,
    ma60: f64,
    rsi14: f64,
    stoch_k: f64,
    stoch_d: f64,
    dif: f64,
    dea: f64,
    hist: f64,
    volume: f64,
    avg_volume: f64,
}

/// Score with default policy.
pub fn compute_score(series: &CandleSeries) -> Option<ScoreResult> {
    compute_score_with(series, &ScoringConfig::default())
}

/// Score the latest day, or `None` when history is too short for any rule.
pub fn compute_score_with(series: &CandleSeries, config: &ScoringConfig) -> Option<ScoreResult> {
    if series.len() < MIN_SCORE_HISTORY {
        debug!(records = series.len(), required = MIN_SCORE_HISTORY, "Not enough history to score");
        return None;
    }
    let snapshot = snapshot(series)?;
    let mut details = Vec::with_capacity(8);

    let trend = [(10, snapshot.ma10), (20, snapshot.ma20), (60, snapshot.ma60)]
        .into_iter()
        .map(|(period, ma)| {
            push_rule(
                &mut details,
                Dimension::Trend,
                format!("close_above_ma{}", period),
                format!("close {:.2} vs ma{} {:.2}", snapshot.close, period, ma),
                snapshot.close > ma,
                10,
            )
        })
        .sum::<u32>();

    let rsi_points = rsi_band_points(snapshot.rsi14, config.neutral_rsi_points);
    details.push(ScoreDetail {
        dimension: Dimension::Momentum,
        rule: "rsi14_band".to_string(),
        value: format!("rsi14 {:.2}", snapshot.rsi14),
        passed: rsi_points > 0,
        points: rsi_points,
        max_points: RSI_POINTS,
    });
    let momentum = rsi_points
        + push_rule(
            &mut details,
            Dimension::Momentum,
            "stoch_k_above_d".to_string(),
            format!("k {:.2} vs d {:.2}", snapshot.stoch_k, snapshot.stoch_d),
            snapshot.stoch_k > snapshot.stoch_d,
            15,
        );

    let oscillator = push_rule(
        &mut details,
        Dimension::Oscillator,
        "macd_hist_positive".to_string(),
        format!("hist {:.4}", snapshot.hist),
        snapshot.hist > 0.0,
        10,
    ) + push_rule(
        &mut details,
        Dimension::Oscillator,
        "dif_above_dea".to_string(),
        format!("dif {:.4} vs dea {:.4}", snapshot.dif, snapshot.dea),
        snapshot.dif > snapshot.dea,
        10,
    );

    let volume = push_rule(
        &mut details,
        Dimension::Volume,
        "volume_above_avg5".to_string(),
        format!("volume {:.0} vs avg5 {:.0}", snapshot.volume, snapshot.avg_volume),
        snapshot.volume > snapshot.avg_volume,
        20,
    );

    let dimensions = DimensionScores {
        trend: dimension_score(Dimension::Trend, trend),
        momentum: dimension_score(Dimension::Momentum, momentum),
        oscillator: dimension_score(Dimension::Oscillator, oscillator),
        volume: dimension_score(Dimension::Volume, volume),
    };
    let total = dimensions.trend.score
        + dimensions.momentum.score
        + dimensions.oscillator.score
        + dimensions.volume.score;

    let latest = series.last();
    Some(ScoreResult {
        date: latest.date,
        close: latest.close,
        total,
        dimensions,
        details,
    })
}

/// 15 for [40, 70) or below 30, 0 above 80, `neutral` anywhere else.
pub fn rsi_band_points(rsi: f64, neutral: u32) -> u32 {
    if (40.0..70.0).contains(&rsi) || rsi < 30.0 {
        RSI_POINTS
    } else if rsi > 80.0 {
        0
    } else {
        neutral.min(RSI_POINTS)
    }
}

fn snapshot(series: &CandleSeries) -> Option<Snapshot> {
    let frame = IndicatorFrame::new(series.clone());
    let frame = ma::compute_ma(&frame, &[10, 20, 60]).ok()?;
    let frame = rsi::compute_rsi_default(&frame).ok()?;
    let frame = stochastic::compute_stochastic(&frame, Default::default()).ok()?;
    let frame = macd::compute_macd_default(&frame).ok()?;

    let volumes = series.volumes();
    let last = volumes.len() - 1;
    let avg_volume = math::mean(&volumes[last - VOLUME_AVG_DAYS..last])?;
    let latest = series.last();

    Some(Snapshot {
        close: latest.close,
        ma10: frame.latest(&columns::ma(10))?,
        ma20: frame.latest(&columns::ma(20))?,
        ma60: frame.latest(&columns::ma(60))?,
        rsi14: frame.latest(&columns::rsi(rsi::DEFAULT_RSI_PERIOD))?,
        stoch_k: frame.latest(columns::STOCH_K)?,
        stoch_d: frame.latest(columns::STOCH_D)?,
        dif: frame.latest(columns::DIF)?,
        dea: frame.latest(columns::DEA)?,
        hist: frame.latest(columns::MACD_HIST)?,
        volume: volumes[last],
        avg_volume,
    })
}

fn push_rule(
    details: &mut Vec<ScoreDetail>,
    dimension: Dimension,
    rule: String,
    value: String,
    passed: bool,
    max_points: u32,
) -> u32 {
    let points = if passed { max_points } else { 0 };
    details.push(ScoreDetail {
        dimension,
        rule,
        value,
        passed,
        points,
        max_points,
    });
    points
}

fn dimension_score(dimension: Dimension, score: u32) -> DimensionScore {
    let max = dimension.max_points();
    DimensionScore {
        score: score.min(max),
        max,
    }
}
