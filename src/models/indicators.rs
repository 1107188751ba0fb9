use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::candle::CandleSeries;

/// A candle series enriched with derived indicator columns.
///
/// Columns are aligned 1:1 with the candles; `None` marks positions that
/// lack enough history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorFrame {
    series: CandleSeries,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl IndicatorFrame {
    pub fn new(series: CandleSeries) -> Self {
        Self {
            series,
            columns: BTreeMap::new(),
        }
    }

    pub fn series(&self) -> &CandleSeries {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Insert or replace a column. Length must match the series.
    pub(crate) fn set_column(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) {
        debug_assert_eq!(values.len(), self.series.len());
        self.columns.insert(name.into(), values);
    }

    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn value_at(&self, name: &str, index: usize) -> Option<f64> {
        self.columns.get(name)?.get(index).copied().flatten()
    }

    /// Value of a column on the latest day.
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.value_at(name, self.series.len().checked_sub(1)?)
    }

    /// Row-oriented view for display: one entry per day.
    pub fn rows(&self) -> Vec<IndicatorRow> {
        self.series
            .candles()
            .iter()
            .enumerate()
            .map(|(i, candle)| IndicatorRow {
                date: candle.date,
                open: candle.open,
                high: candle.high,
                low: candle.low,
                close: candle.close,
                volume: candle.volume,
                turnover: None,
                indicators: self
                    .columns
                    .iter()
                    .map(|(name, values)| (name.clone(), values[i]))
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnover: Option<f64>,
    pub indicators: BTreeMap<String, Option<f64>>,
}

impl IndicatorRow {
    pub fn with_turnover(mut self, turnover: Option<f64>) -> Self {
        self.turnover = turnover;
        self
    }
}

/// Direction the moving average is likely to take next session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionTrend {
    /// Close within ±1% of the deduction price.
    Turning,
    Rising,
    Falling,
}

/// Moving-average deduction price for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaDeduction {
    pub period: usize,
    pub ma_value: f64,
    pub current_close: f64,
    pub deduction_price: f64,
    pub diff_pct: f64,
    pub trend: DeductionTrend,
}
