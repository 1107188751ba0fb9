use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::strategy::StrategyMatch;

/// Why a symbol could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The data source failed (network, auth, unknown symbol).
    Fetch,
    /// The data came back but could not be evaluated.
    Data,
    /// The data source returned no records.
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanFailure {
    pub kind: FailureKind,
    pub reason: String,
}

/// Outcome of one watchlist scan. Recomputed on every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResultSet {
    pub matches: BTreeMap<String, StrategyMatch>,
    /// Symbols evaluated without error that did not match.
    pub no_match: Vec<String>,
    pub errors: BTreeMap<String, ScanFailure>,
}

impl ScanResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of symbols accounted for.
    pub fn evaluated(&self) -> usize {
        self.matches.len() + self.no_match.len() + self.errors.len()
    }
}
