use serde::{Deserialize, Serialize};

/// Settings controlling how a completed profile is matched against the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Drop results scoring below this threshold. `None` keeps everything.
    pub minimum_score: Option<u8>,
    pub strategy: ScoringStrategyKind,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            minimum_score: None,
            strategy: ScoringStrategyKind::Catalog,
        }
    }
}

/// Built-in scoring strategies. The trait behind them stays open for callers
/// that want to plug their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategyKind {
    /// Use the catalog author's fixed per-program score.
    Catalog,
    /// Compute the score from the profile against each program's
    /// eligibility rule.
    Rules,
}

impl Default for ScoringStrategyKind {
    fn default() -> Self {
        ScoringStrategyKind::Catalog
    }
}

impl ScoringStrategyKind {
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "catalog" | "fixed" => Some(ScoringStrategyKind::Catalog),
            "rules" | "computed" => Some(ScoringStrategyKind::Rules),
            _ => None,
        }
    }
}
