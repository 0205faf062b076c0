use serde::{Deserialize, Serialize};

use crate::catalog::Program;
use crate::sessions::Profile;

use super::config::ScoringStrategyKind;
use super::rules;

/// Criteria a score component may refer to. `AuthorAssigned` covers the
/// baseline catalog-score strategy, which does not look at the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCriterion {
    AuthorAssigned,
    AgeRange,
    IncomeBracket,
    SocialCategory,
    Occupation,
    HomeState,
}

/// Discrete contribution to a program score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: MatchCriterion,
    pub delta: i16,
    pub notes: String,
}

/// A scored program before ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramScore {
    pub value: u8,
    pub components: Vec<ScoreComponent>,
}

/// Pure scoring seam: `(profile, program)` to a 0-100 score.
///
/// Implementations must be deterministic; ranking stability depends on it.
pub trait ScoringStrategy: Send + Sync {
    fn score(&self, profile: &Profile, program: &Program) -> ProgramScore;
}

impl ScoringStrategyKind {
    pub fn build(self) -> Box<dyn ScoringStrategy> {
        match self {
            ScoringStrategyKind::Catalog => Box::new(CatalogScore),
            ScoringStrategyKind::Rules => Box::new(RuleScore),
        }
    }
}

/// Baseline strategy: surface the catalog author's fixed score unchanged.
pub struct CatalogScore;

impl ScoringStrategy for CatalogScore {
    fn score(&self, _profile: &Profile, program: &Program) -> ProgramScore {
        ProgramScore {
            value: program.base_score,
            components: vec![ScoreComponent {
                criterion: MatchCriterion::AuthorAssigned,
                delta: program.base_score as i16,
                notes: "relevance score assigned by the catalog authors".to_owned(),
            }],
        }
    }
}

/// Computed strategy: evaluate the profile against the program's
/// eligibility rule, criterion by criterion.
pub struct RuleScore;

impl ScoringStrategy for RuleScore {
    fn score(&self, profile: &Profile, program: &Program) -> ProgramScore {
        rules::score_program(profile, program)
    }
}
