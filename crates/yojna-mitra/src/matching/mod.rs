//! Ranks the program catalog against a completed citizen profile.

mod config;
mod rules;
mod strategy;

pub use config::{MatchConfig, ScoringStrategyKind};
pub use strategy::{
    CatalogScore, MatchCriterion, ProgramScore, RuleScore, ScoreComponent, ScoringStrategy,
};

use std::cmp::Reverse;

use serde::Serialize;

use crate::catalog::{Catalog, Program, ProgramId, ProgramKind};
use crate::localization::Locale;
use crate::sessions::Profile;

/// Error raised by the matching engine.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("profile incomplete ({progress}% answered); matching needs all five attributes")]
    ProfileIncomplete { progress: u8 },
}

/// Locale-resolved program content ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramSummary {
    pub id: ProgramId,
    pub name: String,
    pub description: String,
    pub kind: ProgramKind,
    pub kind_label: &'static str,
    pub criteria: Vec<String>,
    pub benefits: Vec<String>,
    pub documents: Vec<String>,
    pub steps: Vec<String>,
    pub application_link: String,
}

impl ProgramSummary {
    pub fn localized(program: &Program, locale: Locale) -> Self {
        Self {
            id: program.id.clone(),
            name: program.name.get(locale).to_owned(),
            description: program.description.get(locale).to_owned(),
            kind: program.kind,
            kind_label: program.kind.label(),
            criteria: program.criteria.get(locale).to_vec(),
            benefits: program.benefits.get(locale).to_vec(),
            documents: program.documents.get(locale).to_vec(),
            steps: program.steps.get(locale).to_vec(),
            application_link: program.application_link.clone(),
        }
    }
}

/// One ranked result: the localized program plus its match percentage and
/// the component trail explaining it.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramMatch {
    pub program: ProgramSummary,
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}

/// Engine pairing a scoring strategy with ordering and threshold filtering.
pub struct MatchEngine {
    config: MatchConfig,
    strategy: Box<dyn ScoringStrategy>,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        let strategy = config.strategy.build();
        Self { config, strategy }
    }

    /// Plug a caller-provided scoring strategy, keeping the configured
    /// threshold behavior.
    pub fn with_strategy(config: MatchConfig, strategy: Box<dyn ScoringStrategy>) -> Self {
        Self { config, strategy }
    }

    /// Rank the catalog for a completed profile, highest score first.
    ///
    /// Ties keep catalog insertion order (stable sort). An empty catalog
    /// yields an empty result; an incomplete profile is rejected.
    pub fn rank(
        &self,
        profile: &Profile,
        catalog: &Catalog,
        locale: Locale,
    ) -> Result<Vec<ProgramMatch>, MatchError> {
        if !profile.is_complete() {
            return Err(MatchError::ProfileIncomplete {
                progress: profile.progress(),
            });
        }

        let mut matches: Vec<ProgramMatch> = catalog
            .programs()
            .iter()
            .filter_map(|program| {
                let scored = self.strategy.score(profile, program);
                if let Some(threshold) = self.config.minimum_score {
                    if scored.value < threshold {
                        return None;
                    }
                }
                Some(ProgramMatch {
                    program: ProgramSummary::localized(program, locale),
                    score: scored.value,
                    components: scored.components,
                })
            })
            .collect();

        matches.sort_by_key(|entry| Reverse(entry.score));
        Ok(matches)
    }
}
