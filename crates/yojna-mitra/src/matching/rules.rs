use crate::catalog::{IncomeBracket, Program};
use crate::sessions::{Profile, ProfileField};

use super::strategy::{MatchCriterion, ProgramScore, ScoreComponent};

const POINTS_MET: u16 = 20;
const POINTS_UNKNOWN: u16 = 10;

enum CriterionFit {
    /// Criterion unrestricted, or the profile satisfies the restriction.
    Met,
    /// The profile value could not be interpreted for this criterion.
    Unknown,
    /// The profile fails a restriction; the program is out of reach.
    Failed,
}

/// Score a program by walking its eligibility rule against the profile.
///
/// Each of the five criteria contributes 20 points when met or unrestricted
/// and 10 when the answer cannot be interpreted. Any failed restriction
/// disqualifies the program outright, mirroring how the assistance programs
/// themselves treat hard eligibility limits.
pub(crate) fn score_program(profile: &Profile, program: &Program) -> ProgramScore {
    let rule = &program.eligibility;
    let mut components = Vec::with_capacity(5);
    let mut earned: u16 = 0;
    let mut disqualified = false;

    let mut record = |criterion: MatchCriterion, fit: CriterionFit, notes: String| match fit {
        CriterionFit::Met => {
            earned += POINTS_MET;
            components.push(ScoreComponent {
                criterion,
                delta: POINTS_MET as i16,
                notes,
            });
        }
        CriterionFit::Unknown => {
            earned += POINTS_UNKNOWN;
            components.push(ScoreComponent {
                criterion,
                delta: POINTS_UNKNOWN as i16,
                notes,
            });
        }
        CriterionFit::Failed => {
            disqualified = true;
            components.push(ScoreComponent {
                criterion,
                delta: 0,
                notes,
            });
        }
    };

    // Age bounds.
    let age_value = profile.value(ProfileField::Age);
    match (rule.min_age, rule.max_age) {
        (None, None) => record(
            MatchCriterion::AgeRange,
            CriterionFit::Met,
            "no age restriction".to_owned(),
        ),
        (min, max) => match age_value.parse::<u16>() {
            Ok(age) => {
                let below = min.map(|bound| age < bound).unwrap_or(false);
                let above = max.map(|bound| age > bound).unwrap_or(false);
                if below || above {
                    record(
                        MatchCriterion::AgeRange,
                        CriterionFit::Failed,
                        format!("age {age} outside the allowed range"),
                    );
                } else {
                    record(
                        MatchCriterion::AgeRange,
                        CriterionFit::Met,
                        format!("age {age} within the allowed range"),
                    );
                }
            }
            Err(_) => record(
                MatchCriterion::AgeRange,
                CriterionFit::Unknown,
                format!("age answer '{age_value}' is not a number"),
            ),
        },
    }

    // Income ceiling, compared by bracket order.
    let income_value = profile.value(ProfileField::Income);
    match rule.max_income {
        None => record(
            MatchCriterion::IncomeBracket,
            CriterionFit::Met,
            "no income ceiling".to_owned(),
        ),
        Some(ceiling) => match IncomeBracket::from_key(income_value) {
            Some(bracket) if bracket <= ceiling => record(
                MatchCriterion::IncomeBracket,
                CriterionFit::Met,
                format!("income bracket '{}' within ceiling '{}'", bracket.key(), ceiling.key()),
            ),
            Some(bracket) => record(
                MatchCriterion::IncomeBracket,
                CriterionFit::Failed,
                format!("income bracket '{}' above ceiling '{}'", bracket.key(), ceiling.key()),
            ),
            None => record(
                MatchCriterion::IncomeBracket,
                CriterionFit::Unknown,
                format!("income answer '{income_value}' is not a known bracket"),
            ),
        },
    }

    // Social category.
    record_membership(
        &mut record,
        MatchCriterion::SocialCategory,
        "category",
        profile.value(ProfileField::Category),
        &rule.categories,
    );

    // Occupation.
    record_membership(
        &mut record,
        MatchCriterion::Occupation,
        "occupation",
        profile.value(ProfileField::Occupation),
        &rule.occupations,
    );

    // State restriction; central programs leave this empty.
    record_membership(
        &mut record,
        MatchCriterion::HomeState,
        "state",
        profile.value(ProfileField::State),
        &rule.states,
    );

    let value = if disqualified {
        0
    } else {
        earned.min(100) as u8
    };

    ProgramScore { value, components }
}

fn record_membership(
    record: &mut impl FnMut(MatchCriterion, CriterionFit, String),
    criterion: MatchCriterion,
    label: &str,
    value: &str,
    allowed: &[String],
) {
    if allowed.is_empty() {
        record(
            criterion,
            CriterionFit::Met,
            format!("no {label} restriction"),
        );
    } else if allowed
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(value.trim()))
    {
        record(
            criterion,
            CriterionFit::Met,
            format!("{label} '{value}' is covered"),
        );
    } else {
        record(
            criterion,
            CriterionFit::Failed,
            format!("{label} '{value}' is not covered"),
        );
    }
}
