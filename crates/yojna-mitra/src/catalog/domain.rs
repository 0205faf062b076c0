use serde::{Deserialize, Serialize};

use crate::localization::Locale;

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

/// Whether a program is run by the central or a state government.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    Central,
    State,
}

impl ProgramKind {
    pub const fn label(self) -> &'static str {
        match self {
            ProgramKind::Central => "central",
            ProgramKind::State => "state",
        }
    }
}

/// A string carried in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub hi: String,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Hi => &self.hi,
        }
    }
}

/// An ordered list carried in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedList {
    pub en: Vec<String>,
    pub hi: Vec<String>,
}

impl LocalizedList {
    pub fn get(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::En => &self.en,
            Locale::Hi => &self.hi,
        }
    }
}

/// Household income brackets offered during the dialogue, ordered low to high.
///
/// The serde names double as the choice keys stored in the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "below1")]
    BelowOneLakh,
    #[serde(rename = "1to3")]
    OneToThreeLakh,
    #[serde(rename = "3to8")]
    ThreeToEightLakh,
    #[serde(rename = "above8")]
    AboveEightLakh,
}

impl IncomeBracket {
    pub const fn key(self) -> &'static str {
        match self {
            IncomeBracket::BelowOneLakh => "below1",
            IncomeBracket::OneToThreeLakh => "1to3",
            IncomeBracket::ThreeToEightLakh => "3to8",
            IncomeBracket::AboveEightLakh => "above8",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "below1" => Some(IncomeBracket::BelowOneLakh),
            "1to3" => Some(IncomeBracket::OneToThreeLakh),
            "3to8" => Some(IncomeBracket::ThreeToEightLakh),
            "above8" => Some(IncomeBracket::AboveEightLakh),
            _ => None,
        }
    }
}

/// Structured eligibility data attached to each program so scoring can be
/// computed from the profile rather than read off an opaque number.
///
/// Empty collections and `None` bounds mean the criterion is unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRule {
    #[serde(default)]
    pub min_age: Option<u16>,
    #[serde(default)]
    pub max_age: Option<u16>,
    #[serde(default)]
    pub max_income: Option<IncomeBracket>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub occupations: Vec<String>,
    #[serde(default)]
    pub states: Vec<String>,
}

/// One published catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub kind: ProgramKind,
    /// Author-assigned 0-100 relevance score, the baseline scoring input.
    pub base_score: u8,
    #[serde(default)]
    pub eligibility: EligibilityRule,
    pub criteria: LocalizedList,
    pub benefits: LocalizedList,
    pub documents: LocalizedList,
    pub steps: LocalizedList,
    pub application_link: String,
}
