use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for conversation sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// The five citizen attributes collected by the dialogue, in question order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Age,
    State,
    Income,
    Category,
    Occupation,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Age,
        ProfileField::State,
        ProfileField::Income,
        ProfileField::Category,
        ProfileField::Occupation,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ProfileField::Age => "age",
            ProfileField::State => "state",
            ProfileField::Income => "income",
            ProfileField::Category => "category",
            ProfileField::Occupation => "occupation",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "age" => Some(ProfileField::Age),
            "state" => Some(ProfileField::State),
            "income" => Some(ProfileField::Income),
            "category" => Some(ProfileField::Category),
            "occupation" => Some(ProfileField::Occupation),
            _ => None,
        }
    }
}

/// The incrementally built citizen profile.
///
/// All five fields are always present; the empty string means unanswered.
/// Fields are written one at a time in question order by the dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    fields: BTreeMap<ProfileField, String>,
}

impl Profile {
    pub fn new() -> Self {
        let fields = ProfileField::ALL
            .iter()
            .map(|field| (*field, String::new()))
            .collect();
        Self { fields }
    }

    /// Overwrite an attribute addressed by its wire key. The value content is
    /// not validated; an unknown key is rejected.
    pub fn update(&mut self, field: &str, value: &str) -> Result<(), SessionError> {
        let field =
            ProfileField::from_key(field).ok_or_else(|| SessionError::InvalidField(field.to_owned()))?;
        self.set(field, value);
        Ok(())
    }

    pub(crate) fn set(&mut self, field: ProfileField, value: &str) {
        self.fields.insert(field, value.to_owned());
    }

    pub fn value(&self, field: ProfileField) -> &str {
        self.fields
            .get(&field)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Percentage of answered fields, rounded to the nearest integer.
    pub fn progress(&self) -> u8 {
        let answered = self
            .fields
            .values()
            .filter(|value| !value.is_empty())
            .count();
        ((answered * 100) as f64 / ProfileField::ALL.len() as f64).round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.fields.values().all(|value| !value.is_empty())
    }

    pub fn reset(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

/// Origin tag for one conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    System,
    User,
}

impl MessageOrigin {
    pub const fn label(self) -> &'static str {
        match self {
            MessageOrigin::System => "system",
            MessageOrigin::User => "user",
        }
    }
}

/// One turn of the conversation. Messages are append-only and id-ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub origin: MessageOrigin,
    pub sent_at: DateTime<Utc>,
}

/// One selectable answer offered during a closed-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub key: String,
    pub label: String,
}

/// Dialogue stages, traversed strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStage {
    Welcome,
    Age,
    State,
    Income,
    Category,
    Occupation,
    Complete,
}

impl DialogueStage {
    /// The profile field bound to an attribute stage.
    pub const fn field(self) -> Option<ProfileField> {
        match self {
            DialogueStage::Age => Some(ProfileField::Age),
            DialogueStage::State => Some(ProfileField::State),
            DialogueStage::Income => Some(ProfileField::Income),
            DialogueStage::Category => Some(ProfileField::Category),
            DialogueStage::Occupation => Some(ProfileField::Occupation),
            DialogueStage::Welcome | DialogueStage::Complete => None,
        }
    }

    pub const fn next(self) -> DialogueStage {
        match self {
            DialogueStage::Welcome => DialogueStage::Age,
            DialogueStage::Age => DialogueStage::State,
            DialogueStage::State => DialogueStage::Income,
            DialogueStage::Income => DialogueStage::Category,
            DialogueStage::Category => DialogueStage::Occupation,
            DialogueStage::Occupation | DialogueStage::Complete => DialogueStage::Complete,
        }
    }

    /// Whether answers for this stage come from a fixed choice set.
    pub const fn is_choice(self) -> bool {
        matches!(
            self,
            DialogueStage::Income | DialogueStage::Category | DialogueStage::Occupation
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            DialogueStage::Welcome => "welcome",
            DialogueStage::Age => "age",
            DialogueStage::State => "state",
            DialogueStage::Income => "income",
            DialogueStage::Category => "category",
            DialogueStage::Occupation => "occupation",
            DialogueStage::Complete => "complete",
        }
    }
}

/// Validation errors raised by the profile store and dialogue engine.
///
/// All are recoverable: rejected input never mutates session state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown profile attribute '{0}'")]
    InvalidField(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("session is closed; start a new conversation")]
    SessionClosed,
}
