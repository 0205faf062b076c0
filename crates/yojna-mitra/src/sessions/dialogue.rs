use chrono::Utc;
use serde::Serialize;

use crate::localization::{self, choice_entries, keys, ChoiceGroup, Locale};

use super::domain::{
    ChoiceOption, DialogueStage, Message, MessageOrigin, Profile, SessionError, SessionId,
};
use super::normalize::normalize_answer;

/// One conversation: the profile under construction, the transcript, and the
/// dialogue cursor.
///
/// The session is strictly turn-based. After every accepted answer the next
/// prompt is staged as a pending emission; until it is delivered (see
/// [`DialogueSession::deliver_pending`]) the session is not awaiting input
/// and further submissions are rejected. Pending prompts carry a generation
/// sequence so that a delivery scheduled before a reset can never land in the
/// restarted conversation.
#[derive(Debug, Clone)]
pub struct DialogueSession {
    id: SessionId,
    locale: Locale,
    profile: Profile,
    stage: DialogueStage,
    transcript: Vec<Message>,
    choices: Vec<ChoiceOption>,
    pending: Option<PendingPrompt>,
    next_message_id: u64,
    prompt_seq: u64,
}

/// A staged prompt waiting out the artificial composing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPrompt {
    pub seq: u64,
    stage: DialogueStage,
}

/// Outcome of an accepted answer, handed to the scheduling layer.
#[derive(Debug, Clone, Serialize)]
pub struct TurnReceipt {
    pub user_message: Message,
    /// Sequence of the prompt staged by this turn.
    pub prompt_seq: u64,
    pub is_complete: bool,
}

impl DialogueSession {
    /// Open a new conversation: the greeting and the first question are
    /// emitted immediately and the session awaits the age answer.
    pub fn start(id: SessionId, locale: Locale) -> Self {
        let mut session = Self {
            id,
            locale,
            profile: Profile::new(),
            stage: DialogueStage::Welcome,
            transcript: Vec::new(),
            choices: Vec::new(),
            pending: None,
            next_message_id: 0,
            prompt_seq: 0,
        };
        session.open_conversation();
        session
    }

    fn open_conversation(&mut self) {
        self.push_system(keys::WELCOME);
        self.stage = DialogueStage::Age;
        self.push_system(keys::ASK_AGE);
    }

    /// Accept a typed answer for the current question.
    ///
    /// Free text during a closed-choice stage is tolerated and stored as the
    /// literal answer.
    pub fn submit_answer(&mut self, raw: &str) -> Result<TurnReceipt, SessionError> {
        let field = self.expect_awaiting()?;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SessionError::InvalidInput(
                "an empty answer cannot be recorded".to_owned(),
            ));
        }

        let value = normalize_answer(field, trimmed);
        let user_message = self.push_user(trimmed.to_owned());
        self.profile.set(field, &value);
        Ok(self.advance(user_message))
    }

    /// Accept a selection from the currently offered choice set.
    pub fn submit_choice(&mut self, key: &str) -> Result<TurnReceipt, SessionError> {
        let field = self.expect_awaiting()?;

        if !self.stage.is_choice() {
            return Err(SessionError::InvalidInput(format!(
                "the '{}' question expects a typed answer",
                self.stage.label()
            )));
        }

        let option = self
            .choices
            .iter()
            .find(|option| option.key == key)
            .cloned()
            .ok_or_else(|| {
                SessionError::InvalidInput(format!("'{key}' is not among the offered options"))
            })?;

        let user_message = self.push_user(option.label);
        self.profile.set(field, &option.key);
        Ok(self.advance(user_message))
    }

    fn expect_awaiting(&self) -> Result<super::domain::ProfileField, SessionError> {
        if self.stage == DialogueStage::Complete {
            return Err(SessionError::SessionClosed);
        }
        if self.pending.is_some() {
            return Err(SessionError::InvalidInput(
                "no answer is expected while the next question is being composed".to_owned(),
            ));
        }
        self.stage.field().ok_or_else(|| {
            SessionError::InvalidInput("the conversation has not asked a question yet".to_owned())
        })
    }

    fn advance(&mut self, user_message: Message) -> TurnReceipt {
        self.stage = self.stage.next();
        self.choices.clear();
        self.prompt_seq += 1;
        self.pending = Some(PendingPrompt {
            seq: self.prompt_seq,
            stage: self.stage,
        });

        TurnReceipt {
            user_message,
            prompt_seq: self.prompt_seq,
            is_complete: self.profile.is_complete(),
        }
    }

    /// Deliver the staged prompt for the given generation sequence.
    ///
    /// A stale sequence (the session was reset after scheduling) is a no-op
    /// and returns an empty slice; this is the cancellation guarantee.
    pub fn deliver_pending(&mut self, seq: u64) -> Vec<Message> {
        let due = match self.pending {
            Some(pending) if pending.seq == seq => pending,
            _ => return Vec::new(),
        };
        self.pending = None;

        let first = self.transcript.len();
        match due.stage {
            DialogueStage::Complete => {
                self.push_system(keys::CLOSING);
            }
            stage => {
                self.push_system(prompt_key(stage));
                if let Some(group) = choice_group(stage) {
                    self.choices = self.build_choices(group);
                }
            }
        }

        self.transcript[first..].to_vec()
    }

    /// Abandon the conversation and start over. Any scheduled prompt
    /// delivery is invalidated by bumping the generation sequence.
    pub fn reset(&mut self) {
        self.prompt_seq += 1;
        self.pending = None;
        self.profile.reset();
        self.transcript.clear();
        self.choices.clear();
        self.next_message_id = 0;
        self.stage = DialogueStage::Welcome;
        self.open_conversation();
    }

    fn build_choices(&self, group: ChoiceGroup) -> Vec<ChoiceOption> {
        choice_entries(group)
            .iter()
            .map(|entry| ChoiceOption {
                key: entry.key.to_owned(),
                label: entry.label(self.locale).to_owned(),
            })
            .collect()
    }

    fn push_system(&mut self, key: &str) -> Message {
        let text = localization::translate_or_key(key, self.locale);
        self.push_message(text, MessageOrigin::System)
    }

    fn push_user(&mut self, text: String) -> Message {
        self.push_message(text, MessageOrigin::User)
    }

    fn push_message(&mut self, text: String, origin: MessageOrigin) -> Message {
        let message = Message {
            id: self.next_message_id,
            text,
            origin,
            sent_at: Utc::now(),
        };
        self.next_message_id += 1;
        self.transcript.push(message.clone());
        message
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn stage(&self) -> DialogueStage {
        self.stage
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// The option set currently offered, if the session awaits a choice.
    pub fn current_choices(&self) -> Option<&[ChoiceOption]> {
        if self.choices.is_empty() || self.pending.is_some() {
            None
        } else {
            Some(&self.choices)
        }
    }

    /// Whether a submission would currently be accepted.
    pub fn awaiting_input(&self) -> bool {
        self.stage != DialogueStage::Complete && self.pending.is_none()
    }

    pub fn pending_prompt(&self) -> Option<&PendingPrompt> {
        self.pending.as_ref()
    }

    pub fn progress(&self) -> u8 {
        self.profile.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.profile.is_complete()
    }
}

const fn prompt_key(stage: DialogueStage) -> &'static str {
    match stage {
        DialogueStage::Welcome => keys::WELCOME,
        DialogueStage::Age => keys::ASK_AGE,
        DialogueStage::State => keys::ASK_STATE,
        DialogueStage::Income => keys::ASK_INCOME,
        DialogueStage::Category => keys::ASK_CATEGORY,
        DialogueStage::Occupation => keys::ASK_OCCUPATION,
        DialogueStage::Complete => keys::CLOSING,
    }
}

const fn choice_group(stage: DialogueStage) -> Option<ChoiceGroup> {
    match stage {
        DialogueStage::Income => Some(ChoiceGroup::Income),
        DialogueStage::Category => Some(ChoiceGroup::Category),
        DialogueStage::Occupation => Some(ChoiceGroup::Occupation),
        _ => None,
    }
}
