use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::localization::Locale;
use crate::matching::{MatchEngine, MatchError, ProgramMatch};

use super::dialogue::{DialogueSession, TurnReceipt};
use super::domain::{ChoiceOption, Message, SessionError, SessionId};
use super::repository::{RepositoryError, SessionStore};

/// Service composing the dialogue, the session store, and the match engine.
///
/// All prompt deliveries, immediate and deferred, go through
/// [`SessionStore::mutate`], so a reset always either aborts a scheduled
/// delivery or invalidates it through the prompt sequence guard.
pub struct SessionService<S> {
    store: Arc<S>,
    catalog: Arc<Catalog>,
    engine: Arc<MatchEngine>,
    default_locale: Locale,
    typing_delay: Duration,
    scheduled: Arc<Mutex<HashMap<SessionId, ScheduledDelivery>>>,
}

/// Handle to one in-flight deferred prompt. The sequence lets the spawned
/// task clean up only its own entry after delivering.
struct ScheduledDelivery {
    seq: u64,
    handle: tokio::task::AbortHandle,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

/// What a submission produced: the messages appended so far and the state the
/// caller needs to render the conversation.
///
/// With a composing delay configured, `new_messages` holds only the echoed
/// user turn; the next prompt arrives in a later snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TurnReply {
    pub new_messages: Vec<Message>,
    pub choices: Option<Vec<ChoiceOption>>,
    pub is_complete: bool,
    pub progress: u8,
}

/// Read-only view of one conversation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub locale: &'static str,
    pub stage: &'static str,
    pub progress: u8,
    pub is_complete: bool,
    pub awaiting_input: bool,
    pub transcript: Vec<Message>,
    pub choices: Option<Vec<ChoiceOption>>,
}

impl SessionSnapshot {
    fn of(session: &DialogueSession) -> Self {
        Self {
            session_id: session.id().0.clone(),
            locale: session.locale().code(),
            stage: session.stage().label(),
            progress: session.progress(),
            is_complete: session.is_complete(),
            awaiting_input: session.awaiting_input(),
            transcript: session.transcript().to_vec(),
            choices: session.current_choices().map(<[ChoiceOption]>::to_vec),
        }
    }
}

impl<S> SessionService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(
        store: Arc<S>,
        catalog: Arc<Catalog>,
        engine: Arc<MatchEngine>,
        default_locale: Locale,
        typing_delay: Duration,
    ) -> Self {
        Self {
            store,
            catalog,
            engine,
            default_locale,
            typing_delay,
            scheduled: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Open a conversation and persist it. The greeting and the first
    /// question are part of the returned snapshot.
    pub fn start_session(
        &self,
        locale: Option<Locale>,
    ) -> Result<SessionSnapshot, SessionServiceError> {
        let session = DialogueSession::start(
            next_session_id(),
            locale.unwrap_or(self.default_locale),
        );
        let snapshot = SessionSnapshot::of(&session);
        self.store.insert(session)?;
        Ok(snapshot)
    }

    pub fn get_session(&self, id: &SessionId) -> Result<SessionSnapshot, SessionServiceError> {
        let session = self.store.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(SessionSnapshot::of(&session))
    }

    /// Submit a typed answer for the current question.
    pub fn submit_answer(
        &self,
        id: &SessionId,
        raw: &str,
    ) -> Result<TurnReply, SessionServiceError> {
        self.submit(id, |session| session.submit_answer(raw))
    }

    /// Submit a selection from the offered choice set.
    pub fn submit_choice(
        &self,
        id: &SessionId,
        key: &str,
    ) -> Result<TurnReply, SessionServiceError> {
        self.submit(id, |session| session.submit_choice(key))
    }

    fn submit(
        &self,
        id: &SessionId,
        turn: impl Fn(&mut DialogueSession) -> Result<TurnReceipt, SessionError>,
    ) -> Result<TurnReply, SessionServiceError> {
        let deliver_inline = self.typing_delay.is_zero();
        let mut outcome: Option<Result<TurnReceipt, SessionError>> = None;
        let mut delivered: Vec<Message> = Vec::new();
        let mut choices: Option<Vec<ChoiceOption>> = None;
        let mut progress = 0;

        self.store.mutate(id, &mut |session| {
            let receipt = turn(session);
            if let Ok(receipt) = &receipt {
                if deliver_inline {
                    delivered = session.deliver_pending(receipt.prompt_seq);
                    choices = session.current_choices().map(<[ChoiceOption]>::to_vec);
                }
            }
            progress = session.progress();
            outcome = Some(receipt);
        })?;

        let receipt = outcome
            .ok_or_else(|| RepositoryError::Unavailable("mutation did not run".to_owned()))??;

        let mut new_messages = vec![receipt.user_message.clone()];
        new_messages.extend(delivered);

        if !deliver_inline {
            self.schedule_delivery(id.clone(), receipt.prompt_seq);
        }

        Ok(TurnReply {
            new_messages,
            choices,
            is_complete: receipt.is_complete,
            progress,
        })
    }

    fn schedule_delivery(&self, id: SessionId, seq: u64) {
        let store = Arc::clone(&self.store);
        let scheduled = Arc::clone(&self.scheduled);
        let delay = self.typing_delay;
        let task_id = id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = store.mutate(&task_id, &mut |session| {
                session.deliver_pending(seq);
            });
            if let Err(error) = result {
                tracing::warn!(session_id = %task_id.0, %error, "deferred prompt delivery failed");
            }

            let mut scheduled = match scheduled.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            // Only this task's own entry; a newer submission may have
            // replaced it already.
            if scheduled.get(&task_id).is_some_and(|entry| entry.seq == seq) {
                scheduled.remove(&task_id);
            }
        });

        let mut scheduled = match self.scheduled.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let entry = ScheduledDelivery {
            seq,
            handle: handle.abort_handle(),
        };
        if let Some(previous) = scheduled.insert(id, entry) {
            previous.handle.abort();
        }
    }

    /// Discard the profile and transcript and restart the conversation.
    ///
    /// Any scheduled prompt delivery is aborted; a delivery already past the
    /// abort is neutralized by the stale sequence inside the session.
    pub fn reset_session(&self, id: &SessionId) -> Result<SessionSnapshot, SessionServiceError> {
        {
            let mut scheduled = match self.scheduled.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(entry) = scheduled.remove(id) {
                entry.handle.abort();
            }
        }

        let mut snapshot = None;
        self.store.mutate(id, &mut |session| {
            session.reset();
            snapshot = Some(SessionSnapshot::of(session));
        })?;
        snapshot
            .ok_or_else(|| RepositoryError::Unavailable("mutation did not run".to_owned()).into())
    }

    /// Drop the conversation entirely. Unlike a reset, the session no longer
    /// exists afterwards.
    pub fn end_session(&self, id: &SessionId) -> Result<(), SessionServiceError> {
        {
            let mut scheduled = match self.scheduled.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(entry) = scheduled.remove(id) {
                entry.handle.abort();
            }
        }

        self.store.remove(id)?;
        Ok(())
    }

    /// Rank the catalog against the session's completed profile, resolved in
    /// the session's locale.
    pub fn get_results(&self, id: &SessionId) -> Result<Vec<ProgramMatch>, SessionServiceError> {
        let session = self.store.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        let matches = self
            .engine
            .rank(session.profile(), &self.catalog, session.locale())?;
        Ok(matches)
    }

    pub fn get_progress(&self, id: &SessionId) -> Result<u8, SessionServiceError> {
        let session = self.store.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(session.progress())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    #[cfg(test)]
    pub(crate) fn scheduled_deliveries(&self) -> usize {
        match self.scheduled.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Match(#[from] MatchError),
}
