use super::dialogue::DialogueSession;
use super::domain::SessionId;

/// Storage abstraction for live conversations so the service module can be
/// exercised in isolation.
///
/// `mutate` applies an operation to one session atomically with respect to
/// other callers; the deferred prompt scheduler and the request path both go
/// through it, which is what makes cancellation-on-reset race-free.
pub trait SessionStore: Send + Sync {
    fn insert(&self, session: DialogueSession) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<DialogueSession>, RepositoryError>;
    fn mutate(
        &self,
        id: &SessionId,
        op: &mut dyn FnMut(&mut DialogueSession),
    ) -> Result<(), RepositoryError>;
    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError>;
}

/// Error enumeration for session store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
