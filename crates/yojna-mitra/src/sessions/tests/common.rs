use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::catalog::Catalog;
use crate::localization::Locale;
use crate::matching::{MatchConfig, MatchEngine};
use crate::sessions::dialogue::DialogueSession;
use crate::sessions::domain::SessionId;
use crate::sessions::repository::{RepositoryError, SessionStore};
use crate::sessions::service::SessionService;

/// Mutex-backed store mirroring the production in-memory implementation.
#[derive(Default)]
pub(super) struct MemoryStore {
    sessions: Mutex<HashMap<String, DialogueSession>>,
}

impl SessionStore for MemoryStore {
    fn insert(&self, session: DialogueSession) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.lock().expect("store lock");
        if sessions.contains_key(&session.id().0) {
            return Err(RepositoryError::Conflict);
        }
        sessions.insert(session.id().0.clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<DialogueSession>, RepositoryError> {
        let sessions = self.sessions.lock().expect("store lock");
        Ok(sessions.get(&id.0).cloned())
    }

    fn mutate(
        &self,
        id: &SessionId,
        op: &mut dyn FnMut(&mut DialogueSession),
    ) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.lock().expect("store lock");
        let session = sessions.get_mut(&id.0).ok_or(RepositoryError::NotFound)?;
        op(session);
        Ok(())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.lock().expect("store lock");
        sessions
            .remove(&id.0)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

/// Store that fails every call, for surfacing infrastructure errors.
pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _session: DialogueSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_owned()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<DialogueSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_owned()))
    }

    fn mutate(
        &self,
        _id: &SessionId,
        _op: &mut dyn FnMut(&mut DialogueSession),
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_owned()))
    }

    fn remove(&self, _id: &SessionId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_owned()))
    }
}

/// Service with the bundled catalog, default scoring, and no composing delay
/// so prompts land synchronously.
pub(super) fn build_service() -> (Arc<SessionService<MemoryStore>>, Arc<MemoryStore>) {
    build_service_with_delay(Duration::ZERO)
}

pub(super) fn build_service_with_delay(
    delay: Duration,
) -> (Arc<SessionService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(SessionService::new(
        Arc::clone(&store),
        Arc::new(Catalog::bundled()),
        Arc::new(MatchEngine::new(MatchConfig::default())),
        Locale::En,
        delay,
    ));
    (service, store)
}

/// Drive a session from fresh start to completion with a fixed answer set.
pub(super) fn complete_conversation(
    service: &SessionService<MemoryStore>,
    id: &SessionId,
) {
    service.submit_answer(id, "34").expect("age accepted");
    service
        .submit_answer(id, "maharashtra")
        .expect("state accepted");
    service.submit_choice(id, "1to3").expect("income accepted");
    service
        .submit_choice(id, "general")
        .expect("category accepted");
    service
        .submit_choice(id, "farmer")
        .expect("occupation accepted");
}
