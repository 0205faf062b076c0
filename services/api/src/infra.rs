use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use yojna_mitra::catalog::{Catalog, CatalogError, CsvCatalogImporter};
use yojna_mitra::localization::Locale;
use yojna_mitra::sessions::{DialogueSession, RepositoryError, SessionId, SessionStore};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store shared by the router and the prompt scheduler.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, DialogueSession>>>,
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: DialogueSession) -> Result<(), RepositoryError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        if guard.contains_key(session.id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(session.id().clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<DialogueSession>, RepositoryError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn mutate(
        &self,
        id: &SessionId,
        op: &mut dyn FnMut(&mut DialogueSession),
    ) -> Result<(), RepositoryError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        let session = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        op(session);
        Ok(())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

/// Load a catalog file, picking the parser by extension. `None` falls back to
/// the bundled set.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let Some(path) = path else {
        return Ok(Catalog::bundled());
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Catalog::from_json_path(path),
        Some(ext) if ext.eq_ignore_ascii_case("csv") => CsvCatalogImporter::from_path(path),
        _ => Err(CatalogError::UnsupportedSource {
            path: path.display().to_string(),
        }),
    }
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::from_code(raw).ok_or_else(|| format!("unsupported locale '{raw}' (use en or hi)"))
}
