use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::localization::{Locale, LocalizationError};
use crate::matching::{MatchError, ProgramSummary};

use super::domain::{SessionError, SessionId};
use super::repository::{RepositoryError, SessionStore};
use super::service::{SessionService, SessionServiceError};

/// Router builder exposing the conversational endpoints.
pub fn session_router<S>(service: Arc<SessionService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/sessions", post(start_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id",
            get(snapshot_handler::<S>).delete(end_handler::<S>),
        )
        .route("/api/v1/programs/search", get(program_search_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id/answer",
            post(answer_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/choice",
            post(choice_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/reset",
            post(reset_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/results",
            get(results_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StartSessionBody {
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerBody {
    text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceBody {
    key: String,
}

pub(crate) async fn start_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    body: Option<axum::Json<StartSessionBody>>,
) -> Response
where
    S: SessionStore + 'static,
{
    let requested = body.and_then(|axum::Json(body)| body.locale);
    let locale = match requested {
        Some(code) => match Locale::from_code(&code) {
            Some(locale) => Some(locale),
            None => {
                let payload = json!({ "error": format!("unsupported locale '{code}'") });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
            }
        },
        None => None,
    };

    match service.start_session(locale) {
        Ok(snapshot) => (StatusCode::CREATED, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn snapshot_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.get_session(&SessionId(session_id)) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn end_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.end_session(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramSearchQuery {
    q: String,
    #[serde(default)]
    locale: Option<String>,
}

pub(crate) async fn program_search_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Query(query): Query<ProgramSearchQuery>,
) -> Result<axum::Json<serde_json::Value>, AppError>
where
    S: SessionStore + 'static,
{
    let locale = match query.locale {
        Some(code) => Locale::from_code(&code)
            .ok_or_else(|| LocalizationError::UnsupportedLocale(code))?,
        None => service.default_locale(),
    };

    let programs: Vec<ProgramSummary> = service
        .catalog()
        .search(&query.q)
        .into_iter()
        .map(|program| ProgramSummary::localized(program, locale))
        .collect();

    Ok(axum::Json(json!({ "programs": programs })))
}

pub(crate) async fn answer_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(body): axum::Json<AnswerBody>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.submit_answer(&SessionId(session_id), &body.text) {
        Ok(reply) => (StatusCode::OK, axum::Json(reply)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn choice_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(body): axum::Json<ChoiceBody>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.submit_choice(&SessionId(session_id), &body.key) {
        Ok(reply) => (StatusCode::OK, axum::Json(reply)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.reset_session(&SessionId(session_id)) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.get_results(&SessionId(session_id)) {
        Ok(matches) => {
            let payload = json!({ "matches": matches });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: SessionServiceError) -> Response {
    let status = match &error {
        SessionServiceError::Session(SessionError::InvalidField(_))
        | SessionServiceError::Session(SessionError::InvalidInput(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SessionServiceError::Session(SessionError::SessionClosed) => StatusCode::CONFLICT,
        SessionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SessionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SessionServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        SessionServiceError::Match(MatchError::ProfileIncomplete { .. }) => StatusCode::CONFLICT,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
