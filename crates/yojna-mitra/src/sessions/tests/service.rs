use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::catalog::Catalog;
use crate::localization::Locale;
use crate::matching::{MatchConfig, MatchEngine, MatchError};
use crate::sessions::domain::{MessageOrigin, SessionError, SessionId};
use crate::sessions::repository::{RepositoryError, SessionStore};
use crate::sessions::service::{SessionService, SessionServiceError};

#[test]
fn start_session_persists_and_greets() {
    let (service, store) = build_service();
    let snapshot = service.start_session(None).expect("session starts");

    assert_eq!(snapshot.stage, "age");
    assert_eq!(snapshot.progress, 0);
    assert!(snapshot.awaiting_input);
    assert_eq!(snapshot.transcript.len(), 2);

    let stored = store
        .fetch(&SessionId(snapshot.session_id.clone()))
        .expect("fetch succeeds")
        .expect("session persisted");
    assert_eq!(stored.transcript().len(), 2);
}

#[test]
fn answers_echo_and_prompt_in_one_reply_without_delay() {
    let (service, _) = build_service();
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);

    let reply = service.submit_answer(&id, "34").expect("answer accepted");
    assert_eq!(reply.new_messages.len(), 2);
    assert_eq!(reply.new_messages[0].origin, MessageOrigin::User);
    assert_eq!(reply.new_messages[1].origin, MessageOrigin::System);
    assert_eq!(reply.progress, 20);
    assert!(!reply.is_complete);
    assert!(reply.choices.is_none(), "state question is free text");
}

#[test]
fn choice_questions_carry_their_option_set() {
    let (service, _) = build_service();
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);

    service.submit_answer(&id, "34").expect("age accepted");
    let reply = service
        .submit_answer(&id, "maharashtra")
        .expect("state accepted");

    let choices = reply.choices.expect("income offers choices");
    assert_eq!(choices.len(), 4);
    assert_eq!(choices[0].key, "below1");
}

#[test]
fn results_require_a_complete_profile() {
    let (service, _) = build_service();
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);
    service.submit_answer(&id, "34").expect("age accepted");

    match service.get_results(&id) {
        Err(SessionServiceError::Match(MatchError::ProfileIncomplete { progress })) => {
            assert_eq!(progress, 20)
        }
        other => panic!("expected incomplete profile error, got {other:?}"),
    }
}

#[test]
fn completed_conversations_rank_the_catalog() {
    let (service, _) = build_service();
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);
    complete_conversation(&service, &id);

    let matches = service.get_results(&id).expect("results available");
    assert!(!matches.is_empty());
    assert_eq!(matches[0].program.id.0, "pm_kisan");
    for pair in matches.windows(2) {
        assert!(pair[0].score >= pair[1].score, "descending order");
    }
    assert_eq!(service.get_progress(&id).expect("progress"), 100);
}

#[test]
fn results_resolve_the_session_locale() {
    let (service, _) = build_service();
    let snapshot = service
        .start_session(Some(Locale::Hi))
        .expect("session starts");
    let id = SessionId(snapshot.session_id);
    complete_conversation(&service, &id);

    let matches = service.get_results(&id).expect("results available");
    assert!(matches[0].program.name.contains("किसान"));
}

#[test]
fn closed_sessions_reject_further_answers() {
    let (service, _) = build_service();
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);
    complete_conversation(&service, &id);

    match service.submit_answer(&id, "more") {
        Err(SessionServiceError::Session(SessionError::SessionClosed)) => {}
        other => panic!("expected closed session, got {other:?}"),
    }
}

#[test]
fn unknown_sessions_report_not_found() {
    let (service, _) = build_service();
    match service.get_session(&SessionId("missing".to_owned())) {
        Err(SessionServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn store_failures_surface_as_repository_errors() {
    let service = SessionService::new(
        Arc::new(UnavailableStore),
        Arc::new(Catalog::bundled()),
        Arc::new(MatchEngine::new(MatchConfig::default())),
        Locale::En,
        Duration::ZERO,
    );

    match service.start_session(None) {
        Err(SessionServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}

#[tokio::test]
async fn delayed_prompts_arrive_after_the_composing_window() {
    let (service, _) = build_service_with_delay(Duration::from_millis(20));
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);

    let reply = service.submit_answer(&id, "34").expect("answer accepted");
    assert_eq!(reply.new_messages.len(), 1, "prompt is still composing");

    let snapshot = service.get_session(&id).expect("snapshot");
    assert!(!snapshot.awaiting_input);

    tokio::time::sleep(Duration::from_millis(120)).await;

    let snapshot = service.get_session(&id).expect("snapshot");
    assert!(snapshot.awaiting_input);
    assert_eq!(snapshot.stage, "state");
    assert_eq!(
        snapshot.transcript.last().expect("prompt delivered").origin,
        MessageOrigin::System
    );
}

#[tokio::test]
async fn reset_cancels_a_scheduled_prompt() {
    let (service, _) = build_service_with_delay(Duration::from_millis(40));
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);

    service.submit_answer(&id, "34").expect("answer accepted");
    let snapshot = service.reset_session(&id).expect("reset succeeds");
    assert_eq!(snapshot.progress, 0);
    assert_eq!(snapshot.transcript.len(), 2);

    tokio::time::sleep(Duration::from_millis(150)).await;

    let snapshot = service.get_session(&id).expect("snapshot");
    assert_eq!(
        snapshot.transcript.len(),
        2,
        "no stale prompt lands after the reset"
    );
    assert_eq!(snapshot.stage, "age");
    assert!(snapshot.awaiting_input);
}

#[test]
fn ending_a_session_removes_it_from_the_store() {
    let (service, store) = build_service();
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);

    service.end_session(&id).expect("session ends");
    assert!(store.fetch(&id).expect("fetch succeeds").is_none());

    match service.end_session(&id) {
        Err(SessionServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn ending_a_session_cancels_its_scheduled_prompt() {
    let (service, store) = build_service_with_delay(Duration::from_millis(40));
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);

    service.submit_answer(&id, "34").expect("answer accepted");
    service.end_session(&id).expect("session ends");
    assert_eq!(service.scheduled_deliveries(), 0);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(store.fetch(&id).expect("fetch succeeds").is_none());
}

#[tokio::test]
async fn delivered_prompts_release_their_scheduling_slot() {
    let (service, _) = build_service_with_delay(Duration::from_millis(20));
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);

    service.submit_answer(&id, "34").expect("answer accepted");
    assert_eq!(service.scheduled_deliveries(), 1);

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(
        service.scheduled_deliveries(),
        0,
        "spent handle is cleared after delivery"
    );
}

#[tokio::test]
async fn submissions_during_the_composing_window_are_rejected() {
    let (service, _) = build_service_with_delay(Duration::from_millis(30));
    let snapshot = service.start_session(None).expect("session starts");
    let id = SessionId(snapshot.session_id);

    service.submit_answer(&id, "34").expect("answer accepted");
    match service.submit_answer(&id, "Maharashtra") {
        Err(SessionServiceError::Session(SessionError::InvalidInput(_))) => {}
        other => panic!("expected rejection while composing, got {other:?}"),
    }

    tokio::time::sleep(Duration::from_millis(120)).await;
    service
        .submit_answer(&id, "Maharashtra")
        .expect("accepted after delivery");
}
