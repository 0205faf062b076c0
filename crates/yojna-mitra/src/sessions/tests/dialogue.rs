use crate::localization::Locale;
use crate::sessions::dialogue::DialogueSession;
use crate::sessions::domain::{
    DialogueStage, MessageOrigin, ProfileField, SessionError, SessionId,
};

fn session() -> DialogueSession {
    DialogueSession::start(SessionId("session-test".to_owned()), Locale::En)
}

fn answer_and_deliver(session: &mut DialogueSession, raw: &str) {
    let receipt = session.submit_answer(raw).expect("answer accepted");
    session.deliver_pending(receipt.prompt_seq);
}

fn choose_and_deliver(session: &mut DialogueSession, key: &str) {
    let receipt = session.submit_choice(key).expect("choice accepted");
    session.deliver_pending(receipt.prompt_seq);
}

#[test]
fn start_emits_greeting_and_first_question() {
    let session = session();
    assert_eq!(session.stage(), DialogueStage::Age);
    assert!(session.awaiting_input());
    assert_eq!(session.transcript().len(), 2);
    assert!(session
        .transcript()
        .iter()
        .all(|message| message.origin == MessageOrigin::System));
    assert!(session.transcript()[0].text.contains("Namaste"));
}

#[test]
fn age_answers_are_normalized_to_the_first_digit_run() {
    let mut session = session();
    answer_and_deliver(&mut session, "I am 34 years old");
    assert_eq!(session.profile().value(ProfileField::Age), "34");
    assert_eq!(session.stage(), DialogueStage::State);
}

#[test]
fn state_answers_are_title_cased() {
    let mut session = session();
    answer_and_deliver(&mut session, "42");
    answer_and_deliver(&mut session, "uttar pradesh");
    assert_eq!(
        session.profile().value(ProfileField::State),
        "Uttar Pradesh"
    );
}

#[test]
fn empty_answers_are_rejected_without_advancing() {
    let mut session = session();
    match session.submit_answer("   ") {
        Err(SessionError::InvalidInput(_)) => {}
        other => panic!("expected invalid input, got {other:?}"),
    }
    assert_eq!(session.stage(), DialogueStage::Age);
    assert_eq!(session.transcript().len(), 2);
}

#[test]
fn submissions_are_rejected_while_a_prompt_is_staged() {
    let mut session = session();
    let receipt = session.submit_answer("34").expect("answer accepted");
    assert!(!session.awaiting_input());

    match session.submit_answer("Maharashtra") {
        Err(SessionError::InvalidInput(_)) => {}
        other => panic!("expected invalid input while composing, got {other:?}"),
    }

    session.deliver_pending(receipt.prompt_seq);
    assert!(session.awaiting_input());
    session.submit_answer("Maharashtra").expect("accepted after delivery");
}

#[test]
fn user_echo_immediately_precedes_the_next_prompt() {
    let mut session = session();
    answer_and_deliver(&mut session, "34");

    let transcript = session.transcript();
    let echo = &transcript[transcript.len() - 2];
    let prompt = &transcript[transcript.len() - 1];
    assert_eq!(echo.origin, MessageOrigin::User);
    assert_eq!(echo.text, "34");
    assert_eq!(prompt.origin, MessageOrigin::System);
    assert_eq!(prompt.id, echo.id + 1);
}

#[test]
fn stale_prompt_sequences_deliver_nothing() {
    let mut session = session();
    let receipt = session.submit_answer("34").expect("answer accepted");
    session.reset();

    let delivered = session.deliver_pending(receipt.prompt_seq);
    assert!(delivered.is_empty(), "reset invalidates the staged prompt");
    assert_eq!(session.stage(), DialogueStage::Age);
    assert_eq!(session.transcript().len(), 2, "only the fresh greeting pair");
}

#[test]
fn reset_restarts_the_conversation_from_scratch() {
    let mut session = session();
    answer_and_deliver(&mut session, "34");
    answer_and_deliver(&mut session, "Kerala");
    assert_eq!(session.progress(), 40);

    session.reset();
    assert_eq!(session.progress(), 0);
    assert_eq!(session.stage(), DialogueStage::Age);
    assert!(session.awaiting_input());
    assert_eq!(session.transcript().len(), 2);
    assert_eq!(session.transcript()[0].id, 0);
}

#[test]
fn choice_stages_offer_the_configured_options() {
    let mut session = session();
    answer_and_deliver(&mut session, "34");
    answer_and_deliver(&mut session, "Maharashtra");

    assert_eq!(session.stage(), DialogueStage::Income);
    let choices = session.current_choices().expect("income offers choices");
    let keys: Vec<&str> = choices.iter().map(|option| option.key.as_str()).collect();
    assert_eq!(keys, vec!["below1", "1to3", "3to8", "above8"]);
}

#[test]
fn unknown_choice_keys_are_rejected() {
    let mut session = session();
    answer_and_deliver(&mut session, "34");
    answer_and_deliver(&mut session, "Maharashtra");

    match session.submit_choice("5to9") {
        Err(SessionError::InvalidInput(message)) => {
            assert!(message.contains("5to9"))
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
    assert_eq!(session.stage(), DialogueStage::Income);
}

#[test]
fn choice_selection_stores_the_key_and_echoes_the_label() {
    let mut session = session();
    answer_and_deliver(&mut session, "34");
    answer_and_deliver(&mut session, "Maharashtra");
    choose_and_deliver(&mut session, "1to3");

    assert_eq!(session.profile().value(ProfileField::Income), "1to3");
    let echo = session
        .transcript()
        .iter()
        .rev()
        .find(|message| message.origin == MessageOrigin::User)
        .expect("user turn recorded");
    assert!(echo.text.contains("1") && echo.text.contains("3"));
}

#[test]
fn free_text_is_tolerated_during_choice_stages() {
    let mut session = session();
    answer_and_deliver(&mut session, "34");
    answer_and_deliver(&mut session, "Maharashtra");
    answer_and_deliver(&mut session, "around two lakh");

    assert_eq!(
        session.profile().value(ProfileField::Income),
        "around two lakh"
    );
    assert_eq!(session.stage(), DialogueStage::Category);
}

#[test]
fn typed_answers_are_rejected_for_non_choice_expectations() {
    let mut session = session();
    match session.submit_choice("1to3") {
        Err(SessionError::InvalidInput(message)) => assert!(message.contains("typed")),
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn completing_the_flow_closes_the_session() {
    let mut session = session();
    answer_and_deliver(&mut session, "34");
    answer_and_deliver(&mut session, "Maharashtra");
    choose_and_deliver(&mut session, "1to3");
    choose_and_deliver(&mut session, "general");

    let receipt = session.submit_choice("farmer").expect("final answer");
    assert!(receipt.is_complete);
    let closing = session.deliver_pending(receipt.prompt_seq);
    assert_eq!(closing.len(), 1);

    assert_eq!(session.stage(), DialogueStage::Complete);
    assert!(!session.awaiting_input());
    assert_eq!(session.progress(), 100);

    match session.submit_answer("anything") {
        Err(SessionError::SessionClosed) => {}
        other => panic!("expected closed session, got {other:?}"),
    }
}

#[test]
fn hindi_sessions_prompt_in_hindi() {
    let session = DialogueSession::start(SessionId("session-hi".to_owned()), Locale::Hi);
    assert!(session.transcript()[0].text.contains("नमस्ते"));
}
