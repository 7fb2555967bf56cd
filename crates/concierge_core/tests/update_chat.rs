use std::sync::Once;

use concierge_core::{
    update, BackendReply, ConsoleState, Effect, ItemFields, Msg, Provider, TurnSpec,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(concierge_logging::initialize_for_tests);
}

fn submit(state: ConsoleState, raw: &str) -> (ConsoleState, Vec<Effect>) {
    update(state, Msg::InputSubmitted(raw.to_string()))
}

#[test]
fn blank_submission_is_a_no_op() {
    init_logging();
    let state = ConsoleState::new();
    let before = state.view();

    let (next, effects) = submit(state, "   \n\t  ");

    assert!(effects.is_empty());
    assert_eq!(next.view(), before);
}

#[test]
fn submission_renders_clears_shows_typing_and_queries() {
    init_logging();
    let state = ConsoleState::new();

    let (next, effects) = submit(state, "  find the report  ");

    assert_eq!(
        effects,
        vec![
            Effect::AppendTurn(TurnSpec::user("find the report")),
            Effect::ClearInput,
            Effect::ShowTyping,
            Effect::SendQuery {
                text: "find the report".to_string(),
            },
        ]
    );
    assert!(next.view().typing_active);
}

#[test]
fn results_reply_removes_typing_and_appends_items() {
    init_logging();
    let state = ConsoleState::new();
    let (state, _effects) = submit(state, "emails from bob");

    let items = vec![ItemFields {
        sender: Some("bob@example.com".to_string()),
        message_id: Some("m1".to_string()),
        ..ItemFields::default()
    }];
    let (next, effects) = update(
        state,
        Msg::QueryAnswered(Ok(BackendReply::Results {
            content: "Found one.".to_string(),
            items: items.clone(),
        })),
    );

    assert_eq!(
        effects,
        vec![
            Effect::RemoveTyping,
            Effect::AppendTurn(TurnSpec::assistant("Found one.", items)),
        ]
    );
    assert!(!next.view().typing_active);
}

#[test]
fn plain_reply_appends_without_items() {
    init_logging();
    let state = ConsoleState::new();
    let (state, _effects) = submit(state, "hello");

    let (_next, effects) = update(
        state,
        Msg::QueryAnswered(Ok(BackendReply::Message {
            content: "Hi there.".to_string(),
        })),
    );

    assert_eq!(
        effects,
        vec![
            Effect::RemoveTyping,
            Effect::AppendTurn(TurnSpec::assistant("Hi there.", Vec::new())),
        ]
    );
}

#[test]
fn failed_query_renders_one_error_turn_and_clears_typing() {
    init_logging();
    let state = ConsoleState::new();
    let (state, _effects) = submit(state, "hello");

    let (next, effects) = update(
        state,
        Msg::QueryAnswered(Err("connection refused".to_string())),
    );

    assert_eq!(
        effects,
        vec![
            Effect::RemoveTyping,
            Effect::AppendTurn(TurnSpec::assistant(
                "Error connecting to backend: connection refused",
                Vec::new(),
            )),
        ]
    );
    assert!(!next.view().typing_active);
}

#[test]
fn interleaved_submissions_keep_typing_balanced() {
    init_logging();
    let state = ConsoleState::new();
    let (state, _) = submit(state, "first");
    let (state, _) = submit(state, "second");
    assert!(state.view().typing_active);

    let (state, _) = update(
        state,
        Msg::QueryAnswered(Ok(BackendReply::Message {
            content: "one".to_string(),
        })),
    );
    // One response landed; the other cycle still shows its indicator.
    assert!(state.view().typing_active);

    let (state, _) = update(
        state,
        Msg::QueryAnswered(Ok(BackendReply::Message {
            content: "two".to_string(),
        })),
    );
    assert!(!state.view().typing_active);
}

#[test]
fn open_request_becomes_a_dispatch_effect() {
    init_logging();
    let state = ConsoleState::new();

    let (_next, effects) = update(
        state,
        Msg::OpenRequested {
            id: "m2".to_string(),
            provider: Provider::Outlook,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::OpenItem {
            id: "m2".to_string(),
            provider: Provider::Outlook,
        }]
    );
}
