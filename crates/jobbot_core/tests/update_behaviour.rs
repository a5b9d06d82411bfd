use std::sync::Once;

use chrono::{TimeZone, Utc};
use jobbot_core::{update, Effect, Msg, Sender, Timestamp, WidgetState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(widget_logging::initialize_for_tests);
}

fn at(secs: i64) -> Timestamp {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn submit(state: WidgetState, input: &str) -> (WidgetState, Vec<Effect>) {
    let (state, _) = update(state, Msg::ComposerChanged(input.to_string()));
    update(state, Msg::Submitted { at: at(1) })
}

#[test]
fn fresh_session_greets_the_user() {
    init_logging();
    let state = WidgetState::new(at(0));
    let view = state.view();

    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].sender, Sender::Bot);
    assert!(view.messages[0].text.contains("Welcome to Job Bot Assistance"));
    assert!(!view.is_typing);
}

#[test]
fn job_query_dispatches_to_job_search() {
    init_logging();
    let state = WidgetState::new(at(0));
    let (state, effects) = submit(state, "Looking for a python developer job in Berlin");

    let view = state.view();
    assert_eq!(view.messages.len(), 2);
    assert_eq!(view.messages[1].sender, Sender::User);
    assert_eq!(
        view.messages[1].text,
        "Looking for a python developer job in Berlin"
    );
    assert!(view.is_typing);
    assert_eq!(view.composer, "");
    assert_eq!(
        effects,
        vec![Effect::DispatchJobSearch {
            dispatch_id: 1,
            query: "Looking for a python developer job in Berlin".to_string(),
        }]
    );
}

#[test]
fn conversational_text_dispatches_to_chat() {
    init_logging();
    let state = WidgetState::new(at(0));
    let (state, effects) = submit(
        state,
        "What is a good interview answer for conflict resolution?",
    );

    assert!(state.view().is_typing);
    assert_eq!(
        effects,
        vec![Effect::DispatchChat {
            dispatch_id: 1,
            utterance: "What is a good interview answer for conflict resolution?".to_string(),
            attachment: None,
        }]
    );
}

#[test]
fn empty_submit_without_attachment_is_ignored() {
    init_logging();
    let state = WidgetState::new(at(0));
    let (state, effects) = submit(state, "   ");

    assert_eq!(state.view().messages.len(), 1);
    assert!(!state.view().is_typing);
    assert!(effects.is_empty());
}

#[test]
fn staged_attachment_rides_the_next_dispatch() {
    init_logging();
    let state = WidgetState::new(at(0));
    let (state, _) = update(
        state,
        Msg::AttachmentSelected {
            file_name: "resume.pdf".to_string(),
            media_type: "application/pdf".to_string(),
            at: at(1),
        },
    );

    // Gate acceptance appends a system confirmation and stages the file.
    let view = state.view();
    assert_eq!(view.messages.len(), 2);
    assert_eq!(view.messages[1].sender, Sender::System);
    assert_eq!(view.attachment_name.as_deref(), Some("resume.pdf"));

    let (state, effects) = submit(state, "Please review my strengths");
    let view = state.view();

    // The outgoing user message records the attachment; the slot is consumed.
    let user_message = view.messages.last().unwrap();
    assert_eq!(user_message.sender, Sender::User);
    assert!(user_message.has_attachment);
    assert_eq!(view.attachment_name, None);
    assert_eq!(
        effects,
        vec![Effect::DispatchChat {
            dispatch_id: 1,
            utterance: "Please review my strengths".to_string(),
            attachment: Some("resume.pdf".to_string()),
        }]
    );
}

#[test]
fn attachment_alone_is_enough_to_dispatch() {
    init_logging();
    let state = WidgetState::new(at(0));
    let (state, _) = update(
        state,
        Msg::AttachmentSelected {
            file_name: "resume.pdf".to_string(),
            media_type: "application/pdf".to_string(),
            at: at(1),
        },
    );
    let (_, effects) = update(state, Msg::Submitted { at: at(2) });

    assert_eq!(
        effects,
        vec![Effect::DispatchChat {
            dispatch_id: 1,
            utterance: String::new(),
            attachment: Some("resume.pdf".to_string()),
        }]
    );
}

#[test]
fn dispatch_ids_are_monotonic_across_submissions() {
    init_logging();
    let state = WidgetState::new(at(0));
    let (state, first) = submit(state, "any java opening?");
    let (_, second) = submit(state, "and a python vacancy?");

    assert_eq!(
        first,
        vec![Effect::DispatchJobSearch {
            dispatch_id: 1,
            query: "any java opening?".to_string(),
        }]
    );
    assert_eq!(
        second,
        vec![Effect::DispatchJobSearch {
            dispatch_id: 2,
            query: "and a python vacancy?".to_string(),
        }]
    );
}

#[test]
fn open_toggle_and_noop_produce_no_effects() {
    init_logging();
    let state = WidgetState::new(at(0));
    let (state, effects) = update(state, Msg::OpenToggled { open: true });
    assert!(effects.is_empty());
    assert!(state.view().open);

    let (next, effects) = update(state.clone(), Msg::NoOp);
    assert_eq!(state, next);
    assert!(effects.is_empty());
}
