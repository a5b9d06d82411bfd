use std::sync::Once;

use chrono::{TimeZone, Utc};
use jobbot_core::attachment::ATTACHMENT_WARNING_TEXT;
use jobbot_core::{update, Msg, Timestamp, WidgetState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(widget_logging::initialize_for_tests);
}

fn at(secs: i64) -> Timestamp {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn select(state: WidgetState, file_name: &str, media_type: &str) -> WidgetState {
    let (state, effects) = update(
        state,
        Msg::AttachmentSelected {
            file_name: file_name.to_string(),
            media_type: media_type.to_string(),
            at: at(1),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn pdf_is_accepted_and_confirmed() {
    init_logging();
    let state = WidgetState::new(at(0));
    let state = select(state, "resume.pdf", "application/pdf");

    let view = state.view();
    assert_eq!(view.attachment_name.as_deref(), Some("resume.pdf"));
    assert_eq!(view.attachment_warning, None);
    assert_eq!(
        view.messages.last().unwrap().text,
        "📄 Resume uploaded successfully: resume.pdf"
    );
}

#[test]
fn document_mime_family_is_accepted() {
    init_logging();
    let state = WidgetState::new(at(0));
    let state = select(
        state,
        "resume.docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    );

    assert_eq!(state.view().attachment_name.as_deref(), Some("resume.docx"));
}

#[test]
fn executable_is_rejected_without_side_effects() {
    init_logging();
    let state = WidgetState::new(at(0));
    let state = select(state, "setup.exe", "application/x-msdownload");

    let view = state.view();
    assert_eq!(view.attachment_name, None);
    assert_eq!(view.attachment_warning.as_deref(), Some(ATTACHMENT_WARNING_TEXT));
    // No message is appended for a rejected pick.
    assert_eq!(view.messages.len(), 1);
}

#[test]
fn accepted_pick_clears_an_earlier_warning() {
    init_logging();
    let state = WidgetState::new(at(0));
    let state = select(state, "setup.exe", "application/x-msdownload");
    let state = select(state, "resume.pdf", "application/pdf");

    let view = state.view();
    assert_eq!(view.attachment_warning, None);
    assert_eq!(view.attachment_name.as_deref(), Some("resume.pdf"));
}

#[test]
fn replacement_pick_overwrites_the_staged_file() {
    init_logging();
    let state = WidgetState::new(at(0));
    let state = select(state, "old.pdf", "application/pdf");
    let state = select(state, "new.pdf", "application/pdf");

    assert_eq!(state.view().attachment_name.as_deref(), Some("new.pdf"));
}
