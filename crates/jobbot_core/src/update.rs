use crate::attachment::{self, ATTACHMENT_WARNING_TEXT};
use crate::intent::{classify, Intent};
use crate::timeline::Sender;
use crate::{Effect, Msg, WidgetState};

/// Pure update function: applies a message to state and returns any effects.
///
/// This is the single mutation point of the session; every timeline append
/// flows through here, so appends apply in the order their messages arrive
/// even when the deliveries originate from different in-flight batches.
pub fn update(mut state: WidgetState, msg: Msg) -> (WidgetState, Vec<Effect>) {
    let effects = match msg {
        Msg::ComposerChanged(text) => {
            state.set_composer(text);
            Vec::new()
        }
        Msg::Submitted { at } => {
            if state.composer().trim().is_empty() && !state.has_attachment() {
                return (state, Vec::new());
            }

            // The raw composer text is dispatched untrimmed; only the guard
            // above looks at the trimmed form.
            let text = state.take_composer();
            let attachment = state.take_attachment();
            state.append_message(text.clone(), Sender::User, at, attachment.is_some());

            let dispatch_id = state.begin_dispatch();
            let effect = match classify(&text) {
                Intent::JobSearch => Effect::DispatchJobSearch {
                    dispatch_id,
                    query: text,
                },
                Intent::GeneralChat => Effect::DispatchChat {
                    dispatch_id,
                    utterance: text,
                    attachment: attachment.map(|a| a.file_name),
                },
            };
            vec![effect]
        }
        Msg::AttachmentSelected {
            file_name,
            media_type,
            at,
        } => {
            match attachment::gate(&file_name, &media_type) {
                Ok(pending) => {
                    state.append_message(
                        attachment::upload_confirmation(&pending.file_name),
                        Sender::System,
                        at,
                        false,
                    );
                    state.store_attachment(pending);
                }
                Err(attachment::AttachmentError::Unsupported { .. }) => {
                    state.warn_attachment(ATTACHMENT_WARNING_TEXT);
                }
            }
            Vec::new()
        }
        Msg::OpenToggled { open } => {
            state.set_open(open);
            Vec::new()
        }
        Msg::DragStarted { x, y } => {
            state.drag_started(x, y);
            Vec::new()
        }
        Msg::DragMoved { x, y } => {
            state.drag_moved(x, y);
            Vec::new()
        }
        Msg::DragEnded => {
            state.drag_ended();
            Vec::new()
        }
        Msg::BotDelivered {
            dispatch_id,
            body,
            at,
            last,
        } => {
            state.append_message(body, Sender::Bot, at, false);
            if last {
                state.finish_dispatch(dispatch_id);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
