//! JobBot core: pure conversational state machine, intent routing and
//! response formatting. No IO, no clocks; the engine crate executes effects.
pub mod attachment;
mod effect;
mod format;
mod intent;
mod msg;
mod state;
mod timeline;
mod update;
mod view_model;

pub use attachment::{AttachmentError, PendingAttachment};
pub use effect::Effect;
pub use format::{
    format_outcome, AdapterFailure, ChatReply, DispatchOutcome, JobRecord, CHAT_FAILED_TEXT,
    EMPTY_REPLY_TEXT, JOBS_FAILED_TEXT, NO_JOBS_TEXT, WELCOME_TEXT,
};
pub use intent::{classify, Intent, JOB_VOCABULARY};
pub use msg::Msg;
pub use state::{DragOffset, WidgetState};
pub use timeline::{DispatchId, Message, MessageId, Sender, Timeline, Timestamp};
pub use update::update;
pub use view_model::WidgetViewModel;
