//! Embeddable conversational widget session.
//!
//! Wires the pure core state machine to the IO engine: user input flows in
//! through [`WidgetSession`], classified dispatches execute on the engine
//! thread, and scheduled deliveries drain back into the timeline through
//! [`WidgetSession::process_pending`]. The presentation layer renders from
//! [`WidgetSession::view`] and is otherwise external to this crate.
mod effects;
mod logging;
mod session;

pub use jobbot_core::{
    DragOffset, Intent, Message, MessageId, Sender, Timestamp, WidgetViewModel,
};
pub use logging::{initialize, LogDestination};
pub use session::{WidgetConfig, WidgetSession};
