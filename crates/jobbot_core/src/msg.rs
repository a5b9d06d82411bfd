use crate::{DispatchId, Timestamp};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the composer text box.
    ComposerChanged(String),
    /// User submitted the composer contents for dispatch.
    Submitted { at: Timestamp },
    /// User picked a file; the attachment gate decides its fate.
    AttachmentSelected {
        file_name: String,
        media_type: String,
        at: Timestamp,
    },
    /// Widget opened or closed via the floating button.
    OpenToggled { open: bool },
    /// Pointer pressed on the widget chrome; starts a reposition drag.
    DragStarted { x: f64, y: f64 },
    /// Pointer moved while dragging.
    DragMoved { x: f64, y: f64 },
    /// Pointer released.
    DragEnded,
    /// One scheduled bot message arrived from the delivery scheduler.
    BotDelivered {
        dispatch_id: DispatchId,
        body: String,
        at: Timestamp,
        last: bool,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
