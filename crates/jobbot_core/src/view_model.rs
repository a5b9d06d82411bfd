use crate::state::DragOffset;
use crate::timeline::Message;

/// Immutable snapshot consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetViewModel {
    /// The conversation in display order.
    pub messages: Vec<Message>,
    /// True from dispatch start until the last message of every in-flight
    /// batch has been appended.
    pub is_typing: bool,
    pub open: bool,
    pub position: DragOffset,
    pub composer: String,
    /// File name of the staged attachment, if any.
    pub attachment_name: Option<String>,
    /// Warning from the last rejected attachment pick.
    pub attachment_warning: Option<String>,
    pub dirty: bool,
}
