use std::collections::BTreeSet;

use crate::attachment::PendingAttachment;
use crate::format::WELCOME_TEXT;
use crate::timeline::{DispatchId, MessageId, Sender, Timeline, Timestamp};
use crate::view_model::WidgetViewModel;

/// Screen-edge offset of the floating widget, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOffset {
    pub x: f64,
    pub y: f64,
}

impl Default for DragOffset {
    fn default() -> Self {
        // Initial bottom-right offset.
        Self { x: 20.0, y: 20.0 }
    }
}

/// Pointer position and widget offset captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    start_x: f64,
    start_y: f64,
    origin: DragOffset,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct DragState {
    offset: DragOffset,
    anchor: Option<DragAnchor>,
}

/// Process-wide widget session state. The timeline is the only state the
/// presentation layer consumes for the conversation; the rest is chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    timeline: Timeline,
    composer: String,
    pending_attachment: Option<PendingAttachment>,
    attachment_warning: Option<String>,
    in_flight: BTreeSet<DispatchId>,
    next_dispatch_id: DispatchId,
    open: bool,
    drag: DragState,
    dirty: bool,
}

impl WidgetState {
    /// Fresh session whose timeline is seeded with the welcome greeting.
    pub fn new(opened_at: Timestamp) -> Self {
        let mut timeline = Timeline::new();
        timeline.append(WELCOME_TEXT, Sender::Bot, opened_at, false);
        Self {
            timeline,
            composer: String::new(),
            pending_attachment: None,
            attachment_warning: None,
            in_flight: BTreeSet::new(),
            next_dispatch_id: 1,
            open: false,
            drag: DragState::default(),
            dirty: true,
        }
    }

    pub fn view(&self) -> WidgetViewModel {
        WidgetViewModel {
            messages: self.timeline.snapshot(),
            is_typing: self.is_typing(),
            open: self.open,
            position: self.drag.offset,
            composer: self.composer.clone(),
            attachment_name: self
                .pending_attachment
                .as_ref()
                .map(|a| a.file_name.clone()),
            attachment_warning: self.attachment_warning.clone(),
            dirty: self.dirty,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// True while any dispatched batch still has deliveries outstanding.
    pub fn is_typing(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Returns the dirty flag and clears it; hosts re-render on true.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn composer(&self) -> &str {
        &self.composer
    }

    pub(crate) fn set_composer(&mut self, text: String) {
        self.composer = text;
        self.mark_dirty();
    }

    pub(crate) fn take_composer(&mut self) -> String {
        std::mem::take(&mut self.composer)
    }

    pub(crate) fn has_attachment(&self) -> bool {
        self.pending_attachment.is_some()
    }

    pub(crate) fn store_attachment(&mut self, attachment: PendingAttachment) {
        self.pending_attachment = Some(attachment);
        self.attachment_warning = None;
        self.mark_dirty();
    }

    /// Consumes the staged attachment; called once per dispatch regardless
    /// of the dispatch outcome.
    pub(crate) fn take_attachment(&mut self) -> Option<PendingAttachment> {
        self.pending_attachment.take()
    }

    pub(crate) fn warn_attachment(&mut self, warning: impl Into<String>) {
        self.attachment_warning = Some(warning.into());
        self.mark_dirty();
    }

    pub(crate) fn append_message(
        &mut self,
        text: impl Into<String>,
        sender: Sender,
        at: Timestamp,
        has_attachment: bool,
    ) -> MessageId {
        self.mark_dirty();
        self.timeline.append(text, sender, at, has_attachment)
    }

    /// Allocates the next dispatch id and marks its batch in flight.
    pub(crate) fn begin_dispatch(&mut self) -> DispatchId {
        let id = self.next_dispatch_id;
        self.next_dispatch_id += 1;
        self.in_flight.insert(id);
        self.mark_dirty();
        id
    }

    pub(crate) fn finish_dispatch(&mut self, dispatch_id: DispatchId) {
        self.in_flight.remove(&dispatch_id);
        self.mark_dirty();
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        if self.open != open {
            self.open = open;
            self.mark_dirty();
        }
    }

    pub(crate) fn drag_started(&mut self, x: f64, y: f64) {
        self.drag.anchor = Some(DragAnchor {
            start_x: x,
            start_y: y,
            origin: self.drag.offset,
        });
    }

    /// Applies the pointer delta against the offset captured at drag start,
    /// clamped so the widget never leaves the viewport edge.
    pub(crate) fn drag_moved(&mut self, x: f64, y: f64) {
        let Some(anchor) = self.drag.anchor else {
            return;
        };
        self.drag.offset = DragOffset {
            x: (anchor.origin.x + (x - anchor.start_x)).max(0.0),
            y: (anchor.origin.y + (y - anchor.start_y)).max(0.0),
        };
        self.mark_dirty();
    }

    pub(crate) fn drag_ended(&mut self) {
        self.drag.anchor = None;
    }
}
