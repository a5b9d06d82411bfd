use chrono::{DateTime, Utc};

/// Instant type used for every message timestamp.
pub type Timestamp = DateTime<Utc>;

/// Monotonic per-timeline message token.
pub type MessageId = u64;

/// Monotonic per-session dispatch token; one dispatch produces one batch.
pub type DispatchId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    System,
}

/// One entry of the conversation log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: Timestamp,
    pub has_attachment: bool,
}

/// Append-only ordered log of messages; insertion order is display order.
///
/// Ids are assigned at append time and strictly increase. There is no
/// removal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    messages: Vec<Message>,
    next_id: MessageId,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    pub(crate) fn append(
        &mut self,
        text: impl Into<String>,
        sender: Sender,
        timestamp: Timestamp,
        has_attachment: bool,
    ) -> MessageId {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text: text.into(),
            sender,
            timestamp,
            has_attachment,
        });
        id
    }

    /// Owned copy of the log in display order.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
