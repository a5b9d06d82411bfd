use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Instant stamped onto scheduled deliveries.
pub type Timestamp = DateTime<Utc>;

/// Monotonic token identifying one dispatch and its delivery batch.
pub type DispatchId = u64;

/// A job listing as normalized by the search adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub posted: String,
    pub skills_required: Option<String>,
    pub experience_required: Option<String>,
    pub company_website: Option<String>,
    pub apply_link: Option<String>,
    pub hr_email: Option<String>,
    pub hr_contact: Option<String>,
}

/// A single reply from the chat backend. A missing `reply` field normalizes
/// to an empty string; the formatter substitutes the fixed fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdapterErrorKind {
    /// Transport failure or a non-2xx status from either backend.
    #[error("backend unreachable")]
    Unreachable,
    /// The payload decoded but lacked the expected shape. Rendered to the
    /// user exactly like `Unreachable`; the distinction only matters in logs.
    #[error("malformed backend response")]
    MalformedResponse,
}

/// Normalized adapter failure. Never raised past the adapter boundary; it is
/// carried as a value until the formatter turns it into a system message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AdapterError {
    pub kind: AdapterErrorKind,
    pub message: String,
}

impl AdapterError {
    pub(crate) fn new(kind: AdapterErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The terminal result of one dispatch's backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    JobSearch(Result<Vec<JobRecord>, AdapterError>),
    Chat(Result<ChatReply, AdapterError>),
}

/// Events emitted by the engine toward the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The backend call for a dispatch finished, successfully or not.
    DispatchResolved {
        dispatch_id: DispatchId,
        outcome: DispatchOutcome,
    },
    /// One scheduled message of a delivery batch is due for appending.
    /// `last` is true only on the final message of the batch.
    Delivery {
        dispatch_id: DispatchId,
        body: String,
        timestamp: Timestamp,
        last: bool,
    },
}

/// Wire shape of one job listing; every field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JobPostingWire {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub posted: Option<String>,
    pub skills_required: Option<String>,
    pub experience_required: Option<String>,
    pub company_website: Option<String>,
    pub apply_link: Option<String>,
    pub hr_email: Option<String>,
    pub hr_contact: Option<String>,
}

/// Wire shape of the search response; an absent `results` key is a valid,
/// successful empty outcome.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponseWire {
    #[serde(default)]
    pub results: Vec<JobPostingWire>,
}

/// Wire shape of the chat response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatReplyWire {
    pub reply: Option<String>,
}

impl From<JobPostingWire> for JobRecord {
    fn from(wire: JobPostingWire) -> Self {
        Self {
            title: wire.title.unwrap_or_default(),
            company: wire.company.unwrap_or_default(),
            location: wire.location.unwrap_or_default(),
            job_type: wire.job_type.unwrap_or_default(),
            salary: wire.salary.unwrap_or_default(),
            posted: wire.posted.unwrap_or_default(),
            skills_required: wire.skills_required,
            experience_required: wire.experience_required,
            company_website: wire.company_website,
            apply_link: wire.apply_link,
            hr_email: wire.hr_email,
            hr_contact: wire.hr_contact,
        }
    }
}
