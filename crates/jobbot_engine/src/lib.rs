//! JobBot engine: backend adapters and the timed delivery scheduler.
//!
//! The engine owns one background thread with a tokio runtime; commands are
//! fire-and-forget and results surface as [`EngineEvent`]s on an mpsc
//! channel, which the session drains on its own thread.
mod backends;
mod engine;
mod types;

pub use backends::{
    BackendSettings, ChatBackend, HttpChatBackend, HttpJobSearchBackend, JobSearchBackend,
};
pub use engine::{Clock, EngineConfig, EngineHandle};
pub use types::{
    AdapterError, AdapterErrorKind, ChatReply, DispatchId, DispatchOutcome, EngineEvent, JobRecord,
    Timestamp,
};
