use crate::DispatchId;

/// IO requested by the pure update function; executed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    DispatchJobSearch {
        dispatch_id: DispatchId,
        query: String,
    },
    DispatchChat {
        dispatch_id: DispatchId,
        utterance: String,
        /// File name of the staged attachment, informational only; the
        /// bytes are never transmitted.
        attachment: Option<String>,
    },
}
