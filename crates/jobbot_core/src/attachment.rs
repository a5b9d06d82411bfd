//! Media-type gate for files picked as the next message's attachment.

use std::fmt;

/// Warning surfaced to the user when a picked file is rejected.
pub const ATTACHMENT_WARNING_TEXT: &str = "Please upload a PDF or document file for your resume.";

/// The at-most-one file staged for the next outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttachment {
    pub file_name: String,
    pub media_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    Unsupported { media_type: String },
}

impl fmt::Display for AttachmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentError::Unsupported { media_type } => {
                write!(f, "unsupported attachment media type {media_type}")
            }
        }
    }
}

impl std::error::Error for AttachmentError {}

/// Validates a picked file's media type before it is staged.
///
/// Accepted types are exactly PDF and the generic document MIME families;
/// everything else is rejected and never reaches the dispatch pipeline.
pub fn gate(file_name: &str, media_type: &str) -> Result<PendingAttachment, AttachmentError> {
    if media_type == "application/pdf" || media_type.contains("document") {
        Ok(PendingAttachment {
            file_name: file_name.to_string(),
            media_type: media_type.to_string(),
        })
    } else {
        Err(AttachmentError::Unsupported {
            media_type: media_type.to_string(),
        })
    }
}

/// System confirmation appended when a file passes the gate.
pub fn upload_confirmation(file_name: &str) -> String {
    format!("📄 Resume uploaded successfully: {file_name}")
}
