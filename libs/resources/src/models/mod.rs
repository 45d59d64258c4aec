//! Resource models for request and response payloads

pub mod essay;
pub mod narrative;

use serde::{Deserialize, Serialize};

// Re-export for convenience
pub use essay::{CreateEssayRequest, Essay, UpdateEssayRequest};
pub use narrative::{CreateNarrativeRequest, Narrative, UpdateNarrativeRequest};

/// Create/update payload shared by both resources
///
/// Identifiers and timestamps are assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub title: String,
    pub content: String,
}

impl ItemRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Response for delete operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAcknowledgment {
    pub message: String,
}
