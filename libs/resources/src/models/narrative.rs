//! Narrative model

use serde::{Deserialize, Serialize};

use super::ItemRequest;

/// Narrative entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// New narrative creation payload
pub type CreateNarrativeRequest = ItemRequest;

/// Narrative update payload
pub type UpdateNarrativeRequest = ItemRequest;
