//! Essay model

use serde::{Deserialize, Serialize};

use super::ItemRequest;

/// Essay entity
///
/// `id` and the timestamps are server-owned and passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Essay {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// New essay creation payload
pub type CreateEssayRequest = ItemRequest;

/// Essay update payload
pub type UpdateEssayRequest = ItemRequest;
