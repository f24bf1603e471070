use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const COLLECTION: &str = "stored_entries";

/// A stored free-text entry with LLM-derived tags.
///
/// Timestamps serialize to RFC 3339 text for storage and are reparsed on
/// read. Unknown stored fields are ignored on read (schema-tolerance policy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredEntry {
    pub fn new(content: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            tags,
            created_at: now,
            updated_at: now,
        }
    }
}
