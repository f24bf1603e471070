use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "work_examples";

/// A user-authored narrative describing a past action — the unit being
/// assessed or catalogued. The capability/behaviour/tag associations are
/// caller-supplied free-form strings; they are expected to align with the
/// ILS reference names but are not validated against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExample {
    pub id: String,
    pub title: String,
    pub example_text: String,
    pub role: String,
    pub aps_level: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub behaviours: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date_created: DateTime<Utc>,
}
