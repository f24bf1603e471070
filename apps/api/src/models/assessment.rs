use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const COLLECTION: &str = "assessments";

/// An assessment the caller chose to keep. `example_id` is a soft reference —
/// never checked against the work_examples collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAssessment {
    pub id: String,
    #[serde(default)]
    pub example_id: Option<String>,
    pub example_text: String,
    pub assessment_text: String,
    pub date_created: DateTime<Utc>,
}

impl SavedAssessment {
    pub fn new(example_id: Option<String>, example_text: String, assessment_text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            example_id,
            example_text,
            assessment_text,
            date_created: Utc::now(),
        }
    }
}
