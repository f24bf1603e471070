//! Assessment service: scores a work example against the ILS reference
//! behaviours for a target level via the LLM, with optional persistence of
//! the result.

pub mod handlers;
pub mod prompts;

use uuid::Uuid;

use crate::errors::AppError;
use crate::llm::ChatClient;
use crate::models::assessment::{SavedAssessment, COLLECTION};
use crate::reference;
use crate::store::{decode, encode, DocumentStore, Filter, Sort};

pub const DEFAULT_LEVEL: &str = "APS6";

/// Composes the prompt from the level's reference behaviours and delegates to
/// the LLM under a session scoped uniquely to this call (no cross-call
/// memory). The generated text is returned unparsed.
pub async fn assess(
    store: &dyn DocumentStore,
    llm: &dyn ChatClient,
    example_text: &str,
    aps_level: &str,
) -> Result<String, AppError> {
    let items = reference::items_for_level(store, aps_level).await?;
    let block = prompts::render_reference_block(&items);
    let prompt = prompts::assessment_prompt(example_text, aps_level, &block);

    let session_id = format!("assessment-{}", Uuid::new_v4());
    let assessment = llm
        .complete(prompts::ASSESSMENT_SYSTEM, &prompt, &session_id, &[])
        .await?;
    Ok(assessment)
}

/// Persists an assessment as-is. `example_id` is not checked against the
/// work_examples collection.
pub async fn save(
    store: &dyn DocumentStore,
    example_id: Option<String>,
    example_text: String,
    assessment_text: String,
) -> Result<SavedAssessment, AppError> {
    let saved = SavedAssessment::new(example_id, example_text, assessment_text);
    store.insert_one(COLLECTION, encode(&saved)?).await?;
    Ok(saved)
}

pub async fn list_saved(store: &dyn DocumentStore) -> Result<Vec<SavedAssessment>, AppError> {
    let docs = store
        .find(
            COLLECTION,
            Filter::new(),
            None,
            Some(Sort::desc("date_created")),
            None,
        )
        .await?;
    let saved = docs
        .into_iter()
        .map(decode::<SavedAssessment>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(saved)
}
