//! Entry service: free-text entries tagged via the LLM at submission time.

pub mod handlers;
pub mod prompts;

use std::collections::BTreeSet;

use crate::errors::AppError;
use crate::llm::ChatClient;
use crate::models::entry::{StoredEntry, COLLECTION};
use crate::store::{decode, encode, DocumentStore, Filter, Sort};

/// Listing cap carried over from the source system.
const LIST_LIMIT: i64 = 1000;

/// Splits an LLM tagging response into tags: comma-separated, trimmed, empty
/// fragments discarded. Deliberately permissive — the prompt asks for 3-5
/// tags but any count (including zero) is accepted.
pub fn parse_tags(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Derives tags for `content` via the LLM, then persists the entry with
/// `created_at == updated_at == now`. Tag generation happens before any store
/// write, so a failed LLM call leaves nothing persisted.
pub async fn submit_entry(
    store: &dyn DocumentStore,
    llm: &dyn ChatClient,
    content: &str,
) -> Result<StoredEntry, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation("content must not be empty".to_string()));
    }

    let response = llm
        .complete(prompts::TAGGING_SYSTEM, &prompts::tagging_prompt(content), "tagging", &[])
        .await?;
    let tags = parse_tags(&response);

    let entry = StoredEntry::new(content.to_string(), tags);
    store.insert_one(COLLECTION, encode(&entry)?).await?;
    Ok(entry)
}

/// Lists entries newest-first, optionally narrowed to those carrying `tag`
/// (exact membership, post-parse casing).
pub async fn list_entries(
    store: &dyn DocumentStore,
    tag: Option<&str>,
) -> Result<Vec<StoredEntry>, AppError> {
    let mut filter = Filter::new();
    if let Some(tag) = tag {
        filter = filter.eq("tags", tag);
    }

    let docs = store
        .find(
            COLLECTION,
            filter,
            None,
            Some(Sort::desc("created_at")),
            Some(LIST_LIMIT),
        )
        .await?;
    let entries = docs
        .into_iter()
        .map(decode::<StoredEntry>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Union of all tags across all entries, lexicographically sorted,
/// de-duplicated.
pub async fn list_tags(store: &dyn DocumentStore) -> Result<Vec<String>, AppError> {
    let docs = store
        .find(COLLECTION, Filter::new(), Some(&["tags"]), None, None)
        .await?;

    let mut tags = BTreeSet::new();
    for doc in &docs {
        if let Ok(stored) = doc.get_array("tags") {
            for tag in stored {
                if let Some(tag) = tag.as_str() {
                    tags.insert(tag.to_string());
                }
            }
        }
    }
    Ok(tags.into_iter().collect())
}

pub async fn delete_entry(store: &dyn DocumentStore, id: &str) -> Result<(), AppError> {
    let deleted = store
        .delete_one(COLLECTION, Filter::new().eq("id", id))
        .await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Entry not found".to_string()));
    }
    Ok(())
}
