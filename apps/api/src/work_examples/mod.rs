//! Work example service: structured narratives with capability/behaviour/tag
//! associations, multi-field filtering, and free-text search.

pub mod handlers;

use std::collections::BTreeSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::work_example::{WorkExample, COLLECTION};
use crate::store::{decode, encode, DocumentStore, Filter, Sort};

const LIST_LIMIT: i64 = 1000;

/// Create/update payload. List fields default to empty when omitted; on
/// update every structured field is replaced wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkExampleInput {
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
}

/// Conjunctive listing filters. Empty-string parameters count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub aps_level: Option<String>,
    pub capability: Option<String>,
    pub behaviour: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub capabilities: Vec<String>,
    pub behaviours: Vec<String>,
    pub tags: Vec<String>,
    pub aps_levels: Vec<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn build_filter(query: &ListQuery) -> Filter {
    let mut filter = Filter::new();
    if let Some(level) = present(&query.aps_level) {
        filter = filter.eq("aps_level", level);
    }
    if let Some(capability) = present(&query.capability) {
        filter = filter.eq("capabilities", capability);
    }
    if let Some(behaviour) = present(&query.behaviour) {
        filter = filter.eq("behaviours", behaviour);
    }
    if let Some(tag) = present(&query.tag) {
        filter = filter.eq("tags", tag);
    }
    if let Some(search) = present(&query.search) {
        filter = filter.contains_any(&["title", "example_text"], search);
    }
    filter
}

pub async fn create(
    store: &dyn DocumentStore,
    input: WorkExampleInput,
) -> Result<WorkExample, AppError> {
    let example = WorkExample {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        example_text: input.example_text,
        role: input.role,
        aps_level: input.aps_level,
        capabilities: input.capabilities,
        behaviours: input.behaviours,
        tags: input.tags,
        date_created: Utc::now(),
    };
    store.insert_one(COLLECTION, encode(&example)?).await?;
    Ok(example)
}

pub async fn list(
    store: &dyn DocumentStore,
    query: &ListQuery,
) -> Result<Vec<WorkExample>, AppError> {
    let docs = store
        .find(
            COLLECTION,
            build_filter(query),
            None,
            Some(Sort::desc("date_created")),
            Some(LIST_LIMIT),
        )
        .await?;
    let examples = docs
        .into_iter()
        .map(decode::<WorkExample>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(examples)
}

pub async fn get(store: &dyn DocumentStore, id: &str) -> Result<WorkExample, AppError> {
    let mut docs = store
        .find(COLLECTION, Filter::new().eq("id", id), None, None, Some(1))
        .await?;
    match docs.pop() {
        Some(doc) => Ok(decode(doc)?),
        None => Err(AppError::NotFound("Work example not found".to_string())),
    }
}

/// Replaces all structured fields; `id` and `date_created` are immutable.
pub async fn update(
    store: &dyn DocumentStore,
    id: &str,
    input: WorkExampleInput,
) -> Result<WorkExample, AppError> {
    let existing = get(store, id).await?;

    let replaced = WorkExample {
        id: existing.id,
        title: input.title,
        example_text: input.example_text,
        role: input.role,
        aps_level: input.aps_level,
        capabilities: input.capabilities,
        behaviours: input.behaviours,
        tags: input.tags,
        date_created: existing.date_created,
    };

    let matched = store
        .update_one(
            COLLECTION,
            Filter::new().eq("id", id),
            bson::doc! { "$set": encode(&replaced)? },
        )
        .await?;
    if matched == 0 {
        return Err(AppError::NotFound("Work example not found".to_string()));
    }
    Ok(replaced)
}

pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), AppError> {
    let deleted = store
        .delete_one(COLLECTION, Filter::new().eq("id", id))
        .await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Work example not found".to_string()));
    }
    Ok(())
}

/// Scans all stored examples and unions each list field plus the scalar
/// `aps_level` into sorted, de-duplicated sequences. Empty-string levels from
/// incomplete data stay in the result.
pub async fn filter_options(store: &dyn DocumentStore) -> Result<FilterOptions, AppError> {
    let docs = store
        .find(COLLECTION, Filter::new(), None, None, None)
        .await?;

    let mut capabilities = BTreeSet::new();
    let mut behaviours = BTreeSet::new();
    let mut tags = BTreeSet::new();
    let mut aps_levels = BTreeSet::new();

    for doc in docs {
        let example: WorkExample = decode(doc)?;
        capabilities.extend(example.capabilities);
        behaviours.extend(example.behaviours);
        tags.extend(example.tags);
        aps_levels.insert(example.aps_level);
    }

    Ok(FilterOptions {
        capabilities: capabilities.into_iter().collect(),
        behaviours: behaviours.into_iter().collect(),
        tags: tags.into_iter().collect(),
        aps_levels: aps_levels.into_iter().collect(),
    })
}
