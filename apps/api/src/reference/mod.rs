//! ILS Reference Catalog: immutable framework data describing competency
//! capabilities, behaviours, and applicable levels. Seeded into the store at
//! startup, read-only afterwards.

pub mod handlers;
pub mod seed;

use crate::errors::AppError;
use crate::models::reference::{ReferenceItem, COLLECTION};
use crate::store::{decode, encode, DocumentStore, Filter};

/// Inserts the seed catalog iff the collection is empty, so restarts never
/// duplicate reference rows.
pub async fn seed_reference_data(store: &dyn DocumentStore) -> Result<(), AppError> {
    let existing = store.count(COLLECTION, Filter::new()).await?;
    if existing > 0 {
        tracing::info!("ILS reference data already present ({existing} documents), skipping seed");
        return Ok(());
    }

    let items = seed::seed_items();
    let count = items.len();
    let docs = items
        .iter()
        .map(encode)
        .collect::<Result<Vec<_>, _>>()?;
    store.insert_many(COLLECTION, docs).await?;
    tracing::info!("Seeded {count} ILS reference documents");
    Ok(())
}

/// Lists reference items, optionally narrowed by level and/or capability.
pub async fn list_reference(
    store: &dyn DocumentStore,
    aps_level: Option<&str>,
    capability: Option<&str>,
) -> Result<Vec<ReferenceItem>, AppError> {
    let mut filter = Filter::new();
    if let Some(level) = aps_level {
        filter = filter.eq("aps_level", level);
    }
    if let Some(capability) = capability {
        filter = filter.eq("capability_name", capability);
    }

    let docs = store.find(COLLECTION, filter, None, None, None).await?;
    let items = docs
        .into_iter()
        .map(decode::<ReferenceItem>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

/// Fetches every reference item for one level, in store-returned order.
pub async fn items_for_level(
    store: &dyn DocumentStore,
    aps_level: &str,
) -> Result<Vec<ReferenceItem>, AppError> {
    list_reference(store, Some(aps_level), None).await
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn test_seed_has_twenty_aps6_items() {
        let items = seed::seed_items();
        assert_eq!(items.len(), 20);
        assert!(items.iter().all(|i| i.aps_level == "APS6"));
    }

    #[test]
    fn test_seed_triples_are_unique() {
        let items = seed::seed_items();
        let triples: HashSet<(String, String, String)> = items
            .iter()
            .map(|i| (i.capability_name.clone(), i.aps_level.clone(), i.behaviour.clone()))
            .collect();
        assert_eq!(triples.len(), items.len());
    }

    #[test]
    fn test_seed_covers_five_capabilities() {
        let capabilities: HashSet<String> = seed::seed_items()
            .into_iter()
            .map(|i| i.capability_name)
            .collect();
        assert_eq!(capabilities.len(), 5);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::new();
        seed_reference_data(&store).await.unwrap();
        seed_reference_data(&store).await.unwrap();
        assert_eq!(
            store
                .count(COLLECTION, crate::store::Filter::new())
                .await
                .unwrap(),
            20
        );
    }

    #[tokio::test]
    async fn test_list_reference_filters_by_capability() {
        let store = MemoryStore::new();
        seed_reference_data(&store).await.unwrap();

        let items = list_reference(&store, Some("APS6"), Some("Achieves Results"))
            .await
            .unwrap();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|i| i.capability_name == "Achieves Results"));

        let none = list_reference(&store, Some("EL1"), None).await.unwrap();
        assert!(none.is_empty());
    }
}
