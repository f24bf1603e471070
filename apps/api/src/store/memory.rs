//! In-memory `DocumentStore` used by the service tests. Mirrors the Mongo
//! backend's filter, sort, projection, and patch semantics.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bson::Document;

use super::{DocumentStore, Filter, Order, Sort, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare_by(a: &Document, b: &Document, sort: &Sort) -> Ordering {
    // All sortable fields in this system are RFC 3339 strings, which order
    // correctly under lexicographic comparison.
    let left = a.get_str(&sort.field).unwrap_or("");
    let right = b.get_str(&sort.field).unwrap_or("");
    match sort.order {
        Order::Asc => left.cmp(right),
        Order::Desc => right.cmp(left),
    }
}

fn project(doc: &Document, fields: &[&str]) -> Document {
    let mut out = Document::new();
    for field in fields {
        if let Some(value) = doc.get(*field) {
            out.insert(*field, value.clone());
        }
    }
    out
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().unwrap();
        collections.entry(collection.to_string()).or_default().push(doc);
        Ok(())
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .extend(docs);
        Ok(())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Filter,
        projection: Option<&[&str]>,
        sort: Option<Sort>,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.lock().unwrap();
        let mut matched: Vec<Document> = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default();

        if let Some(sort) = &sort {
            matched.sort_by(|a, b| compare_by(a, b, sort));
        }
        if let Some(limit) = limit {
            matched.truncate(limit.max(0) as usize);
        }
        if let Some(fields) = projection {
            matched = matched.iter().map(|d| project(d, fields)).collect();
        }
        Ok(matched)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        patch: Document,
    ) -> Result<u64, StoreError> {
        let mut collections = self.collections.lock().unwrap();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let Some(target) = docs.iter_mut().find(|d| filter.matches(d)) else {
            return Ok(0);
        };
        if let Ok(set) = patch.get_document("$set") {
            for (key, value) in set {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(1)
    }

    async fn delete_one(&self, collection: &str, filter: Filter) -> Result<u64, StoreError> {
        let mut collections = self.collections.lock().unwrap();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|d| filter.matches(d)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn count(&self, collection: &str, filter: Filter) -> Result<u64, StoreError> {
        let collections = self.collections.lock().unwrap();
        let count = collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn test_find_with_eq_filter() {
        let store = MemoryStore::new();
        store
            .insert_one("entries", doc! { "id": "a", "aps_level": "APS6" })
            .await
            .unwrap();
        store
            .insert_one("entries", doc! { "id": "b", "aps_level": "EL1" })
            .await
            .unwrap();

        let found = store
            .find("entries", Filter::new().eq("aps_level", "APS6"), None, None, None)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get_str("id").unwrap(), "a");
    }

    #[tokio::test]
    async fn test_find_sorts_descending_and_limits() {
        let store = MemoryStore::new();
        for (id, ts) in [("a", "2024-01-01T00:00:00+00:00"), ("b", "2024-03-01T00:00:00+00:00"), ("c", "2024-02-01T00:00:00+00:00")] {
            store
                .insert_one("entries", doc! { "id": id, "created_at": ts })
                .await
                .unwrap();
        }

        let found = store
            .find("entries", Filter::new(), None, Some(Sort::desc("created_at")), Some(2))
            .await
            .unwrap();
        let ids: Vec<&str> = found.iter().map(|d| d.get_str("id").unwrap()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_projection_keeps_only_named_fields() {
        let store = MemoryStore::new();
        store
            .insert_one("entries", doc! { "id": "a", "tags": ["x"], "content": "secret" })
            .await
            .unwrap();

        let found = store
            .find("entries", Filter::new(), Some(&["tags"]), None, None)
            .await
            .unwrap();
        assert!(found[0].get("content").is_none());
        assert!(found[0].get_array("tags").is_ok());
    }

    #[tokio::test]
    async fn test_update_one_applies_set_patch() {
        let store = MemoryStore::new();
        store
            .insert_one("examples", doc! { "id": "a", "title": "old" })
            .await
            .unwrap();

        let matched = store
            .update_one(
                "examples",
                Filter::new().eq("id", "a"),
                doc! { "$set": { "title": "new" } },
            )
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let found = store
            .find("examples", Filter::new().eq("id", "a"), None, None, None)
            .await
            .unwrap();
        assert_eq!(found[0].get_str("title").unwrap(), "new");
    }

    #[tokio::test]
    async fn test_delete_one_counts() {
        let store = MemoryStore::new();
        store.insert_one("entries", doc! { "id": "a" }).await.unwrap();

        assert_eq!(
            store.delete_one("entries", Filter::new().eq("id", "missing")).await.unwrap(),
            0
        );
        assert_eq!(
            store.delete_one("entries", Filter::new().eq("id", "a")).await.unwrap(),
            1
        );
        assert_eq!(store.count("entries", Filter::new()).await.unwrap(), 0);
    }
}
