use async_trait::async_trait;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::{Client, Database};
use tracing::info;

use super::{DocumentStore, Filter, Sort, StoreError};

/// MongoDB-backed document store. One instance wraps the single database
/// handle opened at process start.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

/// Opens the MongoDB connection and pings it so a dead store fails fast at
/// startup instead of on the first request.
///
/// Returns the client alongside the store; `main` keeps the client so it can
/// shut the connection down explicitly at process exit.
pub async fn connect(uri: &str, db_name: &str) -> Result<(Client, MongoStore), StoreError> {
    info!("Connecting to MongoDB...");

    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;
    let db = client.database(db_name);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    info!("MongoDB connection established (db: {db_name})");
    Ok((client.clone(), MongoStore { db }))
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError> {
        self.db
            .collection::<Document>(collection)
            .insert_one(doc)
            .await?;
        Ok(())
    }

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError> {
        self.db
            .collection::<Document>(collection)
            .insert_many(docs)
            .await?;
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
        // The driver's `_id` is an internal detail; never hand it to callers.
        let mut proj = doc! { "_id": 0 };
        if let Some(fields) = projection {
            for field in fields {
                proj.insert(*field, 1);
            }
        }

        let coll = self.db.collection::<Document>(collection);
        let mut query = coll.find(filter.to_document()).projection(proj);
        if let Some(sort) = sort {
            query = query.sort(sort.to_document());
        }
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let docs = query.await?.try_collect().await?;
        Ok(docs)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        patch: Document,
    ) -> Result<u64, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .update_one(filter.to_document(), patch)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, collection: &str, filter: Filter) -> Result<u64, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .delete_one(filter.to_document())
            .await?;
        Ok(result.deleted_count)
    }

    async fn count(&self, collection: &str, filter: Filter) -> Result<u64, StoreError> {
        let count = self
            .db
            .collection::<Document>(collection)
            .count_documents(filter.to_document())
            .await?;
        Ok(count)
    }
}
