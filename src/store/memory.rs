//! # In-Memory Store
//!
//! HashMap-backed [`DocumentStore`]. Backs `docapi serve` when no hosted
//! database is wired in, and serves as the substitutable store for tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::{StoreError, StoreResult};
use super::{DocumentStore, Fields, WriteConfirmation};

/// Collections keyed by name, documents keyed by name within each
/// collection. BTreeMap keeps listing order stable across runs.
type Collections = HashMap<String, BTreeMap<String, Fields>>;

/// In-memory document store
pub struct MemoryStore {
    data: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_document(
        &self,
        collection: &str,
        document: &str,
    ) -> StoreResult<Option<Fields>> {
        let data = self.data.read().map_err(|_| StoreError::Poisoned)?;
        Ok(data.get(collection).and_then(|docs| docs.get(document)).cloned())
    }

    async fn set_document(
        &self,
        collection: &str,
        document: &str,
        fields: Fields,
        merge: bool,
    ) -> StoreResult<WriteConfirmation> {
        let mut data = self.data.write().map_err(|_| StoreError::Poisoned)?;
        let docs = data.entry(collection.to_string()).or_default();

        if merge {
            let existing = docs.entry(document.to_string()).or_default();
            for (key, value) in fields {
                existing.insert(key, value);
            }
        } else {
            docs.insert(document.to_string(), fields);
        }

        Ok(WriteConfirmation::at(Utc::now()))
    }

    async fn delete_document(&self, collection: &str, document: &str) -> StoreResult<()> {
        let mut data = self.data.write().map_err(|_| StoreError::Poisoned)?;
        if let Some(docs) = data.get_mut(collection) {
            docs.remove(document);
        }
        Ok(())
    }

    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<Fields>> {
        let data = self.data.read().map_err(|_| StoreError::Poisoned)?;
        Ok(data
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }
}
