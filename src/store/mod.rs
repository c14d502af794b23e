//! # Document Store
//!
//! The storage seam consumed by the API layer.
//!
//! A [`DocumentStore`] holds named collections of documents, each document a
//! flat mapping of field names to JSON values addressed by
//! (collection, document). Operations are async and atomic at
//! single-document granularity; whatever consistency the backing service
//! provides is what callers get. No extra layer is added here.

mod errors;
mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

/// Field mapping held by a document.
pub type Fields = Map<String, Value>;

/// Acknowledgement returned by a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteConfirmation {
    /// When the backend committed the write. A backend that reports success
    /// without a timestamp is treated as unconfirmed by the API layer.
    pub write_time: Option<DateTime<Utc>>,
}

impl WriteConfirmation {
    /// Confirmation stamped with a commit time
    pub fn at(write_time: DateTime<Utc>) -> Self {
        Self {
            write_time: Some(write_time),
        }
    }
}

/// Capability set required from a document backend
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document's fields, `None` if it does not exist
    async fn get_document(&self, collection: &str, document: &str)
        -> StoreResult<Option<Fields>>;

    /// Write a document. With `merge` set, supplied fields are combined into
    /// the existing ones (absent fields are preserved); otherwise the
    /// document is replaced wholesale, creating its collection if needed.
    async fn set_document(
        &self,
        collection: &str,
        document: &str,
        fields: Fields,
        merge: bool,
    ) -> StoreResult<WriteConfirmation>;

    /// Remove a document. Deleting a document that does not exist is not an
    /// error.
    async fn delete_document(&self, collection: &str, document: &str) -> StoreResult<()>;

    /// Fields of every document in a collection, in backend iteration order
    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<Fields>>;
}
