//! # API Handler
//!
//! CRUD semantics over an injected [`DocumentStore`]. Each call is fully
//! determined by its inputs; nothing is held between requests beyond the
//! store handle itself.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use crate::store::DocumentStore;

use super::errors::{ApiError, ApiResult};
use super::request::{DeleteParams, ReadParams, WriteRequest};

/// Handler for document operations, generic over the backing store
pub struct ApiHandler<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> ApiHandler<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a document, or merge fields into an existing one when the
    /// `update` flag is set.
    ///
    /// Creates stamp a `ctime` field (epoch milliseconds) into the stored
    /// value; merges never touch it, so the creation time survives updates.
    /// The existence check and the write are separate store calls: two
    /// concurrent creates of the same document can race, and the store's
    /// own write ordering decides the winner.
    pub async fn write(&self, req: WriteRequest) -> ApiResult<Value> {
        let ctime = Utc::now().timestamp_millis();

        let collection = req.collection.trim();
        let document = req.document.trim();

        if collection.is_empty() {
            return Err(ApiError::MissingCollection);
        }
        if document.is_empty() {
            return Err(ApiError::MissingDocument);
        }

        let existing = self.store.get_document(collection, document).await?;
        if existing.is_some() && !req.update {
            return Err(ApiError::AlreadyExists(document.to_string()));
        }

        let confirmation = if req.update {
            self.store
                .set_document(collection, document, req.value, true)
                .await?
        } else {
            let mut fields = req.value;
            fields.insert("ctime".to_string(), Value::from(ctime));
            self.store
                .set_document(collection, document, fields, false)
                .await?
        };

        // A write the backend cannot time-stamp is treated as failed.
        if confirmation.write_time.is_none() {
            return Err(ApiError::WriteUnconfirmed);
        }

        debug!(collection, document, update = req.update, "document written");
        Ok(Value::String("OK".to_string()))
    }

    /// Delete a document. No existence check: removing a document that is
    /// not there succeeds.
    pub async fn delete(&self, params: DeleteParams) -> ApiResult<Value> {
        let collection = params.collection.as_deref().map(str::trim).unwrap_or("");
        let document = params.document.as_deref().map(str::trim).unwrap_or("");

        if collection.is_empty() {
            return Err(ApiError::DeleteMissingCollection);
        }
        if document.is_empty() {
            return Err(ApiError::DeleteMissingDocument);
        }

        self.store.delete_document(collection, document).await?;

        debug!(collection, document, "document deleted");
        Ok(Value::String("OK".to_string()))
    }

    /// Read a single document, or every document in a collection when
    /// `allDocs` is set.
    pub async fn read(&self, params: ReadParams) -> ApiResult<Value> {
        let collection = params.collection.as_deref().map(str::trim).unwrap_or("");
        if collection.is_empty() {
            return Err(ApiError::QueryMissingCollection);
        }

        if params.all_docs {
            let docs = self.store.list_documents(collection).await?;
            return Ok(Value::Array(docs.into_iter().map(Value::Object).collect()));
        }

        let document = params.document.as_deref().map(str::trim).unwrap_or("");
        if document.is_empty() {
            return Err(ApiError::QueryMissingDocument);
        }

        match self.store.get_document(collection, document).await? {
            Some(fields) => Ok(Value::Object(fields)),
            None => Err(ApiError::DocumentNotFound(document.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use crate::store::{
        Fields, MemoryStore, StoreError, StoreResult, WriteConfirmation,
    };

    use super::*;

    fn handler() -> ApiHandler<MemoryStore> {
        ApiHandler::new(Arc::new(MemoryStore::new()))
    }

    fn fields(value: Value) -> Fields {
        value.as_object().expect("object fixture").clone()
    }

    fn write_req(collection: &str, document: &str, update: bool, value: Value) -> WriteRequest {
        WriteRequest {
            collection: collection.to_string(),
            document: document.to_string(),
            update,
            value: fields(value),
        }
    }

    fn read_params(collection: &str, document: &str) -> ReadParams {
        ReadParams {
            collection: Some(collection.to_string()),
            document: Some(document.to_string()),
            all_docs: false,
        }
    }

    /// Store stub that fails every call with a backend error.
    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn get_document(&self, _: &str, _: &str) -> StoreResult<Option<Fields>> {
            Err(StoreError::backend("backend unavailable"))
        }

        async fn set_document(
            &self,
            _: &str,
            _: &str,
            _: Fields,
            _: bool,
        ) -> StoreResult<WriteConfirmation> {
            Err(StoreError::backend("backend unavailable"))
        }

        async fn delete_document(&self, _: &str, _: &str) -> StoreResult<()> {
            Err(StoreError::backend("backend unavailable"))
        }

        async fn list_documents(&self, _: &str) -> StoreResult<Vec<Fields>> {
            Err(StoreError::backend("backend unavailable"))
        }
    }

    /// Store stub that accepts writes but never confirms them.
    struct UnconfirmedStore;

    #[async_trait]
    impl DocumentStore for UnconfirmedStore {
        async fn get_document(&self, _: &str, _: &str) -> StoreResult<Option<Fields>> {
            Ok(None)
        }

        async fn set_document(
            &self,
            _: &str,
            _: &str,
            _: Fields,
            _: bool,
        ) -> StoreResult<WriteConfirmation> {
            Ok(WriteConfirmation { write_time: None })
        }

        async fn delete_document(&self, _: &str, _: &str) -> StoreResult<()> {
            Ok(())
        }

        async fn list_documents(&self, _: &str) -> StoreResult<Vec<Fields>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_create_stamps_ctime() {
        let handler = handler();

        let data = handler
            .write(write_req("users", "alice", false, json!({"name": "Alice"})))
            .await
            .unwrap();
        assert_eq!(data, json!("OK"));

        let doc = handler.read(read_params("users", "alice")).await.unwrap();
        assert_eq!(doc["name"], "Alice");
        assert!(doc["ctime"].is_i64());
    }

    #[tokio::test]
    async fn test_create_requires_collection_and_document() {
        let handler = handler();

        let err = handler
            .write(write_req("", "alice", false, json!({})))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::MissingCollection);

        let err = handler
            .write(write_req("users", "   ", false, json!({})))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::MissingDocument);
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let handler = handler();
        handler
            .write(write_req("users", "alice", false, json!({"name": "Alice"})))
            .await
            .unwrap();

        let err = handler
            .write(write_req("users", "alice", false, json!({"name": "Alice"})))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::AlreadyExists("alice".to_string()));
    }

    #[tokio::test]
    async fn test_update_merges_and_preserves_ctime() {
        let handler = handler();
        handler
            .write(write_req("users", "alice", false, json!({"name": "Alice"})))
            .await
            .unwrap();
        let before = handler.read(read_params("users", "alice")).await.unwrap();

        handler
            .write(write_req("users", "alice", true, json!({"phone": "+1-525-555-1111"})))
            .await
            .unwrap();

        let after = handler.read(read_params("users", "alice")).await.unwrap();
        assert_eq!(after["name"], "Alice");
        assert_eq!(after["phone"], "+1-525-555-1111");
        assert_eq!(after["ctime"], before["ctime"]);
    }

    #[tokio::test]
    async fn test_existence_check_failure_maps_to_backend_error() {
        let handler = ApiHandler::new(Arc::new(FailingStore));

        let err = handler
            .write(write_req("users", "alice", false, json!({})))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Backend("backend unavailable".to_string()));
    }

    #[tokio::test]
    async fn test_unconfirmed_write_fails() {
        let handler = ApiHandler::new(Arc::new(UnconfirmedStore));

        let err = handler
            .write(write_req("users", "alice", false, json!({})))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::WriteUnconfirmed);
    }

    #[tokio::test]
    async fn test_delete_validates_before_touching_store() {
        // FailingStore errors on every call: validation failures prove the
        // store was never contacted.
        let handler = ApiHandler::new(Arc::new(FailingStore));

        let err = handler.delete(DeleteParams::default()).await.unwrap_err();
        assert_eq!(err, ApiError::DeleteMissingCollection);

        let err = handler
            .delete(DeleteParams {
                collection: Some("users".to_string()),
                document: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::DeleteMissingDocument);
    }

    #[tokio::test]
    async fn test_delete_missing_document_succeeds() {
        let handler = handler();

        let data = handler
            .delete(DeleteParams {
                collection: Some("users".to_string()),
                document: Some("nobody".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(data, json!("OK"));
    }

    #[tokio::test]
    async fn test_read_miss_is_not_found() {
        let handler = handler();

        let err = handler.read(read_params("users", "nobody")).await.unwrap_err();
        assert_eq!(err, ApiError::DocumentNotFound("nobody".to_string()));
    }

    #[tokio::test]
    async fn test_read_requires_names() {
        let handler = handler();

        let err = handler.read(ReadParams::default()).await.unwrap_err();
        assert_eq!(err, ApiError::QueryMissingCollection);

        let err = handler
            .read(ReadParams {
                collection: Some("users".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::QueryMissingDocument);
    }

    #[tokio::test]
    async fn test_read_all_docs_lists_collection() {
        let handler = handler();
        handler
            .write(write_req("users", "alice", false, json!({"name": "Alice"})))
            .await
            .unwrap();
        handler
            .write(write_req("users", "bob", false, json!({"name": "Bob"})))
            .await
            .unwrap();

        let data = handler
            .read(ReadParams {
                collection: Some("users".to_string()),
                document: None,
                all_docs: true,
            })
            .await
            .unwrap();

        let docs = data.as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d.get("name").is_some()));
    }
}
