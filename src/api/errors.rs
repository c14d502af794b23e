//! # API Errors
//!
//! Failure taxonomy for document operations. The wire contract does not
//! distinguish bad input from a lookup miss or a backend fault: every
//! variant surfaces as status 404 with an `{ "err": … }` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::ErrorResponse;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    // ==================
    // Validation
    // ==================
    /// Write request without a collection name
    #[error("Collection name required.")]
    MissingCollection,

    /// Write request without a document name
    #[error("Document name required.")]
    MissingDocument,

    /// Delete request without a collection name
    #[error("Collection name is empty.")]
    DeleteMissingCollection,

    /// Delete request without a document name
    #[error("Document name is empty.")]
    DeleteMissingDocument,

    /// Read request without a collection name
    #[error("No collection name is present to query.")]
    QueryMissingCollection,

    /// Read request without a document name
    #[error("No document name is present to query.")]
    QueryMissingDocument,

    // ==================
    // Conflict / Lookup
    // ==================
    /// Create attempted on a document that already exists
    #[error("Document, {0}, already exists.")]
    AlreadyExists(String),

    /// Lookup missed
    #[error("Unable to find the document for {0}.")]
    DocumentNotFound(String),

    // ==================
    // Backend
    // ==================
    /// Backend accepted the write but returned no commit timestamp
    #[error("Write time not present from database.")]
    WriteUnconfirmed,

    /// Failure raised by the document store, message passed through
    #[error("{0}")]
    Backend(String),
}

impl ApiError {
    /// HTTP status code for this error. The contract collapses every
    /// failure kind, validation included, to 404.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Backend(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
