//! # API Requests
//!
//! Typed views over the inbound body and query string.

use std::collections::HashMap;

use serde::Deserialize;

use crate::store::Fields;

/// Body of a write (create or update) request.
///
/// Every field is defaulted, so an absent or unreadable body parses as an
/// empty request and fails field validation downstream instead of at the
/// transport layer. `update` lives outside `value`; only `value` is ever
/// written, so the flag can never end up stored as a document field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WriteRequest {
    pub collection: String,
    pub document: String,
    pub update: bool,
    pub value: Fields,
}

impl WriteRequest {
    /// Parse a raw request body. Absent and malformed bodies both become
    /// the empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Query parameters of a read request
#[derive(Debug, Clone, Default)]
pub struct ReadParams {
    pub collection: Option<String>,
    pub document: Option<String>,
    pub all_docs: bool,
}

impl ReadParams {
    /// Extract read parameters from the query string
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        Self {
            collection: query.get("collection").cloned(),
            document: query.get("document").cloned(),
            all_docs: query
                .get("allDocs")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

/// Query parameters of a delete request
#[derive(Debug, Clone, Default)]
pub struct DeleteParams {
    pub collection: Option<String>,
    pub document: Option<String>,
}

impl DeleteParams {
    /// Extract delete parameters from the query string
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        Self {
            collection: query.get("collection").cloned(),
            document: query.get("document").cloned(),
        }
    }
}
