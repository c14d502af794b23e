//! # API Responses
//!
//! The two JSON body shapes the service ever produces.

use serde::Serialize;
use serde_json::Value;

/// Success body: `{ "data": … }`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse {
    pub data: Value,
}

impl DataResponse {
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

/// Failure body: `{ "err": … }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub err: String,
}

impl ErrorResponse {
    pub fn new(err: impl Into<String>) -> Self {
        Self { err: err.into() }
    }
}
