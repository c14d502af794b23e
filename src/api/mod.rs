//! # API Layer
//!
//! Request parsing, CRUD dispatch, and response mapping for the document
//! service.
//!
//! # Design Principles
//!
//! - One logical store operation per request, no cross-request state
//! - Dispatch by HTTP method: POST writes, DELETE deletes, anything else reads
//! - Every failure maps to one 404 `{ "err": … }` response through a single path
//!
//! # Supported Operations
//!
//! - write (create, or merge-update with the `update` flag)
//! - delete
//! - read (single document, or a whole collection with `allDocs`)

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult};
pub use handler::ApiHandler;
pub use request::{DeleteParams, ReadParams, WriteRequest};
pub use response::{DataResponse, ErrorResponse};
