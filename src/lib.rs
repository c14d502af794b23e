//! docapi - document CRUD over HTTP
//!
//! A single-endpoint HTTP service that validates request fields, performs
//! one logical operation against a pluggable document store, and maps
//! results and errors onto a fixed JSON contract.

pub mod api;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod store;
