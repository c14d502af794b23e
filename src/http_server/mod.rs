//! # HTTP Server Module
//!
//! Axum transport for the document API.
//!
//! # Endpoints
//!
//! - `/` - Document operations, dispatched by HTTP method
//! - `/health` - Health check

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
