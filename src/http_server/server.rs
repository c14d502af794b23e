//! # HTTP Server
//!
//! Axum server exposing the document API. The whole CRUD surface hangs off
//! a single route dispatched by method (the shape of the function-style
//! deployment this service fronts), plus a health check.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{ApiError, ApiHandler, DataResponse, DeleteParams, ReadParams, WriteRequest};
use crate::store::DocumentStore;

use super::config::HttpServerConfig;

/// HTTP server over an injected document store
pub struct HttpServer<S: DocumentStore> {
    config: HttpServerConfig,
    handler: Arc<ApiHandler<S>>,
}

impl<S: DocumentStore + 'static> HttpServer<S> {
    /// Create a new HTTP server with default configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: S, config: HttpServerConfig) -> Self {
        Self {
            config,
            handler: Arc::new(ApiHandler::new(Arc::new(store))),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        // Configure CORS from config
        let cors = if self.config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .route("/", any(dispatch_handler::<S>))
            .with_state(self.handler)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        info!(%addr, "starting document API server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

/// Dispatch a request to the matching document operation.
///
/// POST writes, DELETE deletes, every other method reads. Writes take their
/// inputs from the JSON body; deletes and reads from the query string.
async fn dispatch_handler<S: DocumentStore + 'static>(
    State(handler): State<Arc<ApiHandler<S>>>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Json<DataResponse>, ApiError> {
    let data = match method {
        Method::POST => handler.write(WriteRequest::from_body(&body)).await?,
        Method::DELETE => handler.delete(DeleteParams::from_query(&query)).await?,
        _ => handler.read(ReadParams::from_query(&query)).await?,
    };

    Ok(Json(DataResponse::new(data)))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
