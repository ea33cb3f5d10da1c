//! API Module
//!
//! HTTP handlers and routing for the shop REST API.
//!
//! # Endpoints
//! - `POST /api/users/register`, `POST /api/users/login`, `GET /api/users/:id`
//! - `GET|POST /api/categories`, `GET|PUT /api/categories/:id` (writes admin-only)
//! - `GET|POST /api/products`, `GET|PATCH /api/products/:id` (writes admin-only)
//! - `POST /api/orders`, `GET /api/orders/:id` (authenticated)
//! - `GET /` - welcome banner, `GET /health` - liveness probe

pub mod categories;
pub mod orders;
pub mod products;
pub mod routes;
pub mod users;

use std::sync::Arc;

use axum::Json;
use sqlx::SqlitePool;
use tokio::sync::RwLock;
use validator::Validate;

use crate::auth::TokenProvider;
use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::media::MediaHost;
use crate::models::requests::first_validation_message;
use crate::models::{HealthResponse, MessageResponse};

pub use routes::create_router;

/// Application state shared across all handlers.
///
/// The response cache lives here behind `Arc<RwLock<...>>` for the process
/// lifetime; interleaved handler tasks share it with last-writer-wins
/// semantics on `put`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator
    pub db: SqlitePool,
    /// Read-through response cache for the product read path
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Token signing/verification
    pub tokens: Arc<TokenProvider>,
    /// External media host
    pub media: Arc<dyn MediaHost>,
    /// TTL applied to cached product responses, in milliseconds
    pub cache_ttl_ms: u64,
}

impl AppState {
    /// Creates the shared state from an open pool and configuration.
    pub fn new(db: SqlitePool, config: &Config, media: Arc<dyn MediaHost>) -> Self {
        Self {
            db,
            cache: Arc::new(RwLock::new(ResponseCache::new())),
            tokens: Arc::new(TokenProvider::new(&config.jwt_secret)),
            media,
            cache_ttl_ms: config.cache_ttl_ms,
        }
    }
}

/// Runs declared validation rules, mapping the first failure into a 400.
pub(crate) fn validated<T: Validate>(req: &T) -> Result<()> {
    req.validate()
        .map_err(|e| ApiError::Validation(first_validation_message(&e)))
}

/// Handler for GET /
pub async fn welcome_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to our online shop API..."))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
