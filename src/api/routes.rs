//! API Routes
//!
//! Configures the Axum router with all shop endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::categories::{
    create_category_handler, get_category_handler, list_categories_handler,
    update_category_handler,
};
use super::orders::{create_order_handler, get_order_handler};
use super::products::{
    create_product_handler, get_product_handler, list_products_handler, update_product_handler,
};
use super::users::{get_user_handler, login_handler, register_handler};
use super::{health_handler, welcome_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .route("/api/users/register", post(register_handler))
        .route("/api/users/login", post(login_handler))
        .route("/api/users/:id", get(get_user_handler))
        .route(
            "/api/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/api/categories/:id",
            get(get_category_handler).put(update_category_handler),
        )
        .route(
            "/api/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/api/products/:id",
            get(get_product_handler).patch(update_product_handler),
        )
        .route("/api/orders", post(create_order_handler))
        .route("/api/orders/:id", get(get_order_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
