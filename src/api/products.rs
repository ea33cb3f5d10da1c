//! Product handlers.
//!
//! The two GET routes are the read-through cache's callers: they consult the
//! cache first, fall back to the database, then populate the cache under a
//! key derived from the request identity. Writes bypass the cache entirely
//! and perform no invalidation; stale listings age out within the TTL.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::api::{validated, AppState};
use crate::auth::AdminUser;
use crate::db::products::{self, ProductRecord};
use crate::error::{ApiError, Result};
use crate::models::{ProductCreated, ProductListResponse, ProductPayload};

/// Products per listing page.
const PAGE_SIZE: i64 = 5;

/// Query parameters for GET /api/products
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPageQuery {
    #[serde(default)]
    pub page: Option<i64>,
}

/// Builds the cache key for a listing page. The page number is part of the
/// key because the cache has no per-parameter awareness of its own.
fn listing_key(page: i64) -> String {
    format!("products?page={}", page)
}

/// Builds the cache key for a product detail lookup.
fn detail_key(id: i64) -> String {
    format!("products/{}", id)
}

/// Handler for GET /api/products?page=<n>
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(query): Query<ProductPageQuery>,
) -> Result<Json<Value>> {
    let page = query.page.unwrap_or(1).max(1);
    let key = listing_key(page);

    if let Some(cached) = state.cache.write().await.get(&key) {
        debug!("Cache hit for {}", key);
        return Ok(Json(cached));
    }
    debug!("Cache miss for {}", key);

    let total = products::count(&state.db).await?;
    let offset = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let items = products::list(&state.db, PAGE_SIZE, offset).await?;

    let body = serde_json::to_value(ProductListResponse {
        products: items,
        total,
    })
    .map_err(|e| ApiError::Internal(format!("failed to serialize listing: {}", e)))?;

    state
        .cache
        .write()
        .await
        .put(key, body.clone(), state.cache_ttl_ms);

    Ok(Json(body))
}

/// Handler for GET /api/products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let key = detail_key(id);

    if let Some(cached) = state.cache.write().await.get(&key) {
        debug!("Cache hit for {}", key);
        return Ok(Json(cached));
    }
    debug!("Cache miss for {}", key);

    // A missing product stays a miss: 404s are never cached.
    let product = products::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product with id {} does not exist", id)))?;

    let body = serde_json::to_value(product)
        .map_err(|e| ApiError::Internal(format!("failed to serialize product: {}", e)))?;

    state
        .cache
        .write()
        .await
        .put(key, body.clone(), state.cache_ttl_ms);

    Ok(Json(body))
}

/// Handler for POST /api/products (admin)
pub async fn create_product_handler(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductCreated>)> {
    validated(&payload)?;

    if products::find_by_name(&state.db, &payload.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Product already exists".to_string()));
    }

    let asset = state.media.upload(&payload.image).await?;
    let record = record_from(payload, &asset)?;
    let product = products::insert(&state.db, &record).await?;

    info!("Created product {}", product.id);
    Ok((StatusCode::CREATED, Json(ProductCreated::created(product))))
}

/// Handler for PATCH /api/products/:id (admin)
pub async fn update_product_handler(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductCreated>> {
    if products::find_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::Conflict(format!(
            "Product with id {} does not exist",
            id
        )));
    }

    validated(&payload)?;

    let asset = state.media.upload(&payload.image).await?;
    let record = record_from(payload, &asset)?;
    let product = products::update(&state.db, id, &record)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product with id {} does not exist", id)))?;

    info!("Updated product {}", product.id);
    Ok(Json(ProductCreated::updated(product)))
}

fn record_from(payload: ProductPayload, asset: &crate::media::MediaAsset) -> Result<ProductRecord> {
    let image = serde_json::to_value(asset)
        .map_err(|e| ApiError::Internal(format!("failed to serialize asset: {}", e)))?;

    Ok(ProductRecord {
        name: payload.name,
        brand: payload.brand,
        description: payload.description,
        price: payload.price,
        image,
        category_id: payload.category_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_state;
    use crate::auth::AuthClaims;
    use crate::db::categories;
    use crate::media::test_support::FailingMediaHost;
    use serde_json::json;
    use std::sync::Arc;

    fn admin() -> AdminUser {
        AdminUser(AuthClaims {
            id: 1,
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            is_admin: true,
            exp: 0,
        })
    }

    fn lamp_payload(name: &str, category_id: i64) -> ProductPayload {
        ProductPayload {
            name: name.to_string(),
            brand: "Lumen".to_string(),
            description: "A small desk lamp".to_string(),
            price: 39.99,
            image: "data:image/png;base64,AAAA".to_string(),
            category_id,
        }
    }

    async fn seed_products(state: &AppState, n: usize) {
        let category = categories::insert(&state.db, "Lamps").await.unwrap();
        for i in 0..n {
            create_product_handler(
                admin(),
                State(state.clone()),
                Json(lamp_payload(&format!("Lamp {}", i), category.id)),
            )
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn test_create_stores_media_descriptor() {
        let state = test_state().await;
        seed_products(&state, 1).await;

        let response = get_product_handler(State(state), Path(1)).await.unwrap();
        assert_eq!(
            response.0["image"]["secure_url"],
            json!("https://media.test/stub.png")
        );
    }

    #[tokio::test]
    async fn test_listing_populates_cache() {
        let state = test_state().await;
        seed_products(&state, 2).await;

        list_products_handler(
            State(state.clone()),
            Query(ProductPageQuery { page: None }),
        )
        .await
        .unwrap();

        let cached = state.cache.write().await.get("products?page=1");
        assert_eq!(cached.unwrap()["total"], json!(2));
    }

    #[tokio::test]
    async fn test_listing_served_from_cache_until_ttl() {
        let state = test_state().await;
        seed_products(&state, 1).await;

        let first = list_products_handler(
            State(state.clone()),
            Query(ProductPageQuery { page: Some(1) }),
        )
        .await
        .unwrap();
        assert_eq!(first.0["total"], json!(1));

        // A second product lands but the cached page is still served
        let category_id = categories::find_by_name(&state.db, "Lamps")
            .await
            .unwrap()
            .unwrap()
            .id;
        create_product_handler(
            admin(),
            State(state.clone()),
            Json(lamp_payload("Lamp stale", category_id)),
        )
        .await
        .unwrap();

        let second = list_products_handler(
            State(state.clone()),
            Query(ProductPageQuery { page: Some(1) }),
        )
        .await
        .unwrap();
        assert_eq!(second.0["total"], json!(1), "staleness window is accepted");
    }

    #[tokio::test]
    async fn test_listing_pages_use_distinct_keys() {
        let state = test_state().await;
        seed_products(&state, 7).await;

        let page1 = list_products_handler(
            State(state.clone()),
            Query(ProductPageQuery { page: Some(1) }),
        )
        .await
        .unwrap();
        let page2 = list_products_handler(
            State(state.clone()),
            Query(ProductPageQuery { page: Some(2) }),
        )
        .await
        .unwrap();

        assert_eq!(page1.0["products"].as_array().unwrap().len(), 5);
        assert_eq!(page2.0["products"].as_array().unwrap().len(), 2);

        let mut cache = state.cache.write().await;
        assert!(cache.get("products?page=1").is_some());
        assert!(cache.get("products?page=2").is_some());
    }

    #[tokio::test]
    async fn test_listing_huge_page_number_is_empty_not_panic() {
        let state = test_state().await;
        seed_products(&state, 1).await;

        let response = list_products_handler(
            State(state),
            Query(ProductPageQuery {
                page: Some(i64::MAX),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0["products"].as_array().unwrap().len(), 0);
        assert_eq!(response.0["total"], json!(1));
    }

    #[tokio::test]
    async fn test_missing_product_is_404_and_not_cached() {
        let state = test_state().await;

        let result = get_product_handler(State(state.clone()), Path(404)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert!(state.cache.write().await.get("products/404").is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let state = test_state().await;
        seed_products(&state, 1).await;

        let dup = create_product_handler(
            admin(),
            State(state.clone()),
            Json(lamp_payload("Lamp 0", 1)),
        )
        .await;
        assert!(matches!(dup, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_unknown_product() {
        let state = test_state().await;

        let result = update_product_handler(
            admin(),
            State(state),
            Path(999),
            Json(lamp_payload("Ghost lamp", 1)),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_failed_upload_does_not_create_product() {
        let mut state = test_state().await;
        state.media = Arc::new(FailingMediaHost);
        let category = categories::insert(&state.db, "Lamps").await.unwrap();

        let result = create_product_handler(
            admin(),
            State(state.clone()),
            Json(lamp_payload("Desk lamp", category.id)),
        )
        .await;
        assert!(matches!(result, Err(ApiError::Media(_))));
        assert_eq!(crate::db::products::count(&state.db).await.unwrap(), 0);
    }
}
