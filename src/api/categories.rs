//! Category handlers.
//!
//! Reads are uncached; writes are admin-only and perform no cache
//! invalidation (cached product listings age out on their own TTL).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::api::{validated, AppState};
use crate::auth::AdminUser;
use crate::db::categories;
use crate::error::{ApiError, Result};
use crate::models::{CategoriesEnvelope, CategoryCreated, CategoryEnvelope, CategoryPayload};

/// Handler for POST /api/categories (admin)
pub async fn create_category_handler(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<CategoryCreated>)> {
    validated(&payload)?;

    if categories::find_by_name(&state.db, &payload.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(format!(
            "Category with name {} already exists",
            payload.name
        )));
    }

    let category = categories::insert(&state.db, &payload.name).await?;
    info!("Created category {}", category.id);

    Ok((StatusCode::CREATED, Json(CategoryCreated::new(category))))
}

/// Handler for GET /api/categories
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoriesEnvelope>> {
    let categories = categories::list_all(&state.db).await?;
    Ok(Json(CategoriesEnvelope { categories }))
}

/// Handler for GET /api/categories/:id
pub async fn get_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CategoryEnvelope>> {
    let category = categories::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    Ok(Json(CategoryEnvelope { category }))
}

/// Handler for PUT /api/categories/:id (admin)
pub async fn update_category_handler(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<CategoryEnvelope>> {
    validated(&payload)?;

    let category = categories::rename(&state.db, id, &payload.name)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    Ok(Json(CategoryEnvelope { category }))
}
