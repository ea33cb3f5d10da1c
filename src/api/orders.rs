//! Order handlers.
//!
//! Placing an order snapshots the purchased lines - name, brand, and price
//! as they stand at purchase time - so the stored order is immune to later
//! catalog edits.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::api::{validated, AppState};
use crate::auth::AuthUser;
use crate::db::orders::{self, OrderRecord};
use crate::db::products;
use crate::error::{ApiError, Result};
use crate::models::{CreateOrderRequest, Order, OrderCreated};

/// Handler for POST /api/orders (authenticated)
pub async fn create_order_handler(
    user: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderCreated>)> {
    validated(&req)?;

    let mut lines = Vec::with_capacity(req.items.len());
    let mut sub_totals = Vec::with_capacity(req.items.len());
    let mut total = 0.0;

    for item in &req.items {
        let product = products::find_by_id(&state.db, item.product_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Product with id {} does not exist", item.product_id))
            })?;

        let line_total = product.price * f64::from(item.quantity);
        lines.push(json!({
            "productId": product.id,
            "name": product.name,
            "brand": product.brand,
            "price": product.price,
            "quantity": item.quantity,
        }));
        sub_totals.push(json!(line_total));
        total += line_total;
    }

    let order = orders::insert(
        &state.db,
        &OrderRecord {
            user_id: user.id,
            products: json!(lines),
            sub_total: json!(sub_totals),
            total,
            shipping: req.shipping,
            payment_status: req.payment_status.unwrap_or_else(|| "Pending".to_string()),
        },
    )
    .await?;

    info!("Placed order {} for user {}", order.id, user.id);
    Ok((StatusCode::CREATED, Json(OrderCreated::new(order))))
}

/// Handler for GET /api/orders/:id (owner or admin)
pub async fn get_order_handler(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>> {
    let order = orders::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    if order.user_id != user.id && !user.is_admin {
        return Err(ApiError::Forbidden(
            "You cannot view someone else's order".to_string(),
        ));
    }

    Ok(Json(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_state;
    use crate::auth::AuthClaims;
    use crate::db::categories;
    use crate::db::products::ProductRecord;
    use crate::models::OrderItem;

    async fn seed_user(state: &AppState, id: i64) -> AuthUser {
        let user = crate::db::users::insert(
            &state.db,
            "Buyer",
            &format!("buyer{}@example.com", id),
            "hash",
            false,
        )
        .await
        .unwrap();
        assert_eq!(user.id, id);
        caller(id, false)
    }

    fn caller(id: i64, is_admin: bool) -> AuthUser {
        AuthUser(AuthClaims {
            id,
            name: "Buyer".to_string(),
            email: format!("buyer{}@example.com", id),
            is_admin,
            exp: 0,
        })
    }

    async fn seed_product(state: &AppState, price: f64) -> i64 {
        let category = categories::insert(&state.db, "Lamps").await.unwrap();
        products::insert(
            &state.db,
            &ProductRecord {
                name: "Desk lamp".to_string(),
                brand: "Lumen".to_string(),
                description: "A small desk lamp".to_string(),
                price,
                image: json!({"public_id": "lamp"}),
                category_id: category.id,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_order_snapshots_price_and_totals() {
        let state = test_state().await;
        let buyer = seed_user(&state, 1).await;
        let product_id = seed_product(&state, 39.99).await;

        let (status, created) = create_order_handler(
            buyer,
            State(state.clone()),
            Json(CreateOrderRequest {
                items: vec![OrderItem {
                    product_id,
                    quantity: 2,
                }],
                shipping: None,
                payment_status: Some("Paid".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.order.total, Some(79.98));
        assert_eq!(created.order.products[0]["price"], json!(39.99));
        assert_eq!(created.order.sub_total[0], json!(79.98));
        assert_eq!(created.order.delivery_status, "Pending");
    }

    #[tokio::test]
    async fn test_order_unknown_product() {
        let state = test_state().await;

        let result = create_order_handler(
            caller(1, false),
            State(state),
            Json(CreateOrderRequest {
                items: vec![OrderItem {
                    product_id: 404,
                    quantity: 1,
                }],
                shipping: None,
                payment_status: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_order_visible_to_owner_and_admin_only() {
        let state = test_state().await;
        let buyer = seed_user(&state, 1).await;
        let product_id = seed_product(&state, 10.0).await;

        let (_, created) = create_order_handler(
            buyer,
            State(state.clone()),
            Json(CreateOrderRequest {
                items: vec![OrderItem {
                    product_id,
                    quantity: 1,
                }],
                shipping: None,
                payment_status: None,
            }),
        )
        .await
        .unwrap();
        let order_id = created.order.id;

        assert!(get_order_handler(caller(1, false), State(state.clone()), Path(order_id))
            .await
            .is_ok());
        assert!(get_order_handler(caller(9, true), State(state.clone()), Path(order_id))
            .await
            .is_ok());
        assert!(matches!(
            get_order_handler(caller(2, false), State(state), Path(order_id)).await,
            Err(ApiError::Forbidden(_))
        ));
    }
}
