//! Entity shapes as the handlers read and write them.
//!
//! Field names serialize in camelCase to keep the wire format of the API
//! stable for existing clients.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A registered shopper or admin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 hash; never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A catalog product. `image` holds the descriptor returned by the media
/// host at upload time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    pub image: Value,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A placed order.
///
/// `products` and `sub_total` are a denormalized snapshot taken at purchase
/// time; later price or description changes never alter historical orders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub customer_id: Option<String>,
    pub payment_intent_id: Option<String>,
    pub products: Value,
    pub sub_total: Value,
    pub total: Option<f64>,
    pub shipping: Option<Value>,
    pub delivery_status: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
