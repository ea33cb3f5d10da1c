//! Order repository.
//!
//! Orders persist a snapshot of the purchased lines taken at insert time.
//! The snapshot is never re-derived from live product rows, so later price
//! or description changes leave historical orders untouched.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::Result;
use crate::models::Order;

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    customer_id: Option<String>,
    payment_intent_id: Option<String>,
    products: String,
    sub_total: String,
    total: Option<f64>,
    shipping: Option<String>,
    delivery_status: String,
    payment_status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            user_id: row.user_id,
            customer_id: row.customer_id,
            payment_intent_id: row.payment_intent_id,
            products: parse_json(&row.products),
            sub_total: parse_json(&row.sub_total),
            total: row.total,
            shipping: row.shipping.as_deref().map(parse_json),
            delivery_status: row.delivery_status,
            payment_status: row.payment_status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn parse_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

const COLUMNS: &str = "id, user_id, customer_id, payment_intent_id, products, sub_total, \
                       total, shipping, delivery_status, payment_status, created_at, updated_at";

/// Snapshot fields stored for a new order.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub user_id: i64,
    /// Purchased lines with name, brand, and price frozen at purchase time
    pub products: Value,
    /// Per-line subtotals
    pub sub_total: Value,
    pub total: f64,
    pub shipping: Option<Value>,
    pub payment_status: String,
}

pub async fn insert(pool: &SqlitePool, record: &OrderRecord) -> Result<Order> {
    let now = Utc::now();

    let row = sqlx::query_as::<_, OrderRow>(&format!(
        r#"
        INSERT INTO orders (user_id, products, sub_total, total, shipping,
                            delivery_status, payment_status, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, 'Pending', ?, ?, ?)
        RETURNING {COLUMNS}
        "#,
    ))
    .bind(record.user_id)
    .bind(record.products.to_string())
    .bind(record.sub_total.to_string())
    .bind(record.total)
    .bind(record.shipping.as_ref().map(|s| s.to_string()))
    .bind(&record.payment_status)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    debug!("Created order {} for user {}", row.id, record.user_id);
    Ok(row.into())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(&format!("SELECT {COLUMNS} FROM orders WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Order::from))
}
