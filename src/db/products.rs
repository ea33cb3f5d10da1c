//! Product repository.
//!
//! The `image` column stores the media-host descriptor as JSON text; it is
//! parsed back into a JSON value on the way out.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::Result;
use crate::models::Product;

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    brand: String,
    description: String,
    price: f64,
    image: String,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let image =
            serde_json::from_str(&row.image).unwrap_or_else(|_| Value::String(row.image.clone()));

        Product {
            id: row.id,
            name: row.name,
            brand: row.brand,
            description: row.description,
            price: row.price,
            image,
            category_id: row.category_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str =
    "id, name, brand, description, price, image, category_id, created_at, updated_at";

/// Fields stored for a new or updated product.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    /// Stored-asset descriptor returned by the media host
    pub image: Value,
    pub category_id: i64,
}

pub async fn insert(pool: &SqlitePool, record: &ProductRecord) -> Result<Product> {
    let now = Utc::now();

    let row = sqlx::query_as::<_, ProductRow>(&format!(
        r#"
        INSERT INTO products (name, brand, description, price, image, category_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {COLUMNS}
        "#,
    ))
    .bind(&record.name)
    .bind(&record.brand)
    .bind(&record.description)
    .bind(record.price)
    .bind(record.image.to_string())
    .bind(record.category_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    debug!("Created product {}", row.id);
    Ok(row.into())
}

/// Overwrites every stored field of an existing product.
pub async fn update(pool: &SqlitePool, id: i64, record: &ProductRecord) -> Result<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        r#"
        UPDATE products
        SET name = ?, brand = ?, description = ?, price = ?, image = ?, category_id = ?, updated_at = ?
        WHERE id = ?
        RETURNING {COLUMNS}
        "#,
    ))
    .bind(&record.name)
    .bind(&record.brand)
    .bind(&record.description)
    .bind(record.price)
    .bind(record.image.to_string())
    .bind(record.category_id)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Product::from))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {COLUMNS} FROM products WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Product::from))
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {COLUMNS} FROM products WHERE name = ?"
    ))
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Product::from))
}

/// One page of products in insertion order.
pub async fn list(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<Product>> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {COLUMNS} FROM products ORDER BY id LIMIT ? OFFSET ?"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Product::from).collect())
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(total.0)
}
