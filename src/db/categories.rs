//! Category repository.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::Result;
use crate::models::Category;

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub async fn insert(pool: &SqlitePool, name: &str) -> Result<Category> {
    let now = Utc::now();

    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        INSERT INTO categories (name, created_at, updated_at)
        VALUES (?, ?, ?)
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    debug!("Created category {}", row.id);
    Ok(row.into())
}

pub async fn rename(pool: &SqlitePool, id: i64, name: &str) -> Result<Option<Category>> {
    let row = sqlx::query_as::<_, CategoryRow>(
        r#"
        UPDATE categories
        SET name = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Category::from))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Category>> {
    let row = sqlx::query_as::<_, CategoryRow>(
        "SELECT id, name, created_at, updated_at FROM categories WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Category::from))
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Category>> {
    let row = sqlx::query_as::<_, CategoryRow>(
        "SELECT id, name, created_at, updated_at FROM categories WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Category::from))
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Category>> {
    let rows = sqlx::query_as::<_, CategoryRow>(
        "SELECT id, name, created_at, updated_at FROM categories ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Category::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_pool;

    #[tokio::test]
    async fn test_insert_find_list() {
        let pool = memory_pool().await;

        let lamps = insert(&pool, "Lamps").await.unwrap();
        insert(&pool, "Chairs").await.unwrap();

        assert_eq!(
            find_by_name(&pool, "Lamps").await.unwrap().unwrap().id,
            lamps.id
        );
        assert_eq!(list_all(&pool).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_rename() {
        let pool = memory_pool().await;

        let category = insert(&pool, "Lamps").await.unwrap();
        let renamed = rename(&pool, category.id, "Lighting").await.unwrap().unwrap();

        assert_eq!(renamed.name, "Lighting");
        assert!(rename(&pool, 999, "Nothing").await.unwrap().is_none());
    }
}
