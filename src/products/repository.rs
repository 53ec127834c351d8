// Database repository for product records

use sqlx::PgPool;
use uuid::Uuid;

use crate::products::error::ProductError;
use crate::products::models::Product;

/// Repository for product operations
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new ProductRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List products, most recent first, optionally bounded
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Product>, ProductError> {
        let products = match limit {
            Some(n) => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, user_id, title, description, summary, tags, created_at, updated_at \
                     FROM products ORDER BY created_at DESC LIMIT $1",
                )
                .bind(n)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, user_id, title, description, summary, tags, created_at, updated_at \
                     FROM products ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(products)
    }

    /// Find a product by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, user_id, title, description, summary, tags, created_at, updated_at \
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Insert a new product owned by `user_id`
    pub async fn insert(
        &self,
        user_id: i32,
        title: &str,
        description: &str,
        summary: &str,
        tags: &[String],
    ) -> Result<Product, ProductError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (user_id, title, description, summary, tags)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, description, summary, tags, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(summary)
        .bind(tags)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Replace a product's content fields
    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        summary: &str,
        tags: &[String],
    ) -> Result<Product, ProductError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET title = $1,
                description = $2,
                summary = $3,
                tags = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING id, user_id, title, description, summary, tags, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(summary)
        .bind(tags)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Delete a product, returning how many rows went away
    pub async fn delete(&self, id: Uuid) -> Result<u64, ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
