//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD operations
//! - Stock is changed here only through `update`; order placement
//!   decrements it inside the order transaction (see `order.rs`)

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{logged, DbError, DbResult};
use crate::store::ProductStore;
use stockroom_core::{NewProduct, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(logged("products.count"))?;

        Ok(count)
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        debug!(id, "Fetching product");

        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(logged("products.find_by_id"))?;

        Ok(product)
    }

    async fn find_all(&self) -> DbResult<Vec<Product>> {
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, quantity FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(logged("products.find_all"))?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    async fn insert(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.name, quantity = product.quantity, "Inserting product");

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, quantity) VALUES (?1, ?2) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(logged("products.insert"))?;

        Ok(id)
    }

    /// Updates name and quantity.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    /// * `Err(DbError::CheckViolation)` - Quantity would be negative
    async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, quantity = product.quantity, "Updating product");

        let result = sqlx::query("UPDATE products SET name = ?2, quantity = ?3 WHERE id = ?1")
            .bind(product.id)
            .bind(&product.name)
            .bind(product.quantity)
            .execute(&self.pool)
            .await
            .map_err(logged("products.update"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(logged("products.delete"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }
}
