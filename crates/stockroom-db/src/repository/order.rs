//! # Order Repository
//!
//! Database operations for orders, including the atomic placement step.
//!
//! ## Placement Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place(NewOrder)                                      │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    UPDATE products SET quantity = quantity - :amount                    │
//! │     WHERE id = :product AND quantity >= :amount                         │
//! │       │                                                                 │
//! │       ├── 0 rows ──► look at the product ──► ROLLBACK                  │
//! │       │                  missing  → NotFound                            │
//! │       │                  too low  → StockConflict                       │
//! │       ▼                                                                 │
//! │    INSERT INTO orders (...) RETURNING id, placed_at                     │
//! │    SELECT quantity FROM products WHERE id = :product                    │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  The write comes first, so the transaction takes SQLite's write lock   │
//! │  before it reads anything. Two placements on the same product          │
//! │  serialize on that lock and the second sees the first's decrement.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{logged, DbError, DbResult};
use crate::store::{OrderStore, PlacedOrder};
use stockroom_core::{NewOrder, Order};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Orders placed by one client, oldest first.
    pub async fn find_by_client(&self, client_id: i64) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, client_id, product_id, amount, placed_at
            FROM orders
            WHERE client_id = ?1
            ORDER BY id
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(logged("orders.find_by_client"))?;

        Ok(orders)
    }

    /// Counts orders (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(logged("orders.count"))?;

        Ok(count)
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        debug!(id, "Fetching order");

        let order = sqlx::query_as::<_, Order>(
            "SELECT id, client_id, product_id, amount, placed_at FROM orders WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(logged("orders.find_by_id"))?;

        Ok(order)
    }

    async fn find_all(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, client_id, product_id, amount, placed_at FROM orders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(logged("orders.find_all"))?;

        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    async fn insert(&self, order: &NewOrder) -> DbResult<i64> {
        debug!(
            client_id = order.client_id,
            product_id = order.product_id,
            amount = order.amount,
            "Inserting order"
        );

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (client_id, product_id, amount, placed_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(order.client_id)
        .bind(order.product_id)
        .bind(order.amount)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(logged("orders.insert"))?;

        Ok(id)
    }

    async fn place(&self, order: &NewOrder) -> DbResult<PlacedOrder> {
        debug!(
            client_id = order.client_id,
            product_id = order.product_id,
            amount = order.amount,
            "Placing order"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let decremented = sqlx::query(
            r#"
            UPDATE products
            SET quantity = quantity - ?2
            WHERE id = ?1 AND quantity >= ?2
            "#,
        )
        .bind(order.product_id)
        .bind(order.amount)
        .execute(&mut *tx)
        .await
        .map_err(logged("orders.place.decrement"))?;

        if decremented.rows_affected() == 0 {
            let available: Option<i64> =
                sqlx::query_scalar("SELECT quantity FROM products WHERE id = ?1")
                    .bind(order.product_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(logged("orders.place.recheck"))?;

            // tx rolls back on drop
            return Err(match available {
                None => DbError::not_found("Product", order.product_id),
                Some(available) => DbError::StockConflict {
                    product_id: order.product_id,
                    available,
                    requested: order.amount,
                },
            });
        }

        let placed_at: DateTime<Utc> = Utc::now();
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (client_id, product_id, amount, placed_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(order.client_id)
        .bind(order.product_id)
        .bind(order.amount)
        .bind(placed_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(logged("orders.place.insert"))?;

        let remaining_stock: i64 =
            sqlx::query_scalar("SELECT quantity FROM products WHERE id = ?1")
                .bind(order.product_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(logged("orders.place.remaining"))?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(order_id = id, remaining_stock, "Order committed");

        Ok(PlacedOrder {
            order: Order {
                id,
                client_id: order.client_id,
                product_id: order.product_id,
                amount: order.amount,
                placed_at,
            },
            remaining_stock,
        })
    }
}
