//! # Store Traits
//!
//! Object-safe async interfaces over the persistent store, one per entity.
//!
//! The SQLite repositories implement these; the service layer only sees the
//! traits, so tests can hand it any implementation.
//!
//! ```text
//! ClientService ──► Arc<dyn ClientStore>  ──► ClientRepository  ──┐
//! ProductService ─► Arc<dyn ProductStore> ──► ProductRepository ──┼──► SqlitePool
//! OrderService ───► Arc<dyn OrderStore>   ──► OrderRepository   ──┘
//! ```
//!
//! Missing rows come back as `Ok(None)` from `find_by_id` and as
//! [`DbError::NotFound`](crate::DbError::NotFound) from writes that match
//! nothing. Sentinel ids are never returned.

use async_trait::async_trait;
use stockroom_core::{Client, NewClient, NewOrder, NewProduct, Order, Product};

use crate::error::DbResult;

/// Persistent access to clients.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Client>>;

    async fn find_all(&self) -> DbResult<Vec<Client>>;

    /// Inserts a client and returns the store-generated id.
    async fn insert(&self, client: &NewClient) -> DbResult<i64>;

    async fn update(&self, client: &Client) -> DbResult<()>;

    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Persistent access to products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Product>>;

    async fn find_all(&self) -> DbResult<Vec<Product>>;

    /// Inserts a product and returns the store-generated id.
    async fn insert(&self, product: &NewProduct) -> DbResult<i64>;

    async fn update(&self, product: &Product) -> DbResult<()>;

    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// An order committed together with its stock decrement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order: Order,
    /// Product quantity after the decrement.
    pub remaining_stock: i64,
}

/// Persistent access to orders. Orders are never updated or deleted.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Order>>;

    async fn find_all(&self) -> DbResult<Vec<Order>>;

    /// Inserts an order row without touching stock.
    async fn insert(&self, order: &NewOrder) -> DbResult<i64>;

    /// Decrements the product's stock and inserts the order in one
    /// transaction.
    ///
    /// Fails with `StockConflict` when the stock no longer covers the amount
    /// and with `NotFound` when the product is gone; nothing is written in
    /// either case.
    async fn place(&self, order: &NewOrder) -> DbResult<PlacedOrder>;
}
