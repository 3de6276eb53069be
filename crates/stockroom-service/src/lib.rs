//! # stockroom-service: Business Operations for Stockroom
//!
//! Validated operations over the store traits of `stockroom-db`, the
//! order-placement workflow and bill emission.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Services                                        │
//! │                                                                         │
//! │  ClientService ◄──────┐                                                │
//! │  (name validators)    │                                                │
//! │                       ├──── OrderService ──► BillSink                   │
//! │  ProductService ◄─────┘     (amount validator,     ├─ FileBillSink      │
//! │  (quantity + name           place_order,           └─ MemoryBillSink    │
//! │   validators)               emit_bill)                                  │
//! │       │                          │                                      │
//! │       ▼                          ▼                                      │
//! │  Arc<dyn ProductStore>     Arc<dyn OrderStore>   ...                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockroom_service::{FileBillSink, Services};
//!
//! let services = Services::new(&db, Arc::new(FileBillSink::new("bills")));
//! let placement = services.orders.place_order(client_id, product_id, 5).await?;
//! ```

pub mod bill;
pub mod client;
pub mod error;
pub mod order;
pub mod placement;
pub mod product;

use std::sync::Arc;

use stockroom_db::Database;

pub use bill::{BillSink, FileBillSink, MemoryBillSink};
pub use client::ClientService;
pub use error::{ServiceError, ServiceResult};
pub use order::OrderService;
pub use placement::Placement;
pub use product::ProductService;

/// The three entity services wired to one database and one bill sink.
pub struct Services {
    pub clients: Arc<ClientService>,
    pub products: Arc<ProductService>,
    pub orders: OrderService,
}

impl Services {
    /// Builds every service with the default validators.
    pub fn new(db: &Database, bills: Arc<dyn BillSink>) -> Self {
        let clients = Arc::new(ClientService::with_defaults(Arc::new(db.clients())));
        let products = Arc::new(ProductService::with_defaults(Arc::new(db.products())));
        let orders = OrderService::with_defaults(
            Arc::new(db.orders()),
            Arc::clone(&clients),
            Arc::clone(&products),
            bills,
        );

        Services {
            clients,
            products,
            orders,
        }
    }
}
