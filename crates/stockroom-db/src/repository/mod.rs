//! # Repository Module
//!
//! SQLite implementations of the store traits.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Service call                                                          │
//! │       │                                                                 │
//! │       │  products.find_by_id(7)                                        │
//! │       ▼                                                                 │
//! │  ProductRepository (impl ProductStore)                                 │
//! │  ├── find_by_id(&self, id)                                             │
//! │  ├── find_all(&self)                                                   │
//! │  ├── insert(&self, new_product)                                        │
//! │  ├── update(&self, product)                                            │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ClientRepository`](client::ClientRepository) - Client CRUD
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD
//! - [`OrderRepository`](order::OrderRepository) - Order reads, inserts and
//!   the atomic placement transaction

pub mod client;
pub mod order;
pub mod product;
