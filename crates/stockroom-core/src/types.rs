//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Client      │   │     Product     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │◄──│  id (i64)       │◄──│  client_id      │       │
//! │  │  name           │   │  name           │   │  product_id     │       │
//! │  └─────────────────┘   │  quantity >= 0  │   │  amount >= 0    │       │
//! │                        └─────────────────┘   │  placed_at      │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  Order → Client / Product are weak references: an id plus a lookup.    │
//! │  Deleting a client or product leaves existing orders untouched.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Store-Generated Identity
//! Every entity id is assigned by the store on insert. The `New*` payloads
//! carry no id at all, so callers cannot pick one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Client
// =============================================================================

/// A customer that places orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Client {
    /// Store-generated identifier.
    pub id: i64,

    /// Display name (printed on bills).
    pub name: String,
}

/// Insert payload for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
}

impl NewClient {
    pub fn new(name: impl Into<String>) -> Self {
        NewClient { name: name.into() }
    }

    /// Attaches the id the store assigned.
    pub fn into_client(self, id: i64) -> Client {
        Client {
            id,
            name: self.name,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-generated identifier.
    pub id: i64,

    /// Display name (printed on bills).
    pub name: String,

    /// Units currently in stock. Never negative once committed.
    pub quantity: i64,
}

impl Product {
    /// Checks that `requested` units can be taken from stock.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Product;
    ///
    /// let widget = Product { id: 1, name: "Widget".into(), quantity: 3 };
    /// assert!(widget.ensure_stock(3).is_ok());
    /// assert!(widget.ensure_stock(5).is_err());
    /// ```
    pub fn ensure_stock(&self, requested: i64) -> CoreResult<()> {
        if requested > self.quantity {
            return Err(CoreError::InsufficientStock {
                product_id: self.id,
                available: self.quantity,
                requested,
            });
        }

        Ok(())
    }
}

/// Insert payload for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
        }
    }

    /// Attaches the id the store assigned.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Store-generated identifier.
    pub id: i64,

    /// Client that placed the order (weak reference).
    pub client_id: i64,

    /// Product that was bought (weak reference).
    pub product_id: i64,

    /// Units bought.
    pub amount: i64,

    /// When the order was committed.
    pub placed_at: DateTime<Utc>,
}

/// Insert payload for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub client_id: i64,
    pub product_id: i64,
    pub amount: i64,
}

impl NewOrder {
    pub fn new(client_id: i64, product_id: i64, amount: i64) -> Self {
        NewOrder {
            client_id,
            product_id,
            amount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
