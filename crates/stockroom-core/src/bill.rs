//! # Bill Rendering
//!
//! Text layout for per-order bills. Resolving names and writing the text
//! somewhere is done by `stockroom-service`; this module only formats.
//!
//! ## Layout
//! ```text
//! Order id: 42
//! Client: Alice
//! Product bought: Widget
//! Amount: 5
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Client, Order, Product};

/// The four facts printed on a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub order_id: i64,
    pub client_name: String,
    pub product_name: String,
    pub amount: i64,
}

impl Bill {
    /// Builds a bill from an order and the entities it references.
    pub fn new(order: &Order, client: &Client, product: &Product) -> Self {
        Bill {
            order_id: order.id,
            client_name: client.name.clone(),
            product_name: product.name.clone(),
            amount: order.amount,
        }
    }

    /// Renders the bill text, one labeled line per fact, newline-terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order id: {}", self.order_id)?;
        writeln!(f, "Client: {}", self.client_name)?;
        writeln!(f, "Product bought: {}", self.product_name)?;
        writeln!(f, "Amount: {}", self.amount)
    }
}
