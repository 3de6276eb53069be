//! # Order Placement
//!
//! ```text
//! place_order(client_id, product_id, amount)
//!   │
//!   ├─1─ clients.find_by_id / products.find_by_id ── missing ──► NotFound
//!   ├─2─ product.ensure_stock(amount) ───────────── short ────► InsufficientStock
//!   ├─3─ order validators (amount >= 0) ──────────── fail ─────► Validation
//!   ├─4─ OrderStore::place (one transaction)
//!   │      guarded decrement + insert ──────────── drained ───► InsufficientStock
//!   │                                  ──────────── vanished ──► NotFound
//!   └─5─ emit_bill ───────────────────────────────── io error ──► Bill
//!                                                  (order stays committed)
//! ```
//!
//! Steps 1-3 write nothing. Step 2 gives the caller a precise error early;
//! the guarded decrement in step 4 is what actually keeps stock from going
//! negative when placements race.

use stockroom_core::validation::run_all;
use stockroom_core::{NewOrder, Order};
use tracing::info;

use crate::error::ServiceResult;
use crate::order::OrderService;

/// A committed order and the stock left after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub order: Order,
    pub remaining_stock: i64,
}

impl OrderService {
    /// Places an order: checks stock, commits the order with its stock
    /// decrement, and emits the bill.
    pub async fn place_order(
        &self,
        client_id: i64,
        product_id: i64,
        amount: i64,
    ) -> ServiceResult<Placement> {
        let client = self.clients.find_by_id(client_id).await?;
        let product = self.products.find_by_id(product_id).await?;

        product.ensure_stock(amount)?;

        let new_order = NewOrder::new(client.id, product.id, amount);
        run_all(&self.validators, &new_order)?;

        let placed = self.store.place(&new_order).await?;
        info!(
            order_id = placed.order.id,
            client_id,
            product_id,
            amount,
            remaining_stock = placed.remaining_stock,
            "Order placed"
        );

        self.emit_bill(&placed.order).await?;

        Ok(Placement {
            order: placed.order,
            remaining_stock: placed.remaining_stock,
        })
    }
}
