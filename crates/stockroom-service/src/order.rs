//! # Order Operations
//!
//! Reads, plain inserts and bill emission. The placement workflow lives in
//! [`crate::placement`].

use std::sync::Arc;

use stockroom_core::validation::{self, run_all};
use stockroom_core::{Bill, NewOrder, Order, Validator};
use stockroom_db::OrderStore;
use tracing::{debug, info};

use crate::bill::BillSink;
use crate::client::ClientService;
use crate::error::{ServiceError, ServiceResult};
use crate::product::ProductService;

/// Order operations. Orders are create-and-read only.
pub struct OrderService {
    pub(crate) store: Arc<dyn OrderStore>,
    pub(crate) clients: Arc<ClientService>,
    pub(crate) products: Arc<ProductService>,
    pub(crate) bills: Arc<dyn BillSink>,
    pub(crate) validators: Vec<Box<dyn Validator<NewOrder>>>,
}

impl OrderService {
    /// Creates a service with an explicit validator list.
    pub fn new(
        store: Arc<dyn OrderStore>,
        clients: Arc<ClientService>,
        products: Arc<ProductService>,
        bills: Arc<dyn BillSink>,
        validators: Vec<Box<dyn Validator<NewOrder>>>,
    ) -> Self {
        OrderService {
            store,
            clients,
            products,
            bills,
            validators,
        }
    }

    /// Creates a service with the standard amount validator.
    pub fn with_defaults(
        store: Arc<dyn OrderStore>,
        clients: Arc<ClientService>,
        products: Arc<ProductService>,
        bills: Arc<dyn BillSink>,
    ) -> Self {
        OrderService::new(
            store,
            clients,
            products,
            bills,
            validation::default_order_validators(),
        )
    }

    /// Fetches an order, failing with `NotFound` when absent.
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Order> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", id))
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Order>> {
        Ok(self.store.find_all().await?)
    }

    /// Validates and inserts an order row without touching stock.
    ///
    /// Use [`OrderService::place_order`] for a sale.
    pub async fn insert(&self, order: &NewOrder) -> ServiceResult<i64> {
        run_all(&self.validators, order)?;

        let id = self.store.insert(order).await?;
        debug!(id, "Order inserted");
        Ok(id)
    }

    /// Renders the bill for a persisted order and appends it to the sink.
    ///
    /// Fails with `NotFound` when the client or product has been deleted;
    /// nothing is written then. Emitting twice appends a second record.
    pub async fn emit_bill(&self, order: &Order) -> ServiceResult<Bill> {
        let client = self.clients.find_by_id(order.client_id).await?;
        let product = self.products.find_by_id(order.product_id).await?;

        let bill = Bill::new(order, &client, &product);
        self.bills
            .append(order.id, &bill.render())
            .await
            .map_err(|source| ServiceError::Bill {
                order_id: order.id,
                source,
            })?;

        info!(order_id = order.id, "Bill emitted");
        Ok(bill)
    }

    /// Looks the order up by id, then emits its bill.
    pub async fn emit_bill_for(&self, order_id: i64) -> ServiceResult<Bill> {
        let order = self.find_by_id(order_id).await?;
        self.emit_bill(&order).await
    }
}
