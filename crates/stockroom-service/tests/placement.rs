//! Order placement and bill emission against a real SQLite store.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use stockroom_core::{NewClient, NewOrder, NewProduct, ValidationError};
use stockroom_db::{Database, DbConfig, OrderStore, ProductStore};
use stockroom_service::{
    BillSink, ClientService, FileBillSink, MemoryBillSink, OrderService, ProductService,
    ServiceError, Services,
};

struct Fixture {
    db: Database,
    services: Services,
    bills: Arc<MemoryBillSink>,
    client_id: i64,
    product_id: i64,
}

async fn fixture(quantity: i64) -> Fixture {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let bills = Arc::new(MemoryBillSink::new());
    let services = Services::new(&db, bills.clone());

    let client_id = services
        .clients
        .insert(&NewClient::new("Alice"))
        .await
        .unwrap();
    let product_id = services
        .products
        .insert(&NewProduct::new("Widget", quantity))
        .await
        .unwrap();

    Fixture {
        db,
        services,
        bills,
        client_id,
        product_id,
    }
}

#[tokio::test]
async fn placing_within_stock_decrements_and_records_one_order() {
    let f = fixture(10).await;

    let placement = f
        .services
        .orders
        .place_order(f.client_id, f.product_id, 5)
        .await
        .unwrap();

    assert_eq!(placement.remaining_stock, 5);
    assert_eq!(placement.order.amount, 5);

    let product = f.services.products.find_by_id(f.product_id).await.unwrap();
    assert_eq!(product.quantity, 5);

    let orders = f.services.orders.find_all().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].amount, 5);
    assert_eq!(orders[0].client_id, f.client_id);

    let bill = f.bills.contents(placement.order.id).await.unwrap();
    assert!(bill.contains(&format!("Order id: {}", placement.order.id)));
    assert!(bill.contains("Client: Alice"));
    assert!(bill.contains("Product bought: Widget"));
    assert!(bill.contains("Amount: 5"));
}

#[tokio::test]
async fn placing_over_stock_changes_nothing() {
    let f = fixture(3).await;

    let err = f
        .services
        .orders
        .place_order(f.client_id, f.product_id, 5)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InsufficientStock {
            available: 3,
            requested: 5,
            ..
        }
    ));
    let product = f.services.products.find_by_id(f.product_id).await.unwrap();
    assert_eq!(product.quantity, 3);
    assert!(f.services.orders.find_all().await.unwrap().is_empty());
    assert!(f.bills.is_empty().await);
}

#[tokio::test]
async fn unknown_client_is_not_found() {
    let f = fixture(10).await;

    let err = f
        .services
        .orders
        .place_order(9999, f.product_id, 1)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "Client",
            id: 9999
        }
    ));
    let product = f.services.products.find_by_id(f.product_id).await.unwrap();
    assert_eq!(product.quantity, 10);
    assert!(f.services.orders.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let f = fixture(10).await;

    let err = f
        .services
        .orders
        .place_order(f.client_id, 4242, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { entity: "Product", .. }));
}

#[tokio::test]
async fn negative_amount_is_rejected_before_the_store() {
    let f = fixture(10).await;

    let err = f
        .services
        .orders
        .place_order(f.client_id, f.product_id, -2)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::Negative { field: "amount", value: -2 })
    ));

    let err = f
        .services
        .orders
        .insert(&NewOrder::new(f.client_id, f.product_id, -1))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    assert_eq!(f.db.orders().count().await.unwrap(), 0);
    let product = f.services.products.find_by_id(f.product_id).await.unwrap();
    assert_eq!(product.quantity, 10);
}

#[tokio::test]
async fn emitting_a_bill_twice_appends_twice() {
    let f = fixture(10).await;

    let placement = f
        .services
        .orders
        .place_order(f.client_id, f.product_id, 2)
        .await
        .unwrap();
    f.services
        .orders
        .emit_bill_for(placement.order.id)
        .await
        .unwrap();

    let bill = f.bills.contents(placement.order.id).await.unwrap();
    assert_eq!(bill.matches("Order id: ").count(), 2);
    assert_eq!(bill.matches("Amount: 2").count(), 2);
}

#[tokio::test]
async fn bill_after_client_deletion_is_not_found_and_writes_nothing() {
    let f = fixture(10).await;

    let order_id = f
        .services
        .orders
        .insert(&NewOrder::new(f.client_id, f.product_id, 1))
        .await
        .unwrap();
    f.services.clients.delete(f.client_id).await.unwrap();

    let err = f.services.orders.emit_bill_for(order_id).await.unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { entity: "Client", .. }));
    assert!(f.bills.contents(order_id).await.is_none());
}

#[tokio::test]
async fn concurrent_placements_cannot_oversell() {
    let tmp = tempfile::tempdir().unwrap();
    let db = Database::new(DbConfig::new(tmp.path().join("stockroom.db")))
        .await
        .unwrap();
    let services = Arc::new(Services::new(&db, Arc::new(MemoryBillSink::new())));

    let client_id = services
        .clients
        .insert(&NewClient::new("Alice"))
        .await
        .unwrap();
    let product_id = services
        .products
        .insert(&NewProduct::new("Widget", 10))
        .await
        .unwrap();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let services = Arc::clone(&services);
            tokio::spawn(async move { services.orders.place_order(client_id, product_id, 6).await })
        })
        .collect();

    let mut placed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => placed += 1,
            Err(ServiceError::InsufficientStock { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(placed, 1);
    let product = services.products.find_by_id(product_id).await.unwrap();
    assert_eq!(product.quantity, 4);
    assert_eq!(db.orders().count().await.unwrap(), 1);
}

#[tokio::test]
async fn file_sink_writes_order_file() {
    let tmp = tempfile::tempdir().unwrap();
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let sink = Arc::new(FileBillSink::new(tmp.path()));
    let services = Services::new(&db, sink.clone());

    let client_id = services
        .clients
        .insert(&NewClient::new("Alice"))
        .await
        .unwrap();
    let product_id = services
        .products
        .insert(&NewProduct::new("Widget", 10))
        .await
        .unwrap();

    let placement = services
        .orders
        .place_order(client_id, product_id, 5)
        .await
        .unwrap();

    let path = tmp.path().join(format!("Order{}.txt", placement.order.id));
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        text,
        format!(
            "Order id: {}\nClient: Alice\nProduct bought: Widget\nAmount: 5\n",
            placement.order.id
        )
    );
}

struct BrokenSink;

#[async_trait]
impl BillSink for BrokenSink {
    async fn append(&self, _order_id: i64, _text: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
}

#[tokio::test]
async fn bill_failure_leaves_the_order_committed() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let clients = Arc::new(ClientService::with_defaults(Arc::new(db.clients())));
    let products = Arc::new(ProductService::with_defaults(Arc::new(db.products())));
    let orders = OrderService::with_defaults(
        Arc::new(db.orders()),
        clients.clone(),
        products.clone(),
        Arc::new(BrokenSink),
    );

    let client_id = clients.insert(&NewClient::new("Alice")).await.unwrap();
    let product_id = products
        .insert(&NewProduct::new("Widget", 10))
        .await
        .unwrap();

    let err = orders
        .place_order(client_id, product_id, 4)
        .await
        .unwrap_err();

    let ServiceError::Bill { order_id, .. } = err else {
        panic!("expected a bill error, got {err}");
    };
    assert!(db.orders().find_by_id(order_id).await.unwrap().is_some());
    assert_eq!(
        db.products().find_by_id(product_id).await.unwrap().unwrap().quantity,
        6
    );
}
