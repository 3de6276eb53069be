//! Validators run before the store is touched.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use stockroom_core::{NewProduct, Product, ValidationError};
use stockroom_db::{DbResult, ProductStore};
use stockroom_service::{ProductService, ServiceError};

/// Counts writes and pretends every product exists.
#[derive(Default)]
struct CountingStore {
    writes: AtomicUsize,
}

#[async_trait]
impl ProductStore for CountingStore {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        Ok(Some(Product {
            id,
            name: "Widget".into(),
            quantity: 1,
        }))
    }

    async fn find_all(&self) -> DbResult<Vec<Product>> {
        Ok(Vec::new())
    }

    async fn insert(&self, _product: &NewProduct) -> DbResult<i64> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    }

    async fn update(&self, _product: &Product) -> DbResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, _id: i64) -> DbResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn invalid_products_never_reach_the_store() {
    let store = Arc::new(CountingStore::default());
    let products = ProductService::with_defaults(store.clone());

    let err = products
        .insert(&NewProduct::new("Widget", -5))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::Negative { value: -5, .. })
    ));

    let err = products
        .update(&Product {
            id: 1,
            name: String::new(),
            quantity: 3,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::Required { field: "name" })
    ));

    let long_name = "x".repeat(stockroom_core::MAX_NAME_LEN + 1);
    let err = products
        .insert(&NewProduct::new(long_name, 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::TooLong { .. })
    ));

    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_products_reach_the_store_once() {
    let store = Arc::new(CountingStore::default());
    let products = ProductService::with_defaults(store.clone());

    products.insert(&NewProduct::new("Widget", 0)).await.unwrap();
    products
        .update(&Product {
            id: 1,
            name: "Widget".into(),
            quantity: 2,
        })
        .await
        .unwrap();

    assert_eq!(store.writes.load(Ordering::SeqCst), 2);
}
