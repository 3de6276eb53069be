//! Product operations.

use std::sync::Arc;

use stockroom_core::validation::{self, run_all};
use stockroom_core::{NewProduct, Product, Validator};
use stockroom_db::ProductStore;
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};

/// Validated access to products.
///
/// Validators run before any store call; a failing product never reaches
/// the database.
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    insert_validators: Vec<Box<dyn Validator<NewProduct>>>,
    update_validators: Vec<Box<dyn Validator<Product>>>,
}

impl ProductService {
    /// Creates a service with explicit validator lists.
    pub fn new(
        store: Arc<dyn ProductStore>,
        insert_validators: Vec<Box<dyn Validator<NewProduct>>>,
        update_validators: Vec<Box<dyn Validator<Product>>>,
    ) -> Self {
        ProductService {
            store,
            insert_validators,
            update_validators,
        }
    }

    /// Creates a service with the standard name and quantity validators.
    pub fn with_defaults(store: Arc<dyn ProductStore>) -> Self {
        ProductService::new(
            store,
            validation::default_new_product_validators(),
            validation::default_product_validators(),
        )
    }

    /// Fetches a product, failing with `NotFound` when absent.
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Product> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.store.find_all().await?)
    }

    pub async fn insert(&self, product: &NewProduct) -> ServiceResult<i64> {
        run_all(&self.insert_validators, product)?;

        let id = self.store.insert(product).await?;
        info!(id, quantity = product.quantity, "Product added");
        Ok(id)
    }

    pub async fn update(&self, product: &Product) -> ServiceResult<()> {
        run_all(&self.update_validators, product)?;

        self.store.update(product).await?;
        debug!(id = product.id, quantity = product.quantity, "Product updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.store.delete(id).await?;
        info!(id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ValidationError;
    use stockroom_db::{Database, DbConfig};

    async fn service() -> ProductService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        ProductService::with_defaults(Arc::new(db.products()))
    }

    #[tokio::test]
    async fn test_negative_quantity_insert_is_rejected() {
        let products = service().await;

        let err = products
            .insert(&NewProduct::new("Widget", -1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::Negative { field: "quantity", value: -1 })
        ));
        assert!(products.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_quantity_update_leaves_store_unchanged() {
        let products = service().await;
        let id = products.insert(&NewProduct::new("Widget", 4)).await.unwrap();

        let err = products
            .update(&Product { id, name: "Widget".into(), quantity: -2 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(products.find_by_id(id).await.unwrap().quantity, 4);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let products = service().await;

        let err = products
            .update(&Product { id: 8, name: "Widget".into(), quantity: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "Product", id: 8 }));
    }

    #[tokio::test]
    async fn test_zero_quantity_is_allowed() {
        let products = service().await;
        let id = products.insert(&NewProduct::new("Widget", 0)).await.unwrap();

        assert_eq!(products.find_by_id(id).await.unwrap().quantity, 0);
        products.delete(id).await.unwrap();
        assert!(products.find_all().await.unwrap().is_empty());
    }
}
