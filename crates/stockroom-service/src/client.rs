//! Client operations.

use std::sync::Arc;

use stockroom_core::validation::{self, run_all};
use stockroom_core::{Client, NewClient, Validator};
use stockroom_db::ClientStore;
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};

/// Validated access to clients.
pub struct ClientService {
    store: Arc<dyn ClientStore>,
    insert_validators: Vec<Box<dyn Validator<NewClient>>>,
    update_validators: Vec<Box<dyn Validator<Client>>>,
}

impl ClientService {
    /// Creates a service with explicit validator lists.
    pub fn new(
        store: Arc<dyn ClientStore>,
        insert_validators: Vec<Box<dyn Validator<NewClient>>>,
        update_validators: Vec<Box<dyn Validator<Client>>>,
    ) -> Self {
        ClientService {
            store,
            insert_validators,
            update_validators,
        }
    }

    /// Creates a service with the standard name validators.
    pub fn with_defaults(store: Arc<dyn ClientStore>) -> Self {
        ClientService::new(
            store,
            validation::default_new_client_validators(),
            validation::default_client_validators(),
        )
    }

    /// Fetches a client, failing with `NotFound` when absent.
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Client> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Client", id))
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<Client>> {
        Ok(self.store.find_all().await?)
    }

    /// Validates and inserts a client, returning its generated id.
    pub async fn insert(&self, client: &NewClient) -> ServiceResult<i64> {
        run_all(&self.insert_validators, client)?;

        let id = self.store.insert(client).await?;
        info!(id, "Client added");
        Ok(id)
    }

    pub async fn update(&self, client: &Client) -> ServiceResult<()> {
        run_all(&self.update_validators, client)?;

        self.store.update(client).await?;
        debug!(id = client.id, "Client updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.store.delete(id).await?;
        info!(id, "Client deleted");
        Ok(())
    }
}
