//! # Client Repository
//!
//! Database operations for clients.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{logged, DbError, DbResult};
use crate::store::ClientStore;
use stockroom_core::{Client, NewClient};

/// Repository for client database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ClientRepository::new(pool);
///
/// let id = repo.insert(&NewClient::new("Alice")).await?;
/// let client = repo.find_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository { pool }
    }

    /// Counts clients (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await
            .map_err(logged("clients.count"))?;

        Ok(count)
    }
}

#[async_trait]
impl ClientStore for ClientRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<Client>> {
        debug!(id, "Fetching client");

        let client = sqlx::query_as::<_, Client>("SELECT id, name FROM clients WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(logged("clients.find_by_id"))?;

        Ok(client)
    }

    async fn find_all(&self) -> DbResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT id, name FROM clients ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(logged("clients.find_all"))?;

        debug!(count = clients.len(), "Listed clients");
        Ok(clients)
    }

    async fn insert(&self, client: &NewClient) -> DbResult<i64> {
        debug!(name = %client.name, "Inserting client");

        let id: i64 = sqlx::query_scalar("INSERT INTO clients (name) VALUES (?1) RETURNING id")
            .bind(&client.name)
            .fetch_one(&self.pool)
            .await
            .map_err(logged("clients.insert"))?;

        Ok(id)
    }

    /// Renames a client.
    ///
    /// ## Returns
    /// * `Ok(())` - Client updated
    /// * `Err(DbError::NotFound)` - Client doesn't exist
    async fn update(&self, client: &Client) -> DbResult<()> {
        debug!(id = client.id, name = %client.name, "Updating client");

        let result = sqlx::query("UPDATE clients SET name = ?2 WHERE id = ?1")
            .bind(client.id)
            .bind(&client.name)
            .execute(&self.pool)
            .await
            .map_err(logged("clients.update"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Client", client.id));
        }

        Ok(())
    }

    /// Deletes a client.
    ///
    /// Orders keep their `client_id`; bills for them can no longer be
    /// rendered.
    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting client");

        let result = sqlx::query("DELETE FROM clients WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(logged("clients.delete"))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Client", id));
        }

        Ok(())
    }
}
