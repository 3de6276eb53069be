//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context, logged with warn! at the        │
//! │       │                  repository boundary                           │
//! │       ▼                                                                 │
//! │  ServiceError (stockroom-service) ← NotFound stays NotFound,           │
//! │       │                             everything else is a store failure │
//! │       ▼                                                                 │
//! │  CLI prints a user-facing message                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - UPDATE/DELETE matched no row
    /// - The row vanished inside an order-placement transaction
    #[error("{entity} with id={id} was not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Guarded stock decrement matched no row.
    ///
    /// ## When This Occurs
    /// - A concurrent placement drained the stock between the caller's
    ///   check and the order transaction
    #[error("Stock conflict for product {product_id}: available {available}, requested {requested}")]
    StockConflict {
        product_id: i64,
        available: i64,
        requested: i64,
    },

    /// CHECK constraint violation.
    ///
    /// ## When This Occurs
    /// - A write would store a negative quantity or amount that slipped
    ///   past the service validators
    #[error("Constraint violated: {0}")]
    CheckViolation(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction failed to begin or commit.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DbError::NotFound { entity, id }
    }

    /// True when the error means "no such row" rather than a store failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → CHECK violation or QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite: "CHECK constraint failed: quantity >= 0"
                if msg.contains("CHECK constraint failed") {
                    DbError::CheckViolation(msg.to_string())
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Converts a sqlx failure into a [`DbError`], logging it as a warning.
///
/// Every repository method funnels its sqlx errors through here so store
/// failures are always visible in the log, tagged with the operation.
///
/// ```rust,ignore
/// sqlx::query("...").execute(&self.pool).await.map_err(logged("clients.update"))?;
/// ```
pub(crate) fn logged(op: &'static str) -> impl FnOnce(sqlx::Error) -> DbError {
    move |err| {
        let err = DbError::from(err);
        tracing::warn!(op, error = %err, "Store operation failed");
        err
    }
}
