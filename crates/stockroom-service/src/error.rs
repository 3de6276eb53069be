//! # Service Error Types
//!
//! The error taxonomy every business operation reports.
//!
//! ```text
//! ValidationError (core) ──────────────► ServiceError::Validation
//! CoreError::InsufficientStock ────────► ServiceError::InsufficientStock
//! DbError::StockConflict ──────────────► ServiceError::InsufficientStock
//! DbError::NotFound / missing row ─────► ServiceError::NotFound
//! any other DbError ───────────────────► ServiceError::Store
//! io::Error from a BillSink ───────────► ServiceError::Bill
//! ```

use stockroom_core::{CoreError, ValidationError};
use stockroom_db::DbError;
use thiserror::Error;

/// Errors from business operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced entity does not exist.
    #[error("{entity} with id={id} was not found")]
    NotFound { entity: &'static str, id: i64 },

    /// An entity failed one of the injected validators. Nothing was written.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The requested amount exceeds the product's stock. Nothing was written.
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: i64,
        available: i64,
        requested: i64,
    },

    /// The persistent store failed.
    #[error("Store failure: {0}")]
    Store(DbError),

    /// The bill could not be written. The order itself is committed.
    #[error("Bill for order {order_id} could not be written: {source}")]
    Bill {
        order_id: i64,
        #[source]
        source: std::io::Error,
    },
}

impl ServiceError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        ServiceError::NotFound { entity, id }
    }

    /// True for failures caused by the request rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ServiceError::NotFound { .. }
                | ServiceError::Validation(_)
                | ServiceError::InsufficientStock { .. }
        )
    }
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            DbError::StockConflict {
                product_id,
                available,
                requested,
            } => ServiceError::InsufficientStock {
                product_id,
                available,
                requested,
            },
            other => ServiceError::Store(other),
        }
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            CoreError::InsufficientStock {
                product_id,
                available,
                requested,
            } => ServiceError::InsufficientStock {
                product_id,
                available,
                requested,
            },
            CoreError::Validation(err) => ServiceError::Validation(err),
        }
    }
}

/// Result type for business operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_stays_not_found() {
        let err = ServiceError::from(DbError::not_found("Client", 3));
        assert!(matches!(err, ServiceError::NotFound { entity: "Client", id: 3 }));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_stock_conflict_becomes_insufficient_stock() {
        let err = ServiceError::from(DbError::StockConflict {
            product_id: 1,
            available: 0,
            requested: 2,
        });
        assert!(matches!(
            err,
            ServiceError::InsufficientStock { available: 0, requested: 2, .. }
        ));
    }

    #[test]
    fn test_other_db_errors_are_store_failures() {
        let err = ServiceError::from(DbError::PoolExhausted);
        assert!(matches!(err, ServiceError::Store(DbError::PoolExhausted)));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_core_validation_passes_through() {
        let core = CoreError::from(ValidationError::Negative {
            field: "quantity",
            value: -1,
        });
        let err = ServiceError::from(core);
        assert!(matches!(err, ServiceError::Validation(ValidationError::Negative { .. })));
    }
}
