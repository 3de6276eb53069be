//! # User-Facing Errors
//!
//! Turns a [`ServiceError`] into what the user sees and the exit code.
//!
//! ```text
//! ServiceError ──► UserError { code, message } ──► stderr (text or JSON)
//!                                             └──► exit code 1
//! ```
//!
//! Store and bill failures are logged with their full cause; the message
//! printed for them stays generic.

use serde::Serialize;
use stockroom_service::ServiceError;

/// Exit code for a successful command.
pub const SUCCESS: i32 = 0;
/// Exit code for a rejected or failed business operation.
pub const OPERATION_FAILED: i32 = 1;
/// Exit code for startup failures (configuration, database open).
pub const INTERNAL_ERROR: i32 = 2;

/// Error printed by a failed command.
///
/// ## Serialization
/// With `--json` this is what ends up on stderr:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock for product 2: available 3, requested 5"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct UserError {
    /// Machine-readable error code.
    pub code: ErrorCode,

    /// Human-readable error message.
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    InsufficientStock,
    StoreError,
    BillError,
}

impl UserError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        UserError {
            code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        OPERATION_FAILED
    }
}

impl From<ServiceError> for UserError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::NotFound { .. } => UserError::new(ErrorCode::NotFound, err.to_string()),
            ServiceError::Validation(_) => {
                UserError::new(ErrorCode::ValidationError, err.to_string())
            }
            ServiceError::InsufficientStock { .. } => {
                UserError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            ServiceError::Store(cause) => {
                tracing::error!(error = %cause, "Store operation failed");
                UserError::new(ErrorCode::StoreError, "Database operation failed")
            }
            ServiceError::Bill { order_id, source } => {
                tracing::error!(order_id, error = %source, "Bill write failed");
                UserError::new(
                    ErrorCode::BillError,
                    format!(
                        "Order {} was placed but its bill could not be written",
                        order_id
                    ),
                )
            }
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_db::DbError;

    #[test]
    fn test_not_found_keeps_message() {
        let err = UserError::from(ServiceError::not_found("Client", 4));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Client with id=4 was not found");
        assert_eq!(err.exit_code(), OPERATION_FAILED);
    }

    #[test]
    fn test_store_failure_hides_cause() {
        let err = UserError::from(ServiceError::Store(DbError::QueryFailed(
            "disk I/O error".into(),
        )));
        assert_eq!(err.code, ErrorCode::StoreError);
        assert!(!err.message.contains("disk"));
    }

    #[test]
    fn test_bill_failure_names_the_order() {
        let err = UserError::from(ServiceError::Bill {
            order_id: 12,
            source: std::io::Error::new(std::io::ErrorKind::Other, "full"),
        });
        assert_eq!(err.code, ErrorCode::BillError);
        assert!(err.message.contains("Order 12 was placed"));
    }

    #[test]
    fn test_json_shape() {
        let err = UserError::new(ErrorCode::InsufficientStock, "nope");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INSUFFICIENT_STOCK");
        assert_eq!(json["message"], "nope");
    }
}
