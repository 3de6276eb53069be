//! # Validation Module
//!
//! Entity invariant checks for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  └── Type validation (strings parsed to integers)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Services (stockroom-service)                                 │
//! │  └── THIS MODULE: every registered Validator<T> runs before the store  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (quantity >= 0), CHECK (amount >= 0)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Injected Validators
//! Services own their validator list; nothing here is global. A service
//! built with `Vec::new()` runs no checks, one built with
//! [`default_product_validators`] runs the standard set.
//!
//! ```rust
//! use stockroom_core::validation::{ProductQuantityValidator, Validator};
//! use stockroom_core::NewProduct;
//!
//! let validator = ProductQuantityValidator;
//! assert!(validator.validate(&NewProduct::new("Widget", 10)).is_ok());
//! assert!(validator.validate(&NewProduct::new("Widget", -1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Client, NewClient, NewOrder, NewProduct, Product};
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validator Trait
// =============================================================================

/// A single invariant check over `T`.
///
/// Implementations are pure: no I/O, no mutation.
pub trait Validator<T: ?Sized>: Send + Sync {
    fn validate(&self, value: &T) -> ValidationResult<()>;
}

/// Runs every validator in order, stopping at the first failure.
pub fn run_all<T: ?Sized>(validators: &[Box<dyn Validator<T>>], value: &T) -> ValidationResult<()> {
    for validator in validators {
        validator.validate(value)?;
    }

    Ok(())
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_name(field: &'static str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a count that may be zero but never negative.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_non_negative;
///
/// assert!(validate_non_negative("amount", 0).is_ok());
/// assert!(validate_non_negative("amount", -1).is_err());
/// ```
pub fn validate_non_negative(field: &'static str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }

    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Rejects products whose stock quantity is below zero.
///
/// Applies to both insert payloads and full products (updates).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductQuantityValidator;

impl Validator<NewProduct> for ProductQuantityValidator {
    fn validate(&self, product: &NewProduct) -> ValidationResult<()> {
        validate_non_negative("quantity", product.quantity)
    }
}

impl Validator<Product> for ProductQuantityValidator {
    fn validate(&self, product: &Product) -> ValidationResult<()> {
        validate_non_negative("quantity", product.quantity)
    }
}

/// Rejects blank or oversized product names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductNameValidator;

impl Validator<NewProduct> for ProductNameValidator {
    fn validate(&self, product: &NewProduct) -> ValidationResult<()> {
        validate_name("name", &product.name)
    }
}

impl Validator<Product> for ProductNameValidator {
    fn validate(&self, product: &Product) -> ValidationResult<()> {
        validate_name("name", &product.name)
    }
}

// =============================================================================
// Client Validators
// =============================================================================

/// Rejects blank or oversized client names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientNameValidator;

impl Validator<NewClient> for ClientNameValidator {
    fn validate(&self, client: &NewClient) -> ValidationResult<()> {
        validate_name("name", &client.name)
    }
}

impl Validator<Client> for ClientNameValidator {
    fn validate(&self, client: &Client) -> ValidationResult<()> {
        validate_name("name", &client.name)
    }
}

// =============================================================================
// Order Validators
// =============================================================================

/// Rejects orders with a negative amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderAmountValidator;

impl Validator<NewOrder> for OrderAmountValidator {
    fn validate(&self, order: &NewOrder) -> ValidationResult<()> {
        validate_non_negative("amount", order.amount)
    }
}

// =============================================================================
// Default Sets
// =============================================================================

/// Standard checks for new products: quantity, then name.
pub fn default_new_product_validators() -> Vec<Box<dyn Validator<NewProduct>>> {
    vec![Box::new(ProductQuantityValidator), Box::new(ProductNameValidator)]
}

/// Standard checks for product updates: quantity, then name.
pub fn default_product_validators() -> Vec<Box<dyn Validator<Product>>> {
    vec![Box::new(ProductQuantityValidator), Box::new(ProductNameValidator)]
}

/// Standard checks for new clients.
pub fn default_new_client_validators() -> Vec<Box<dyn Validator<NewClient>>> {
    vec![Box::new(ClientNameValidator)]
}

/// Standard checks for client updates.
pub fn default_client_validators() -> Vec<Box<dyn Validator<Client>>> {
    vec![Box::new(ClientNameValidator)]
}

/// Standard checks for new orders.
pub fn default_order_validators() -> Vec<Box<dyn Validator<NewOrder>>> {
    vec![Box::new(OrderAmountValidator)]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Alice").is_ok());
        assert_eq!(
            validate_name("name", "   "),
            Err(ValidationError::Required { field: "name" })
        );
        assert!(validate_name("name", &"A".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name("name", &"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_product_quantity_validator() {
        let validator = ProductQuantityValidator;
        assert!(validator.validate(&NewProduct::new("Widget", 0)).is_ok());
        assert!(validator.validate(&NewProduct::new("Widget", 10)).is_ok());
        assert_eq!(
            validator.validate(&NewProduct::new("Widget", -1)),
            Err(ValidationError::Negative {
                field: "quantity",
                value: -1
            })
        );

        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            quantity: -3,
        };
        assert!(Validator::<Product>::validate(&validator, &product).is_err());
    }

    #[test]
    fn test_order_amount_validator() {
        let validator = OrderAmountValidator;
        assert!(validator.validate(&NewOrder::new(1, 1, 0)).is_ok());
        assert!(validator.validate(&NewOrder::new(1, 1, 5)).is_ok());
        assert!(validator.validate(&NewOrder::new(1, 1, -5)).is_err());
    }

    #[test]
    fn test_run_all_stops_at_first_failure() {
        let validators = default_new_product_validators();
        // Both quantity and name are invalid; quantity runs first.
        let err = run_all(&validators, &NewProduct::new("", -2)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                field: "quantity",
                value: -2
            }
        );
    }

    #[test]
    fn test_run_all_with_no_validators_accepts_anything() {
        let validators: Vec<Box<dyn Validator<NewClient>>> = Vec::new();
        assert!(run_all(&validators, &NewClient::new("")).is_ok());
    }
}
