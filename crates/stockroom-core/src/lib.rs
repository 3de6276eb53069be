//! # stockroom-core: Pure Business Types for Stockroom
//!
//! Entities, invariants, bill text and table projections with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    CLI (apps/cli)                               │   │
//! │  │    client add ──► product update ──► order place ──► list      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              stockroom-service (business operations)            │   │
//! │  └─────────────┬───────────────────────────────────┬───────────────┘   │
//! │                │                                   │                    │
//! │  ┌─────────────▼───────────────────┐  ┌────────────▼────────────────┐  │
//! │  │   ★ stockroom-core (THIS) ★     │  │   stockroom-db (SQLite)     │  │
//! │  │  types • validation • bill      │  │   repositories, migrations  │  │
//! │  │  table • error                  │  │                             │  │
//! │  │  NO I/O • PURE FUNCTIONS        │  │                             │  │
//! │  └─────────────────────────────────┘  └─────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Client, Product, Order and their insert payloads
//! - [`validation`] - The `Validator` trait and the standard validators
//! - [`bill`] - Bill text layout
//! - [`table`] - Typed `(column, value)` projections for list views
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod error;
pub mod table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill::Bill;
pub use error::{CoreError, CoreResult, ValidationError};
pub use table::{render_table, TableRow};
pub use types::*;
pub use validation::Validator;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a client or product name, in characters.
pub const MAX_NAME_LEN: usize = 200;
