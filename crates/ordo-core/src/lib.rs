//! # ordo-core: Pure Business Logic for Ordo
//!
//! Shared utility crate used by both consuming components. It contains
//! the order data contracts and all pure helpers as functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Ordo Architecture                               │
//! │                                                                         │
//! │  ┌───────────────────────────┐   ┌───────────────────────────┐         │
//! │  │       Component A         │   │       Component B         │         │
//! │  │  (order producer)         │   │  (order producer)         │         │
//! │  └─────────────┬─────────────┘   └─────────────┬─────────────┘         │
//! │                │                               │                        │
//! │  ┌─────────────▼───────────────────────────────▼─────────────┐         │
//! │  │               ★ ordo-core (THIS CRATE) ★                  │         │
//! │  │                                                           │         │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐            │         │
//! │  │   │   types   │  │   money   │  │    ids    │            │         │
//! │  │   │ LineItem  │  │   Money   │  │ is_valid  │            │         │
//! │  │   │ OrderReq  │  │ sum_cents │  │ gen_code  │            │         │
//! │  │   └───────────┘  └───────────┘  └───────────┘            │         │
//! │  │                                                           │         │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                   │         │
//! │  └─────────────────────────┬─────────────────────────────────┘         │
//! │                            │                                            │
//! │  ┌─────────────────────────▼─────────────────────────────────┐         │
//! │  │              ordo-client (HTTP integration)               │         │
//! │  │            one POST {baseUrl}/orders per call             │         │
//! │  └───────────────────────────────────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Order data contracts (LineItem, OrderRequest, OrderId)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ids`] - Identifier validation and unique-code generation
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in pre-submission validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic except for the one explicit
//!    entropy capability in [`ids`]
//! 2. **Integer Money**: all monetary values are cents (i64); the
//!    decimal form exists only at the `Display` boundary
//! 3. **Explicit Errors**: only argument validation fails loudly,
//!    via typed errors - never strings or panics
//! 4. **Pinned Wire Names**: `clientId` / `priceCents` renames are part
//!    of the remote contract
//!
//! ## Example Usage
//!
//! ```rust
//! use ordo_core::money::order_total;
//! use ordo_core::types::{LineItem, OrderRequest};
//!
//! let order = OrderRequest::new(
//!     "client-1",
//!     vec![LineItem::new("X1", 2, 500)],
//! );
//!
//! let total = order_total(Some(&order.items)).unwrap();
//! assert_eq!(total.to_string(), "$10.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ids;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ordo_core::Money` instead of
// `use ordo_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use ids::{generate_unique_code, is_valid_id};
pub use money::{order_total, sum_cents, Money};
pub use types::{LineItem, OrderId, OrderRequest};
