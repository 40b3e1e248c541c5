//! # Domain Types
//!
//! The order data contracts shared by both consuming components.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  OrderRequest   │   │    LineItem     │   │    OrderId      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  client_id      │──►│  sku            │   │  opaque String  │       │
//! │  │  items[]        │   │  quantity       │   │  issued by the  │       │
//! │  └─────────────────┘   │  price_cents    │   │  remote service │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Compatibility
//! Field names are pinned to the remote service's JSON contract:
//! `clientId`, `items`, `sku`, `quantity`, `priceCents`. The serde
//! renames below are load-bearing; changing them breaks the wire.
//!
//! All three types are transient value objects: constructed by the
//! caller immediately before submission, never mutated afterwards, not
//! persisted anywhere in this library.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One SKU/quantity/unit-price tuple within an order request.
///
/// ## Invariant Gap (intentional)
/// `quantity >= 0` and `price_cents >= 0` are NOT enforced here - the
/// wire contract accepts whatever the caller built, matching the
/// upstream components. Run [`crate::validation::validate_line_item`]
/// before submission when the stricter check is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stock Keeping Unit - business identifier of the product.
    pub sku: String,

    /// Number of units ordered.
    pub quantity: i64,

    /// Price per unit in cents (`priceCents` on the wire).
    pub price_cents: i64,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(sku: impl Into<String>, quantity: i64, price_cents: i64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            price_cents,
        }
    }

    /// Line total (`price_cents * quantity`) in integer cents.
    ///
    /// ## Example
    /// ```rust
    /// use ordo_core::types::LineItem;
    ///
    /// let item = LineItem::new("COKE-330", 3, 199);
    /// assert_eq!(item.line_total().unwrap().to_string(), "$5.97");
    /// ```
    pub fn line_total(&self) -> CoreResult<Money> {
        Money::from_cents(self.price_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Request
// =============================================================================

/// An order submission: who is ordering and what.
///
/// No uniqueness or size constraint applies to `items`; the remote
/// service owns those rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Identifier of the ordering client (`clientId` on the wire).
    pub client_id: String,

    /// Ordered sequence of line items.
    pub items: Vec<LineItem>,
}

impl OrderRequest {
    /// Creates an order request.
    pub fn new(client_id: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            client_id: client_id.into(),
            items,
        }
    }
}

// =============================================================================
// Order Identifier
// =============================================================================

/// Opaque server-issued identifier naming a created order.
///
/// No format is guaranteed beyond "printable text returned in a JSON
/// field named `id`".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wraps a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the raw string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
