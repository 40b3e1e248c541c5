//! # Validation Module
//!
//! Opt-in input validation run before an order leaves the process.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Consuming component                                          │
//! │  ├── Builds LineItem / OrderRequest from its own data                  │
//! │  └── May call THIS MODULE before submission                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Remote order service                                         │
//! │  └── Owns the authoritative rules; rejects with a non-2xx status       │
//! │                                                                         │
//! │  The wire types themselves enforce nothing: historically both          │
//! │  components shipped unvalidated payloads, and keeping the types        │
//! │  permissive preserves that contract. These validators close the        │
//! │  gap for callers that opt in.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ordo_core::validation::{validate_order_request, validate_sku};
//! use ordo_core::types::{LineItem, OrderRequest};
//!
//! validate_sku("COKE-330").unwrap();
//!
//! let order = OrderRequest::new("client-1", vec![LineItem::new("COKE-330", 2, 199)]);
//! validate_order_request(&order).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::ids::is_valid_id;
use crate::types::{LineItem, OrderRequest};

/// Maximum SKU length accepted before submission.
pub const MAX_SKU_LEN: usize = 64;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
/// - Must contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use ordo_core::validation::validate_sku;
///
/// assert!(validate_sku("COKE-330").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a client identifier against the shared id pattern.
///
/// ## Rules
/// - Must match `[A-Za-z0-9_-]{3,64}` (see [`crate::ids::is_valid_id`])
pub fn validate_client_id(client_id: &str) -> ValidationResult<()> {
    if client_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "clientId".to_string(),
        });
    }

    if !is_valid_id(client_id) {
        return Err(ValidationError::InvalidFormat {
            field: "clientId".to_string(),
            reason: "must be 3-64 letters, numbers, hyphens, or underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed: a zero-quantity line contributes nothing to the
///   order total but is legal on the wire
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use ordo_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());  // $10.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "priceCents".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates one line item (SKU, quantity, price).
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_sku(&item.sku)?;
    validate_quantity(item.quantity)?;
    validate_price_cents(item.price_cents)?;
    Ok(())
}

/// Validates a whole order request before submission.
///
/// Checks the client id and every line item. An empty item list is
/// legal (the remote service decides whether to accept it).
pub fn validate_order_request(order: &OrderRequest) -> ValidationResult<()> {
    validate_client_id(&order.client_id)?;
    for item in &order.items {
        validate_line_item(item)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("COKE-330").is_ok());
        assert!(validate_sku("ABC123").is_ok());
        assert!(validate_sku("product_1").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_client_id() {
        assert!(validate_client_id("client-1").is_ok());
        assert!(validate_client_id("c_9").is_ok());

        assert!(validate_client_id("").is_err());
        assert!(validate_client_id("ab").is_err());
        assert!(validate_client_id("not ok").is_err());
    }

    #[test]
    fn test_validate_quantity_allows_zero() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_order_request() {
        let ok = OrderRequest::new("client-1", vec![LineItem::new("X1", 2, 500)]);
        assert!(validate_order_request(&ok).is_ok());

        let bad_item = OrderRequest::new("client-1", vec![LineItem::new("X1", -2, 500)]);
        assert!(matches!(
            validate_order_request(&bad_item),
            Err(ValidationError::Negative { ref field }) if field == "quantity"
        ));

        let bad_client = OrderRequest::new("c", vec![]);
        assert!(validate_order_request(&bad_client).is_err());
    }

    #[test]
    fn test_empty_item_list_is_legal() {
        let order = OrderRequest::new("client-1", vec![]);
        assert!(validate_order_request(&order).is_ok());
    }
}
