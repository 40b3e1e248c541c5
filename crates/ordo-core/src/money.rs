//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus
//! the shared summation helpers both consuming components call.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Sums stay in i64 cents from first add to last.                      │
//! │    The only division by 100 happens at the Display boundary,           │
//! │    which is exact for a power-of-ten divisor on an integer.            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ordo_core::money::sum_cents;
//!
//! let total = sum_cents(Some(&[Some(199), None, Some(499)])).unwrap();
//! assert_eq!(total.cents(), 698);
//! assert_eq!(total.to_string(), "$6.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::LineItem;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Serializes as a bare integer cent count,
///   matching the `priceCents` wire convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ordo_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use ordo_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).units(), 10);
    /// assert_eq!(Money::from_cents(-550).units(), -5);
    /// ```
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity, failing on i64 overflow.
    ///
    /// ## Example
    /// ```rust
    /// use ordo_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(199);
    /// let line_total = unit_price.multiply_quantity(3).unwrap();
    /// assert_eq!(line_total.cents(), 597);
    /// ```
    pub fn multiply_quantity(&self, qty: i64) -> CoreResult<Self> {
        self.0
            .checked_mul(qty)
            .map(Money)
            .ok_or(CoreError::Overflow {
                context: "line total",
            })
    }
}

// =============================================================================
// Summation Helpers
// =============================================================================

/// Sums cent amounts and returns the total as [`Money`].
///
/// Mirrors the contract both consuming components rely on:
/// - `None` ENTRIES count as zero (absent amounts are skipped)
/// - a `None` CONTAINER is a caller bug and fails with a
///   [`ValidationError::Required`] - the container comes from upstream
///   JSON where the whole field may be missing
///
/// ## Example
/// ```rust
/// use ordo_core::money::sum_cents;
///
/// let total = sum_cents(Some(&[Some(100), None, Some(50)])).unwrap();
/// assert_eq!(total.cents(), 150);
///
/// assert!(sum_cents(None).is_err());
/// ```
pub fn sum_cents(values: Option<&[Option<i64>]>) -> CoreResult<Money> {
    let values = values.ok_or_else(|| ValidationError::Required {
        field: "values".to_string(),
    })?;

    let mut total: i64 = 0;
    for cents in values.iter().flatten() {
        total = total.checked_add(*cents).ok_or(CoreError::Overflow {
            context: "cent sum",
        })?;
    }

    Ok(Money::from_cents(total))
}

/// Calculates the order total (`price_cents * quantity` per line) as
/// [`Money`].
///
/// The running total stays in integer cents; no intermediate division
/// happens, so the result is exact.
///
/// A `None` container fails with [`ValidationError::Required`], same
/// policy as [`sum_cents`].
///
/// ## Example
/// ```rust
/// use ordo_core::money::order_total;
/// use ordo_core::types::LineItem;
///
/// let items = vec![
///     LineItem::new("A", 3, 199),
///     LineItem::new("B", 1, 1),
/// ];
/// let total = order_total(Some(&items)).unwrap();
/// assert_eq!(total.to_string(), "$6.98");
/// ```
pub fn order_total(items: Option<&[LineItem]>) -> CoreResult<Money> {
    let items = items.ok_or_else(|| ValidationError::Required {
        field: "items".to_string(),
    })?;

    let mut total = Money::zero();
    for item in items {
        let line = item.line_total()?;
        total.0 = total.0.checked_add(line.cents()).ok_or(CoreError::Overflow {
            context: "order total",
        })?;
    }

    Ok(total)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is the one place cents become a two-fractional-digit decimal.
/// Use frontend formatting for actual UI display to handle localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations where overflow is
/// out of range by construction; use `multiply_quantity` otherwise).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
