//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents fix addition but not percentages:                        │
//! │    $16.50 × 5% = $0.825  → 82 or 83 cents? Must decide too early.      │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals                                           │
//! │    16.50 × 0.05 = 0.8250 exactly                                        │
//! │    Rounding happens once, on display, with Bankers Rounding            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use promo_core::money::Money;
//!
//! // Create from cents (preferred) or parse a decimal string
//! let price = Money::from_cents(150); // $1.50
//! let same: Money = "1.5".parse().unwrap();
//! assert_eq!(price, same);
//!
//! // Arithmetic operations
//! let line_total = price * 10;                 // $15.00
//! let total = line_total + Money::from_cents(200); // $17.00
//! assert_eq!(total.to_string(), "$17.00");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// An exact monetary amount.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values, e.g. `total - discount`
///   when a misbehaving rule over-discounts
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Serializes as a string**: `"42.00"`, never a JSON float
///
/// ## Where Money is Used
/// ```text
/// LineItem.unit_price ──► LineItem.line_total ──► Order.total
///                                                     │
///                          Promotion.discount ◄───────┤
///                                  │                  │
///                                  └──────────► Order.due
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use promo_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact underlying amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    ///
    /// This is the seed for every accumulation (cart totals, stacked
    /// discounts), so an empty sum is an exact zero.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use promo_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(50); // $0.50
    /// let line_total = unit_price.multiply_quantity(30);
    /// assert_eq!(line_total, Money::from_cents(1500)); // $15.00
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Returns `rate` of this amount, exactly.
    ///
    /// No rounding is applied: $16.50 at 5% is $0.8250. Rounding to cents
    /// is a presentation concern, see [`Money::round_to_cents`].
    ///
    /// ## Example
    /// ```rust
    /// use promo_core::money::Money;
    /// use promo_core::types::Rate;
    ///
    /// let total = Money::from_cents(4200); // $42.00
    /// let discount = total.percentage(Rate::from_bps(500)); // 5%
    /// assert_eq!(discount, Money::from_cents(210)); // $2.10
    /// ```
    #[inline]
    pub fn percentage(&self, rate: Rate) -> Money {
        Money(self.0 * rate.as_fraction())
    }

    /// Rounds to whole cents using Bankers Rounding (round half to even).
    ///
    /// ```text
    ///   0.825 → 0.82     0.835 → 0.84     0.8251 → 0.83
    /// ```
    #[inline]
    pub fn round_to_cents(&self) -> Money {
        Money(self.0.round_dp(2))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money rounded to cents.
///
/// ## Note
/// This is for diagnostics. The exact amount is always available through
/// [`Money::amount`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}${:.2}", sign, rounded.abs())
    }
}

/// Parses a plain decimal string such as `"0.5"` or `"12.00"`.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        Decimal::from_str(trimmed)
            .map(Money)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: e.to_string(),
            })
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Sums from an exact zero seed, so an empty iterator yields `Money::zero()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
