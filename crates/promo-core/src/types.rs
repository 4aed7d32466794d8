//! # Domain Types
//!
//! Value types an [`Order`](crate::order::Order) is built from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │    LineItem     │   │      Rate       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  product (SKU)  │   │  bps (u32)      │       │
//! │  │  fidelity       │   │  quantity ≥ 1   │   │  500 = 5%       │       │
//! │  │                 │   │  unit_price ≥ 0 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  LineItemInput ──(validate)──► LineItem                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types are immutable once built. `LineItem` keeps its fields private
//! so the only way to get one is through validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_product, validate_quantity, validate_unit_price, ValidationResult};

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = 7% (large order discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact decimal fraction (500 bps → 0.0500).
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Customer
// =============================================================================

/// The person an order is placed for.
///
/// Customers have no identity beyond their fields: two customers with the
/// same name and fidelity are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Display name.
    pub name: String,

    /// Loyalty-point balance.
    pub fidelity: u32,
}

impl Customer {
    /// Creates a customer.
    pub fn new(name: impl Into<String>, fidelity: u32) -> Self {
        Customer {
            name: name.into(),
            fidelity,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product line in a cart.
///
/// ## Invariants
/// - `product` is non-empty
/// - `quantity >= 1`
/// - `unit_price >= 0`
///
/// ## Example
/// ```rust
/// use promo_core::{LineItem, Money};
///
/// let bananas = LineItem::new("banana", 30, Money::from_cents(50)).unwrap();
/// assert_eq!(bananas.line_total(), Money::from_cents(1500));
///
/// assert!(LineItem::new("banana", 0, Money::from_cents(50)).is_err());
/// assert!(LineItem::new("banana", 1, Money::from_cents(-50)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct LineItem {
    product: String,
    quantity: i64,
    unit_price: Money,
}

impl LineItem {
    /// Creates a validated line item.
    ///
    /// The product identifier is stored exactly as given, so `"apple "` and
    /// `"apple"` count as two distinct products.
    pub fn new(
        product: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> ValidationResult<Self> {
        let product = product.into();
        validate_product(&product)?;
        validate_quantity(quantity)?;
        validate_unit_price(unit_price)?;

        Ok(LineItem {
            product,
            quantity,
            unit_price,
        })
    }

    /// Product name or SKU.
    #[inline]
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Number of units.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price of a single unit.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Calculates the line total (unit price × quantity).
    ///
    /// Computed on every call, never cached.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Unvalidated line item as it arrives from outside (JSON, CLI).
///
/// Convert with `LineItem::try_from(input)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemInput {
    pub product: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = ValidationError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        LineItem::new(input.product, input.quantity, input.unit_price)
    }
}

impl From<&LineItem> for LineItemInput {
    fn from(item: &LineItem) -> Self {
        LineItemInput {
            product: item.product.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
