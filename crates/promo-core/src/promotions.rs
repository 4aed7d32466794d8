//! # Promotions
//!
//! Discount rules and the [`Promotion`] trait they are evaluated through.
//!
//! ## Built-in Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  name          condition                          discount             │
//! │  ───────────   ────────────────────────────────   ──────────────────   │
//! │  fidelity      customer.fidelity ≥ 1000           5% of order total    │
//! │  bulk_item     per line with quantity ≥ 20        10% of that line     │
//! │  large_order   ≥ 10 distinct products             7% of order total    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `bulk_item` stacks: every qualifying line adds its own 10%. The other two
//! are flat threshold rules.
//!
//! Rules are plain functions of `&Order`. They never see each other's
//! results and never mutate the order.

use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::order::Order;
use crate::types::Rate;

// =============================================================================
// Promotion Trait
// =============================================================================

/// Anything that can price a discount for an [`Order`].
///
/// Implemented by single rules ([`PromotionDef`]) and by the best-discount
/// selector ([`PromotionRegistry`](crate::registry::PromotionRegistry)), so
/// either can sit in an order's promotion slot.
pub trait Promotion: Send + Sync {
    /// Stable identifier, used in diagnostics.
    fn name(&self) -> &str;

    /// Discount for `order`. Never negative for the built-in rules.
    fn discount(&self, order: &Order) -> CoreResult<Money>;
}

/// Signature every discount rule has.
pub type DiscountRule = fn(&Order) -> Money;

/// A named discount rule.
///
/// Declared as a `const` so rule tables can be built at compile time:
/// ```rust
/// use promo_core::money::Money;
/// use promo_core::order::Order;
/// use promo_core::promotions::PromotionDef;
///
/// fn nothing(_: &Order) -> Money {
///     Money::zero()
/// }
///
/// const NOTHING: PromotionDef = PromotionDef {
///     name: "nothing",
///     description: "never discounts",
///     rule: nothing,
/// };
/// ```
#[derive(Clone, Copy)]
pub struct PromotionDef {
    /// Unique name within a registry.
    pub name: &'static str,
    /// Human-readable description for listings.
    pub description: &'static str,
    /// The rule itself.
    pub rule: DiscountRule,
}

impl PromotionDef {
    /// Runs the rule against `order`.
    #[inline]
    pub fn apply(&self, order: &Order) -> Money {
        (self.rule)(order)
    }
}

impl Promotion for PromotionDef {
    fn name(&self) -> &str {
        self.name
    }

    fn discount(&self, order: &Order) -> CoreResult<Money> {
        Ok(self.apply(order))
    }
}

impl fmt::Debug for PromotionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromotionDef")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Rule Constants
// =============================================================================

/// Loyalty points needed for the fidelity discount.
pub const FIDELITY_MIN_POINTS: u32 = 1000;
/// 5%
pub const FIDELITY_RATE: Rate = Rate::from_bps(500);

/// Units on a single line needed for the bulk discount on that line.
pub const BULK_ITEM_MIN_QUANTITY: i64 = 20;
/// 10%
pub const BULK_ITEM_RATE: Rate = Rate::from_bps(1000);

/// Distinct products needed for the large order discount.
pub const LARGE_ORDER_MIN_DISTINCT: usize = 10;
/// 7%
pub const LARGE_ORDER_RATE: Rate = Rate::from_bps(700);

// =============================================================================
// Rules
// =============================================================================

/// 5% of the order total for customers with 1000 or more fidelity points.
pub fn fidelity_discount(order: &Order) -> Money {
    if order.customer().fidelity >= FIDELITY_MIN_POINTS {
        return order.total().percentage(FIDELITY_RATE);
    }
    Money::zero()
}

/// 10% of each line that has 20 or more units; qualifying lines add up.
pub fn bulk_item_discount(order: &Order) -> Money {
    order
        .cart()
        .iter()
        .filter(|item| item.quantity() >= BULK_ITEM_MIN_QUANTITY)
        .map(|item| item.line_total().percentage(BULK_ITEM_RATE))
        .sum()
}

/// 7% of the order total for orders with 10 or more distinct products.
pub fn large_order_discount(order: &Order) -> Money {
    if order.distinct_products() >= LARGE_ORDER_MIN_DISTINCT {
        return order.total().percentage(LARGE_ORDER_RATE);
    }
    Money::zero()
}

pub const FIDELITY: PromotionDef = PromotionDef {
    name: "fidelity",
    description: "5% discount for customers with 1000 or more fidelity points",
    rule: fidelity_discount,
};

pub const BULK_ITEM: PromotionDef = PromotionDef {
    name: "bulk_item",
    description: "10% discount for each line item with 20 or more units",
    rule: bulk_item_discount,
};

pub const LARGE_ORDER: PromotionDef = PromotionDef {
    name: "large_order",
    description: "7% discount for orders with 10 or more distinct items",
    rule: large_order_discount,
};

/// Every built-in rule, in registration order.
pub const BUILTIN_PROMOTIONS: &[PromotionDef] = &[FIDELITY, BULK_ITEM, LARGE_ORDER];

// =============================================================================
// Unit Tests
// =============================================================================
