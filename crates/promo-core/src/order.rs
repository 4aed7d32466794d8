//! # Order
//!
//! The checkout context a promotion is evaluated against.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order::due()                                    │
//! │                                                                         │
//! │  cart ──► Σ line_total ──► total()                                     │
//! │                               │                                         │
//! │  promotion slot               │                                         │
//! │  ├── None ─────────► 0 ───────┤                                         │
//! │  └── Some(p) ──► p.discount(&order)                                    │
//! │                    │          │                                         │
//! │                    └──────────┴──► due = total - discount              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An `Order` is immutable once built. `total()` and `due()` recompute from
//! the cart on every call and have no side effects, so calling them twice
//! always gives the same answer.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::CoreResult;
use crate::money::Money;
use crate::promotions::Promotion;
use crate::types::{Customer, LineItem};

/// A customer's cart plus the promotion policy to price it with.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use promo_core::{Customer, LineItem, Money, Order};
/// use promo_core::promotions::FIDELITY;
///
/// let ann = Customer::new("Ann Smith", 1100);
/// let cart = vec![
///     LineItem::new("banana", 4, Money::from_cents(50)).unwrap(),
///     LineItem::new("apple", 10, Money::from_cents(150)).unwrap(),
///     LineItem::new("watermelon", 5, Money::from_cents(500)).unwrap(),
/// ];
///
/// let order = Order::new(ann, cart, Some(Arc::new(FIDELITY)));
/// assert_eq!(order.total(), Money::from_cents(4200));
/// assert_eq!(order.due().unwrap(), Money::from_cents(3990));
/// assert_eq!(order.to_string(), "<Order total: 42.00 due: 39.90>");
/// ```
#[derive(Clone)]
pub struct Order {
    customer: Customer,
    cart: Vec<LineItem>,
    promotion: Option<Arc<dyn Promotion>>,
}

impl Order {
    /// Creates an order. `promotion` is `None` when no discount applies.
    pub fn new(
        customer: Customer,
        cart: Vec<LineItem>,
        promotion: Option<Arc<dyn Promotion>>,
    ) -> Self {
        Order {
            customer,
            cart,
            promotion,
        }
    }

    /// Returns a copy of this order priced with `promotion` instead.
    pub fn with_promotion(&self, promotion: Arc<dyn Promotion>) -> Self {
        Order {
            customer: self.customer.clone(),
            cart: self.cart.clone(),
            promotion: Some(promotion),
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn cart(&self) -> &[LineItem] {
        &self.cart
    }

    /// The attached promotion, if any.
    pub fn promotion(&self) -> Option<&Arc<dyn Promotion>> {
        self.promotion.as_ref()
    }

    /// Sum of every line total, in cart order. Exact zero for an empty cart.
    pub fn total(&self) -> Money {
        self.cart.iter().map(LineItem::line_total).sum()
    }

    /// Number of distinct product identifiers in the cart.
    ///
    /// Quantities don't matter: 30 bananas count once.
    pub fn distinct_products(&self) -> usize {
        self.cart
            .iter()
            .map(LineItem::product)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Discount granted by the attached promotion, or zero without one.
    ///
    /// ## Errors
    /// Propagates [`CoreError::EmptyRegistry`](crate::CoreError::EmptyRegistry)
    /// when the attached promotion is a registry with nothing registered.
    pub fn discount(&self) -> CoreResult<Money> {
        match &self.promotion {
            Some(promotion) => promotion.discount(self),
            None => Ok(Money::zero()),
        }
    }

    /// Amount the customer pays: `total() - discount()`.
    pub fn due(&self) -> CoreResult<Money> {
        Ok(self.total() - self.discount()?)
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("customer", &self.customer)
            .field("cart", &self.cart)
            .field("promotion", &self.promotion.as_ref().map(|p| p.name()))
            .finish()
    }
}

/// Renders `<Order total: 42.00 due: 39.90>`, both rounded to cents.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total().round_to_cents().amount();
        match self.due() {
            Ok(due) => write!(
                f,
                "<Order total: {:.2} due: {:.2}>",
                total,
                due.round_to_cents().amount()
            ),
            Err(err) => write!(f, "<Order total: {:.2} due: unavailable ({})>", total, err),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promotions::{BULK_ITEM, FIDELITY, LARGE_ORDER};

    fn item(product: &str, qty: i64, cents: i64) -> LineItem {
        LineItem::new(product, qty, Money::from_cents(cents)).unwrap()
    }

    fn default_cart() -> Vec<LineItem> {
        vec![
            item("banana", 4, 50),
            item("apple", 10, 150),
            item("watermelon", 5, 500),
        ]
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let order = Order::new(Customer::new("John Doe", 0), default_cart(), None);
        assert_eq!(order.total(), Money::from_cents(4200));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let order = Order::new(Customer::new("John Doe", 0), Vec::new(), None);
        assert!(order.total().is_zero());
        assert!(order.due().unwrap().is_zero());
    }

    #[test]
    fn test_due_without_promotion_equals_total() {
        let order = Order::new(Customer::new("Ann Smith", 1100), default_cart(), None);
        assert!(order.promotion().is_none());
        assert_eq!(order.due().unwrap(), order.total());
        assert!(order.discount().unwrap().is_zero());
    }

    #[test]
    fn test_fidelity_promotion_applies_to_loyal_customer() {
        let joe = Order::new(
            Customer::new("John Doe", 0),
            default_cart(),
            Some(Arc::new(FIDELITY)),
        );
        assert_eq!(joe.due().unwrap(), Money::from_cents(4200));

        let ann = Order::new(
            Customer::new("Ann Smith", 1100),
            default_cart(),
            Some(Arc::new(FIDELITY)),
        );
        assert_eq!(ann.due().unwrap(), Money::from_cents(3990));
    }

    #[test]
    fn test_with_promotion_keeps_cart() {
        let plain = Order::new(Customer::new("John Doe", 0), default_cart(), None);
        let bulk = plain.with_promotion(Arc::new(BULK_ITEM));
        assert_eq!(bulk.cart(), plain.cart());
        assert_eq!(bulk.customer(), plain.customer());
        assert_eq!(bulk.promotion().map(|p| p.name()), Some("bulk_item"));
        assert!(plain.promotion().is_none());
    }

    #[test]
    fn test_total_and_due_are_idempotent() {
        let order = Order::new(
            Customer::new("Ann Smith", 1100),
            default_cart(),
            Some(Arc::new(FIDELITY)),
        );
        assert_eq!(order.total(), order.total());
        assert_eq!(order.due().unwrap(), order.due().unwrap());
    }

    #[test]
    fn test_distinct_products_ignores_quantity() {
        let cart = vec![item("banana", 30, 50), item("banana", 2, 50), item("apple", 1, 150)];
        let order = Order::new(Customer::new("John Doe", 0), cart, None);
        assert_eq!(order.distinct_products(), 2);
    }

    #[test]
    fn test_distinct_products_compare_exact_strings() {
        let mut cart: Vec<LineItem> = (0..9).map(|i| item(&i.to_string(), 1, 100)).collect();
        cart.push(item("8 ", 1, 100));

        let order = Order::new(Customer::new("John Doe", 0), cart, Some(Arc::new(LARGE_ORDER)));
        assert_eq!(order.distinct_products(), 10);
        assert_eq!(order.due().unwrap(), Money::from_cents(930));
    }

    #[test]
    fn test_display() {
        let long_cart: Vec<LineItem> = (0..12).map(|i| item(&i.to_string(), 1, 100)).collect();
        let order = Order::new(
            Customer::new("John Doe", 0),
            long_cart,
            Some(Arc::new(LARGE_ORDER)),
        );
        assert_eq!(order.to_string(), "<Order total: 12.00 due: 11.16>");
    }

    #[test]
    fn test_debug_names_promotion() {
        let order = Order::new(
            Customer::new("John Doe", 0),
            Vec::new(),
            Some(Arc::new(FIDELITY)),
        );
        let debug = format!("{:?}", order);
        assert!(debug.contains("Some(\"fidelity\")"));
    }
}
