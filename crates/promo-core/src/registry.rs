//! # Promotion Registry
//!
//! Holds the active discount rules and picks the best one for an order.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   PromotionRegistry::new()          PromotionRegistry::builtin()        │
//! │            │                                   │                        │
//! │   register(FIDELITY)?                          │ (static table)         │
//! │   register(BULK_ITEM)?                         │                        │
//! │            │                                   │                        │
//! │            └───────────────┬───────────────────┘                        │
//! │                            ▼                                            │
//! │                 Arc<PromotionRegistry>   ← frozen, shared read-only     │
//! │                            │                                            │
//! │            ┌───────────────┼───────────────┐                            │
//! │            ▼               ▼               ▼                            │
//! │      best_discount    best_discount   best_discount   (any thread)     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A registry is mutable only while the caller owns it. Once wrapped in an
//! `Arc` (directly, or through [`install`] / [`global`]) nothing can add to
//! it, so concurrent readers need no locking.
//!
//! ## Selection
//! Every rule is evaluated; the largest discount wins. When several rules
//! tie, the one registered first is reported. The amount is the same either
//! way. Evaluating an empty registry is [`CoreError::EmptyRegistry`].

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::order::Order;
use crate::promotions::{Promotion, PromotionDef, BUILTIN_PROMOTIONS};

/// Name the registry reports when it is used as an order's promotion.
pub const BEST_PROMOTION_NAME: &str = "best_promotion";

// =============================================================================
// Outcome
// =============================================================================

/// The discount one rule granted for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PromotionOutcome {
    pub name: String,
    pub discount: Money,
}

// =============================================================================
// Registry
// =============================================================================

/// An ordered set of uniquely named discount rules.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use promo_core::{Customer, LineItem, Money, Order};
/// use promo_core::promotions::{BULK_ITEM, FIDELITY, LARGE_ORDER};
/// use promo_core::registry::PromotionRegistry;
///
/// let mut registry = PromotionRegistry::new();
/// registry.register(FIDELITY).unwrap();
/// registry.register(BULK_ITEM).unwrap();
/// registry.register(LARGE_ORDER).unwrap();
///
/// let cart = vec![
///     LineItem::new("banana", 30, Money::from_cents(50)).unwrap(),
///     LineItem::new("apple", 10, Money::from_cents(150)).unwrap(),
/// ];
/// let order = Order::new(Customer::new("John Doe", 0), cart, None);
///
/// let best = registry.best(&order).unwrap();
/// assert_eq!(best.name, "bulk_item");
/// assert_eq!(best.discount, Money::from_cents(150));
///
/// let priced = order.with_promotion(Arc::new(registry));
/// assert_eq!(priced.due().unwrap(), Money::from_cents(2850));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromotionRegistry {
    promotions: Vec<PromotionDef>,
}

impl PromotionRegistry {
    /// Creates an empty registry. Register at least one rule before use.
    pub fn new() -> Self {
        PromotionRegistry {
            promotions: Vec::new(),
        }
    }

    /// The registry of every rule in [`BUILTIN_PROMOTIONS`].
    pub fn builtin() -> Self {
        PromotionRegistry {
            promotions: BUILTIN_PROMOTIONS.to_vec(),
        }
    }

    /// Builds a registry by registering `defs` in order.
    pub fn from_defs(defs: &[PromotionDef]) -> CoreResult<Self> {
        let mut registry = PromotionRegistry::new();
        for def in defs {
            registry.register(*def)?;
        }
        Ok(registry)
    }

    /// Adds a rule.
    ///
    /// ## Errors
    /// [`ValidationError::Duplicate`] if a rule with the same name exists.
    pub fn register(&mut self, def: PromotionDef) -> CoreResult<()> {
        if self.get(def.name).is_some() {
            return Err(ValidationError::Duplicate {
                field: "promotion".to_string(),
                value: def.name.to_string(),
            }
            .into());
        }

        trace!(promotion = def.name, "registered promotion");
        self.promotions.push(def);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }

    /// Rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PromotionDef> {
        self.promotions.iter()
    }

    /// Rule names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.promotions.iter().map(|def| def.name)
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&PromotionDef> {
        self.promotions.iter().find(|def| def.name == name)
    }

    /// Every rule's discount for `order`, in registration order.
    pub fn evaluate_all(&self, order: &Order) -> Vec<PromotionOutcome> {
        self.promotions
            .iter()
            .map(|def| PromotionOutcome {
                name: def.name.to_string(),
                discount: def.apply(order),
            })
            .collect()
    }

    /// The rule granting the largest discount, with that discount.
    ///
    /// Ties go to the earliest registered rule.
    pub fn best(&self, order: &Order) -> CoreResult<PromotionOutcome> {
        let mut best: Option<(&PromotionDef, Money)> = None;

        for def in &self.promotions {
            let discount = def.apply(order);
            trace!(promotion = def.name, %discount, "evaluated promotion");

            match best {
                Some((_, current)) if discount <= current => {}
                _ => best = Some((def, discount)),
            }
        }

        let (def, discount) = best.ok_or(CoreError::EmptyRegistry)?;
        debug!(promotion = def.name, %discount, "best promotion selected");

        Ok(PromotionOutcome {
            name: def.name.to_string(),
            discount,
        })
    }

    /// The largest discount any registered rule grants for `order`.
    pub fn best_discount(&self, order: &Order) -> CoreResult<Money> {
        self.best(order).map(|outcome| outcome.discount)
    }
}

/// A registry in an order's promotion slot applies the best discount.
impl Promotion for PromotionRegistry {
    fn name(&self) -> &str {
        BEST_PROMOTION_NAME
    }

    fn discount(&self, order: &Order) -> CoreResult<Money> {
        self.best_discount(order)
    }
}

// =============================================================================
// Process-wide Registry
// =============================================================================

static GLOBAL: OnceLock<Arc<PromotionRegistry>> = OnceLock::new();

/// Installs `registry` as the process-wide registry.
///
/// Must run during startup, before anything calls [`global`].
///
/// ## Errors
/// - [`CoreError::EmptyRegistry`] if `registry` has no rules
/// - [`CoreError::RegistryAlreadyInitialized`] if a registry is already set
pub fn install(registry: PromotionRegistry) -> CoreResult<Arc<PromotionRegistry>> {
    if registry.is_empty() {
        return Err(CoreError::EmptyRegistry);
    }

    let registry = Arc::new(registry);
    GLOBAL
        .set(Arc::clone(&registry))
        .map_err(|_| CoreError::RegistryAlreadyInitialized)?;

    info!(promotions = registry.len(), "promotion registry installed");
    Ok(registry)
}

/// The process-wide registry. Falls back to [`PromotionRegistry::builtin`]
/// when nothing was installed.
pub fn global() -> Arc<PromotionRegistry> {
    Arc::clone(GLOBAL.get_or_init(|| {
        info!(
            promotions = BUILTIN_PROMOTIONS.len(),
            "using built-in promotion registry"
        );
        Arc::new(PromotionRegistry::builtin())
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promotions::{BULK_ITEM, FIDELITY, LARGE_ORDER};
    use crate::types::{Customer, LineItem};

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

    fn order(fidelity: u32, cart: Vec<LineItem>) -> Order {
        Order::new(Customer::new("test", fidelity), cart, None)
    }

    fn flat_one_dollar(_: &Order) -> Money {
        Money::from_cents(100)
    }

    const FLAT_A: PromotionDef = PromotionDef {
        name: "flat_a",
        description: "always $1.00",
        rule: flat_one_dollar,
    };

    const FLAT_B: PromotionDef = PromotionDef {
        name: "flat_b",
        description: "always $1.00",
        rule: flat_one_dollar,
    };

    #[test]
    fn test_builtin_contents() {
        let registry = PromotionRegistry::builtin();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["fidelity", "bulk_item", "large_order"]
        );
        assert!(registry.get("bulk_item").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_registration_matches_static_table() {
        let registered = PromotionRegistry::from_defs(&[FIDELITY, BULK_ITEM, LARGE_ORDER]).unwrap();
        let builtin = PromotionRegistry::builtin();
        assert_eq!(
            registered.names().collect::<Vec<_>>(),
            builtin.names().collect::<Vec<_>>()
        );

        let o = order(1100, default_cart());
        assert_eq!(
            registered.best_discount(&o).unwrap(),
            builtin.best_discount(&o).unwrap()
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = PromotionRegistry::new();
        registry.register(FIDELITY).unwrap();
        let err = registry.register(FIDELITY).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_registry_is_an_error() {
        let registry = PromotionRegistry::new();
        let o = order(1100, default_cart());
        assert!(matches!(registry.best(&o), Err(CoreError::EmptyRegistry)));
        assert!(matches!(
            registry.best_discount(&o),
            Err(CoreError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_empty_registry_surfaces_through_order() {
        let o = Order::new(
            Customer::new("Ann Smith", 1100),
            default_cart(),
            Some(Arc::new(PromotionRegistry::new())),
        );
        assert!(matches!(o.due(), Err(CoreError::EmptyRegistry)));
    }

    #[test]
    fn test_best_picks_largest() {
        let registry = PromotionRegistry::builtin();
        let best = registry.best(&order(1100, default_cart())).unwrap();
        assert_eq!(best.name, "fidelity");
        assert_eq!(best.discount, Money::from_cents(210));
    }

    #[test]
    fn test_all_zero_still_reports_a_winner() {
        let registry = PromotionRegistry::builtin();
        let best = registry.best(&order(0, default_cart())).unwrap();
        assert_eq!(best.name, "fidelity");
        assert!(best.discount.is_zero());
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let ab = PromotionRegistry::from_defs(&[FLAT_A, FLAT_B]).unwrap();
        let ba = PromotionRegistry::from_defs(&[FLAT_B, FLAT_A]).unwrap();
        let o = order(0, default_cart());

        assert_eq!(ab.best(&o).unwrap().name, "flat_a");
        assert_eq!(ba.best(&o).unwrap().name, "flat_b");
        assert_eq!(
            ab.best_discount(&o).unwrap(),
            ba.best_discount(&o).unwrap()
        );
    }

    #[test]
    fn test_best_discount_independent_of_registration_order() {
        let permutations = [
            [FIDELITY, BULK_ITEM, LARGE_ORDER],
            [FIDELITY, LARGE_ORDER, BULK_ITEM],
            [BULK_ITEM, FIDELITY, LARGE_ORDER],
            [BULK_ITEM, LARGE_ORDER, FIDELITY],
            [LARGE_ORDER, FIDELITY, BULK_ITEM],
            [LARGE_ORDER, BULK_ITEM, FIDELITY],
        ];
        let carts = [
            default_cart(),
            vec![item("banana", 30, 50), item("apple", 10, 150)],
            (0..12).map(|i| item(&i.to_string(), 1, 100)).collect(),
        ];

        for cart in carts {
            let o = order(1100, cart);
            let expected = PromotionRegistry::builtin().best_discount(&o).unwrap();
            for defs in &permutations {
                let registry = PromotionRegistry::from_defs(defs).unwrap();
                assert_eq!(registry.best_discount(&o).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_evaluate_all_in_registration_order() {
        let registry = PromotionRegistry::builtin();
        let outcomes = registry.evaluate_all(&order(1100, default_cart()));
        assert_eq!(
            outcomes,
            vec![
                PromotionOutcome {
                    name: "fidelity".to_string(),
                    discount: Money::from_cents(210),
                },
                PromotionOutcome {
                    name: "bulk_item".to_string(),
                    discount: Money::zero(),
                },
                PromotionOutcome {
                    name: "large_order".to_string(),
                    discount: Money::zero(),
                },
            ]
        );
    }

    #[test]
    fn test_registry_as_promotion() {
        let registry: Arc<dyn Promotion> = Arc::new(PromotionRegistry::builtin());
        assert_eq!(registry.name(), BEST_PROMOTION_NAME);

        let o = Order::new(Customer::new("Ann Smith", 1100), default_cart(), Some(registry));
        assert_eq!(o.due().unwrap(), Money::from_cents(3990));
    }

    #[test]
    fn test_global_defaults_to_builtin_and_freezes() {
        let first = global();
        let second = global();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!first.is_empty());

        assert!(matches!(
            install(PromotionRegistry::builtin()),
            Err(CoreError::RegistryAlreadyInitialized)
        ));
    }

    #[test]
    fn test_install_rejects_empty_registry() {
        assert!(matches!(
            install(PromotionRegistry::new()),
            Err(CoreError::EmptyRegistry)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_shared_registry_across_tasks() {
        let registry = Arc::new(PromotionRegistry::builtin());
        let mut handles = Vec::new();

        for fidelity in [0u32, 1100, 0, 1100, 0, 1100] {
            let registry = Arc::clone(&registry);
            handles.push(tokio::task::spawn_blocking(move || {
                let o = Order::new(Customer::new("shared", fidelity), default_cart(), Some(registry));
                (fidelity, o.due().unwrap())
            }));
        }

        for handle in handles {
            let (fidelity, due) = handle.await.unwrap();
            let expected = if fidelity >= 1000 { 3990 } else { 4200 };
            assert_eq!(due, Money::from_cents(expected));
        }
    }
}
