//! Installing a custom process-wide registry at startup.
//!
//! Lives in its own test binary: the global registry can only be set once
//! per process.

use promo_core::promotions::BULK_ITEM;
use promo_core::{registry, CoreError, Customer, LineItem, Money, Order, PromotionRegistry};

#[test]
fn installed_registry_replaces_builtin() {
    let mut custom = PromotionRegistry::new();
    custom.register(BULK_ITEM).unwrap();

    let installed = registry::install(custom).unwrap();
    let global = registry::global();
    assert_eq!(global.names().collect::<Vec<_>>(), vec!["bulk_item"]);
    assert_eq!(installed.len(), global.len());

    // Fidelity is not registered, so a loyal customer pays full price.
    let cart = vec![LineItem::new("apple", 10, Money::from_cents(150)).unwrap()];
    let order = Order::new(Customer::new("Ann Smith", 1100), cart, Some(global));
    assert_eq!(order.due().unwrap(), Money::from_cents(1500));

    assert!(matches!(
        registry::install(PromotionRegistry::builtin()),
        Err(CoreError::RegistryAlreadyInitialized)
    ));
}
