//! Sample customers, carts and the promotion each walkthrough step uses.

use std::sync::Arc;

use promo_core::promotions::{BULK_ITEM, FIDELITY, LARGE_ORDER};
use promo_core::registry::PromotionRegistry;
use promo_core::validation::ValidationResult;
use promo_core::{
    CoreResult, Customer, LineItem, LineItemInput, Money, Order, Promotion, PromotionDef,
};
use serde::Serialize;

/// Which promotion a scenario attaches to its order.
#[derive(Debug, Clone, Copy)]
pub enum Policy {
    /// A single rule.
    Single(PromotionDef),
    /// The best of every rule in the registry.
    Best,
}

impl Policy {
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Single(def) => def.name,
            Policy::Best => "best",
        }
    }
}

/// One line of the walkthrough.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub customer: Customer,
    pub cart_name: &'static str,
    pub cart: Vec<LineItem>,
    pub policy: Policy,
}

impl Scenario {
    /// `Joe - banana cart - bulk_item promo`
    pub fn title(&self) -> String {
        let first = self.customer.name.split(' ').next().unwrap_or_default();
        format!("{} - {} cart - {} promo", first, self.cart_name, self.policy.label())
    }

    /// Builds the order, resolving [`Policy::Best`] against `registry`.
    pub fn order(&self, registry: &Arc<PromotionRegistry>) -> Order {
        let promotion: Arc<dyn Promotion> = match self.policy {
            Policy::Single(def) => Arc::new(def),
            Policy::Best => Arc::clone(registry) as Arc<dyn Promotion>,
        };
        Order::new(self.customer.clone(), self.cart.clone(), Some(promotion))
    }
}

/// Machine-readable form of an evaluated scenario.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub customer: Customer,
    pub cart: Vec<LineItemInput>,
    pub promotion: &'static str,
    pub total: Money,
    pub due: Money,
    pub winner: Option<String>,
}

impl ScenarioReport {
    pub fn evaluate(scenario: &Scenario, registry: &Arc<PromotionRegistry>) -> CoreResult<Self> {
        let order = scenario.order(registry);
        let winner = match scenario.policy {
            Policy::Best => Some(registry.best(&order)?.name),
            Policy::Single(_) => None,
        };

        Ok(ScenarioReport {
            name: scenario.name,
            customer: scenario.customer.clone(),
            cart: scenario.cart.iter().map(LineItemInput::from).collect(),
            promotion: scenario.policy.label(),
            total: order.total(),
            due: order.due()?,
            winner,
        })
    }
}

fn joe() -> Customer {
    Customer::new("John Doe", 0)
}

fn ann() -> Customer {
    Customer::new("Ann Smith", 1100)
}

fn line(product: &str, quantity: i64, cents: i64) -> ValidationResult<LineItem> {
    LineItem::new(product, quantity, Money::from_cents(cents))
}

fn default_cart() -> ValidationResult<Vec<LineItem>> {
    Ok(vec![
        line("banana", 4, 50)?,
        line("apple", 10, 150)?,
        line("watermelon", 5, 500)?,
    ])
}

fn banana_cart() -> ValidationResult<Vec<LineItem>> {
    Ok(vec![line("banana", 30, 50)?, line("apple", 10, 150)?])
}

fn long_cart() -> ValidationResult<Vec<LineItem>> {
    (0..12).map(|code| line(&code.to_string(), 1, 100)).collect()
}

/// Every walkthrough step, in presentation order.
pub fn all() -> ValidationResult<Vec<Scenario>> {
    let default = default_cart()?;
    let banana = banana_cart()?;
    let long = long_cart()?;

    let scenario = |name, customer, cart_name, cart: &Vec<LineItem>, policy| Scenario {
        name,
        customer,
        cart_name,
        cart: cart.clone(),
        policy,
    };

    Ok(vec![
        scenario("joe-fidelity", joe(), "default", &default, Policy::Single(FIDELITY)),
        scenario("ann-fidelity", ann(), "default", &default, Policy::Single(FIDELITY)),
        scenario("joe-banana-bulk", joe(), "banana", &banana, Policy::Single(BULK_ITEM)),
        scenario("joe-long-large", joe(), "long", &long, Policy::Single(LARGE_ORDER)),
        scenario("joe-default-large", joe(), "default", &default, Policy::Single(LARGE_ORDER)),
        scenario("joe-long-best", joe(), "long", &long, Policy::Best),
        scenario("joe-banana-best", joe(), "banana", &banana, Policy::Best),
        scenario("ann-default-best", ann(), "default", &default, Policy::Best),
    ])
}
