//! # promo-core: Pure Promotion Logic
//!
//! This crate prices shopping orders and picks the best promotion for them.
//! It contains only pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Promo Engine Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    promo-demo (CLI)                             │   │
//! │  │    build carts ──► attach promotion ──► print order lines      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ promo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   order   │  │promotions │  │ registry  │  │   │
//! │  │   │ Customer  │  │   Order   │  │  rules    │  │ best of   │  │   │
//! │  │   │ LineItem  │  │ total/due │  │ Promotion │  │ all rules │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal Money type (no floating point!)
//! - [`types`] - Customer, LineItem, Rate
//! - [`order`] - Order with total and amount due
//! - [`promotions`] - Promotion trait and the built-in discount rules
//! - [`registry`] - Rule registry and best-discount selection
//! - [`validation`] - Line item input checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Only `tracing` events leave this crate
//! 3. **Exact Money**: Decimal arithmetic, rounded only for display
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use promo_core::{registry, Customer, LineItem, Money, Order};
//!
//! let cart: Vec<LineItem> = (0..12)
//!     .map(|i| LineItem::new(i.to_string(), 1, Money::from_cents(100)).unwrap())
//!     .collect();
//!
//! let order = Order::new(Customer::new("John Doe", 0), cart, Some(registry::global()));
//!
//! // 12 distinct products → 7% large order discount wins
//! assert_eq!(order.total(), Money::from_cents(1200));
//! assert_eq!(order.due().unwrap(), Money::from_cents(1116));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod promotions;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use promo_core::Money` instead of
// `use promo_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::Order;
pub use promotions::{Promotion, PromotionDef};
pub use registry::{PromotionOutcome, PromotionRegistry};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name or SKU, in characters.
pub const MAX_PRODUCT_LEN: usize = 200;

/// Maximum quantity of a single line item
///
/// ## Business Reason
/// Keeps every line total, and any cart built from such lines, far inside
/// the decimal range, so totals and discounts can never overflow.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum unit price, in whole currency units ($1,000,000).
pub const MAX_UNIT_PRICE_UNITS: i64 = 1_000_000;
