//! # Validation Module
//!
//! Input validation for line items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  LineItem::new / LineItem::try_from(LineItemInput)                      │
//! │  ├── validate_product      (non-empty, ≤ 200 chars)                    │
//! │  ├── validate_quantity     (1 ..= 999)                                 │
//! │  └── validate_unit_price   (0 ..= 1,000,000)                           │
//! │                                                                         │
//! │  Order totals and discount rules never re-validate: a LineItem that    │
//! │  exists is already well-formed.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, MAX_PRODUCT_LEN, MAX_UNIT_PRICE_UNITS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name or SKU.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use promo_core::validation::validate_product;
///
/// assert!(validate_product("banana").is_ok());
/// assert!(validate_product("").is_err());
/// assert!(validate_product("A".repeat(300).as_str()).is_err());
/// ```
pub fn validate_product(product: &str) -> ValidationResult<()> {
    let product = product.trim();

    if product.is_empty() {
        return Err(ValidationError::Required {
            field: "product".to_string(),
        });
    }

    if product.chars().count() > MAX_PRODUCT_LEN {
        return Err(ValidationError::TooLong {
            field: "product".to_string(),
            max: MAX_PRODUCT_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (≥ 1)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_UNIT_PRICE_UNITS ($1,000,000)
///
/// ## Example
/// ```rust
/// use promo_core::money::Money;
/// use promo_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(150)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// assert!(validate_unit_price(Money::from_cents(100_000_001)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > Money::from_cents(MAX_UNIT_PRICE_UNITS * 100) {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_UNITS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
