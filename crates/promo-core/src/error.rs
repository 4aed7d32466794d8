//! # Error Types
//!
//! Domain-specific error types for promo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  promo-core errors (this file)                                         │
//! │  ├── CoreError        - Registry configuration + wrapped validation    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  promo-demo errors (app)                                               │
//! │  └── ConfigError      - Bad environment values                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (binary boundary)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, promotion name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Discount rules themselves never return errors

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No promotions are registered, so there is no best discount.
    ///
    /// ## When This Occurs
    /// - A registry was built without a single `register` call
    /// - An empty registry was passed to `registry::install`
    ///
    /// This is a startup misconfiguration, not a per-order condition.
    /// Silently returning a zero discount would hide it.
    #[error("No promotions registered: cannot select a best discount")]
    EmptyRegistry,

    /// The process-wide registry was already initialized.
    ///
    /// ## When This Occurs
    /// - `registry::install` called after `registry::global()` was first used
    /// - `registry::install` called twice
    #[error("Promotion registry is already initialized and frozen")]
    RegistryAlreadyInitialized,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used when constructing line items and parsing amounts.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two promotions with one name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
