//! # Validation Module
//!
//! Input validation utilities for Vendo.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Types                                                         │
//! │  ├── u32 counts - negative stock is unrepresentable                    │
//! │  └── Money - exact integer cents, no rounding to validate              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - value-range and shape checks                   │
//! │  ├── Denomination values strictly positive                             │
//! │  ├── Change targets non-negative                                       │
//! │  └── Catalog sanity (names, prices)                                    │
//! │                                                                         │
//! │  The change solver calls these on entry and fails fast on a           │
//! │  violation: a bad denomination set is a caller bug, not a condition   │
//! │  to paper over.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Money Validators
// =============================================================================

/// Validates a denomination unit value.
///
/// ## Rules
/// - Must be strictly positive; a zero-valued coin would let the solver
///   loop forever on "progress" that moves nowhere, and a negative one
///   breaks termination outright
pub fn validate_denomination_value(value: Money) -> ValidationResult<()> {
    if !value.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "denomination value".to_string(),
        });
    }

    Ok(())
}

/// Validates a change target amount.
///
/// ## Rules
/// - Must be non-negative; zero is fine (no change due)
pub fn validate_target(target: Money) -> ValidationResult<()> {
    if target.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "target amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (a free product is allowed)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use vendo_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Croissant").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_denomination_value() {
        assert!(validate_denomination_value(Money::from_cents(1)).is_ok());
        assert!(validate_denomination_value(Money::from_cents(500)).is_ok());

        assert!(validate_denomination_value(Money::zero()).is_err());
        assert!(validate_denomination_value(Money::from_cents(-10)).is_err());
    }

    #[test]
    fn test_validate_target() {
        assert!(validate_target(Money::zero()).is_ok());
        assert!(validate_target(Money::from_cents(30)).is_ok());
        assert!(validate_target(Money::from_cents(-30)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(870)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Croissant").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }
}
