//! # Error Types
//!
//! Domain-specific error types for vendo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vendo-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vendo-machine errors (separate crate)                                 │
//! │  └── MachineError     - Transaction state machine failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → MachineError → caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (slot index, offending value)
//! 3. Errors are enum variants, never String
//! 4. "Cannot make change" is NOT an error - the solver returns `Ok(None)`
//!    for that. Errors here mean the caller broke the contract.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent contract violations by the caller, not runtime
/// conditions to recover from. Retrying with the same inputs is pointless:
/// the core is deterministic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A denomination with a zero or negative unit value was supplied.
    ///
    /// ## When This Occurs
    /// - Mis-built coin inventory (e.g. a slot configured with value 0.00)
    ///
    /// A non-positive coin makes "minimum number of coins" meaningless, so
    /// the solver refuses the whole call instead of silently skipping the
    /// slot.
    #[error("Denomination slot {index} has non-positive value {value}")]
    NonPositiveDenomination { index: usize, value: Money },

    /// A negative target amount was requested.
    ///
    /// ## When This Occurs
    /// - Caller computed change as `inserted - price` while `inserted` was
    ///   still below the price
    #[error("Target amount {target} is negative")]
    NegativeTarget { target: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when supplied data doesn't meet basic shape
/// requirements. Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NonPositiveDenomination {
            index: 2,
            value: Money::zero(),
        };
        assert_eq!(
            err.to_string(),
            "Denomination slot 2 has non-positive value 0.00"
        );

        let err = CoreError::NegativeTarget {
            target: Money::from_cents(-30),
        };
        assert_eq!(err.to_string(), "Target amount -0.30 is negative");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "denomination value".to_string(),
        };
        assert_eq!(err.to_string(), "denomination value must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
