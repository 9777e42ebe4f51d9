//! # Machine Error Types
//!
//! Error types for the transaction state machine.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (vendo-core)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MachineError (this module) ← Adds transaction-level failures          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller (console app) decides what to show the customer                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Transaction state machine errors.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A shelf index outside the machine's shelf list was selected.
    #[error("Shelf {index} does not exist (machine has {shelf_count} shelves)")]
    ShelfNotFound { index: usize, shelf_count: usize },

    /// The machine could not assemble a refund from its own coin inventory.
    ///
    /// ## When This Occurs
    /// Never, in a correctly constructed machine: every accepted coin goes
    /// into the inventory, so the inserted amount is always assemblable
    /// coin-for-coin. Surfaced as an error rather than a panic so a
    /// misconfigured machine fails loudly but recoverably.
    #[error("Cannot assemble a refund of {amount} from the coin inventory")]
    RefundUnavailable { amount: vendo_core::Money },

    /// A core contract violation bubbled up (bad denomination, negative
    /// target).
    #[error("Core error: {0}")]
    Core(#[from] vendo_core::CoreError),
}

/// Result type for machine operations.
pub type MachineResult<T> = Result<T, MachineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MachineError::ShelfNotFound {
            index: 7,
            shelf_count: 5,
        };
        assert_eq!(
            err.to_string(),
            "Shelf 7 does not exist (machine has 5 shelves)"
        );
    }

    #[test]
    fn test_core_error_converts() {
        let core_err = vendo_core::CoreError::NegativeTarget {
            target: vendo_core::Money::from_cents(-1),
        };
        let machine_err: MachineError = core_err.into();
        assert!(matches!(machine_err, MachineError::Core(_)));
    }
}
