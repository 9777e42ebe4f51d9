//! # vendo-core: Pure Business Logic for Vendo
//!
//! This crate is the **heart** of Vendo. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vendo Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/console (binary)                        │   │
//! │  │        wiring, ConsoleDisplay, tracing-subscriber               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vendo-machine                                │   │
//! │  │     transaction state machine, display trait, receipts         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vendo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  change   │  │   types   │  │ validation│  │   │
//! │  │   │   Money   │  │  solver   │  │  Product  │  │   rules   │  │   │
//! │  │   │  (cents)  │  │ min coins │  │   Shelf   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DISPLAY • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`change`] - Denomination-constrained minimum-coin change solver
//! - [`types`] - Domain types (Product, Shelf, DenominationSlot)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Display, file system, network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: Contract violations are typed errors; "cannot make
//!    change" is an ordinary `None` result, never an error or a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_core::change::make_change;
//! use vendo_core::money::Money;
//! use vendo_core::types::DenominationSlot;
//!
//! // The machine holds two 0.50 coins and two 4.40 coins (among others)
//! let slots = vec![
//!     DenominationSlot::new(Money::from_cents(400), 2),
//!     DenominationSlot::new(Money::from_cents(900), 1),
//!     DenominationSlot::new(Money::from_cents(50), 2),
//!     DenominationSlot::new(Money::from_cents(440), 2),
//! ];
//!
//! // 4.90 of change = one 0.50 + one 4.40
//! let counts = make_change(&slots, Money::from_cents(490)).unwrap();
//! assert_eq!(counts, Some(vec![0, 0, 1, 1]));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Money` instead of
// `use vendo_core::money::Money`

pub use change::make_change;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{DenominationSlot, Product, Shelf};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
///
/// ## Business Reason
/// The name has to fit on a one-line vending display; anything longer is a
/// data entry mistake.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
