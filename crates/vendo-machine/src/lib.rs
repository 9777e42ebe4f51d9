//! # vendo-machine: Transaction State Machine for Vendo
//!
//! Orchestrates vending transactions on top of [`vendo_core`]: accepts
//! coins, tracks the selected shelf, commits sales, refunds cancellations,
//! and keeps receipts. All the thinking (exact money, minimum-coin change)
//! happens in the core; this crate is the bookkeeping around it.
//!
//! ## Module Organization
//! ```text
//! vendo_machine/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── machine.rs      ◄─── VendingMachine state machine
//! ├── display.rs      ◄─── VendingDisplay trait + test displays
//! ├── config.rs       ◄─── Factory-default catalog and coin float
//! ├── receipt.rs      ◄─── Completed-sale records
//! └── error.rs        ◄─── MachineError
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_machine::config;
//! use vendo_machine::display::NullDisplay;
//! use vendo_machine::machine::VendingMachine;
//! use vendo_core::Money;
//!
//! let mut machine = VendingMachine::new(
//!     NullDisplay,
//!     config::default_shelves(),
//!     config::default_denomination_slots(),
//! )?;
//!
//! machine.select_shelf(3)?; // Water, 0.40
//! machine.insert_coin(Money::from_cents(50))?;
//!
//! assert_eq!(machine.take_item().unwrap().name, "Water");
//! assert_eq!(machine.take_change(), Money::from_cents(10));
//! # Ok::<(), vendo_machine::MachineError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod display;
pub mod error;
pub mod machine;
pub mod receipt;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use display::{NullDisplay, RecordingDisplay, VendingDisplay};
pub use error::{MachineError, MachineResult};
pub use machine::VendingMachine;
pub use receipt::Receipt;
