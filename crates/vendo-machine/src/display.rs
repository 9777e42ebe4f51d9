//! # Display Abstraction
//!
//! The machine talks to its front panel through the [`VendingDisplay`]
//! trait. The console app provides the real implementation; tests use
//! [`RecordingDisplay`] instead of a mocking framework.

use vendo_core::Money;

/// The machine's front panel.
///
/// Implementations decide where output goes (console, LCD, nowhere). The
/// machine itself only ever says two kinds of things: an amount (the
/// remaining cost of the selected product) and a plain message.
pub trait VendingDisplay {
    /// Shows a monetary amount, typically the remaining cost.
    fn show_amount(&mut self, amount: Money);

    /// Shows a free-form status message.
    fn show_message(&mut self, message: &str);
}

/// A display that discards everything. Useful when only the transaction
/// outcome matters.
#[derive(Debug, Default)]
pub struct NullDisplay;

impl VendingDisplay for NullDisplay {
    fn show_amount(&mut self, _amount: Money) {}

    fn show_message(&mut self, _message: &str) {}
}

/// A display that records everything it was asked to show.
///
/// ## Usage
/// ```rust
/// use vendo_machine::display::{RecordingDisplay, VendingDisplay};
/// use vendo_core::Money;
///
/// let mut display = RecordingDisplay::default();
/// display.show_amount(Money::from_cents(150));
/// display.show_message("Item bought, change returned");
///
/// assert_eq!(display.amounts, vec![Money::from_cents(150)]);
/// assert_eq!(display.messages.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    /// Every amount shown, in order.
    pub amounts: Vec<Money>,

    /// Every message shown, in order.
    pub messages: Vec<String>,
}

impl VendingDisplay for RecordingDisplay {
    fn show_amount(&mut self, amount: Money) {
        self.amounts.push(amount);
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
