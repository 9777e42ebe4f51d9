//! # Vendo Console Application Entry Point
//!
//! Wires a console display to the factory-default machine and walks through
//! a purchase, so the whole stack can be exercised end to end from a
//! terminal.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Build the machine from the factory defaults
//! 3. Run the scripted transaction
//! 4. Dump the session receipts as JSON
//!
//! ## Logging
//! Default level is INFO; override with RUST_LOG, e.g.
//! `RUST_LOG=vendo_machine=debug cargo run -p vendo-console`

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vendo_core::Money;
use vendo_machine::config;
use vendo_machine::display::VendingDisplay;
use vendo_machine::machine::VendingMachine;
use vendo_machine::MachineResult;

/// Prints machine output the way the front panel would show it.
struct ConsoleDisplay;

impl VendingDisplay for ConsoleDisplay {
    fn show_amount(&mut self, amount: Money) {
        println!("[display] {amount}");
    }

    fn show_message(&mut self, message: &str) {
        println!("[display] {message}");
    }
}

fn main() {
    // INFO by default, RUST_LOG wins when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        error!(%err, "vending session failed");
        std::process::exit(1);
    }
}

fn run() -> MachineResult<()> {
    let mut machine = VendingMachine::new(
        ConsoleDisplay,
        config::default_shelves(),
        config::default_denomination_slots(),
    )?;

    info!("machine stocked with factory defaults");

    // Buy the croissant (shelf 4, 8.70) with 5.00 + 2.00 + 2.00
    machine.select_shelf(4)?;
    machine.insert_coin(Money::from_cents(500))?;
    machine.insert_coin(Money::from_cents(200))?;
    machine.insert_coin(Money::from_cents(200))?;

    while let Some(item) = machine.take_item() {
        println!("[tray] {}", item.name);
    }
    let change = machine.take_change();
    if !change.is_zero() {
        println!("[tray] change {change}");
    }

    match serde_json::to_string_pretty(machine.receipts()) {
        Ok(json) => println!("[receipts]\n{json}"),
        Err(err) => error!(%err, "could not serialize receipts"),
    }

    Ok(())
}
