//! # Default Machine Configuration
//!
//! The factory-default catalog and coin float. In-code constants, not a
//! config file: the machine has no persistence layer, and a differently
//! stocked machine is built by passing different shelves and slots to
//! [`crate::machine::VendingMachine::new`].

use vendo_core::{DenominationSlot, Money, Product, Shelf};

/// How many coins of each denomination a freshly serviced machine holds.
const DEFAULT_COIN_FLOAT: u32 = 3;

/// How many units of each product a freshly stocked shelf holds.
const DEFAULT_SHELF_STOCK: u32 = 3;

/// The factory coin set: 5.00, 2.00, 1.00, 0.50, 0.20, 0.10.
///
/// Largest first. The solver prefers earlier slots on ties, so this
/// ordering nudges payouts toward big coins, keeping small ones in stock
/// for awkward amounts.
pub fn default_denomination_slots() -> Vec<DenominationSlot> {
    vec![
        DenominationSlot::new(Money::from_cents(500), DEFAULT_COIN_FLOAT),
        DenominationSlot::new(Money::from_cents(200), DEFAULT_COIN_FLOAT),
        DenominationSlot::new(Money::from_cents(100), DEFAULT_COIN_FLOAT),
        DenominationSlot::new(Money::from_cents(50), DEFAULT_COIN_FLOAT),
        DenominationSlot::new(Money::from_cents(20), DEFAULT_COIN_FLOAT),
        DenominationSlot::new(Money::from_cents(10), DEFAULT_COIN_FLOAT),
    ]
}

/// The factory product catalog.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("Soda drink", Money::from_cents(200)),
        Product::new("Cookie", Money::from_cents(150)),
        Product::new("Candy", Money::from_cents(90)),
        Product::new("Water", Money::from_cents(40)),
        Product::new("Croissant", Money::from_cents(870)),
    ]
}

/// One fully stocked shelf per catalog product.
pub fn default_shelves() -> Vec<Shelf> {
    default_products()
        .into_iter()
        .map(|product| Shelf::new(product, DEFAULT_SHELF_STOCK))
        .collect()
}
