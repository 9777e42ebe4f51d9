//! # Domain Types
//!
//! Core domain types used throughout Vendo.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │    Product      │   │     Shelf       │   │  DenominationSlot    │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  name           │   │  product        │   │  value (Money)       │  │
//! │  │  price (Money)  │   │  count          │   │  count (u32)         │  │
//! │  └─────────────────┘   └─────────────────┘   └──────────────────────┘  │
//! │                                                                         │
//! │  A shelf holds a stack of one product kind. A denomination slot holds  │
//! │  the machine's stock of one coin value. The change solver consumes a   │
//! │  slice of slots and never mutates it.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product kind sold by the machine.
///
/// No identifiers beyond the name: shelves are addressed by position, the
/// same way customers address a physical machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown to the customer.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Shelf
// =============================================================================

/// A shelf inside the machine: one product kind and how many are left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    /// The product stocked on this shelf.
    pub product: Product,

    /// How many units remain.
    pub count: u32,
}

impl Shelf {
    /// Creates a new shelf stocked with `count` units of `product`.
    pub fn new(product: Product, count: u32) -> Self {
        Shelf { product, count }
    }

    /// The stocked product's name.
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// The stocked product's price.
    pub fn price(&self) -> Money {
        self.product.price
    }

    /// Whether the shelf has run out.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// =============================================================================
// Denomination Slot
// =============================================================================

/// One coin denomination held by the machine: unit value plus available count.
///
/// ## Invariants
/// - `value` must be strictly positive (enforced by [`crate::validation`]
///   and re-checked by the change solver)
/// - `count` is the number of physical coins; `u32` makes a negative stock
///   unrepresentable
///
/// The *order* of slots in a `Vec<DenominationSlot>` matters: the change
/// solver reports usage counts in the same order, and earlier slots win ties
/// between equally short solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationSlot {
    /// Unit value of one coin in this slot.
    pub value: Money,

    /// Number of coins currently available.
    pub count: u32,
}

impl DenominationSlot {
    /// Creates a new denomination slot.
    pub fn new(value: Money, count: u32) -> Self {
        DenominationSlot { value, count }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
