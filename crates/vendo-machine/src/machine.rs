//! # Vending Machine State Machine
//!
//! Drives one transaction at a time on top of the pure core.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Vending Transaction                                 │
//! │                                                                         │
//! │  Customer Action          Machine Response                              │
//! │  ───────────────          ────────────────                              │
//! │                                                                         │
//! │  select_shelf(i) ───────► remember selection, show remaining cost       │
//! │                                                                         │
//! │  insert_coin(c)  ───────► known coin → into inventory, count it         │
//! │                           unknown coin → straight to the change tray    │
//! │                                                                         │
//! │  (enough money?) ───────► solve change; feasible → VEND                 │
//! │                           infeasible → warn, auto-cancel, refund        │
//! │                                                                         │
//! │  cancel()        ───────► refund inserted amount from inventory         │
//! │                                                                         │
//! │  take_item() / take_change() ─► empty the drop trays                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Inventory Commit Rule
//! The change solver is read-only. The machine applies the returned usage
//! vector to its coin slots only at the moment it commits a sale or a
//! refund. If the solver says "infeasible", nothing has been touched yet
//! and the machine can refund cleanly.
//!
//! ## A Note On Coins vs. Inserted Money
//! Accepted coins go into the shared inventory immediately, which mimics
//! real machines: cancel an order and you may get different physical coins
//! back than the ones you put in. Only the *amount* is owed, and the
//! refund is assembled by the same solver that assembles change.

use std::collections::VecDeque;

use tracing::{debug, info, warn};
use vendo_core::{make_change, CoreError, DenominationSlot, Money, Product, Shelf};

use crate::display::VendingDisplay;
use crate::error::{MachineError, MachineResult};
use crate::receipt::Receipt;

// =============================================================================
// Vending Machine
// =============================================================================

/// The vending machine: shelves, a coin inventory, and one in-flight
/// transaction.
///
/// Generic over the display so tests can record output and the console app
/// can print it; the machine logic never knows the difference.
#[derive(Debug)]
pub struct VendingMachine<D: VendingDisplay> {
    display: D,

    shelves: Vec<Shelf>,
    coin_slots: Vec<DenominationSlot>,

    /// Amount inserted during the current transaction.
    inserted: Money,

    /// Currently selected shelf, if any.
    selected_shelf: Option<usize>,

    /// Vended products waiting to be taken.
    dropped_items: VecDeque<Product>,

    /// Coins in the change tray waiting to be taken.
    dropped_change: Money,

    /// Log of completed sales.
    receipts: Vec<Receipt>,
}

impl<D: VendingDisplay> VendingMachine<D> {
    /// Builds a machine from an initial catalog and coin float.
    ///
    /// ## Errors
    /// Rejects inventory that breaks the core contract up front: empty
    /// product names, negative prices, or non-positive coin values. Checking
    /// here means the solver's own fail-fast checks can never trip during a
    /// transaction.
    pub fn new(
        display: D,
        shelves: Vec<Shelf>,
        coin_slots: Vec<DenominationSlot>,
    ) -> MachineResult<Self> {
        for shelf in &shelves {
            vendo_core::validation::validate_product_name(shelf.name())
                .map_err(CoreError::from)?;
            vendo_core::validation::validate_price(shelf.price()).map_err(CoreError::from)?;
        }
        for slot in &coin_slots {
            vendo_core::validation::validate_denomination_value(slot.value)
                .map_err(CoreError::from)?;
        }

        Ok(VendingMachine {
            display,
            shelves,
            coin_slots,
            inserted: Money::zero(),
            selected_shelf: None,
            dropped_items: VecDeque::new(),
            dropped_change: Money::zero(),
            receipts: Vec::new(),
        })
    }

    // =========================================================================
    // Customer Operations
    // =========================================================================

    /// Accepts a coin from the customer.
    ///
    /// A coin matching a known denomination slot goes into the inventory and
    /// counts toward the transaction; anything else (foreign coin, token)
    /// falls straight through to the change tray. Accepting a coin
    /// re-displays the remaining cost and attempts the sale.
    pub fn insert_coin(&mut self, coin: Money) -> MachineResult<()> {
        if self.accept_coin(coin) {
            self.inserted += coin;
            debug!(%coin, inserted = %self.inserted, "coin accepted");
            self.show_remaining_cost();
            self.try_vend()?;
        } else {
            warn!(%coin, "unrecognized coin rejected");
            self.dropped_change += coin;
        }
        Ok(())
    }

    /// Selects a shelf by its position.
    ///
    /// An empty shelf warns the customer but keeps the selection, matching
    /// front panels that light up "sold out" while still showing the price.
    /// Re-displays the remaining cost and attempts the sale (coins may
    /// already have been inserted).
    pub fn select_shelf(&mut self, index: usize) -> MachineResult<()> {
        if index >= self.shelves.len() {
            return Err(MachineError::ShelfNotFound {
                index,
                shelf_count: self.shelves.len(),
            });
        }

        self.selected_shelf = Some(index);
        debug!(shelf = index, product = %self.shelves[index].name(), "shelf selected");

        if self.shelves[index].is_empty() {
            self.display
                .show_message(&format!("Warning! Not enough {}", self.shelves[index].name()));
        }

        self.show_remaining_cost();
        self.try_vend()
    }

    /// Cancels the current order and refunds the inserted amount.
    ///
    /// The refund is assembled from the coin inventory by the change solver.
    /// It is always feasible because every accepted coin entered the
    /// inventory; a failure here means the machine was mutated behind our
    /// back and is reported as [`MachineError::RefundUnavailable`].
    pub fn cancel(&mut self) -> MachineResult<()> {
        let refund = self.inserted;
        let counts = make_change(&self.coin_slots, refund)?.ok_or(
            MachineError::RefundUnavailable { amount: refund },
        )?;

        self.remove_coins(&counts);
        self.dropped_change += refund;
        self.clear_transaction();

        info!(%refund, "order canceled");
        self.display.show_message("Order canceled, money returned");
        Ok(())
    }

    /// Takes one vended product out of the drop tray, oldest first.
    pub fn take_item(&mut self) -> Option<Product> {
        self.dropped_items.pop_front()
    }

    /// Empties the change tray, returning the total amount that was in it.
    pub fn take_change(&mut self) -> Money {
        std::mem::take(&mut self.dropped_change)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Receipts of every completed sale, oldest first.
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Current coin inventory.
    pub fn coin_slots(&self) -> &[DenominationSlot] {
        &self.coin_slots
    }

    /// Current shelves.
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// Amount inserted so far in the current transaction.
    pub fn inserted(&self) -> Money {
        self.inserted
    }

    /// The display, for callers that own richer display types.
    pub fn display(&self) -> &D {
        &self.display
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Attempts to complete the sale: needs a selected, stocked shelf and
    /// enough money inserted. Called after every state change that could
    /// make those true.
    fn try_vend(&mut self) -> MachineResult<()> {
        let Some(index) = self.selected_shelf else {
            return Ok(());
        };
        if self.shelves[index].is_empty() || self.inserted < self.shelves[index].price() {
            return Ok(());
        }

        let product = self.shelves[index].product.clone();
        let change = self.inserted - product.price;

        match make_change(&self.coin_slots, change)? {
            None => {
                warn!(%change, "cannot assemble exact change, refusing sale");
                self.display
                    .show_message("Warning! Can't return change with owned coins! Not selling product");
                self.cancel()
            }
            Some(counts) => {
                // Commit point: only now does inventory change.
                self.remove_coins(&counts);
                self.shelves[index].count -= 1;

                self.dropped_items.push_back(product.clone());
                self.dropped_change += change;
                self.receipts
                    .push(Receipt::new(&product, self.inserted, change));

                info!(product = %product.name, price = %product.price, %change, "item vended");
                self.clear_transaction();
                self.display.show_message("Item bought, change returned");
                Ok(())
            }
        }
    }

    /// Shows the remaining cost of the selected product, if any. Goes
    /// negative once the customer has over-inserted; the vend that follows
    /// immediately clears it.
    fn show_remaining_cost(&mut self) {
        if let Some(index) = self.selected_shelf {
            self.display
                .show_amount(self.shelves[index].price() - self.inserted);
        }
    }

    /// Files a coin into its denomination slot. Returns false for coins the
    /// machine does not recognize.
    fn accept_coin(&mut self, coin: Money) -> bool {
        for slot in &mut self.coin_slots {
            if slot.value == coin {
                slot.count += 1;
                return true;
            }
        }
        false
    }

    /// Applies a solver usage vector to the coin inventory.
    fn remove_coins(&mut self, counts: &[u32]) {
        debug_assert_eq!(counts.len(), self.coin_slots.len());
        for (slot, &used) in self.coin_slots.iter_mut().zip(counts) {
            slot.count -= used;
        }
    }

    /// Resets per-transaction state. Trays are left alone: the customer
    /// still has to pick up their item and change.
    fn clear_transaction(&mut self) {
        self.inserted = Money::zero();
        self.selected_shelf = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::display::RecordingDisplay;

    fn cents(value: i64) -> Money {
        Money::from_cents(value)
    }

    fn shelf(name: &str, price_cents: i64, count: u32) -> Shelf {
        Shelf::new(Product::new(name, cents(price_cents)), count)
    }

    fn slot(value_cents: i64, count: u32) -> DenominationSlot {
        DenominationSlot::new(cents(value_cents), count)
    }

    fn machine(
        shelves: Vec<Shelf>,
        slots: Vec<DenominationSlot>,
    ) -> VendingMachine<RecordingDisplay> {
        VendingMachine::new(RecordingDisplay::default(), shelves, slots).unwrap()
    }

    #[test]
    fn test_simple_buy() {
        let mut subject = machine(vec![shelf("snack", 100, 1)], vec![slot(100, 0)]);

        subject.select_shelf(0).unwrap();
        subject.insert_coin(cents(100)).unwrap();

        let item = subject.take_item().unwrap();
        assert_eq!(item.name, "snack");
        assert!(subject.take_item().is_none());
        assert_eq!(subject.take_change(), Money::zero());
    }

    #[test]
    fn test_no_item_without_enough_money() {
        let mut subject = machine(vec![shelf("snack", 300, 1)], vec![slot(100, 0)]);

        subject.insert_coin(cents(100)).unwrap();
        subject.select_shelf(0).unwrap();

        assert!(subject.take_item().is_none());
    }

    #[test]
    fn test_cancel_drops_money() {
        let mut subject = machine(vec![shelf("snack", 200, 1)], vec![slot(100, 0)]);

        subject.insert_coin(cents(100)).unwrap();
        subject.select_shelf(0).unwrap();
        subject.cancel().unwrap();

        assert!(subject.take_item().is_none());
        assert_eq!(subject.take_change(), cents(100));
    }

    #[test]
    fn test_buy_drops_change() {
        let mut subject = machine(
            vec![shelf("snack", 100, 1)],
            vec![slot(100, 2), slot(300, 0)],
        );

        subject.insert_coin(cents(300)).unwrap();
        subject.select_shelf(0).unwrap();

        assert!(subject.take_item().is_some());
        assert_eq!(subject.take_change(), cents(200));
    }

    #[test]
    fn test_can_reuse_inserted_coins() {
        // The 3.00 coin inserted in the first sale pays out the change of
        // the second one
        let mut subject = machine(
            vec![shelf("snack", 100, 2)],
            vec![slot(100, 2), slot(300, 0), slot(400, 0)],
        );

        subject.insert_coin(cents(300)).unwrap();
        subject.select_shelf(0).unwrap();

        assert!(subject.take_item().is_some());
        assert_eq!(subject.take_change(), cents(200));

        subject.select_shelf(0).unwrap();
        subject.insert_coin(cents(400)).unwrap();

        assert!(subject.take_item().is_some());
        assert_eq!(subject.take_change(), cents(300));
    }

    #[test]
    fn test_refuses_sale_when_change_infeasible() {
        // Price 1.00, only a 2.00 coin in play: change 1.00 cannot be made
        let mut subject = machine(vec![shelf("snack", 100, 1)], vec![slot(200, 0)]);

        subject.insert_coin(cents(200)).unwrap();
        subject.select_shelf(0).unwrap();

        assert!(subject
            .display()
            .messages
            .iter()
            .any(|m| m.starts_with("Warning!")));
        assert!(subject.take_item().is_none());
        // Auto-cancel refunded the full 2.00
        assert_eq!(subject.take_change(), cents(200));
        assert_eq!(subject.coin_slots()[0].count, 0);
    }

    #[test]
    fn test_unknown_coin_falls_to_tray() {
        let mut subject = machine(vec![shelf("snack", 100, 1)], vec![slot(100, 0)]);

        subject.insert_coin(cents(37)).unwrap();

        assert_eq!(subject.inserted(), Money::zero());
        assert_eq!(subject.take_change(), cents(37));
        assert_eq!(subject.coin_slots()[0].count, 0);
    }

    #[test]
    fn test_empty_shelf_warns_and_does_not_vend() {
        let mut subject = machine(vec![shelf("snack", 100, 0)], vec![slot(100, 0)]);

        subject.insert_coin(cents(100)).unwrap();
        subject.select_shelf(0).unwrap();

        assert!(subject
            .display()
            .messages
            .iter()
            .any(|m| m.contains("Not enough")));
        assert!(subject.take_item().is_none());
        assert_eq!(subject.take_change(), Money::zero());

        subject.cancel().unwrap();
        assert_eq!(subject.take_change(), cents(100));
    }

    #[test]
    fn test_shows_remaining_cost_countdown() {
        let mut subject = machine(vec![shelf("snack", 300, 1)], vec![slot(100, 0)]);

        subject.select_shelf(0).unwrap();
        for _ in 0..3 {
            subject.insert_coin(cents(100)).unwrap();
        }

        assert_eq!(
            subject.display().amounts,
            vec![cents(300), cents(200), cents(100), cents(0)]
        );
        assert!(subject.take_item().is_some());
    }

    #[test]
    fn test_select_invalid_shelf() {
        let mut subject = machine(vec![shelf("snack", 100, 1)], vec![slot(100, 0)]);

        let err = subject.select_shelf(5).unwrap_err();
        assert!(matches!(
            err,
            MachineError::ShelfNotFound {
                index: 5,
                shelf_count: 1
            }
        ));
    }

    #[test]
    fn test_rejects_invalid_inventory() {
        let bad_coin = VendingMachine::new(
            RecordingDisplay::default(),
            vec![shelf("snack", 100, 1)],
            vec![slot(0, 3)],
        );
        assert!(bad_coin.is_err());

        let bad_name = VendingMachine::new(
            RecordingDisplay::default(),
            vec![shelf("", 100, 1)],
            vec![slot(100, 3)],
        );
        assert!(bad_name.is_err());
    }

    #[test]
    fn test_receipt_recorded_on_sale() {
        let mut subject = machine(
            vec![shelf("snack", 100, 1)],
            vec![slot(100, 2), slot(300, 0)],
        );

        subject.insert_coin(cents(300)).unwrap();
        subject.select_shelf(0).unwrap();

        let receipts = subject.receipts();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].product_name, "snack");
        assert_eq!(receipts[0].paid, cents(300));
        assert_eq!(receipts[0].change, cents(200));
    }

    #[test]
    fn test_default_config_croissant_purchase() {
        let mut subject = machine(config::default_shelves(), config::default_denomination_slots());

        // Croissant is shelf 4 at 8.70; pay 5.00 + 2.00 + 2.00 = 9.00
        subject.select_shelf(4).unwrap();
        subject.insert_coin(cents(500)).unwrap();
        subject.insert_coin(cents(200)).unwrap();
        subject.insert_coin(cents(200)).unwrap();

        let item = subject.take_item().unwrap();
        assert_eq!(item.name, "Croissant");
        assert_eq!(subject.take_change(), cents(30));

        // Change 0.30 was paid as 0.20 + 0.10 from the float
        let slots = subject.coin_slots();
        assert_eq!(slots[4].count, 2); // 0.20 slot
        assert_eq!(slots[5].count, 2); // 0.10 slot
        // Inserted coins stayed in inventory
        assert_eq!(slots[0].count, 4); // 5.00 slot
        assert_eq!(slots[1].count, 5); // 2.00 slot

        // Shelf went down by one
        assert_eq!(subject.shelves()[4].count, 2);
    }
}
