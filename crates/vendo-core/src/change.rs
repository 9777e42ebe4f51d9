//! # Change Solver
//!
//! Denomination-constrained exact change making: given the machine's coin
//! inventory and a target amount, find the assembly of coins that pays out
//! the target exactly using the fewest coins, or report that no assembly
//! exists.
//!
//! ## Why Not A Classic DP Array?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Coin systems in the wild are not guaranteed canonical, so greedy is   │
//! │  out and we need real minimisation. The textbook answer is an array    │
//! │  indexed 0..=target, but our amounts are money with fractional coins:  │
//! │  a 0.01 coin against an 87.00 target means 8700 slots, most of them   │
//! │  unreachable, and the gap only grows with the catalog.                 │
//! │                                                                        │
//! │  So the table is SPARSE: only amounts that are actually assemblable    │
//! │  become entries, keyed by exact Money. Each denomination pass expands  │
//! │  the reachable set through an ascending frontier - a bounded-          │
//! │  multiplicity relaxation, one Dijkstra-like layer per denomination.    │
//! │  State stays proportional to what is reachable, not to target size    │
//! │  divided by the smallest coin.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Phases
//! ```text
//! build_reachability ──► table: amount → (min coins, last slot used)
//!        │
//! target in table? ──no──► Ok(None)   ("infeasible" - a result, not an error)
//!        │yes
//!        ▼
//! reconstruct ──► per-slot usage counts, same order as the input slots
//! ```
//!
//! ## Usage
//! ```rust
//! use vendo_core::change::make_change;
//! use vendo_core::money::Money;
//! use vendo_core::types::DenominationSlot;
//!
//! let slots = vec![
//!     DenominationSlot::new(Money::from_cents(100), 3),
//!     DenominationSlot::new(Money::from_cents(200), 3),
//!     DenominationSlot::new(Money::from_cents(500), 3),
//! ];
//!
//! let counts = make_change(&slots, Money::from_cents(800)).unwrap();
//! assert_eq!(counts, Some(vec![1, 1, 1])); // 1.00 + 2.00 + 5.00
//! ```

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::DenominationSlot;
use crate::validation;

// =============================================================================
// Reachability Table
// =============================================================================

/// Table entry: the cheapest known way to assemble one exact amount.
///
/// `last_slot` is the backpointer for reconstruction: the denomination slot
/// whose coin was added last on an optimal path. `None` marks the path
/// start (amount zero, assembled from nothing).
#[derive(Debug, Clone, Copy)]
struct Reached {
    /// Minimum number of coins needed to assemble this amount.
    coin_count: u32,

    /// Slot index of the last coin on an optimal path, or `None` at zero.
    last_slot: Option<usize>,
}

// =============================================================================
// Public Entry Point
// =============================================================================

/// Computes the fewest-coins assembly of `target` from the given slots.
///
/// ## Returns
/// - `Ok(Some(counts))` - `counts[i]` coins of `slots[i]` pay out `target`
///   exactly, using the minimum total number of coins. Guaranteed:
///   `Σ counts[i] × slots[i].value == target` and `counts[i] <= slots[i].count`.
/// - `Ok(None)` - the target cannot be assembled from the available coins.
///   This is an ordinary outcome (the machine refuses the sale and refunds),
///   not an error.
/// - `Err(_)` - contract violation: a non-positive denomination value or a
///   negative target. That is a caller bug and fails fast.
///
/// ## Determinism
/// Identical inputs produce identical outputs. When several assemblies tie
/// on coin count, the one favouring earlier slots wins - stable by input
/// order, nothing more.
///
/// ## Purity
/// No side effects; the slots slice is never mutated. All working state is
/// allocated per call and dropped on return, so concurrent calls from
/// different threads are safe.
///
/// ## Edge Cases
/// - `target == 0` → all-zero counts, whatever the slots
/// - empty `slots` with a non-zero target → `Ok(None)`
/// - a slot with `count == 0` participates in ordering but contributes
///   nothing
pub fn make_change(slots: &[DenominationSlot], target: Money) -> CoreResult<Option<Vec<u32>>> {
    for (index, slot) in slots.iter().enumerate() {
        if validation::validate_denomination_value(slot.value).is_err() {
            return Err(CoreError::NonPositiveDenomination {
                index,
                value: slot.value,
            });
        }
    }
    if validation::validate_target(target).is_err() {
        return Err(CoreError::NegativeTarget { target });
    }

    let table = build_reachability(slots, target);

    if !table.contains_key(&target) {
        return Ok(None);
    }

    Ok(Some(reconstruct(&table, slots, target)))
}

// =============================================================================
// Phase 1: Reachability Builder
// =============================================================================

/// Builds the sparse table of every amount in `[0, target]` assemblable from
/// the slots, mapped to its minimum coin count and backpointer.
///
/// One pass per slot, in input order. After pass `i` the table is optimal
/// for the sub-problem using only slots `0..=i` - the same induction as the
/// array DP, with unreachable amounts simply absent.
///
/// Within a pass, the amounts known before the pass seed an ascending
/// frontier (min-heap). Each frontier amount may absorb one more coin of the
/// current slot, tracked by a per-amount applied counter so no path uses
/// more coins than the slot physically holds. Every edge moves strictly
/// upward by one coin value and anything past the target is discarded, so
/// the pass terminates with the frontier drained.
fn build_reachability(slots: &[DenominationSlot], target: Money) -> HashMap<Money, Reached> {
    let mut table: HashMap<Money, Reached> = HashMap::new();
    table.insert(
        Money::zero(),
        Reached {
            coin_count: 0,
            last_slot: None,
        },
    );

    // Reused across passes; cleared and reseeded per slot.
    let mut frontier: BinaryHeap<Reverse<Money>> = BinaryHeap::new();
    let mut applied: HashMap<Money, u32> = HashMap::new();

    for (slot_index, slot) in slots.iter().enumerate() {
        frontier.clear();
        applied.clear();

        // Snapshot: every amount reachable via earlier slots is a seed,
        // with zero coins of the current slot applied so far.
        for amount in table.keys() {
            frontier.push(Reverse(*amount));
            applied.insert(*amount, 0);
        }

        while let Some(Reverse(amount)) = frontier.pop() {
            // Every enqueued amount has an applied entry and a table entry.
            let uses = applied[&amount];
            if uses == slot.count {
                continue;
            }
            let coin_count = table[&amount].coin_count;

            let next = amount + slot.value;
            if next > target {
                continue;
            }

            let improves = match table.get(&next) {
                None => true,
                // Strict: equal coin counts keep the earlier entry, which is
                // what makes the tie-break stable by input order.
                Some(existing) => existing.coin_count > coin_count + 1,
            };

            if improves {
                table.insert(
                    next,
                    Reached {
                        coin_count: coin_count + 1,
                        last_slot: Some(slot_index),
                    },
                );
                applied.insert(next, uses + 1);
                frontier.push(Reverse(next));
            }
        }
    }

    table
}

// =============================================================================
// Phase 2: Path Reconstructor
// =============================================================================

/// Walks the backpointers from `target` down to zero, tallying how many
/// coins of each slot the optimal path used.
///
/// Iterative on purpose: the path can be as long as the total coin count
/// and must not be bounded by stack depth. Termination is guaranteed
/// because every backpointer step subtracts a strictly positive coin value
/// and lands on an amount the builder already established.
///
/// The caller has checked that `target` is present in the table.
fn reconstruct(
    table: &HashMap<Money, Reached>,
    slots: &[DenominationSlot],
    target: Money,
) -> Vec<u32> {
    let mut counts = vec![0u32; slots.len()];

    let mut amount = target;
    while let Some(slot_index) = table[&amount].last_slot {
        counts[slot_index] += 1;
        amount -= slots[slot_index].value;
    }

    counts
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn slot(cents: i64, count: u32) -> DenominationSlot {
        DenominationSlot::new(Money::from_cents(cents), count)
    }

    /// Checks the result-vector contract: exact sum and per-slot bounds.
    fn assert_valid_assembly(slots: &[DenominationSlot], target: Money, counts: &[u32]) {
        assert_eq!(counts.len(), slots.len());
        let mut sum = Money::zero();
        for (slot, &count) in slots.iter().zip(counts) {
            assert!(count <= slot.count, "used more coins than available");
            sum += slot.value * count;
        }
        assert_eq!(sum, target, "assembly does not sum to target");
    }

    #[test]
    fn test_no_slots_nonzero_target_is_infeasible() {
        let result = make_change(&[], Money::from_cents(100)).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_no_slots_zero_target_is_empty_assembly() {
        let result = make_change(&[], Money::zero()).unwrap();
        assert_eq!(result, Some(vec![]));
    }

    #[test]
    fn test_single_slot_possible() {
        let slots = vec![slot(100, 2)];
        let result = make_change(&slots, Money::from_cents(200)).unwrap();
        assert_eq!(result, Some(vec![2]));
    }

    #[test]
    fn test_single_slot_impossible() {
        let slots = vec![slot(100, 1)];
        let result = make_change(&slots, Money::from_cents(200)).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_multiple_slots() {
        // 8.00 out of 1.00/2.00/5.00 → one of each, three coins
        let slots = vec![slot(100, 3), slot(200, 3), slot(500, 3)];
        let target = Money::from_cents(800);
        let result = make_change(&slots, target).unwrap().unwrap();
        assert_eq!(result, vec![1, 1, 1]);
        assert_valid_assembly(&slots, target, &result);
    }

    #[test]
    fn test_optimal_beats_greedy_accumulation() {
        // 6.00 from 1.00×2 / 3.00×2 / 4.00×1: the two-coin 3+3 must win
        // over anything longer
        let slots = vec![slot(100, 2), slot(300, 2), slot(400, 1)];
        let target = Money::from_cents(600);
        let result = make_change(&slots, target).unwrap().unwrap();
        assert_eq!(result, vec![0, 2, 0]);
        assert_valid_assembly(&slots, target, &result);
    }

    #[test]
    fn test_multiple_slots_impossible() {
        // 7.00 from 3.00×2 / 5.00×2 / 6.90×1: no exact combination exists
        let slots = vec![slot(300, 2), slot(500, 2), slot(690, 1)];
        let result = make_change(&slots, Money::from_cents(700)).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_fractional_denominations() {
        // 4.90 from 4.00×2 / 9.00×1 / 0.50×2 / 4.40×2 → 0.50 + 4.40
        let slots = vec![slot(400, 2), slot(900, 1), slot(50, 2), slot(440, 2)];
        let target = Money::from_cents(490);
        let result = make_change(&slots, target).unwrap().unwrap();
        assert_eq!(result, vec![0, 0, 1, 1]);
        assert_valid_assembly(&slots, target, &result);
    }

    #[test]
    fn test_zero_target_is_all_zero() {
        let slots = vec![slot(100, 3), slot(30, 4)];
        let result = make_change(&slots, Money::zero()).unwrap();
        assert_eq!(result, Some(vec![0, 0]));
    }

    #[test]
    fn test_empty_slot_participates_but_contributes_nothing() {
        let slots = vec![slot(500, 0), slot(100, 5)];
        let target = Money::from_cents(500);
        let result = make_change(&slots, target).unwrap().unwrap();
        assert_eq!(result, vec![0, 5]);
        assert_valid_assembly(&slots, target, &result);
    }

    #[test]
    fn test_restocking_a_slot_shortens_the_assembly() {
        // Same inventory with one 5.00 coin added can only get better
        let poor = vec![slot(500, 0), slot(100, 5)];
        let rich = vec![slot(500, 1), slot(100, 5)];
        let target = Money::from_cents(500);

        let poor_counts = make_change(&poor, target).unwrap().unwrap();
        let rich_counts = make_change(&rich, target).unwrap().unwrap();

        let total = |counts: &[u32]| counts.iter().sum::<u32>();
        assert_eq!(total(&poor_counts), 5);
        assert_eq!(total(&rich_counts), 1);
        assert!(total(&rich_counts) <= total(&poor_counts));
    }

    #[test]
    fn test_restocking_turns_infeasible_feasible() {
        let poor = vec![slot(100, 1)];
        let rich = vec![slot(100, 2)];
        let target = Money::from_cents(200);

        assert_eq!(make_change(&poor, target).unwrap(), None);
        assert_eq!(make_change(&rich, target).unwrap(), Some(vec![2]));
    }

    #[test]
    fn test_equal_length_tie_goes_to_earlier_slot() {
        // Two slots hold the same 3.00 coin; the first one listed is used
        let slots = vec![slot(300, 1), slot(100, 0), slot(300, 1)];
        let result = make_change(&slots, Money::from_cents(300)).unwrap();
        assert_eq!(result, Some(vec![1, 0, 0]));
    }

    #[test]
    fn test_duplicate_denominations_combine() {
        let slots = vec![slot(100, 1), slot(100, 1)];
        let target = Money::from_cents(200);
        let result = make_change(&slots, target).unwrap().unwrap();
        assert_eq!(result, vec![1, 1]);
        assert_valid_assembly(&slots, target, &result);
    }

    #[test]
    fn test_determinism() {
        let slots = vec![slot(400, 2), slot(900, 1), slot(50, 2), slot(440, 2)];
        let target = Money::from_cents(490);

        let first = make_change(&slots, target).unwrap();
        let second = make_change(&slots, target).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let slots = vec![slot(100, 2), slot(300, 2)];
        let before = slots.clone();
        make_change(&slots, Money::from_cents(400)).unwrap();
        assert_eq!(slots, before);
    }

    #[test]
    fn test_non_positive_denomination_fails_fast() {
        let zero_coin = vec![slot(0, 3)];
        let err = make_change(&zero_coin, Money::from_cents(100)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::NonPositiveDenomination { index: 0, .. }
        ));

        let negative_coin = vec![slot(100, 3), slot(-50, 1)];
        let err = make_change(&negative_coin, Money::from_cents(100)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::NonPositiveDenomination { index: 1, .. }
        ));
    }

    #[test]
    fn test_negative_target_fails_fast() {
        let slots = vec![slot(100, 3)];
        let err = make_change(&slots, Money::from_cents(-100)).unwrap_err();
        assert!(matches!(err, CoreError::NegativeTarget { .. }));
    }

    #[test]
    fn test_large_sparse_gap() {
        // A big target over coarse coins: the sparse table only ever holds
        // multiples actually assemblable, not every cent up to the target
        let slots = vec![slot(50_000, 10), slot(20_000, 10)];
        let target = Money::from_cents(340_000);
        let result = make_change(&slots, target).unwrap().unwrap();
        assert_valid_assembly(&slots, target, &result);
        // 3400.00 = 6×500.00 + 2×200.00, eight coins minimum
        assert_eq!(result, vec![6, 2]);
    }
}
