//! Space-compressed fills: one array, or two rolling rows.
//!
//! Both forms compute exactly the final row of the full table in
//! `O(capacity)` space. What they give up is history: with no earlier rows
//! retained, no selection can be reconstructed afterwards.

use crate::instance::KnapsackInstance;
use crate::recurrence;

/// Solve with a single in-place array of `capacity + 1` entries.
///
/// Iteration direction is an invariant, not a detail: capacities run
/// descending from `capacity` down to the item's weight so that
/// `dp[w - weight]` still holds the previous prefix's value when entry `w`
/// is written. Ascending iteration would let the item feed its own update
/// within one pass, silently computing the unbounded variant instead
/// (compare [`crate::unbounded::unbounded_knapsack`]).
pub fn solve_space_optimized(instance: &KnapsackInstance) -> u64 {
    let capacity = instance.capacity();
    let mut dp = vec![0u64; capacity as usize + 1];
    for &item in instance.items() {
        for w in (item.weight..=capacity).rev() {
            let best = recurrence::evaluate(item, w, |c| dp[c as usize]);
            dp[w as usize] = best;
        }
    }
    dp[capacity as usize]
}

/// Solve with `previous` and `current` rows that swap roles per item.
///
/// Each entry of `current` is derived entirely from `previous`, so there is
/// no direction constraint here; the rows swap after every item.
pub fn solve_two_row(instance: &KnapsackInstance) -> u64 {
    let row_len = instance.capacity() as usize + 1;
    let mut prev = vec![0u64; row_len];
    let mut cur = vec![0u64; row_len];
    for &item in instance.items() {
        recurrence::fill_row(item, &prev, &mut cur);
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[row_len - 1]
}
