//! The unbounded variant: every item may be taken any number of times.
//!
//! Same transition as the 0/1 strategies, opposite iteration direction.
//! With capacities ascending, `dp[w - weight]` already reflects earlier
//! inclusions of the very item being processed, which is precisely the
//! repetition this variant wants; the row dimension collapses because
//! "before/after considering this item" no longer needs distinguishing.

use crate::instance::KnapsackInstance;
use crate::recurrence;

/// Solve with unlimited copies of each item allowed.
///
/// The ascending capacity loop is an invariant of this solver, the exact
/// mirror of the descending loop in
/// [`crate::strategies::space_optimized::solve_space_optimized`].
pub fn unbounded_knapsack(instance: &KnapsackInstance) -> u64 {
    let capacity = instance.capacity();
    let mut dp = vec![0u64; capacity as usize + 1];
    for &item in instance.items() {
        for w in item.weight..=capacity {
            let best = recurrence::evaluate(item, w, |c| dp[c as usize]);
            dp[w as usize] = best;
        }
    }
    dp[capacity as usize]
}
