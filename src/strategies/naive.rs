//! Direct unmemoized evaluation of the recurrence.
//!
//! Identical `(prefix, capacity)` states are recomputed along different
//! call paths, so the worst case is `O(2^n)`. That makes this strategy the
//! correctness baseline for small instances and nothing more; every other
//! strategy exists to avoid exactly this recomputation.

use crate::instance::{Item, KnapsackInstance};
use crate::recurrence;

/// Solve by plain recursion. Exponential time; intended for small `n`.
pub fn solve_naive(instance: &KnapsackInstance) -> u64 {
    value(instance.items(), instance.len(), instance.capacity())
}

// The recursion floors at the empty prefix only. Flooring at capacity 0 as
// well would lose the value of zero-weight items, which fit any capacity.
fn value(items: &[Item], prefix_len: usize, w: u64) -> u64 {
    if prefix_len == 0 {
        return 0;
    }
    recurrence::evaluate(items[prefix_len - 1], w, |c| {
        value(items, prefix_len - 1, c)
    })
}

#[cfg(test)]
mod tests {
    use super::solve_naive;
    use crate::instance::KnapsackInstance;

    fn instance(weights: &[u64], values: &[u64], capacity: u64) -> KnapsackInstance {
        KnapsackInstance::from_parts(weights, values, capacity).unwrap()
    }

    #[test]
    fn end_to_end_scenarios() {
        assert_eq!(
            solve_naive(&instance(&[1, 3, 4, 5], &[15, 10, 30, 25], 7)),
            45
        );
        assert_eq!(solve_naive(&instance(&[2, 3, 4, 5], &[3, 4, 5, 8], 5)), 8);
        assert_eq!(solve_naive(&instance(&[], &[], 10)), 0);
        assert_eq!(solve_naive(&instance(&[1, 1, 1], &[1, 2, 3], 2)), 5);
        assert_eq!(solve_naive(&instance(&[10, 20], &[100, 200], 5)), 0);
        assert_eq!(solve_naive(&instance(&[1, 2, 3], &[10, 20, 30], 0)), 0);
    }

    #[test]
    fn zero_weight_items_are_free_value() {
        assert_eq!(solve_naive(&instance(&[0, 2], &[9, 5], 1)), 9);
        assert_eq!(solve_naive(&instance(&[0], &[9], 0)), 9);
    }
}
