//! Top-down evaluation behind an explicit cache.
//!
//! The recurrence is evaluated recursively, but every computed state
//! `(prefix_len, capacity)` is stored before returning, so each of the at
//! most `(n + 1) * (capacity + 1)` reachable states is computed once:
//! `O(n * capacity)` time and space.
//!
//! The cache is always an explicit [`Memo`] object. [`solve_memoized`]
//! creates a fresh one per call and drops it on return; a caller that runs
//! several queries against a stable item set can construct one [`Memo`]
//! itself and pass it to [`solve_memoized_with`] to amortize the work.
//! There is no implicitly shared default cache.

use std::collections::HashMap;

use crate::instance::{Item, KnapsackInstance};
use crate::recurrence;

/// Cache of computed subproblem values, keyed by state identity.
///
/// A `Memo` is only meaningful against a stable item sequence: state
/// `(i, w)` names "the optimal value of the first `i` items within
/// capacity `w`". Reusing one across instances that share their items but
/// differ in capacity is sound and is the intended sharing mode; reusing
/// one across different item sets is a caller error the engine cannot
/// detect.
#[derive(Debug, Default, Clone)]
pub struct Memo {
    states: HashMap<(usize, u64), u64>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct states computed so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Solve top-down with a cache owned by this call alone.
pub fn solve_memoized(instance: &KnapsackInstance) -> u64 {
    let mut memo = Memo::new();
    solve_memoized_with(instance, &mut memo)
}

/// Solve top-down, reusing (and extending) a caller-owned cache.
pub fn solve_memoized_with(instance: &KnapsackInstance, memo: &mut Memo) -> u64 {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!(
        "solve_memoized",
        items = instance.len(),
        capacity = instance.capacity(),
        warm_states = memo.len()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    value(instance.items(), instance.len(), instance.capacity(), memo)
}

fn value(items: &[Item], prefix_len: usize, w: u64, memo: &mut Memo) -> u64 {
    if prefix_len == 0 {
        return 0;
    }
    if let Some(&cached) = memo.states.get(&(prefix_len, w)) {
        return cached;
    }
    let best = recurrence::evaluate(items[prefix_len - 1], w, |c| {
        value(items, prefix_len - 1, c, memo)
    });
    memo.states.insert((prefix_len, w), best);
    best
}
