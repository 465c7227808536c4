//! Recovering an optimal item selection from the full table.
//!
//! Reconstruction needs the complete 2D history: inclusion of item `i - 1`
//! is detected by comparing `dp[i][w]` against `dp[i - 1][w]`, and the
//! space-compressed fills have already discarded the rows that comparison
//! reads. Hence this module always fills the full table first.

use crate::instance::KnapsackInstance;
use crate::strategies::tabulated::fill_table;

/// An optimal selection: the achieved value and the chosen item indices,
/// ascending by original index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub value: u64,
    pub indices: Vec<usize>,
}

impl Selection {
    /// Total weight of the selected items of `instance`.
    pub fn total_weight(&self, instance: &KnapsackInstance) -> u64 {
        self.indices
            .iter()
            .map(|&i| instance.items()[i].weight)
            .fold(0, |acc, w| acc.saturating_add(w))
    }

    /// Total value of the selected items of `instance`.
    pub fn total_value(&self, instance: &KnapsackInstance) -> u64 {
        self.indices
            .iter()
            .map(|&i| instance.items()[i].value)
            .fold(0, |acc, v| acc.saturating_add(v))
    }
}

/// Solve bottom-up and backtrack one optimal selection out of the table.
///
/// Walking `i` from `n` down to 1: if `dp[i][w] != dp[i - 1][w]` the
/// optimum must include item `i - 1`, so its index is recorded and `w`
/// shrinks by its weight; otherwise the walk moves up a row unchanged.
/// Because inclusion is only recorded on strict inequality, ties between
/// including and excluding an item resolve to exclusion; when several
/// optimal subsets exist the returned one is deterministic but not
/// otherwise canonical.
pub fn solve_with_selection(instance: &KnapsackInstance) -> Selection {
    let table = fill_table(instance);

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("backtrack_selection", items = instance.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let n = instance.len();
    let mut w = instance.capacity();
    let mut indices = Vec::new();
    for i in (1..=n).rev() {
        if table.get(i, w) != table.get(i - 1, w) {
            let item = instance.items()[i - 1];
            indices.push(i - 1);
            w -= item.weight;
        }
    }
    indices.reverse();

    Selection {
        value: table.get(n, instance.capacity()),
        indices,
    }
}
