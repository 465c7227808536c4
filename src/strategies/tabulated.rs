//! Bottom-up fill of the full subproblem table.
//!
//! The `(prefix, capacity)` states form a DAG in which row `i` depends on
//! row `i - 1` and on nothing else, so a single row-major pass visits every
//! state after its dependencies: no recursion, no recomputation, and the
//! finished table is kept, which is what later makes selection
//! reconstruction possible. Time and space are both `O(n * capacity)`.

use crate::instance::KnapsackInstance;
use crate::recurrence;
use crate::table::DpTable;

/// Fill and return the complete `(n + 1) x (capacity + 1)` table.
pub fn fill_table(instance: &KnapsackInstance) -> DpTable {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!(
        "fill_table",
        items = instance.len(),
        capacity = instance.capacity()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut table = DpTable::zeroed(instance.len(), instance.capacity());
    for (i, &item) in instance.items().iter().enumerate() {
        let (prev, next) = table.rows_split(i + 1);
        recurrence::fill_row(item, prev, next);
    }
    table
}

/// Solve bottom-up; the answer is the table's bottom-right entry.
pub fn solve_tabulated(instance: &KnapsackInstance) -> u64 {
    fill_table(instance).get(instance.len(), instance.capacity())
}

#[cfg(test)]
mod tests {
    use super::{fill_table, solve_tabulated};
    use crate::instance::KnapsackInstance;

    fn instance(weights: &[u64], values: &[u64], capacity: u64) -> KnapsackInstance {
        KnapsackInstance::from_parts(weights, values, capacity).unwrap()
    }

    #[test]
    fn end_to_end_scenarios() {
        assert_eq!(
            solve_tabulated(&instance(&[1, 3, 4, 5], &[15, 10, 30, 25], 7)),
            45
        );
        assert_eq!(
            solve_tabulated(&instance(&[2, 3, 4, 5], &[3, 4, 5, 8], 5)),
            8
        );
        assert_eq!(solve_tabulated(&instance(&[], &[], 10)), 0);
        assert_eq!(solve_tabulated(&instance(&[1, 1, 1], &[1, 2, 3], 2)), 5);
        assert_eq!(solve_tabulated(&instance(&[10, 20], &[100, 200], 5)), 0);
        assert_eq!(solve_tabulated(&instance(&[1, 2, 3], &[10, 20, 30], 0)), 0);
    }

    #[test]
    fn table_rows_grow_toward_the_answer() {
        let case = instance(&[5, 4, 6, 4], &[10, 40, 30, 50], 10);
        let table = fill_table(&case);
        assert_eq!(table.row(0), &[0; 11]);
        assert_eq!(table.get(4, 10), 90);

        // Known intermediate row: after the first two items the best within
        // capacity 9 is both of them.
        assert_eq!(table.get(2, 9), 50);
    }
}
