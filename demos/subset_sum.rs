//! Example: the subset-sum family and the unbounded variant.
//!
//! Run with:
//! `cargo run --example subset_sum`

use knap_dp::{
    count_subsets, equal_partition_possible, subset_sum_exists, unbounded_knapsack, Item,
    KnapsackInstance,
};

fn main() {
    let numbers = [3u64, 34, 4, 12, 5, 2];
    println!(
        "subset of {numbers:?} summing to 9: {}",
        subset_sum_exists(&numbers, 9)
    );

    let numbers = [1u64, 1, 2, 3];
    println!(
        "subsets of {numbers:?} summing to 4: {}",
        count_subsets(&numbers, 4)
    );

    let numbers = [1u64, 5, 11, 5];
    println!(
        "equal partition of {numbers:?}: {}",
        equal_partition_possible(&numbers)
    );

    let instance = KnapsackInstance::new(vec![Item::new(1, 15), Item::new(3, 50), Item::new(4, 60)], 8);
    println!(
        "unbounded knapsack, capacity {}: {}",
        instance.capacity(),
        unbounded_knapsack(&instance)
    );
}
