//! Example: solve one 0/1 knapsack instance with every strategy.
//!
//! Run with:
//! `cargo run --example knapsack`

use knap_dp::{
    solve_memoized, solve_naive, solve_space_optimized, solve_tabulated, solve_two_row,
    solve_with_selection, InstanceBuilder,
};

fn main() {
    // Ring, camera, laptop, game console.
    let instance = InstanceBuilder::new(7)
        .item(1, 15)
        .item(3, 10)
        .item(4, 30)
        .item(5, 25)
        .build();

    println!("capacity: {}", instance.capacity());
    for (index, item) in instance.items().iter().enumerate() {
        println!("  item {index}: weight={} value={}", item.weight, item.value);
    }

    println!("naive:           {}", solve_naive(&instance));
    println!("memoized:        {}", solve_memoized(&instance));
    println!("tabulated:       {}", solve_tabulated(&instance));
    println!("space-optimized: {}", solve_space_optimized(&instance));
    println!("two-row:         {}", solve_two_row(&instance));

    let selection = solve_with_selection(&instance);
    println!(
        "selection: value={} weight={} indices={:?}",
        selection.value,
        selection.total_weight(&instance),
        selection.indices
    );
}
