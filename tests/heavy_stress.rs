#![cfg(feature = "heavy")]

use knap_dp::{
    solve_memoized, solve_space_optimized, solve_tabulated, solve_two_row, Item, KnapsackInstance,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_instance(seed: u64, items: usize, max_weight: u64, capacity: u64) -> KnapsackInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let items = (0..items)
        .map(|_| Item::new(rng.gen_range(1..=max_weight), rng.gen_range(1..=1_000)))
        .collect();
    KnapsackInstance::new(items, capacity)
}

#[test]
fn heavy_polynomial_strategies_agree_at_scale() {
    let instance = random_instance(42, 400, 50, 5_000);
    let reference = solve_tabulated(&instance);
    assert_eq!(solve_space_optimized(&instance), reference);
    assert_eq!(solve_two_row(&instance), reference);
    assert_eq!(solve_memoized(&instance), reference);
    assert!(reference > 0);
}

#[test]
fn heavy_space_optimized_handles_wide_capacity() {
    let instance = random_instance(7, 120, 400, 100_000);
    assert_eq!(
        solve_space_optimized(&instance),
        solve_two_row(&instance)
    );
}
