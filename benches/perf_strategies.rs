use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knap_dp::{
    solve_memoized, solve_space_optimized, solve_tabulated, solve_two_row, Item, KnapsackInstance,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_instance(rng: &mut StdRng, items: usize, capacity: u64) -> KnapsackInstance {
    let items = (0..items)
        .map(|_| Item::new(rng.gen_range(1..=40), rng.gen_range(1..=500)))
        .collect();
    KnapsackInstance::new(items, capacity)
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory()
    } else {
        0
    }
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_strategies");
    for &(items, capacity) in &[(50usize, 500u64), (100, 2_000), (200, 5_000)] {
        group.bench_function(format!("tabulated_{items}x{capacity}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_instance(&mut rng, items, capacity)
                },
                |instance| {
                    let before = rss_kib();
                    let value = solve_tabulated(&instance);
                    let after = rss_kib();
                    criterion::black_box(value);
                    eprintln!(
                        "RSS KiB delta (tabulated {items}x{capacity}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
        group.bench_function(format!("memoized_{items}x{capacity}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_instance(&mut rng, items, capacity)
                },
                |instance| {
                    criterion::black_box(solve_memoized(&instance));
                },
                BatchSize::PerIteration,
            )
        });
        group.bench_function(format!("space_optimized_{items}x{capacity}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_instance(&mut rng, items, capacity)
                },
                |instance| {
                    let before = rss_kib();
                    let value = solve_space_optimized(&instance);
                    let after = rss_kib();
                    criterion::black_box(value);
                    eprintln!(
                        "RSS KiB delta (space_optimized {items}x{capacity}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
        group.bench_function(format!("two_row_{items}x{capacity}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_instance(&mut rng, items, capacity)
                },
                |instance| {
                    criterion::black_box(solve_two_row(&instance));
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
