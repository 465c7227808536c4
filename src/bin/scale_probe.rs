use std::env;
use std::time::Instant;

use knap_dp::{
    count_subsets, solve_memoized, solve_naive, solve_space_optimized, solve_tabulated,
    solve_two_row, subset_sum_exists, Item, KnapsackInstance,
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Timing 0/1 strategies across instance sizes...");
    measurements.extend(run_strategies(&options, &mut sys));

    eprintln!("[2/3] Timing the naive oracle on small instances...");
    measurements.extend(run_naive(&mut sys));

    eprintln!("[3/3] Timing the subset-sum family...");
    measurements.extend(run_subset_sum(&mut sys));

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.status, VerificationStatus::Failed))
        .count();
    if failed > 0 {
        eprintln!("{failed} verification(s) failed:");
        for m in &measurements {
            if let (VerificationStatus::Failed, Some(detail)) = (m.status, &m.detail) {
                eprintln!("  {} ({}): {}", m.scenario, m.size_desc, detail);
            }
        }
    }

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 200usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table>          Output format (default: csv)
  --verify-limit <N>            Maximum item count to cross-check against an
                                independent strategy (default: 200)
  -h, --help                    Print this help message
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

/// Deterministic synthetic instance; no RNG so runs are reproducible.
fn synthetic_instance(items: usize, capacity: u64) -> KnapsackInstance {
    let items = (0..items)
        .map(|i| {
            let weight = (i as u64).wrapping_mul(7919) % 37 + 1;
            let value = (i as u64).wrapping_mul(104_729) % 499 + 1;
            Item::new(weight, value)
        })
        .collect();
    KnapsackInstance::new(items, capacity)
}

fn run_strategies(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const CONFIGS: &[(usize, u64)] = &[
        (20, 100),
        (50, 500),
        (100, 1_000),
        (200, 4_000),
        (400, 8_000),
        (800, 16_000),
    ];
    type Solver = fn(&KnapsackInstance) -> u64;
    const STRATEGIES: &[(&str, Solver)] = &[
        ("tabulated", solve_tabulated as Solver),
        ("memoized", solve_memoized as Solver),
        ("space_optimized", solve_space_optimized as Solver),
        ("two_row", solve_two_row as Solver),
    ];

    let mut out = Vec::new();
    for &(items, capacity) in CONFIGS {
        let instance = synthetic_instance(items, capacity);
        // One independent cross-check per config; every strategy result is
        // compared against it below the verify limit.
        let baseline = if items <= options.verify_limit {
            Some(solve_space_optimized(&instance))
        } else {
            None
        };
        for &(name, solver) in STRATEGIES {
            let m = measure(name, format!("items={items},capacity={capacity}"), sys, || {
                let value = solver(&instance);
                match baseline {
                    Some(expected) if value == expected => (VerificationStatus::Passed, None),
                    Some(expected) => (
                        VerificationStatus::Failed,
                        Some(format!("expected {expected}, got {value}")),
                    ),
                    None => (VerificationStatus::NotChecked, None),
                }
            });
            eprintln!(
                "      {name} items={items} capacity={capacity}: {:.3}s ({})",
                m.wall_s,
                m.status.label()
            );
            out.push(m);
        }
    }
    out
}

fn run_naive(sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[10, 15, 20];
    SIZES
        .iter()
        .map(|&items| {
            let instance = synthetic_instance(items, 60);
            let expected = solve_tabulated(&instance);
            let m = measure("naive", format!("items={items},capacity=60"), sys, || {
                let value = solve_naive(&instance);
                if value == expected {
                    (VerificationStatus::Passed, None)
                } else {
                    (
                        VerificationStatus::Failed,
                        Some(format!("expected {expected}, got {value}")),
                    )
                }
            });
            eprintln!(
                "      naive items={items}: {:.3}s ({})",
                m.wall_s,
                m.status.label()
            );
            m
        })
        .collect()
}

fn run_subset_sum(sys: &mut System) -> Vec<Measurement> {
    const CONFIGS: &[(usize, u64)] = &[(100, 1_000), (1_000, 10_000), (4_000, 40_000)];
    let mut out = Vec::new();
    for &(len, target) in CONFIGS {
        let numbers: Vec<u64> = (0..len as u64).map(|i| i.wrapping_mul(6151) % 59 + 1).collect();
        let m = measure("subset_sum", format!("len={len},target={target}"), sys, || {
            let exists = subset_sum_exists(&numbers, target);
            let ways = count_subsets(&numbers, target);
            if exists == (ways > 0) {
                (VerificationStatus::Passed, None)
            } else {
                (
                    VerificationStatus::Failed,
                    Some(format!("exists={exists} but ways={ways}")),
                )
            }
        });
        eprintln!(
            "      subset_sum len={len} target={target}: {:.3}s ({})",
            m.wall_s,
            m.status.label()
        );
        out.push(m);
    }
    out
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        status,
        detail,
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m.detail.as_deref().unwrap_or("").replace('"', "'");
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>10}  {:>14}  {:>12}",
        "scenario",
        "size",
        "wall_s",
        "rss_delta_kib",
        "status",
        col1 = col1,
        col2 = col2
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>10.3}  {:>14}  {:>12}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            col1 = col1,
            col2 = col2
        );
    }
    Ok(())
}
