// scripts/benchmark.rs
use payoff_sim::analytics::curve::{sample_curve, CurveConfig};
use payoff_sim::market::MarketParameters;
use payoff_sim::math_utils::Timer;
use payoff_sim::mc::ensemble::{simulate_ensemble, EnsembleConfig};
use payoff_sim::mc::path_simulator::{simulate, SimulationConfig};
use payoff_sim::products::{OptionType, ProductSpec};
use payoff_sim::rng::{RngFactory, ShockDistribution};
use payoff_sim::scenarios::get_scenario;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    units: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    value: f64,
}

fn reference_market() -> MarketParameters {
    MarketParameters::new(150.0, 0.25, 0.04, 1.0, 10_000.0).expect("Valid market")
}

fn reference_products() -> Vec<(&'static str, ProductSpec)> {
    vec![
        (
            "Autocall",
            ProductSpec::Autocall {
                autocall_barrier_pct: 100.0,
                coupon_rate_pct: 8.0,
                protection_barrier_pct: 60.0,
            },
        ),
        (
            "Reverse Convertible",
            ProductSpec::ReverseConvertible {
                coupon_rate_pct: 8.0,
                barrier_pct: 60.0,
            },
        ),
        (
            "Capital Protected",
            ProductSpec::CapitalProtected {
                protection_level_pct: 100.0,
                participation_rate_pct: 80.0,
            },
        ),
        (
            "Warrant Call",
            ProductSpec::Warrant {
                strike_price: 160.0,
                option_type: OptionType::Call,
                leverage: 5.0,
            },
        ),
    ]
}

fn run_curve_benchmarks() -> Vec<BenchmarkResult> {
    let market = reference_market();
    let fine_grid = CurveConfig {
        lower_mult: 0.0,
        upper_mult: 3.0,
        step: 0.0001,
    };
    let mut results = Vec::new();

    for (name, product) in reference_products() {
        let mut timer = Timer::new();
        timer.start();
        let curve = sample_curve(product, market, &fine_grid).expect("Valid curve");
        let summary = curve.summary();
        let time_ms = timer.elapsed_ms();

        results.push(BenchmarkResult {
            name: format!("{} curve", name),
            units: curve.len(),
            time_ms,
            throughput_per_sec: curve.len() as f64 / (time_ms / 1000.0),
            value: summary.max_payoff,
        });
    }

    results
}

fn run_path_benchmarks() -> Vec<BenchmarkResult> {
    let market = reference_market();
    let (_, autocall) = reference_products()[0];
    let scenario = get_scenario("volatile").expect("Known scenario");
    let mut results = Vec::new();

    for shock in [ShockDistribution::Uniform, ShockDistribution::Normal] {
        let sim_config = SimulationConfig {
            shock,
            ..Default::default()
        };

        // Sequential single paths
        let paths = 10_000;
        let factory = RngFactory::new(42);
        let mut timer = Timer::new();
        timer.start();
        let mut terminal_sum = 0.0;
        for i in 0..paths {
            let mut rng = factory.create_std_rng(i as u64);
            let path = simulate(autocall, market, scenario, &sim_config, &mut rng)
                .expect("Valid simulation");
            terminal_sum += path.terminal_price();
        }
        let time_ms = timer.elapsed_ms();
        results.push(BenchmarkResult {
            name: format!("Sequential paths ({:?})", shock),
            units: paths,
            time_ms,
            throughput_per_sec: paths as f64 / (time_ms / 1000.0),
            value: terminal_sum / paths as f64,
        });

        // Parallel ensembles
        for &paths in &[1_000, 10_000, 100_000] {
            let mut timer = Timer::new();
            timer.start();
            let summary = simulate_ensemble(
                autocall,
                market,
                scenario,
                &sim_config,
                &EnsembleConfig { paths, seed: 42 },
            )
            .expect("Valid ensemble");
            let time_ms = timer.elapsed_ms();
            results.push(BenchmarkResult {
                name: format!("Ensemble {}k ({:?})", paths / 1000, shock),
                units: paths,
                time_ms,
                throughput_per_sec: paths as f64 / (time_ms / 1000.0),
                value: summary.mean_terminal_price,
            });
        }
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    // System information as comments
    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Units,Time_ms,Throughput_per_sec,Value")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6}",
            result.name, result.units, result.time_ms, result.throughput_per_sec, result.value
        )?;
    }

    Ok(())
}

fn main() {
    println!("payoff-sim Benchmark Suite");
    println!("==========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    println!("Running payoff curve benchmarks...");
    let mut all_results = run_curve_benchmarks();
    println!("Running path simulation benchmarks...");
    all_results.extend(run_path_benchmarks());

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<35} {:>10} {:>12} {:>15} {:>12}",
        "Benchmark", "Units", "Time (ms)", "Throughput", "Value"
    );
    println!("{:-<80}", "");
    for result in &all_results {
        println!(
            "{:<35} {:>10} {:>12.2} {:>15.0} {:>12.4}",
            result.name, result.units, result.time_ms, result.throughput_per_sec, result.value
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&all_results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("\nCould not write {}: {}", filename, e),
    }

    println!("\nTo reproduce these results:");
    println!("1. Use Rust version: {}", system_info.rust_version);
    println!("2. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("3. Run: cargo run --bin benchmark --release");
}
