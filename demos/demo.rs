// demos/demo.rs
use payoff_sim::analytics::curve::{sample_curve, CurveConfig};
use payoff_sim::market::MarketParameters;
use payoff_sim::math_utils::Timer;
use payoff_sim::mc::annotation::{annotate_path, BarrierEvents};
use payoff_sim::mc::ensemble::{simulate_ensemble, EnsembleConfig};
use payoff_sim::mc::path_simulator::{simulate, SimulationConfig};
use payoff_sim::products::{OptionType, ProductSpec};
use payoff_sim::rng::{self, ShockDistribution};
use payoff_sim::scenarios::ScenarioCatalog;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let shock = if args.iter().any(|a| a == "--normal") {
        ShockDistribution::Normal
    } else {
        ShockDistribution::Uniform
    };

    println!("Running payoff-sim Demo\n");

    let market = MarketParameters::new(150.0, 0.25, 0.04, 1.0, 10_000.0).expect("Valid market");

    let products = [
        (
            "Autocall / Phoenix",
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
            "Warrant (call)",
            ProductSpec::Warrant {
                strike_price: 160.0,
                option_type: OptionType::Call,
                leverage: 5.0,
            },
        ),
    ];

    for (name, product) in products {
        println!("=== {} ===", name);

        let curve = sample_curve(product, market, &CurveConfig::default()).expect("Valid curve");
        println!("{:>12} {:>12} {:>12}", "Spot", "Payoff", "Profit");
        for point in curve.iter().step_by(4) {
            println!(
                "{:>12.2} {:>12.2} {:>12.2}",
                point.underlying_price, point.payoff_amount, point.profit_amount
            );
        }
        let summary = curve.summary();
        println!(
            "max profit {:.2}, max loss {:.2}, break-even {}",
            summary.max_profit,
            summary.max_loss,
            summary
                .break_even
                .map(|b| format!("{:.2}", b))
                .unwrap_or_else(|| "N/A".to_string())
        );

        let sim_config = SimulationConfig {
            shock,
            ..Default::default()
        };
        let mut rng = rng::seed_rng_from_u64(42);
        for scenario in ScenarioCatalog::all() {
            let path = simulate(product, market, scenario, &sim_config, &mut rng)
                .expect("Valid simulation");
            let annotation = annotate_path(&path);
            println!(
                "  {:<10} terminal {:>9.2}  min {:>9.2}  max {:>9.2}  breach {:<5} autocall {}",
                scenario.label,
                annotation.terminal_price,
                annotation.min_price,
                annotation.max_price,
                annotation.events.contains(BarrierEvents::PROTECTION_BREACHED),
                annotation
                    .first_autocall_touch
                    .map(|d| format!("day {}", d))
                    .unwrap_or_else(|| "-".to_string())
            );
        }

        let mut timer = Timer::new();
        timer.start();
        let ensemble = simulate_ensemble(
            product,
            market,
            ScenarioCatalog::base(),
            &sim_config,
            &EnsembleConfig {
                paths: 10_000,
                seed: 42,
            },
        )
        .expect("Valid ensemble");
        println!(
            "  10k base paths in {:.1} ms: p05 {:.2}, p50 {:.2}, p95 {:.2}, breach rate {:.1}%, mean payoff {:.2}\n",
            timer.elapsed_ms(),
            ensemble.terminal_price_p05,
            ensemble.terminal_price_p50,
            ensemble.terminal_price_p95,
            ensemble.protection_breach_rate * 100.0,
            ensemble.mean_terminal_payoff
        );
    }
}
