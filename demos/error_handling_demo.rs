// demos/error_handling_demo.rs
use payoff_sim::analytics::curve::{sample_curve, CurveConfig};
use payoff_sim::analytics::quote::PricingQuote;
use payoff_sim::error::SimError;
use payoff_sim::market::MarketParameters;
use payoff_sim::mc::path_simulator::{simulate, SimulationConfig};
use payoff_sim::products::{evaluate_payoff, ProductSpec};
use payoff_sim::rng;
use payoff_sim::scenarios::get_scenario;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("Error Handling Demo for payoff-sim");
    println!("==================================\n");

    let product = ProductSpec::Autocall {
        autocall_barrier_pct: 100.0,
        coupon_rate_pct: 8.0,
        protection_barrier_pct: 60.0,
    };

    // Test 1: Non-positive spot price
    println!("1. Testing zero spot price...");
    match MarketParameters::new(0.0, 0.25, 0.04, 1.0, 10_000.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    let market = MarketParameters::new(150.0, 0.25, 0.04, 1.0, 10_000.0).expect("Valid market");

    // Test 2: Negative product term
    println!("\n2. Testing negative barrier...");
    let bad_product = ProductSpec::ReverseConvertible {
        coupon_rate_pct: 8.0,
        barrier_pct: -60.0,
    };
    match evaluate_payoff(bad_product, market, 120.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Maturity too short for a single trading day
    println!("\n3. Testing maturity shorter than one trading day...");
    let short = MarketParameters {
        maturity_years: 0.001,
        ..market
    };
    let mut rng = rng::seed_rng_from_u64(42);
    let base = get_scenario("base").expect("Known scenario");
    match simulate(product, short, base, &SimulationConfig::default(), &mut rng) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Unknown scenario
    println!("\n4. Testing unknown scenario id...");
    match get_scenario("sideways") {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e @ SimError::UnknownScenario { .. }) => println!("   ✓ Caught error: {}", e),
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Test 5: Inverted curve grid
    println!("\n5. Testing inverted sampling range...");
    let inverted = CurveConfig {
        lower_mult: 1.5,
        upper_mult: 0.5,
        step: 0.05,
    };
    match sample_curve(product, market, &inverted) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Extreme but valid volatility warns and floors the path
    println!("\n6. Testing extreme but valid volatility...");
    let wild = MarketParameters {
        spot_price: 5.0,
        volatility: 25.0,
        ..market
    };
    match simulate(product, wild, base, &SimulationConfig::default(), &mut rng) {
        Ok(path) => println!(
            "   ✓ Simulated with warning, minimum price {:.2}",
            path.prices().fold(f64::INFINITY, f64::min)
        ),
        Err(e) => println!("   Error: {}", e),
    }

    // Test 7: Malformed pricing service payload
    println!("\n7. Testing pricing quote with out-of-range probability...");
    let body = r#"{"product":"Autocall/Phoenix","fair_value":9700.0,"max_gain":800.0,
        "max_loss":4000.0,"risk_level":40,"probability_profit":140.0,
        "delta":0.1,"gamma":0.002,"vega":12.0,"theta":-3.0}"#;
    match PricingQuote::from_json(body) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\nAll error cases handled.");
}
