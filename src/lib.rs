//! # payoff-sim: Payoff Profiles and Regime Paths for Structured Products
//!
//! A Rust library that restates the terms of structured products as payoff
//! curves and simulates the underlying under named market regimes, with the
//! product's barriers attached to every simulated day.
//!
//! ## Key Features
//!
//! - **Four product families**: Autocall/Phoenix, reverse convertible,
//!   capital protected note, leveraged warrant
//! - **Payoff curves**: lazy, restartable sweeps of terminal prices with
//!   extremes and break-even
//! - **Regime paths**: Euler-discretized GBM scaled by bullish, base, bearish
//!   and volatile presets, with a seedable random source
//! - **Barrier annotation**: first breach and autocall touch per path, and
//!   parallel ensembles summarizing many paths
//!
//! ## Quick Start
//!
//! ```rust
//! use payoff_sim::analytics::curve::{sample_curve, CurveConfig};
//! use payoff_sim::market::MarketParameters;
//! use payoff_sim::mc::path_simulator::{simulate, SimulationConfig};
//! use payoff_sim::products::ProductSpec;
//! use payoff_sim::rng;
//! use payoff_sim::scenarios::get_scenario;
//!
//! let market = MarketParameters::new(150.0, 0.25, 0.04, 1.0, 10_000.0).expect("Valid market");
//! let product = ProductSpec::Autocall {
//!     autocall_barrier_pct: 100.0,
//!     coupon_rate_pct: 8.0,
//!     protection_barrier_pct: 60.0,
//! };
//!
//! let curve = sample_curve(product, market, &CurveConfig::default()).expect("Valid curve");
//! assert_eq!(curve.len(), 21);
//!
//! let mut rng = rng::seed_rng_from_u64(42);
//! let scenario = get_scenario("volatile").expect("Known scenario");
//! let path = simulate(product, market, scenario, &SimulationConfig::default(), &mut rng)
//!     .expect("Valid simulation");
//! assert_eq!(path.len(), 253);
//! ```
//!
//! ## Scope
//!
//! Fair values and Greeks come from an external pricing service and are
//! only decoded here ([`analytics::quote::PricingQuote`]). The curves and
//! paths are illustrations of the contract terms, not prices.

// Module declarations
pub mod analytics;
pub mod error;
pub mod market;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod products;
pub mod rng;
pub mod scenarios;
pub mod solvers;

// Re-export commonly used types for convenience
pub use analytics::curve::{sample_curve, CurveConfig, PayoffCurve, PayoffPoint};
pub use error::{SimError, SimResult};
pub use market::MarketParameters;
pub use mc::path_simulator::{simulate, SimulatedPath, SimulationConfig};
pub use products::{evaluate_payoff, OptionType, ProductSpec};
pub use scenarios::{get_scenario, ScenarioPreset};
