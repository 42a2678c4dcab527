// src/mc/path_simulator.rs
use crate::error::{validation::*, SimResult};
use crate::market::{MarketParameters, TRADING_DAYS_PER_YEAR};
use crate::models::gbm::Gbm;
use crate::products::ProductSpec;
use crate::rng::ShockDistribution;
use crate::scenarios::ScenarioPreset;
use crate::solvers::euler_maruyama::EulerMaruyama;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub steps: Option<usize>, // Overrides round(maturity_years * trading_days_per_year)
    pub trading_days_per_year: f64,
    pub shock: ShockDistribution,
}

impl SimulationConfig {
    /// Validate the simulation configuration
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("trading_days_per_year", self.trading_days_per_year)?;
        if let Some(steps) = self.steps {
            validate_steps(steps)?;
        }
        Ok(())
    }

    /// Number of steps for a product maturing after `market.maturity_years`.
    pub fn resolve_steps(&self, market: &MarketParameters) -> usize {
        self.steps.unwrap_or_else(|| {
            (market.maturity_years * self.trading_days_per_year).round() as usize
        })
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            steps: None,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            shock: ShockDistribution::Uniform,
        }
    }
}

/// One trading day of a simulated path with the product's reference lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub day_index: usize,
    pub simulated_price: f64,
    pub protection_barrier_price: f64,
    pub autocall_barrier_price: Option<f64>,
}

/// A simulated trajectory of the underlying, day 0 first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPath {
    pub scenario_id: String,
    pub steps: usize,
    pub points: Vec<PathPoint>,
}

impl SimulatedPath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.simulated_price)
    }

    pub fn terminal_price(&self) -> f64 {
        self.points.last().map_or(f64::NAN, |p| p.simulated_price)
    }
}

impl<'a> IntoIterator for &'a SimulatedPath {
    type Item = &'a PathPoint;
    type IntoIter = std::slice::Iter<'a, PathPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Simulate one path of the underlying under a market regime
///
/// # Math Framework
///
/// Euler discretization of regime-scaled GBM with one step per trading day:
/// ```text
/// dt    = T / steps
/// μ     = r · m_drift
/// σ     = σ_market · m_vol
/// S_0   = spot
/// S_i   = max(1, S_{i-1} + S_{i-1}(μ dt + σ √dt ε_i))
/// ```
/// where ε_i follows `config.shock` (uniform on [-1, 1) by default).
///
/// Each point carries the protection line and, for autocalls, the autocall
/// line so a chart can overlay them directly.
///
/// # Errors
///
/// Returns `SimError::InvalidParameters` for invalid market data or product
/// terms, and when the resolved step count is zero (maturity shorter than
/// half a trading day).
pub fn simulate<R: Rng + ?Sized>(
    product: ProductSpec,
    market: MarketParameters,
    scenario: &ScenarioPreset,
    config: &SimulationConfig,
    rng: &mut R,
) -> SimResult<SimulatedPath> {
    market.validate()?;
    product.validate()?;
    config.validate()?;
    let steps = config.resolve_steps(&market);
    validate_steps(steps)?;
    validate_scenario(scenario)?;

    let model = Gbm::from_scenario(&market, scenario);
    let dt = market.maturity_years / steps as f64;

    debug!(
        scenario = scenario.id,
        product = %product.kind(),
        steps,
        mu = model.mu,
        sigma = model.sigma,
        "simulating path"
    );
    if model.sigma * dt.sqrt() >= 1.0 {
        warn!(
            scenario = scenario.id,
            step_volatility = model.sigma * dt.sqrt(),
            "per-step volatility reaches 100%, paths are likely to hit the price floor"
        );
    }

    let protection_barrier_price = product.protection_barrier_price(market.spot_price);
    let autocall_barrier_price = product.autocall_barrier_price(market.spot_price);

    let mut points = Vec::with_capacity(steps + 1);
    let mut price = market.spot_price;
    points.push(PathPoint {
        day_index: 0,
        simulated_price: price,
        protection_barrier_price,
        autocall_barrier_price,
    });

    for day in 1..=steps {
        let t = (day - 1) as f64 * dt;
        EulerMaruyama::step(&model, &mut price, t, dt, config.shock, rng);
        points.push(PathPoint {
            day_index: day,
            simulated_price: price,
            protection_barrier_price,
            autocall_barrier_price,
        });
    }

    Ok(SimulatedPath {
        scenario_id: scenario.id.to_string(),
        steps,
        points,
    })
}

fn validate_scenario(scenario: &ScenarioPreset) -> SimResult<()> {
    validate_finite("drift_multiplier", scenario.drift_multiplier)?;
    validate_non_negative("volatility_multiplier", scenario.volatility_multiplier)
}
