// src/mc/ensemble.rs
use super::annotation::{annotate_path, BarrierEvents};
use super::path_simulator::{simulate, SimulationConfig};
use crate::error::{validation::*, SimError, SimResult};
use crate::market::MarketParameters;
use crate::products::ProductSpec;
use crate::rng::RngFactory;
use crate::scenarios::ScenarioPreset;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    pub paths: usize,
    pub seed: u64,
}

impl EnsembleConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.paths < 2 {
            return Err(SimError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "at least two paths are needed to measure dispersion".to_string(),
            });
        }
        if self.paths > 1_000_000 {
            return Err(SimError::InvalidConfiguration {
                field: "paths".to_string(),
                reason: "exceeds maximum allowed (1 million)".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        EnsembleConfig {
            paths: 1_000,
            seed: 12345,
        }
    }
}

/// Distribution of outcomes across many simulated paths of one regime.
///
/// The payoff figure is the plain average of terminal payoffs, with no
/// discounting and no risk-neutral drift: it illustrates the regime and is
/// not a fair value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnsembleSummary {
    pub scenario_id: String,
    pub paths: usize,
    pub steps: usize,
    pub mean_terminal_price: f64,
    pub std_terminal_price: f64,
    pub terminal_price_p05: f64,
    pub terminal_price_p50: f64,
    pub terminal_price_p95: f64,
    pub protection_breach_rate: f64,
    pub autocall_touch_rate: f64,
    pub floored_rate: f64,
    pub mean_terminal_payoff: f64,
}

/// Simulate independent paths in parallel and summarize them
///
/// Path `i` draws from its own generator seeded `seed + i`, so the summary
/// does not depend on the number of rayon threads.
///
/// # Errors
///
/// Same boundary checks as [`simulate`], plus
/// `SimError::InvalidConfiguration` for an out-of-range path count.
pub fn simulate_ensemble(
    product: ProductSpec,
    market: MarketParameters,
    scenario: &ScenarioPreset,
    sim_config: &SimulationConfig,
    ensemble_config: &EnsembleConfig,
) -> SimResult<EnsembleSummary> {
    ensemble_config.validate()?;
    market.validate()?;
    product.validate()?;
    sim_config.validate()?;
    let steps = sim_config.resolve_steps(&market);
    validate_steps(steps)?;

    debug!(
        scenario = scenario.id,
        product = %product.kind(),
        paths = ensemble_config.paths,
        steps,
        "simulating ensemble"
    );

    let factory = RngFactory::new(ensemble_config.seed);
    let outcomes = (0..ensemble_config.paths)
        .into_par_iter()
        .map(|i| -> SimResult<(f64, BarrierEvents, f64)> {
            let mut rng = factory.create_std_rng(i as u64);
            let path = simulate(product, market, scenario, sim_config, &mut rng)?;
            let annotation = annotate_path(&path);
            let payoff = product.payoff(&market, annotation.terminal_price);
            Ok((annotation.terminal_price, annotation.events, payoff))
        })
        .collect::<SimResult<Vec<_>>>()?;

    let n = outcomes.len() as f64;
    let terminals: Vec<f64> = outcomes.iter().map(|(s, _, _)| *s).collect();
    let rate = |flag: BarrierEvents| {
        outcomes.iter().filter(|(_, e, _)| e.contains(flag)).count() as f64 / n
    };

    let mean_terminal_payoff = outcomes.iter().map(|(_, _, p)| *p).mean();
    if !mean_terminal_payoff.is_finite() {
        warn!(
            scenario = scenario.id,
            value = mean_terminal_payoff,
            "numeric degeneracy: mean terminal payoff is not finite"
        );
    }

    let mut data = Data::new(terminals.clone());

    Ok(EnsembleSummary {
        scenario_id: scenario.id.to_string(),
        paths: ensemble_config.paths,
        steps,
        mean_terminal_price: terminals.iter().mean(),
        std_terminal_price: terminals.iter().std_dev(),
        terminal_price_p05: data.percentile(5),
        terminal_price_p50: data.percentile(50),
        terminal_price_p95: data.percentile(95),
        protection_breach_rate: rate(BarrierEvents::PROTECTION_BREACHED),
        autocall_touch_rate: rate(BarrierEvents::AUTOCALL_TOUCHED),
        floored_rate: rate(BarrierEvents::FLOORED),
        mean_terminal_payoff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::get_scenario;

    fn market() -> MarketParameters {
        MarketParameters {
            spot_price: 150.0,
            volatility: 0.25,
            risk_free_rate: 0.04,
            maturity_years: 1.0,
            principal: 10_000.0,
        }
    }

    fn autocall() -> ProductSpec {
        ProductSpec::Autocall {
            autocall_barrier_pct: 110.0,
            coupon_rate_pct: 8.0,
            protection_barrier_pct: 60.0,
        }
    }

    #[test]
    fn test_ensemble_is_reproducible() {
        let cfg = EnsembleConfig {
            paths: 200,
            seed: 42,
        };
        let scenario = get_scenario("base").unwrap();
        let a = simulate_ensemble(autocall(), market(), scenario, &SimulationConfig::default(), &cfg)
            .unwrap();
        let b = simulate_ensemble(autocall(), market(), scenario, &SimulationConfig::default(), &cfg)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_summary_is_ordered_and_bounded() {
        let cfg = EnsembleConfig {
            paths: 500,
            seed: 7,
        };
        let summary = simulate_ensemble(
            autocall(),
            market(),
            get_scenario("volatile").unwrap(),
            &SimulationConfig::default(),
            &cfg,
        )
        .unwrap();

        assert_eq!(summary.paths, 500);
        assert_eq!(summary.steps, 252);
        assert!(summary.terminal_price_p05 <= summary.terminal_price_p50);
        assert!(summary.terminal_price_p50 <= summary.terminal_price_p95);
        assert!(summary.std_terminal_price > 0.0);
        for rate in [
            summary.protection_breach_rate,
            summary.autocall_touch_rate,
            summary.floored_rate,
        ] {
            assert!((0.0..=1.0).contains(&rate));
        }
        // Payoff lies between a full loss and principal plus coupon
        assert!(summary.mean_terminal_payoff > 0.0);
        assert!(summary.mean_terminal_payoff <= 10_800.0);
    }

    #[test]
    fn test_volatile_regime_disperses_more_than_base() {
        let cfg = EnsembleConfig {
            paths: 2_000,
            seed: 11,
        };
        let sim = SimulationConfig::default();
        let base =
            simulate_ensemble(autocall(), market(), get_scenario("base").unwrap(), &sim, &cfg)
                .unwrap();
        let volatile =
            simulate_ensemble(autocall(), market(), get_scenario("volatile").unwrap(), &sim, &cfg)
                .unwrap();
        assert!(volatile.std_terminal_price > base.std_terminal_price);
    }

    #[test]
    fn test_rejects_single_path() {
        let cfg = EnsembleConfig { paths: 1, seed: 0 };
        let err = simulate_ensemble(
            autocall(),
            market(),
            get_scenario("base").unwrap(),
            &SimulationConfig::default(),
            &cfg,
        )
        .unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
