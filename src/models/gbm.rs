// src/models/gbm.rs
use super::model::SDEModel;
use crate::market::MarketParameters;
use crate::scenarios::ScenarioPreset;

/// Simulated prices never fall below one currency unit.
pub const PRICE_FLOOR: f64 = 1.0;

/// Geometric Brownian motion with regime-scaled drift and volatility.
///
/// ```text
/// dS_t = μ S_t dt + σ S_t dW_t,   μ = r·m_drift,   σ = σ_market·m_vol
/// ```
///
/// Discrete states are floored at [`PRICE_FLOOR`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    pub fn from_scenario(market: &MarketParameters, scenario: &ScenarioPreset) -> Self {
        Gbm::new(
            market.risk_free_rate * scenario.drift_multiplier,
            market.volatility * scenario.volatility_multiplier,
        )
    }
}

impl SDEModel for Gbm {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s
    }

    fn floor(&self) -> Option<f64> {
        Some(PRICE_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::get_scenario;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_scenario_scales_drift_and_vol() {
        let market = MarketParameters {
            spot_price: 150.0,
            volatility: 0.25,
            risk_free_rate: 0.04,
            maturity_years: 1.0,
            principal: 10_000.0,
        };
        let gbm = Gbm::from_scenario(&market, get_scenario("volatile").unwrap());
        assert_relative_eq!(gbm.mu, 0.04, epsilon = 1e-12);
        assert_relative_eq!(gbm.sigma, 0.375, epsilon = 1e-12);

        let bearish = Gbm::from_scenario(&market, get_scenario("bearish").unwrap());
        assert_relative_eq!(bearish.mu, 0.028, epsilon = 1e-12);
    }

    #[test]
    fn test_coefficients_are_proportional_to_state() {
        let gbm = Gbm::new(0.05, 0.2);
        assert_relative_eq!(gbm.drift(200.0, 0.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(gbm.diffusion(200.0, 0.0), 40.0, epsilon = 1e-12);
        assert_eq!(gbm.floor(), Some(PRICE_FLOOR));
    }
}
