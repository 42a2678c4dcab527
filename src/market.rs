// src/market.rs
//! Market inputs shared by the payoff curve and the path simulator.

use crate::error::{validation::*, SimResult};
use serde::{Deserialize, Serialize};

/// Trading days per year used to discretize a product's lifetime.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// User-entered market snapshot for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    pub spot_price: f64,     // Initial underlying price S0
    pub volatility: f64,     // Annualized volatility
    pub risk_free_rate: f64, // Continuously compounded, annualized
    pub maturity_years: f64, // Product lifetime
    pub principal: f64,      // Capital invested
}

impl MarketParameters {
    pub fn new(
        spot_price: f64,
        volatility: f64,
        risk_free_rate: f64,
        maturity_years: f64,
        principal: f64,
    ) -> SimResult<Self> {
        let market = MarketParameters {
            spot_price,
            volatility,
            risk_free_rate,
            maturity_years,
            principal,
        };
        market.validate()?;
        Ok(market)
    }

    /// Reject inputs that make barrier comparisons or path stepping degenerate.
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("spot_price", self.spot_price)?;
        validate_non_negative("volatility", self.volatility)?;
        validate_finite("risk_free_rate", self.risk_free_rate)?;
        validate_positive("maturity_years", self.maturity_years)?;
        validate_positive("principal", self.principal)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_valid_market() {
        let market = MarketParameters::new(150.0, 0.25, 0.04, 1.0, 10_000.0).unwrap();
        assert_eq!(market.spot_price, 150.0);
        assert_eq!(market.principal, 10_000.0);
    }

    #[test]
    fn test_negative_rate_is_allowed() {
        assert!(MarketParameters::new(100.0, 0.2, -0.005, 2.0, 1_000.0).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_spot() {
        match MarketParameters::new(0.0, 0.25, 0.04, 1.0, 10_000.0) {
            Err(SimError::InvalidParameters { parameter, .. }) => assert_eq!(parameter, "spot_price"),
            other => panic!("expected spot_price error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_volatility_and_zero_principal() {
        assert!(MarketParameters::new(100.0, -0.1, 0.04, 1.0, 10_000.0).is_err());
        assert!(MarketParameters::new(100.0, 0.2, 0.04, 1.0, 0.0).is_err());
        assert!(MarketParameters::new(100.0, 0.2, 0.04, -1.0, 100.0).is_err());
    }
}
