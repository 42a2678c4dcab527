// src/products/payoffs.rs
//! Payoff Rules at Maturity
//!
//! # Definitions
//!
//! With `S0` the initial spot, `S` the terminal price and `P` the principal:
//!
//! ## Autocall
//! - `S ≥ S0·ab`: `P·(1 + c)`, redeemed with coupon
//! - `S < S0·pb`: `P·S/S0`, coupon forfeited and capital lost pro rata
//! - otherwise: `P`
//!
//! ## Reverse Convertible
//! - `S ≥ S0·b`: `P + P·c`
//! - otherwise: `P·S/S0 + P·c`, the coupon is always paid
//!
//! ## Capital Protected
//! - `P + max(0, (S - S0)/S0 · P · participation)`
//!
//! ## Warrant
//! - `max(0, S - K)` (call) or `max(0, K - S)` (put), scaled by
//!   `leverage · WARRANT_CONTRACT_MULTIPLIER`
//!
//! # Implementation Notes
//!
//! A warrant's payoff is the terminal value of the position. The premium
//! paid is not subtracted, so it is not a net return.
//!
//! [`ProductSpec::payoff`] is the unchecked inner rule used in sampling
//! loops; [`evaluate_payoff`] validates its inputs first.

use super::product::{OptionType, ProductSpec};
use crate::error::{validation::validate_finite, SimResult};
use crate::market::MarketParameters;

/// Underlying units per warrant contract.
pub const WARRANT_CONTRACT_MULTIPLIER: f64 = 100.0;

impl ProductSpec {
    /// Payoff at maturity for a terminal underlying price.
    ///
    /// Performs no validation; a zero `spot_price` yields NaN or infinity
    /// for the percentage-based products.
    pub fn payoff(&self, market: &MarketParameters, terminal_price: f64) -> f64 {
        let s0 = market.spot_price;
        let s = terminal_price;
        let principal = market.principal;

        match *self {
            ProductSpec::Autocall {
                autocall_barrier_pct,
                coupon_rate_pct,
                protection_barrier_pct,
            } => {
                if s >= s0 * (autocall_barrier_pct / 100.0) {
                    principal * (1.0 + coupon_rate_pct / 100.0)
                } else if s < s0 * (protection_barrier_pct / 100.0) {
                    principal * (s / s0)
                } else {
                    principal
                }
            }

            ProductSpec::ReverseConvertible {
                coupon_rate_pct,
                barrier_pct,
            } => {
                let coupon = principal * (coupon_rate_pct / 100.0);
                if s >= s0 * (barrier_pct / 100.0) {
                    principal + coupon
                } else {
                    principal * (s / s0) + coupon
                }
            }

            ProductSpec::CapitalProtected {
                participation_rate_pct,
                ..
            } => {
                let participation = participation_rate_pct / 100.0;
                principal + ((s - s0) / s0 * principal * participation).max(0.0)
            }

            ProductSpec::Warrant {
                strike_price,
                option_type,
                leverage,
            } => {
                let intrinsic = match option_type {
                    OptionType::Call => (s - strike_price).max(0.0),
                    OptionType::Put => (strike_price - s).max(0.0),
                };
                intrinsic * leverage * WARRANT_CONTRACT_MULTIPLIER
            }
        }
    }
}

/// Validated payoff at maturity.
///
/// # Errors
///
/// Returns `SimError::InvalidParameters` for a non-positive spot, maturity
/// or principal, negative volatility, negative product terms, or a
/// non-finite terminal price.
pub fn evaluate_payoff(
    product: ProductSpec,
    market: MarketParameters,
    terminal_price: f64,
) -> SimResult<f64> {
    market.validate()?;
    product.validate()?;
    validate_finite("terminal_price", terminal_price)?;
    Ok(product.payoff(&market, terminal_price))
}
