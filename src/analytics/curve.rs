// src/analytics/curve.rs
//! Payoff-vs-spot curves for plotting.
//!
//! A curve restates the contract terms over a grid of terminal prices
//! `S = S0 · m`, with `m` running from `lower_mult` to `upper_mult` by `step`.
//! It is illustrative only and has no bearing on the fair value quoted by
//! the pricing service (see [`crate::analytics::quote`]).

use crate::error::{validation::*, SimError, SimResult};
use crate::market::MarketParameters;
use crate::math_utils::linear_root;
use crate::products::ProductSpec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Slack on the grid size so that e.g. 0.5..=1.5 by 0.05 keeps its last point.
const GRID_TOLERANCE: f64 = 1e-9;

/// Largest grid `sample_curve` accepts.
pub const MAX_GRID_POINTS: usize = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub lower_mult: f64,
    pub upper_mult: f64,
    pub step: f64,
}

impl CurveConfig {
    pub fn validate(&self) -> SimResult<()> {
        validate_non_negative("lower_mult", self.lower_mult)?;
        validate_finite("upper_mult", self.upper_mult)?;
        validate_positive("step", self.step)?;
        if self.upper_mult < self.lower_mult {
            return Err(SimError::InvalidConfiguration {
                field: "upper_mult".to_string(),
                reason: format!(
                    "upper multiplier {} is below lower multiplier {}",
                    self.upper_mult, self.lower_mult
                ),
            });
        }
        let points = self.point_count();
        if !points.is_finite() || points > MAX_GRID_POINTS as f64 {
            return Err(SimError::InvalidConfiguration {
                field: "step".to_string(),
                reason: format!("grid exceeds maximum allowed ({} points)", MAX_GRID_POINTS),
            });
        }
        Ok(())
    }

    /// Number of grid points, `floor((upper - lower) / step) + 1`.
    ///
    /// Zero for a grid that `validate` would reject as inverted or malformed.
    pub fn len(&self) -> usize {
        let points = self.point_count();
        if points.is_finite() && points >= 1.0 {
            points as usize
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn point_count(&self) -> f64 {
        ((self.upper_mult - self.lower_mult) / self.step + GRID_TOLERANCE).floor() + 1.0
    }

    /// Spot multiplier of grid point `i`.
    #[inline]
    pub fn multiplier(&self, i: usize) -> f64 {
        self.lower_mult + i as f64 * self.step
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        CurveConfig {
            lower_mult: 0.5,
            upper_mult: 1.5,
            step: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    pub underlying_price: f64,
    pub payoff_amount: f64,
    pub profit_amount: f64, // payoff_amount - principal
}

/// A validated, lazily evaluated payoff curve.
///
/// Nothing is computed until the curve is iterated; each call to
/// [`PayoffCurve::iter`] restarts from the lowest price.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoffCurve {
    product: ProductSpec,
    market: MarketParameters,
    config: CurveConfig,
}

impl PayoffCurve {
    pub fn iter(&self) -> CurveIter<'_> {
        CurveIter {
            curve: self,
            index: 0,
            len: self.config.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.config.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn product(&self) -> &ProductSpec {
        &self.product
    }

    pub fn to_vec(&self) -> Vec<PayoffPoint> {
        self.iter().collect()
    }

    /// Extremes and break-even of the sampled curve
    ///
    /// `break_even` is the first underlying price at which profit turns
    /// from negative to non-negative, interpolated linearly between the two
    /// neighbouring samples. It is `None` when the sampled range never
    /// crosses from loss into profit.
    pub fn summary(&self) -> CurveSummary {
        let mut min_payoff = f64::INFINITY;
        let mut max_payoff = f64::NEG_INFINITY;
        let mut min_profit = f64::INFINITY;
        let mut max_profit = f64::NEG_INFINITY;
        let mut break_even = None;
        let mut previous: Option<PayoffPoint> = None;

        for point in self.iter() {
            min_payoff = min_payoff.min(point.payoff_amount);
            max_payoff = max_payoff.max(point.payoff_amount);
            min_profit = min_profit.min(point.profit_amount);
            max_profit = max_profit.max(point.profit_amount);

            if let Some(prev) = previous {
                if break_even.is_none() && prev.profit_amount < 0.0 && point.profit_amount >= 0.0 {
                    break_even = Some(linear_root(
                        (prev.underlying_price, prev.profit_amount),
                        (point.underlying_price, point.profit_amount),
                    ));
                }
            }
            previous = Some(point);
        }

        CurveSummary {
            min_payoff,
            max_payoff,
            max_profit,
            max_loss: (-min_profit).max(0.0),
            break_even,
        }
    }
}

impl<'a> IntoIterator for &'a PayoffCurve {
    type Item = PayoffPoint;
    type IntoIter = CurveIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`PayoffCurve`], lowest price first.
#[derive(Clone, Debug)]
pub struct CurveIter<'a> {
    curve: &'a PayoffCurve,
    index: usize,
    len: usize,
}

impl Iterator for CurveIter<'_> {
    type Item = PayoffPoint;

    fn next(&mut self) -> Option<PayoffPoint> {
        if self.index >= self.len {
            return None;
        }
        let curve = self.curve;
        let underlying_price = curve.market.spot_price * curve.config.multiplier(self.index);
        let payoff_amount = curve.product.payoff(&curve.market, underlying_price);
        if !payoff_amount.is_finite() {
            warn!(
                product = %curve.product.kind(),
                underlying_price,
                payoff_amount,
                "numeric degeneracy: sampled payoff is not finite"
            );
        }
        self.index += 1;
        Some(PayoffPoint {
            underlying_price,
            payoff_amount,
            profit_amount: payoff_amount - curve.market.principal,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveIter<'_> {}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    pub min_payoff: f64,
    pub max_payoff: f64,
    pub max_profit: f64,
    pub max_loss: f64,
    pub break_even: Option<f64>,
}

/// Sample a product's payoff over a grid of terminal prices
///
/// # Errors
///
/// Returns `SimError::InvalidParameters` for invalid market data or product
/// terms and `SimError::InvalidConfiguration` for a malformed grid.
pub fn sample_curve(
    product: ProductSpec,
    market: MarketParameters,
    config: &CurveConfig,
) -> SimResult<PayoffCurve> {
    market.validate()?;
    product.validate()?;
    config.validate()?;

    debug!(
        product = %product.kind(),
        points = config.len(),
        lower_mult = config.lower_mult,
        upper_mult = config.upper_mult,
        "sampling payoff curve"
    );

    Ok(PayoffCurve {
        product,
        market,
        config: *config,
    })
}
