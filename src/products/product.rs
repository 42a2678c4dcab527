// src/products/product.rs
//! Structured product definitions.
//!
//! Each product family carries only the terms its payoff rule reads.
//! Percentage terms are quoted relative to the initial spot price, so a
//! `barrier_pct` of 60 means a barrier at 60% of `spot_price`.

use super::barrier::barrier_level;
use crate::error::{validation::*, SimResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a warrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

/// Product family tag, shared with the pricing service payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Autocall,
    ReverseConvertible,
    CapitalProtected,
    Warrant,
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductKind::Autocall => "autocall",
            ProductKind::ReverseConvertible => "reverse_convertible",
            ProductKind::CapitalProtected => "capital_protected",
            ProductKind::Warrant => "warrant",
        };
        f.write_str(name)
    }
}

/// A structured product's contract terms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "product_type", rename_all = "snake_case")]
pub enum ProductSpec {
    /// Autocall / Phoenix: coupon if the underlying ends at or above the
    /// autocall barrier, capital at risk below the protection barrier.
    Autocall {
        autocall_barrier_pct: f64,
        coupon_rate_pct: f64,
        protection_barrier_pct: f64,
    },

    /// Reverse convertible: coupon always paid, capital converts below the barrier.
    ReverseConvertible { coupon_rate_pct: f64, barrier_pct: f64 },

    /// Capital protected note: principal back plus a share of the upside.
    CapitalProtected {
        protection_level_pct: f64,
        participation_rate_pct: f64,
    },

    /// Leveraged warrant on an absolute strike.
    Warrant {
        strike_price: f64,
        option_type: OptionType,
        leverage: f64,
    },
}

impl ProductSpec {
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductSpec::Autocall { .. } => ProductKind::Autocall,
            ProductSpec::ReverseConvertible { .. } => ProductKind::ReverseConvertible,
            ProductSpec::CapitalProtected { .. } => ProductKind::CapitalProtected,
            ProductSpec::Warrant { .. } => ProductKind::Warrant,
        }
    }

    /// Validate contract terms: every term finite and non-negative.
    pub fn validate(&self) -> SimResult<()> {
        match *self {
            ProductSpec::Autocall {
                autocall_barrier_pct,
                coupon_rate_pct,
                protection_barrier_pct,
            } => {
                validate_non_negative("autocall_barrier_pct", autocall_barrier_pct)?;
                validate_non_negative("coupon_rate_pct", coupon_rate_pct)?;
                validate_non_negative("protection_barrier_pct", protection_barrier_pct)?;
            }
            ProductSpec::ReverseConvertible {
                coupon_rate_pct,
                barrier_pct,
            } => {
                validate_non_negative("coupon_rate_pct", coupon_rate_pct)?;
                validate_non_negative("barrier_pct", barrier_pct)?;
            }
            ProductSpec::CapitalProtected {
                protection_level_pct,
                participation_rate_pct,
            } => {
                validate_non_negative("protection_level_pct", protection_level_pct)?;
                validate_non_negative("participation_rate_pct", participation_rate_pct)?;
            }
            ProductSpec::Warrant {
                strike_price,
                leverage,
                ..
            } => {
                validate_non_negative("strike_price", strike_price)?;
                validate_non_negative("leverage", leverage)?;
            }
        }
        Ok(())
    }

    /// Reference line drawn under simulated paths.
    ///
    /// Autocalls and reverse convertibles use their capital barrier, capital
    /// protected notes their protection level. Warrants have no percentage
    /// barrier, so the strike is used: below it a call is out of the money
    /// and a put is in the money.
    pub fn protection_barrier_price(&self, spot_price: f64) -> f64 {
        match *self {
            ProductSpec::Autocall {
                protection_barrier_pct,
                ..
            } => barrier_level(protection_barrier_pct, spot_price),
            ProductSpec::ReverseConvertible { barrier_pct, .. } => {
                barrier_level(barrier_pct, spot_price)
            }
            ProductSpec::CapitalProtected {
                protection_level_pct,
                ..
            } => barrier_level(protection_level_pct, spot_price),
            ProductSpec::Warrant { strike_price, .. } => strike_price,
        }
    }

    /// Early-redemption line, defined only for autocalls.
    pub fn autocall_barrier_price(&self, spot_price: f64) -> Option<f64> {
        match *self {
            ProductSpec::Autocall {
                autocall_barrier_pct,
                ..
            } => Some(barrier_level(autocall_barrier_pct, spot_price)),
            _ => None,
        }
    }
}
