// src/mc/annotation.rs
//! Barrier annotations for simulated paths.
//!
//! Marks which reference lines a path crossed and on which day it first did.
//! Protection is breached strictly below the line; the autocall line is
//! touched at or above it, matching [`crosses_below`]/[`crosses_above`].
//!
//! [`crosses_below`]: crate::products::barrier::crosses_below
//! [`crosses_above`]: crate::products::barrier::crosses_above

use super::path_simulator::SimulatedPath;
use crate::models::gbm::PRICE_FLOOR;
use crate::products::barrier::is_below;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Events seen along a path.
    ///
    /// `PROTECTION_BREACHED` means a price strictly below the protection
    /// line. For warrants that line is the strike, so the flag marks a call
    /// out of the money but a put in the money.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BarrierEvents: u32 {
        const NONE                = 0;
        const PROTECTION_BREACHED = 1 << 0;
        const AUTOCALL_TOUCHED    = 1 << 1;
        const FLOORED             = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathAnnotation {
    pub events: BarrierEvents,
    pub first_protection_breach: Option<usize>,
    pub first_autocall_touch: Option<usize>,
    pub terminal_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

/// Scan a path once and record its barrier events.
///
/// Day 0 is the initial spot and is scanned like any other day, so an
/// autocall line at 100% of spot is touched on day 0. A floored day is one
/// after day 0 whose price sits exactly on the floor.
pub fn annotate_path(path: &SimulatedPath) -> PathAnnotation {
    let mut events = BarrierEvents::NONE;
    let mut first_protection_breach = None;
    let mut first_autocall_touch = None;
    let mut min_price = f64::INFINITY;
    let mut max_price = f64::NEG_INFINITY;

    for point in path {
        let price = point.simulated_price;
        min_price = min_price.min(price);
        max_price = max_price.max(price);

        if first_protection_breach.is_none() && is_below(price, point.protection_barrier_price) {
            first_protection_breach = Some(point.day_index);
            events |= BarrierEvents::PROTECTION_BREACHED;
        }
        if let Some(autocall_line) = point.autocall_barrier_price {
            if first_autocall_touch.is_none() && !is_below(price, autocall_line) {
                first_autocall_touch = Some(point.day_index);
                events |= BarrierEvents::AUTOCALL_TOUCHED;
            }
        }
        if point.day_index > 0 && price == PRICE_FLOOR {
            events |= BarrierEvents::FLOORED;
        }
    }

    PathAnnotation {
        events,
        first_protection_breach,
        first_autocall_touch,
        terminal_price: path.terminal_price(),
        min_price,
        max_price,
    }
}
