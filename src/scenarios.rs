// src/scenarios.rs
//! Market-regime presets for the path simulator.
//!
//! A preset scales the risk-free drift and the volatility of the simulated
//! underlying. The catalog is a fixed table; presets are never mutated.

use crate::error::{SimError, SimResult};
use serde::Serialize;

/// A named market regime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScenarioPreset {
    pub id: &'static str,
    pub label: &'static str,
    pub drift_multiplier: f64,
    pub volatility_multiplier: f64,
}

static PRESETS: [ScenarioPreset; 4] = [
    ScenarioPreset {
        id: "bullish",
        label: "Bullish",
        drift_multiplier: 1.3,
        volatility_multiplier: 1.0,
    },
    ScenarioPreset {
        id: "base",
        label: "Base",
        drift_multiplier: 1.0,
        volatility_multiplier: 1.0,
    },
    ScenarioPreset {
        id: "bearish",
        label: "Bearish",
        drift_multiplier: 0.7,
        volatility_multiplier: 1.0,
    },
    ScenarioPreset {
        id: "volatile",
        label: "Volatile",
        drift_multiplier: 1.0,
        volatility_multiplier: 1.5,
    },
];

/// Lookup over the fixed preset table.
pub struct ScenarioCatalog;

impl ScenarioCatalog {
    /// All presets in display order.
    pub fn all() -> &'static [ScenarioPreset] {
        &PRESETS
    }

    /// The preset used when the caller has not picked one.
    pub fn base() -> &'static ScenarioPreset {
        &PRESETS[1]
    }

    /// Look up a preset by exact id.
    pub fn get(id: &str) -> SimResult<&'static ScenarioPreset> {
        PRESETS
            .iter()
            .find(|preset| preset.id == id)
            .ok_or_else(|| SimError::UnknownScenario {
                id: id.to_string(),
                known: PRESETS
                    .iter()
                    .map(|preset| preset.id)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Look up a scenario preset by id.
pub fn get_scenario(id: &str) -> SimResult<&'static ScenarioPreset> {
    ScenarioCatalog::get(id)
}
