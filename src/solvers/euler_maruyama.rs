// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The scheme advances the state by
//! ```text
//! X_{n+1} = max(floor, X_n + a(X_n, t_n) Δt + b(X_n, t_n) √Δt ε_n)
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `ε_n` are independent shocks drawn from a [`ShockDistribution`]
//! - `floor` is the model's lower bound, when it has one

use crate::models::model::SDEModel;
use crate::rng::ShockDistribution;
use rand::Rng;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Single step driven by a freshly drawn shock
    ///
    /// # Parameters
    /// - `model`: SDE model providing drift, diffusion and floor
    /// - `s`: Current state (modified in-place)
    /// - `t`: Current time
    /// - `dt`: Time step size
    /// - `shock`: Law of the random shock
    /// - `rng`: Random number generator
    pub fn step<M: SDEModel, R: Rng + ?Sized>(
        model: &M,
        s: &mut f64,
        t: f64,
        dt: f64,
        shock: ShockDistribution,
        rng: &mut R,
    ) {
        let draw = shock.sample(rng);
        Self::step_with_shock(model, s, t, dt, draw);
    }

    /// Single step for a given shock value
    pub fn step_with_shock<M: SDEModel>(model: &M, s: &mut f64, t: f64, dt: f64, draw: f64) {
        let drift_term = model.drift(*s, t) * dt;
        let diffusion_term = model.diffusion(*s, t) * dt.sqrt() * draw;
        *s += drift_term + diffusion_term;
        if let Some(floor) = model.floor() {
            *s = (*s).max(floor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gbm::{Gbm, PRICE_FLOOR};
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_shock_is_pure_drift() {
        let gbm = Gbm::new(0.04, 0.25);
        let mut s = 150.0;
        EulerMaruyama::step_with_shock(&gbm, &mut s, 0.0, 1.0 / 252.0, 0.0);
        assert_relative_eq!(s, 150.0 * (1.0 + 0.04 / 252.0), epsilon = 1e-12);
    }

    #[test]
    fn test_unit_shock() {
        let gbm = Gbm::new(0.0, 0.5);
        let mut s = 100.0;
        let dt: f64 = 0.25;
        EulerMaruyama::step_with_shock(&gbm, &mut s, 0.0, dt, 1.0);
        assert_relative_eq!(s, 100.0 * (1.0 + 0.5 * dt.sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn test_large_negative_shock_hits_floor() {
        // σ√dt = 2, so a shock of -1 would take the state to -100
        let gbm = Gbm::new(0.0, 2.0);
        let mut s = 100.0;
        EulerMaruyama::step_with_shock(&gbm, &mut s, 0.0, 1.0, -1.0);
        assert_eq!(s, PRICE_FLOOR);
    }
}
