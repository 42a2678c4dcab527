// src/models/model.rs
pub trait SDEModel {
    fn drift(&self, s: f64, t: f64) -> f64;
    fn diffusion(&self, s: f64, t: f64) -> f64;

    /// Lower bound applied to the state after every step, if any.
    fn floor(&self) -> Option<f64> {
        None
    }
}
