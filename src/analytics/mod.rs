// src/analytics/mod.rs
pub mod curve;
pub mod quote;

pub use curve::{sample_curve, CurveConfig, CurveSummary, PayoffCurve, PayoffPoint};
pub use quote::PricingQuote;
