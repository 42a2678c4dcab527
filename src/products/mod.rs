// src/products/mod.rs
pub mod barrier;
pub mod payoffs;
pub mod product;

pub use payoffs::{evaluate_payoff, WARRANT_CONTRACT_MULTIPLIER};
pub use product::{OptionType, ProductKind, ProductSpec};
