// src/models/mod.rs
pub mod gbm;
pub mod model;
