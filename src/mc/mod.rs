// src/mc/mod.rs
pub mod annotation;
pub mod ensemble;
pub mod path_simulator;

pub use annotation::{annotate_path, BarrierEvents, PathAnnotation};
pub use ensemble::{simulate_ensemble, EnsembleConfig, EnsembleSummary};
pub use path_simulator::{simulate, PathPoint, SimulatedPath, SimulationConfig};
