pub mod constants;
pub mod math_utils;
pub mod parameters;
pub mod derived;
pub mod models;
pub mod indicators;
pub mod sink;
pub mod simulation;
pub mod parameter_loader;

pub use derived::{DerivedState, derive_conditions};
pub use indicators::{IndicatorKind, IndicatorSet};
pub use parameters::ParameterVector;
pub use simulation::{SimProps, Simulation, compute_indicators};
