//! Pitwall Core - Lap-by-lap race simulation and strategy scoring
//!
//! This crate provides the fundamental building blocks for pit-strategy
//! analysis: a tire degradation model, immutable strategy plans, a per-car
//! lap simulator, a full-grid race simulator, and a strategy evaluator that
//! scores a chosen plan against a candidate set.

pub mod config;
pub mod drivers;
pub mod engine;
pub mod errors;
pub mod season;
pub mod sim;
pub mod strategy;
pub mod tires;
pub mod track;

// Re-export main types for convenient access
pub use config::SimulationConfig;
pub use drivers::{DriverNumber, DriverRoster};
pub use engine::{OfficialResult, RaceEngine, RaceReport, RaceRequest};
pub use errors::SimulationError;
pub use sim::{
    CarResult, LapSimulator, RaceSimulator, RaceTime, StrategyEvaluator, StrategyScore,
    TimingBoardEntry,
};
pub use strategy::{NamedStrategy, StrategyCatalog, StrategyPlan};
pub use tires::{TireCompound, TireModel};
pub use track::{CircuitKey, Track, TrackCatalog};

pub type Result<T> = std::result::Result<T, SimulationError>;
