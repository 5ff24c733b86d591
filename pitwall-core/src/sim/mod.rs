//! Race simulation: per-car lap loop, full-grid runs, strategy scoring.

pub mod evaluator;
pub mod lap;
pub mod race;

use serde::Serialize;

pub use evaluator::{StrategyEvaluator, StrategyScore};
pub use lap::LapSimulator;
pub use race::RaceSimulator;

use crate::drivers::DriverNumber;
use crate::strategy::StrategyPlan;

/// Outcome of simulating one car over a full race distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaceTime {
    /// Sum of all lap times plus pit stop penalties, in seconds
    pub total_time: f64,
    /// Fastest single lap, in seconds
    pub fastest_lap: f64,
}

/// Simulated result for one car of a grid run.
///
/// Produced once per simulation run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarResult {
    pub car_number: DriverNumber,
    pub driver_name: String,
    pub pit_stops: u32,
    pub fastest_lap: f64,
    pub total_time: f64,
    /// The plan this car raced, fixed for the focus driver and randomly
    /// assigned for the rest of the field
    pub strategy: StrategyPlan,
}

/// A car result with its 1-based rank on the timing board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingBoardEntry {
    pub position: u32,
    pub car: CarResult,
}
