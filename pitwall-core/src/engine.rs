//! Race weekend orchestration.
//!
//! Ties the simulators together over injected reference data: resolves the
//! circuit and the named strategy, runs the grid, scores the chosen
//! strategy, and assembles the final report.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::SimulationConfig;
use crate::drivers::{DriverNumber, DriverRoster};
use crate::errors::SimulationError;
use crate::season;
use crate::sim::{LapSimulator, RaceSimulator, StrategyEvaluator, StrategyScore, TimingBoardEntry};
use crate::strategy::StrategyCatalog;
use crate::tires::TireModel;
use crate::track::{CircuitKey, Track, TrackCatalog};

/// Real-world classification row, displayed beside the simulation.
///
/// Pass-through data: never consumed by simulation math. The `time` field
/// stays a string because external feeds report leader-relative gaps and
/// statuses ("+5.430", "DNF") as well as absolute times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialResult {
    pub position: u32,
    pub driver_name: String,
    pub time: String,
}

/// Everything needed to simulate one race weekend.
#[derive(Debug, Clone)]
pub struct RaceRequest {
    pub circuit_key: CircuitKey,
    pub focus_driver: DriverNumber,
    /// Catalog name of the focus driver's strategy, matched case-insensitively
    pub strategy_name: String,
    pub grid: Vec<DriverNumber>,
    /// Optional real-world classification, passed through to the report
    pub official_results: Vec<OfficialResult>,
}

/// Outcome of a simulated race weekend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceReport {
    pub track: Track,
    pub timing_board: Vec<TimingBoardEntry>,
    /// Best sampled candidate time over the focus driver's sampled time,
    /// as a percentage. Zero when the grid was empty or the focus driver
    /// was not in it.
    pub strategy_accuracy: f64,
    pub official_results: Vec<OfficialResult>,
}

/// Orchestrates race simulation over injected reference data.
///
/// Reference tables are owned, immutable configuration; nothing here is a
/// global, so tests can substitute arbitrary fixtures.
pub struct RaceEngine {
    tires: TireModel,
    tracks: TrackCatalog,
    roster: DriverRoster,
    strategies: StrategyCatalog,
    config: SimulationConfig,
}

impl RaceEngine {
    /// Creates an engine from explicit reference data.
    pub fn new(
        tires: TireModel,
        tracks: TrackCatalog,
        roster: DriverRoster,
        strategies: StrategyCatalog,
        config: SimulationConfig,
    ) -> Self {
        Self {
            tires,
            tracks,
            roster,
            strategies,
            config,
        }
    }

    /// Creates an engine wired to the bundled season tables.
    pub fn with_season_defaults(config: SimulationConfig) -> Self {
        Self::new(
            season::tire_model(),
            season::track_catalog(),
            season::driver_roster(),
            season::strategy_catalog(),
            config,
        )
    }

    /// Returns the engine's tire model.
    pub fn tires(&self) -> &TireModel {
        &self.tires
    }

    /// Returns the engine's track catalog.
    pub fn tracks(&self) -> &TrackCatalog {
        &self.tracks
    }

    /// Returns the engine's driver roster.
    pub fn roster(&self) -> &DriverRoster {
        &self.roster
    }

    /// Returns the engine's strategy catalog.
    pub fn strategies(&self) -> &StrategyCatalog {
        &self.strategies
    }

    /// Simulates a full race weekend.
    ///
    /// Resolves the track and the named strategy before any simulation
    /// work, runs the grid with the full catalog as the random-assignment
    /// pool, then scores the focus driver's sampled time against the
    /// catalog. An empty grid is a reported condition, not an error: the
    /// report carries an empty board and zero accuracy.
    ///
    /// # Errors
    /// - `SimulationError::TrackNotFound` - Unknown circuit key
    /// - `SimulationError::StrategyNotFound` - Strategy name not in catalog
    /// - `SimulationError::InvalidStrategy` / `InvalidSchedule` - A plan
    ///   does not fit the tire model or race distance
    pub fn run_race<R: Rng + ?Sized>(
        &self,
        request: &RaceRequest,
        rng: &mut R,
    ) -> Result<RaceReport, SimulationError> {
        let track = self.tracks.track(request.circuit_key)?.clone();
        let chosen = self.strategies.find(&request.strategy_name)?.clone();

        info!(
            track = %track.name,
            laps = track.lap_count,
            strategy = %chosen.name,
            cars = request.grid.len(),
            "simulating race"
        );

        if request.grid.is_empty() {
            warn!("no drivers in the grid to simulate");
            return Ok(RaceReport {
                track,
                timing_board: Vec::new(),
                strategy_accuracy: 0.0,
                official_results: request.official_results.clone(),
            });
        }

        let candidates = self.strategies.plans();
        let race = RaceSimulator::new(&self.tires, &self.roster, &self.config);
        let timing_board = race.run(
            &track,
            &request.grid,
            request.focus_driver,
            &chosen.plan,
            &candidates,
            rng,
        )?;

        let strategy_accuracy = match timing_board
            .iter()
            .find(|entry| entry.car.car_number == request.focus_driver)
        {
            Some(entry) => {
                let evaluator = StrategyEvaluator::new(&self.tires, &self.config);
                evaluator.score(&track, &candidates, entry.car.total_time, rng)?
            }
            None => {
                warn!(
                    driver = %request.focus_driver,
                    "focus driver not in the grid, accuracy unavailable"
                );
                0.0
            }
        };

        Ok(RaceReport {
            track,
            timing_board,
            strategy_accuracy,
            official_results: request.official_results.clone(),
        })
    }

    /// Compares every cataloged strategy against a named one.
    ///
    /// The named strategy is sampled once to establish the baseline time,
    /// then the whole catalog is scored against it.
    ///
    /// # Errors
    /// - `SimulationError::TrackNotFound` - Unknown circuit key
    /// - `SimulationError::StrategyNotFound` - Strategy name not in catalog
    /// - `SimulationError::InvalidStrategy` / `InvalidSchedule` - A plan
    ///   does not fit the tire model or race distance
    pub fn compare_strategies<R: Rng + ?Sized>(
        &self,
        circuit_key: CircuitKey,
        strategy_name: &str,
        rng: &mut R,
    ) -> Result<Vec<StrategyScore>, SimulationError> {
        let track = self.tracks.track(circuit_key)?;
        let chosen = self.strategies.find(strategy_name)?;

        let simulator = LapSimulator::new(&self.tires, &self.config);
        let baseline = simulator
            .simulate(
                &chosen.plan,
                track.lap_count,
                self.config.pit_stop_penalty,
                rng,
            )?
            .total_time;

        info!(
            track = %track.name,
            strategy = %chosen.name,
            baseline,
            "comparing strategies"
        );

        let evaluator = StrategyEvaluator::new(&self.tires, &self.config);
        evaluator.compare(track, &self.strategies, baseline, rng)
    }
}
