//! Full-grid race simulation and timing board assembly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::lap::LapSimulator;
use super::{CarResult, TimingBoardEntry};
use crate::config::SimulationConfig;
use crate::drivers::{DriverNumber, DriverRoster};
use crate::errors::SimulationError;
use crate::strategy::StrategyPlan;
use crate::tires::TireModel;
use crate::track::Track;

/// Strategy and seed assigned to one car before its laps are simulated.
///
/// Each car gets a private ChaCha8 stream derived from its assignment seed,
/// so per-car simulations have no data dependency on one another and the
/// optional parallel path produces a board bit-identical to the sequential
/// reference semantics.
struct CarAssignment<'a> {
    number: DriverNumber,
    plan: &'a StrategyPlan,
    seed: u64,
}

/// Simulates a whole field of cars and ranks the outcomes.
///
/// The focus driver races a fixed plan; every other car draws a plan
/// uniformly at random from the candidate set, independently per car.
pub struct RaceSimulator<'a> {
    simulator: LapSimulator<'a>,
    roster: &'a DriverRoster,
    pit_stop_penalty: f64,
}

impl<'a> RaceSimulator<'a> {
    /// Creates a race simulator over shared reference data.
    pub fn new(tires: &'a TireModel, roster: &'a DriverRoster, config: &SimulationConfig) -> Self {
        Self {
            simulator: LapSimulator::new(tires, config),
            roster,
            pit_stop_penalty: config.pit_stop_penalty,
        }
    }

    /// Runs the grid and returns the ranked timing board.
    ///
    /// Results are stable-sorted ascending by total time, so ties preserve
    /// grid order, and positions are assigned 1-based. An empty grid yields
    /// an empty board. Any per-car validation failure aborts the whole run;
    /// partial boards are never returned.
    ///
    /// # Errors
    /// - `SimulationError::InvalidStrategy` - A non-focus car needs a plan
    ///   but the candidate set is empty, or a plan names an unknown compound
    /// - `SimulationError::InvalidSchedule` - A plan's pit laps do not fit
    ///   the race distance
    pub fn run<R: Rng + ?Sized>(
        &self,
        track: &Track,
        grid: &[DriverNumber],
        focus_driver: DriverNumber,
        focus_plan: &StrategyPlan,
        candidates: &[StrategyPlan],
        rng: &mut R,
    ) -> Result<Vec<TimingBoardEntry>, SimulationError> {
        let mut assignments = Vec::with_capacity(grid.len());
        for &number in grid {
            let plan = if number == focus_driver {
                focus_plan
            } else {
                if candidates.is_empty() {
                    return Err(SimulationError::InvalidStrategy {
                        reason: "no candidate strategies to assign".to_string(),
                    });
                }
                &candidates[rng.random_range(0..candidates.len())]
            };
            assignments.push(CarAssignment {
                number,
                plan,
                seed: rng.random(),
            });
        }

        #[cfg(feature = "parallel")]
        let cars: Result<Vec<CarResult>, SimulationError> = assignments
            .par_iter()
            .map(|assignment| self.simulate_car(assignment, track.lap_count))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let cars: Result<Vec<CarResult>, SimulationError> = assignments
            .iter()
            .map(|assignment| self.simulate_car(assignment, track.lap_count))
            .collect();
        let mut cars = cars?;

        // Vec::sort_by is stable: equal times keep grid order.
        cars.sort_by(|a, b| a.total_time.total_cmp(&b.total_time));

        Ok(cars
            .into_iter()
            .enumerate()
            .map(|(index, car)| TimingBoardEntry {
                position: index as u32 + 1,
                car,
            })
            .collect())
    }

    fn simulate_car(
        &self,
        assignment: &CarAssignment<'_>,
        lap_count: u32,
    ) -> Result<CarResult, SimulationError> {
        let mut car_rng = ChaCha8Rng::seed_from_u64(assignment.seed);
        let time = self
            .simulator
            .simulate(assignment.plan, lap_count, self.pit_stop_penalty, &mut car_rng)?;

        debug!(
            car = %assignment.number,
            total_time = time.total_time,
            fastest_lap = time.fastest_lap,
            "car simulated"
        );

        Ok(CarResult {
            car_number: assignment.number,
            driver_name: self.roster.display_name(assignment.number).to_string(),
            pit_stops: assignment.plan.pit_stops(),
            fastest_lap: time.fastest_lap,
            total_time: time.total_time,
            strategy: assignment.plan.clone(),
        })
    }
}
