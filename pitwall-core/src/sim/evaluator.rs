//! Strategy scoring against a candidate set.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use super::RaceTime;
use super::lap::LapSimulator;
use crate::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::strategy::{StrategyCatalog, StrategyPlan};
use crate::tires::TireModel;
use crate::track::Track;

/// One row of a strategy comparison report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyScore {
    pub name: String,
    pub plan: StrategyPlan,
    pub total_time: f64,
    pub fastest_lap: f64,
    /// Gap to the baseline time, in seconds (negative is faster)
    pub delta: f64,
    /// Gap to the baseline time as a percentage of it
    pub delta_percent: f64,
}

/// Scores a chosen strategy against a candidate set.
///
/// Candidates are simulated for the focal driver alone, not as part of a
/// grid. Structurally equal plans count as one candidate: they are
/// simulated once and the sample is reused. Scores are single-sample
/// estimates of a stochastic process; pass a seeded generator to make a
/// full evaluation reproducible.
pub struct StrategyEvaluator<'a> {
    simulator: LapSimulator<'a>,
    pit_stop_penalty: f64,
}

impl<'a> StrategyEvaluator<'a> {
    /// Creates an evaluator over the given tire model.
    pub fn new(tires: &'a TireModel, config: &SimulationConfig) -> Self {
        Self {
            simulator: LapSimulator::new(tires, config),
            pit_stop_penalty: config.pit_stop_penalty,
        }
    }

    /// Scores a chosen race time against the best sampled candidate.
    ///
    /// Returns `optimal_time / chosen_time * 100`: 100% means the chosen
    /// strategy already achieves the best sampled time among the
    /// candidates, below 100% means some candidate sampled lower. A
    /// non-positive `chosen_time` yields 0.0 by policy (undefined ratio).
    ///
    /// # Errors
    /// - `SimulationError::InvalidStrategy` - The candidate set is empty,
    ///   or a candidate names an unknown compound
    /// - `SimulationError::InvalidSchedule` - A candidate's pit laps do not
    ///   fit the race distance
    pub fn score<R: Rng + ?Sized>(
        &self,
        track: &Track,
        candidates: &[StrategyPlan],
        chosen_time: f64,
        rng: &mut R,
    ) -> Result<f64, SimulationError> {
        if candidates.is_empty() {
            return Err(SimulationError::InvalidStrategy {
                reason: "no candidate strategies to evaluate".to_string(),
            });
        }
        if chosen_time <= 0.0 {
            warn!(chosen_time, "non-positive chosen time, accuracy unavailable");
            return Ok(0.0);
        }

        let mut cache: HashMap<&StrategyPlan, f64> = HashMap::new();
        let mut optimal_time = f64::INFINITY;
        for plan in candidates {
            let total_time = match cache.get(plan) {
                Some(&cached) => cached,
                None => {
                    let time =
                        self.simulator
                            .simulate(plan, track.lap_count, self.pit_stop_penalty, rng)?;
                    cache.insert(plan, time.total_time);
                    time.total_time
                }
            };
            optimal_time = optimal_time.min(total_time);
        }

        debug!(optimal_time, chosen_time, "strategy scored");
        Ok(optimal_time / chosen_time * 100.0)
    }

    /// Simulates every cataloged strategy once and reports each against a
    /// baseline time, rows sorted ascending by total time.
    ///
    /// # Errors
    /// - `SimulationError::InvalidStrategy` - The catalog is empty or the
    ///   baseline time is not positive
    /// - `SimulationError::InvalidSchedule` - A cataloged plan's pit laps
    ///   do not fit the race distance
    pub fn compare<R: Rng + ?Sized>(
        &self,
        track: &Track,
        catalog: &StrategyCatalog,
        baseline_time: f64,
        rng: &mut R,
    ) -> Result<Vec<StrategyScore>, SimulationError> {
        if catalog.is_empty() {
            return Err(SimulationError::InvalidStrategy {
                reason: "no cataloged strategies to compare".to_string(),
            });
        }
        if baseline_time <= 0.0 {
            return Err(SimulationError::InvalidStrategy {
                reason: format!("baseline time must be positive, got {baseline_time}"),
            });
        }

        let mut cache: HashMap<&StrategyPlan, RaceTime> = HashMap::new();
        let mut rows = Vec::with_capacity(catalog.len());
        for strategy in catalog.iter() {
            let time = match cache.get(&strategy.plan) {
                Some(&cached) => cached,
                None => {
                    let time = self.simulator.simulate(
                        &strategy.plan,
                        track.lap_count,
                        self.pit_stop_penalty,
                        rng,
                    )?;
                    cache.insert(&strategy.plan, time);
                    time
                }
            };
            let delta = time.total_time - baseline_time;
            rows.push(StrategyScore {
                name: strategy.name.clone(),
                plan: strategy.plan.clone(),
                total_time: time.total_time,
                fastest_lap: time.fastest_lap,
                delta,
                delta_percent: delta / baseline_time * 100.0,
            });
        }

        rows.sort_by(|a, b| a.total_time.total_cmp(&b.total_time));
        Ok(rows)
    }
}
