//! Integration tests for the race engine.
//!
//! These tests verify the complete race weekend workflow through the public
//! RaceEngine API, including reference-data resolution, grid simulation,
//! timing board assembly, and strategy scoring.

use pitwall_core::config::SimulationConfig;
use pitwall_core::drivers::{DriverNumber, DriverRoster};
use pitwall_core::engine::{OfficialResult, RaceEngine, RaceRequest};
use pitwall_core::errors::SimulationError;
use pitwall_core::season;
use pitwall_core::strategy::{NamedStrategy, StrategyCatalog, StrategyPlan};
use pitwall_core::tires::{TireCompound, TireModel};
use pitwall_core::track::{CircuitKey, Track, TrackCatalog};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Test fixture for engine integration tests using the public API.
struct EngineTestFixture {
    engine: RaceEngine,
}

impl EngineTestFixture {
    /// Creates a fixture over the bundled season tables.
    fn new() -> Self {
        Self {
            engine: RaceEngine::with_season_defaults(SimulationConfig::default()),
        }
    }

    /// Creates a fixture with zero lap-time variation and a single-entry
    /// catalog, so every simulated time is a closed-form sum.
    fn new_deterministic() -> Self {
        let tires = TireModel::new(vec![
            TireCompound::new("soft", 95.0, 0.17, 12),
            TireCompound::new("medium", 95.8, 0.10, 20),
            TireCompound::new("hard", 96.8, 0.07, 35),
        ]);
        let tracks = TrackCatalog::new(vec![Track::new(
            CircuitKey::new(63),
            "Bahrain International Circuit",
            3.363,
            57,
        )]);
        let roster = DriverRoster::new(vec![(DriverNumber::new(44), "Lewis Hamilton")]);
        let strategies = StrategyCatalog::new(vec![NamedStrategy::new(
            "Defensive",
            StrategyPlan::new("soft", vec![20], vec!["hard"]),
        )]);

        Self {
            engine: RaceEngine::new(
                tires,
                tracks,
                roster,
                strategies,
                SimulationConfig::for_testing(),
            ),
        }
    }

    fn request(&self, grid: Vec<DriverNumber>) -> RaceRequest {
        RaceRequest {
            circuit_key: CircuitKey::new(63),
            focus_driver: DriverNumber::new(44),
            strategy_name: "Defensive".to_string(),
            grid,
            official_results: Vec::new(),
        }
    }
}

/// Closed-form total for the reference scenario: soft until the lap-20
/// stop, the penalty, then hard for the rest of the 57 laps.
fn defensive_closed_form() -> f64 {
    let mut expected = 0.0;
    for wear in 0..19u32 {
        expected += 95.0 + f64::from(wear) * 0.17;
    }
    expected += 22.0;
    for wear in 0..38u32 {
        expected += 96.8 + f64::from(wear) * 0.07;
    }
    expected
}

#[test]
fn test_closed_form_race_total() {
    let fixture = EngineTestFixture::new_deterministic();
    let request = fixture.request(vec![DriverNumber::new(44)]);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let report = fixture.engine.run_race(&request, &mut rng).unwrap();

    assert_eq!(report.timing_board.len(), 1);
    let car = &report.timing_board[0].car;
    assert_eq!(car.total_time, defensive_closed_form());
    assert_eq!(car.fastest_lap, 95.0);
    assert_eq!(car.pit_stops, 1);
    assert_eq!(car.driver_name, "Lewis Hamilton");
}

#[test]
fn test_chosen_strategy_scores_full_accuracy_against_itself() {
    // The single-entry catalog makes the chosen plan its own optimum.
    let fixture = EngineTestFixture::new_deterministic();
    let request = fixture.request(vec![DriverNumber::new(44)]);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let report = fixture.engine.run_race(&request, &mut rng).unwrap();
    assert_eq!(report.strategy_accuracy, 100.0);
}

#[test]
fn test_same_seed_reproduces_the_report() {
    let fixture = EngineTestFixture::new();
    let grid = season::driver_roster().numbers();
    let request = fixture.request(grid);

    let mut rng_a = ChaCha8Rng::seed_from_u64(7);
    let mut rng_b = ChaCha8Rng::seed_from_u64(7);
    let report_a = fixture.engine.run_race(&request, &mut rng_a).unwrap();
    let report_b = fixture.engine.run_race(&request, &mut rng_b).unwrap();

    assert_eq!(report_a, report_b);
}

#[test]
fn test_full_grid_board_is_ranked_and_complete() {
    let fixture = EngineTestFixture::new();
    let grid = season::driver_roster().numbers();
    let request = fixture.request(grid.clone());
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let report = fixture.engine.run_race(&request, &mut rng).unwrap();

    assert_eq!(report.timing_board.len(), grid.len());
    for (index, entry) in report.timing_board.iter().enumerate() {
        assert_eq!(entry.position, index as u32 + 1);
    }
    for pair in report.timing_board.windows(2) {
        assert!(pair[0].car.total_time <= pair[1].car.total_time);
    }
    // Every grid entry appears exactly once.
    let mut seen: Vec<DriverNumber> = report
        .timing_board
        .iter()
        .map(|entry| entry.car.car_number)
        .collect();
    seen.sort();
    let mut expected = grid;
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn test_empty_grid_is_reported_not_an_error() {
    let fixture = EngineTestFixture::new();
    let mut request = fixture.request(Vec::new());
    request.official_results = vec![OfficialResult {
        position: 1,
        driver_name: "Max Verstappen".to_string(),
        time: "1:31:44.742".to_string(),
    }];
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = fixture.engine.run_race(&request, &mut rng).unwrap();

    assert!(report.timing_board.is_empty());
    assert_eq!(report.strategy_accuracy, 0.0);
    assert_eq!(report.official_results, request.official_results);
}

#[test]
fn test_focus_driver_absent_from_grid_scores_zero() {
    let fixture = EngineTestFixture::new();
    let request = fixture.request(vec![DriverNumber::new(1), DriverNumber::new(81)]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let report = fixture.engine.run_race(&request, &mut rng).unwrap();

    assert_eq!(report.timing_board.len(), 2);
    assert_eq!(report.strategy_accuracy, 0.0);
}

#[test]
fn test_unknown_circuit_key_is_track_not_found() {
    let fixture = EngineTestFixture::new();
    let mut request = fixture.request(vec![DriverNumber::new(44)]);
    request.circuit_key = CircuitKey::new(999);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let result = fixture.engine.run_race(&request, &mut rng);
    assert_eq!(
        result.unwrap_err(),
        SimulationError::TrackNotFound {
            circuit_key: CircuitKey::new(999)
        }
    );
}

#[test]
fn test_strategy_name_resolution_is_case_insensitive() {
    let fixture = EngineTestFixture::new();
    let mut request = fixture.request(vec![DriverNumber::new(44)]);
    request.strategy_name = "dEfEnSiVe".to_string();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    assert!(fixture.engine.run_race(&request, &mut rng).is_ok());

    request.strategy_name = "Banzai".to_string();
    let result = fixture.engine.run_race(&request, &mut rng);
    assert!(matches!(
        result,
        Err(SimulationError::StrategyNotFound { .. })
    ));
}

#[test]
fn test_strategy_templates_survive_engine_runs() {
    // Catalog plans must be reusable across repeated weekends.
    let fixture = EngineTestFixture::new();
    let request = fixture.request(season::driver_roster().numbers());
    let before = fixture.engine.strategies().clone();

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..3 {
        fixture.engine.run_race(&request, &mut rng).unwrap();
    }

    assert_eq!(*fixture.engine.strategies(), before);
}

#[test]
fn test_compare_strategies_rows_are_ranked() {
    let fixture = EngineTestFixture::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let rows = fixture
        .engine
        .compare_strategies(CircuitKey::new(63), "Defensive", &mut rng)
        .unwrap();

    assert_eq!(rows.len(), fixture.engine.strategies().len());
    for pair in rows.windows(2) {
        assert!(pair[0].total_time <= pair[1].total_time);
    }
    for row in &rows {
        assert_eq!(row.delta_percent.is_sign_positive(), row.delta.is_sign_positive());
    }
}

#[test]
fn test_compare_strategies_unknown_circuit_fails_first() {
    let fixture = EngineTestFixture::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let result = fixture
        .engine
        .compare_strategies(CircuitKey::new(999), "Defensive", &mut rng);
    assert!(matches!(result, Err(SimulationError::TrackNotFound { .. })));
}

#[test]
fn test_report_serializes_to_json() {
    let fixture = EngineTestFixture::new_deterministic();
    let request = fixture.request(vec![DriverNumber::new(44)]);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let report = fixture.engine.run_race(&request, &mut rng).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"strategy_accuracy\":100.0"));
    assert!(json.contains("Lewis Hamilton"));
}
