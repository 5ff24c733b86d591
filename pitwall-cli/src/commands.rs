//! CLI command implementations

use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use pitwall_core::config::SimulationConfig;
use pitwall_core::drivers::DriverNumber;
use pitwall_core::engine::{OfficialResult, RaceEngine, RaceReport, RaceRequest};
use pitwall_core::sim::StrategyScore;
use pitwall_core::track::CircuitKey;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a race weekend and print the timing board
    Race {
        /// Circuit key of the track to race
        #[arg(short, long)]
        circuit: u16,
        /// Car number of the focus driver
        #[arg(short, long)]
        driver: u8,
        /// Name of the focus driver's strategy
        #[arg(short, long)]
        strategy: String,
        /// Comma-separated car numbers for the grid (defaults to the full roster)
        #[arg(short, long)]
        grid: Option<String>,
        /// Seed for reproducible runs (drawn from entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// JSON file with official results to display alongside
        #[arg(short, long)]
        results: Option<PathBuf>,
        /// Print the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Compare every cataloged strategy against a chosen one
    Compare {
        /// Circuit key of the track to race
        #[arg(short, long)]
        circuit: u16,
        /// Name of the baseline strategy
        #[arg(short, long)]
        strategy: String,
        /// Seed for reproducible runs (drawn from entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the bundled circuits
    Tracks,
    /// List the bundled strategies
    Strategies,
    /// List the bundled tire compounds
    Tires,
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Race {
            circuit,
            driver,
            strategy,
            grid,
            seed,
            results,
            json,
        } => run_race(circuit, driver, strategy, grid, seed, results, json),
        Commands::Compare {
            circuit,
            strategy,
            seed,
        } => compare_strategies(circuit, strategy, seed),
        Commands::Tracks => list_tracks(),
        Commands::Strategies => list_strategies(),
        Commands::Tires => list_tires(),
    }
}

/// Simulate a race weekend
///
/// # Errors
/// - Unknown circuit key or strategy name
/// - Unreadable or malformed official results file
pub fn run_race(
    circuit: u16,
    driver: u8,
    strategy: String,
    grid: Option<String>,
    seed: Option<u64>,
    results: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let engine = RaceEngine::with_season_defaults(SimulationConfig::from_env());

    let grid = match grid {
        Some(grid) => parse_grid(&grid)?,
        None => engine.roster().numbers(),
    };
    let official_results = match results {
        Some(path) => load_official_results(&path)?,
        None => Vec::new(),
    };

    let request = RaceRequest {
        circuit_key: CircuitKey::new(circuit),
        focus_driver: DriverNumber::new(driver),
        strategy_name: strategy,
        grid,
        official_results,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(seed));
    let report = engine.run_race(&request, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

/// Compare every cataloged strategy against a chosen baseline
///
/// # Errors
/// - Unknown circuit key or strategy name
pub fn compare_strategies(circuit: u16, strategy: String, seed: Option<u64>) -> anyhow::Result<()> {
    let engine = RaceEngine::with_season_defaults(SimulationConfig::from_env());

    let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(seed));
    let rows = engine.compare_strategies(CircuitKey::new(circuit), &strategy, &mut rng)?;

    print_comparison(&strategy, &rows);
    Ok(())
}

/// List the bundled circuits
pub fn list_tracks() -> anyhow::Result<()> {
    let engine = RaceEngine::with_season_defaults(SimulationConfig::default());

    println!("Circuits");
    println!("{:-<60}", "");
    println!("{:<8}{:<42}{:<10}{:<6}", "Key", "Track", "Miles", "Laps");
    for track in engine.tracks().iter() {
        println!(
            "{:<8}{:<42}{:<10.3}{:<6}",
            track.circuit_key, track.name, track.length_miles, track.lap_count
        );
    }

    Ok(())
}

/// List the bundled strategies
pub fn list_strategies() -> anyhow::Result<()> {
    let engine = RaceEngine::with_season_defaults(SimulationConfig::default());

    println!("Strategies");
    println!("{:-<60}", "");
    for strategy in engine.strategies().iter() {
        println!("{:<20}{}", strategy.name, strategy.plan);
    }

    Ok(())
}

/// List the bundled tire compounds
pub fn list_tires() -> anyhow::Result<()> {
    let engine = RaceEngine::with_season_defaults(SimulationConfig::default());

    println!("Tire Compounds");
    println!("{:-<60}", "");
    println!(
        "{:<10}{:<16}{:<20}{:<12}",
        "Compound", "Base Lap Time", "Degradation Rate", "Wear Limit"
    );
    for compound in engine.tires().iter() {
        println!(
            "{:<10}{:<16.1}{:<20.2}{:<12}",
            compound.name, compound.base_lap_time, compound.degradation_rate, compound.wear_limit
        );
    }

    Ok(())
}

/// Resolves the run seed, drawing one from OS entropy when omitted so any
/// run can be reproduced from the logs.
fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::rng().random();
            info!(seed, "seed drawn from entropy, pass --seed to reproduce");
            seed
        }
    }
}

/// Parses a comma-separated car number list.
fn parse_grid(grid: &str) -> anyhow::Result<Vec<DriverNumber>> {
    grid.split(',')
        .map(|entry| {
            let number = entry
                .trim()
                .parse::<u8>()
                .with_context(|| format!("invalid car number '{}'", entry.trim()))?;
            Ok(DriverNumber::new(number))
        })
        .collect()
}

/// Loads official classification rows from a JSON file.
fn load_official_results(path: &PathBuf) -> anyhow::Result<Vec<OfficialResult>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading official results from {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("parsing official results in {}", path.display()))
}

/// Prints the timing board, accuracy line, and official results.
fn print_report(report: &RaceReport) {
    println!(
        "You selected {} ({} laps).\n",
        report.track.name, report.track.lap_count
    );

    if report.timing_board.is_empty() {
        println!("No drivers in the grid to simulate.");
    } else {
        println!("--- Timing Board ---");
        println!(
            "{:<10}{:<10}{:<20}{:<12}{:<15}{:<20}",
            "Position", "Car ID", "Driver", "Pit Stops", "Fastest Lap", "Total Race Time"
        );
        for entry in &report.timing_board {
            let fastest_lap = format!("{:.3}s", entry.car.fastest_lap);
            let total_time = format!("{:.3}s", entry.car.total_time);
            println!(
                "{:<10}{:<10}{:<20}{:<12}{:<15}{:<20}",
                entry.position,
                entry.car.car_number,
                entry.car.driver_name,
                entry.car.pit_stops,
                fastest_lap,
                total_time
            );
        }
        println!("\nStrategy Accuracy: {:.2}%", report.strategy_accuracy);
    }

    if !report.official_results.is_empty() {
        println!("\n--- Real-Life Race Results ---");
        println!("{:<10}{:<20}{:<15}", "Position", "Driver", "Race Time");
        let mut official = report.official_results.clone();
        official.sort_by_key(|result| result.position);
        for result in &official {
            println!(
                "{:<10}{:<20}{:<15}",
                result.position, result.driver_name, result.time
            );
        }
    }
}

/// Prints the strategy comparison table.
fn print_comparison(baseline_name: &str, rows: &[StrategyScore]) {
    println!("\n--- Strategy Comparison vs '{baseline_name}' ---");
    for (index, row) in rows.iter().enumerate() {
        println!(
            "{}. Strategy: {} | {} | Total Time: {:.3}s | Time Diff: {:+.3}s ({:+.2}%)",
            index + 1,
            row.name,
            row.plan,
            row.total_time,
            row.delta,
            row.delta_percent
        );
    }
}
