//! Bundled season reference data.
//!
//! Default tire model, circuit list, driver roster, and strategy catalog
//! for the current season. These are plain constructors rather than
//! globals so tests can substitute their own fixtures.

use crate::drivers::{DriverNumber, DriverRoster};
use crate::strategy::{NamedStrategy, StrategyCatalog, StrategyPlan};
use crate::tires::{TireCompound, TireModel};
use crate::track::{CircuitKey, Track, TrackCatalog};

/// Returns the season's tire model: soft, medium, hard.
pub fn tire_model() -> TireModel {
    TireModel::new(vec![
        TireCompound::new("soft", 95.0, 0.17, 12),
        TireCompound::new("medium", 95.8, 0.10, 20),
        TireCompound::new("hard", 96.8, 0.07, 35),
    ])
}

/// Returns the season's circuit catalog.
pub fn track_catalog() -> TrackCatalog {
    TrackCatalog::new(vec![
        Track::new(CircuitKey::new(63), "Bahrain International Circuit", 3.363, 57),
        Track::new(CircuitKey::new(149), "Jeddah Corniche Circuit", 3.836, 50),
        Track::new(CircuitKey::new(10), "Albert Park Circuit", 3.295, 58),
        Track::new(CircuitKey::new(46), "Suzuka International Racing Course", 3.609, 53),
        Track::new(CircuitKey::new(49), "Shanghai International Circuit", 3.388, 56),
        Track::new(CircuitKey::new(151), "Miami International Autodrome", 3.362, 57),
        Track::new(CircuitKey::new(6), "Autodromo Enzo e Dino Ferrari (Imola)", 3.050, 63),
        Track::new(CircuitKey::new(22), "Circuit de Monaco", 2.074, 78),
        Track::new(CircuitKey::new(23), "Circuit Gilles Villeneuve", 2.710, 70),
        Track::new(CircuitKey::new(24), "Circuit de Barcelona-Catalunya", 2.892, 66),
        Track::new(CircuitKey::new(19), "Red Bull Ring", 2.683, 71),
        Track::new(CircuitKey::new(2), "Silverstone Circuit", 3.661, 52),
        Track::new(CircuitKey::new(4), "Hungaroring", 2.722, 70),
        Track::new(CircuitKey::new(7), "Circuit de Spa-Francorchamps", 4.352, 44),
        Track::new(CircuitKey::new(55), "Circuit Zandvoort", 2.647, 72),
        Track::new(CircuitKey::new(39), "Autodromo Nazionale Monza", 3.600, 53),
        Track::new(CircuitKey::new(144), "Baku City Circuit", 3.730, 51),
        Track::new(CircuitKey::new(61), "Marina Bay Street Circuit", 3.146, 61),
        Track::new(CircuitKey::new(9), "Circuit of the Americas", 3.426, 56),
        Track::new(CircuitKey::new(65), "Autódromo Hermanos Rodríguez", 2.674, 71),
        Track::new(CircuitKey::new(14), "Interlagos Circuit", 2.677, 71),
        Track::new(CircuitKey::new(152), "Las Vegas Strip Circuit", 3.852, 50),
        Track::new(CircuitKey::new(150), "Lusail International Circuit", 3.367, 57),
        Track::new(CircuitKey::new(70), "Yas Marina Circuit", 3.281, 58),
    ])
}

/// Returns the season's driver roster.
pub fn driver_roster() -> DriverRoster {
    DriverRoster::new(vec![
        (DriverNumber::new(1), "Max Verstappen"),
        (DriverNumber::new(2), "Logan Sargeant"),
        (DriverNumber::new(3), "Daniel Ricciardo"),
        (DriverNumber::new(4), "Lando Norris"),
        (DriverNumber::new(10), "Pierre Gasly"),
        (DriverNumber::new(11), "Sergio Pérez"),
        (DriverNumber::new(14), "Fernando Alonso"),
        (DriverNumber::new(16), "Charles Leclerc"),
        (DriverNumber::new(18), "Lance Stroll"),
        (DriverNumber::new(20), "Kevin Magnussen"),
        (DriverNumber::new(22), "Yuki Tsunoda"),
        (DriverNumber::new(23), "Alexander Albon"),
        (DriverNumber::new(24), "Zhou Guanyu"),
        (DriverNumber::new(27), "Nico Hülkenberg"),
        (DriverNumber::new(30), "Liam Lawson"),
        (DriverNumber::new(31), "Esteban Ocon"),
        (DriverNumber::new(37), "Isack Hadjar"),
        (DriverNumber::new(40), "Ayumu Iwasa"),
        (DriverNumber::new(43), "Franco Colapinto"),
        (DriverNumber::new(44), "Lewis Hamilton"),
        (DriverNumber::new(50), "Oliver Bearman"),
        (DriverNumber::new(55), "Carlos Sainz"),
        (DriverNumber::new(61), "Jack Doohan"),
        (DriverNumber::new(63), "George Russell"),
        (DriverNumber::new(77), "Valtteri Bottas"),
        (DriverNumber::new(81), "Oscar Piastri"),
        (DriverNumber::new(97), "Robert Shwartzman"),
    ])
}

/// Returns the season's strategy catalog.
pub fn strategy_catalog() -> StrategyCatalog {
    StrategyCatalog::new(vec![
        NamedStrategy::new(
            "Aggressive",
            StrategyPlan::new("soft", vec![20, 40], vec!["medium", "hard"]),
        ),
        NamedStrategy::new("Defensive", StrategyPlan::new("soft", vec![20], vec!["hard"])),
        NamedStrategy::new(
            "Balanced",
            StrategyPlan::new("soft", vec![15, 45], vec!["hard", "hard"]),
        ),
        NamedStrategy::new(
            "Medium Aggressive",
            StrategyPlan::new("medium", vec![25], vec!["hard"]),
        ),
        NamedStrategy::new(
            "Medium Balanced",
            StrategyPlan::new("medium", vec![20, 50], vec!["hard", "soft"]),
        ),
        NamedStrategy::new(
            "Conservative",
            StrategyPlan::new("hard", vec![30, 47], vec!["medium", "medium"]),
        ),
    ])
}
