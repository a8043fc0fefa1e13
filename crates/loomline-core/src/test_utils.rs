//! Shared test helpers for unit tests, integration tests, and property
//! tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so the helpers
//! are available everywhere tests run (the crate depends on itself with
//! the `test-utils` feature in dev-dependencies).

use crate::config::SimConfig;
use crate::engine::FactoryEngine;
use crate::path::Station;
use crate::vec2::Vec2;

// ===========================================================================
// Station constructor
// ===========================================================================

pub fn station(name: &str, x: f32, y: f32, speed: f32) -> Station {
    Station {
        name: name.to_string(),
        position: Vec2::new(x, y),
        speed,
    }
}

// ===========================================================================
// Configurations
// ===========================================================================

/// The minimal layout: Entrance -> Completed, one straight conveyor
/// segment, generous thresholds, and `steps_per_second = 0.5` so a token
/// finishes a segment in two eligible ticks.
pub fn two_station_config() -> SimConfig {
    SimConfig {
        stations: vec![
            station("Entrance", 0.0, 0.0, 1.0),
            station("Completed Area", 10.0, 0.0, 1.0),
        ],
        conveyor_path: vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)],
        material_radius: 1.0,
        distance_threshold: 100.0,
        time_threshold: 100.0,
        item_rate: 1.0,
        steps_per_second: 0.5,
        resolution: (10, 10),
    }
}

/// A four-station line with distinct speeds, for tests that exercise the
/// per-station dwell gate and the HUD label.
pub fn four_station_config() -> SimConfig {
    SimConfig {
        stations: vec![
            station("Entrance", 0.0, 0.0, 5.0),
            station("Cutting Area", 30.0, 0.0, 5.0),
            station("Sewing Area", 60.0, 0.0, 10.0),
            station("Completed Area", 60.0, 40.0, 2.0),
        ],
        conveyor_path: vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(60.0, 0.0),
            Vec2::new(60.0, 40.0),
        ],
        material_radius: 1.0,
        distance_threshold: 70.0,
        time_threshold: 5.0,
        item_rate: 1.0,
        steps_per_second: 0.5,
        resolution: (80, 60),
    }
}

// ===========================================================================
// Engine constructor
// ===========================================================================

/// Build an engine at virtual time `now`, panicking on a bad config
/// (helpers only feed valid ones).
pub fn engine_at(config: SimConfig, now: f64) -> FactoryEngine {
    FactoryEngine::new(config, now).expect("test config must validate")
}
