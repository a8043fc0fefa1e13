//! The transport engine: owns all simulation state and runs the tick
//! pipeline.
//!
//! # Architecture
//!
//! The `FactoryEngine` owns:
//! - A [`PathModel`] (stations + conveyor waypoints, frozen at startup)
//! - A [`MaterialRegistry`] (live tokens + throughput counters)
//! - A [`SpawnScheduler`] (rate-limited entrance spawning)
//! - HUD bookkeeping (`time_per_step`, `current_area`) and the two
//!   interactive toggles (`auto_move`, `spawn_enabled`)
//!
//! # Tick
//!
//! Each `tick(now)` runs one fully synchronous pass:
//! 1. **Spawn** -- the scheduler may fire one Cotton + Fabric pair.
//! 2. **Transport** -- every live token advances (see below), transitions,
//!    and is re-interpolated onto the conveyor path.
//! 3. **Promote** -- tokens whose station index reaches the terminal index
//!    become finished goods.
//! 4. **Freeze check** -- a soft stall signal that zeroes the vestigial
//!    velocity field; it never halts path-progress advancement.
//!
//! Movement is fixed-step: a token whose dwell time since its last station
//! transition has reached `10 / next_station_speed` gains exactly
//! `steps_per_second` of path progress, independent of wall-clock drift.
//! When progress reaches 1.0 it resets to 0 and the segment index advances
//! modulo the path length; when the segment index wraps back to 0 the
//! token moves to the next station. Time enters only through the explicit
//! `now` argument, so a virtual clock drives the engine deterministically.

use crate::config::{ConfigError, SimConfig};
use crate::export::{self, OccupancyGrid};
use crate::material::MaterialKind;
use crate::path::PathModel;
use crate::query::{HudSnapshot, MaterialSnapshot};
use crate::registry::MaterialRegistry;
use crate::spawn::SpawnScheduler;
use crate::vec2::Vec2;
use tracing::{trace, warn};

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The core simulation engine. One writer, no shared state; presentation
/// layers read snapshots between ticks.
#[derive(Debug, Clone)]
pub struct FactoryEngine {
    path: PathModel,
    registry: MaterialRegistry,
    spawner: SpawnScheduler,

    distance_threshold: f32,
    time_threshold: f32,
    steps_per_second: f32,
    material_radius: f32,
    resolution: (u32, u32),

    /// Whether the transport phase runs. Toggled by the operator.
    auto_move: bool,
    /// Most recently derived dwell time, `10 / next_station_speed`. HUD only.
    time_per_step: f64,
    /// Station index of the most recent station transition. HUD only.
    current_area: usize,
}

impl FactoryEngine {
    /// Build an engine from a validated configuration. `now` seeds the
    /// spawn rate limiter. Fails before any tick can run if the
    /// configuration is malformed.
    pub fn new(config: SimConfig, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let SimConfig {
            stations,
            conveyor_path,
            material_radius,
            distance_threshold,
            time_threshold,
            item_rate,
            steps_per_second,
            resolution,
        } = config;

        Ok(Self {
            path: PathModel::new(stations, conveyor_path),
            registry: MaterialRegistry::new(),
            spawner: SpawnScheduler::new(item_rate, now),
            distance_threshold,
            time_threshold,
            steps_per_second,
            material_radius,
            resolution,
            auto_move: true,
            time_per_step: 0.0,
            current_area: 0,
        })
    }

    // -----------------------------------------------------------------------
    // Tick pipeline
    // -----------------------------------------------------------------------

    /// Advance the simulation by one tick at time `now` (seconds).
    pub fn tick(&mut self, now: f64) {
        if self.spawner.maybe_spawn(now) {
            self.spawn_pair(now);
        }
        if self.auto_move {
            self.move_materials(now);
        }
    }

    /// The transport phase: advance every live token in registry order.
    /// Tokens do not interact, so order never affects correctness.
    fn move_materials(&mut self, now: f64) {
        let station_count = self.path.station_count();
        let waypoint_count = self.path.waypoint_count();
        let terminal = self.path.terminal_index();

        for i in 0..self.registry.len() {
            let station = self.registry.materials()[i].station;

            // Defensive: the transition logic below can never produce an
            // out-of-range index, but a corrupted token must not crash the
            // engine. Recover to the initial state and log the anomaly.
            if station >= station_count {
                warn!(
                    token = i,
                    station, station_count, "station index out of range, resetting token"
                );
                let entrance = self.path.entrance().position;
                self.registry.materials_mut()[i].reset_to_entrance(now, entrance);
                continue;
            }

            if self.registry.materials()[i].is_terminal() {
                continue;
            }

            // Dwell gate: eligibility is derived from the *next* station's
            // processing speed.
            let next_station = (station + 1) % station_count;
            let time_per_step = 10.0 / self.path.speed_of(next_station) as f64;
            self.time_per_step = time_per_step;

            let m = &mut self.registry.materials_mut()[i];
            if now - m.last_transition < time_per_step {
                continue;
            }

            // Advance path progress; wrap segments; transition stations
            // when the segment index wraps back to the path start.
            m.progress += self.steps_per_second;
            let mut transitioned = false;
            if m.progress >= 1.0 {
                m.progress = 0.0;
                m.segment = (m.segment + 1) % waypoint_count;
                if m.segment == 0 {
                    m.station = (m.station + 1) % station_count;
                    m.last_transition = now;
                    transitioned = true;
                }
            }

            // Interpolate onto the current path segment.
            let start = self.path.waypoints()[m.segment];
            let end = self.path.waypoints()[(m.segment + 1) % waypoint_count];
            m.position = start.lerp(end, m.progress);

            let new_station = m.station;
            if transitioned {
                self.current_area = new_station;
            }

            if new_station == terminal {
                let rest = self.path.terminal().position;
                self.registry.promote_to_terminal(i, rest);
                continue;
            }

            // Freeze check against the next station's position: a soft
            // stall signal only. The velocity field is a renderer hint;
            // path progress is never halted here.
            let next_pos = self.path.station((new_station + 1) % station_count).position;
            let far = m.position.distance(next_pos) > self.distance_threshold;
            let overdue = now - m.last_transition > self.time_threshold as f64;
            if far && overdue {
                m.velocity = Vec2::ZERO;
                trace!(token = i, "stall signal: token far from next station");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Spawning
    // -----------------------------------------------------------------------

    /// Spawn a single token at the entrance station. Bypasses the rate
    /// limiter; the scheduler-driven path spawns pairs via [`Self::tick`].
    pub fn spawn_material(&mut self, now: f64, kind: MaterialKind) {
        let entrance = self.path.entrance().position;
        self.registry.spawn(now, entrance, kind);
    }

    fn spawn_pair(&mut self, now: f64) {
        self.spawn_material(now, MaterialKind::Cotton);
        self.spawn_material(now, MaterialKind::Fabric);
    }

    /// Manual spawn trigger (the operator's key press). Subject to the
    /// same rate limit as automatic spawning but ignores the spawn toggle.
    /// Returns true if a pair was spawned.
    pub fn request_spawn(&mut self, now: f64) -> bool {
        if self.spawner.request_spawn(now) {
            self.spawn_pair(now);
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Interactive controls
    // -----------------------------------------------------------------------

    pub fn auto_move(&self) -> bool {
        self.auto_move
    }

    pub fn set_auto_move(&mut self, on: bool) {
        self.auto_move = on;
    }

    pub fn spawn_enabled(&self) -> bool {
        self.spawner.enabled()
    }

    pub fn set_spawn_enabled(&mut self, on: bool) {
        self.spawner.set_enabled(on);
    }

    /// Clear all tokens and counters and return the HUD to its initial
    /// labels. The spawn rate limiter keeps its phase.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.time_per_step = 0.0;
        self.current_area = 0;
    }

    // -----------------------------------------------------------------------
    // Read-only access
    // -----------------------------------------------------------------------

    pub fn path(&self) -> &PathModel {
        &self.path
    }

    pub fn registry(&self) -> &MaterialRegistry {
        &self.registry
    }

    pub fn object_count(&self) -> u32 {
        self.registry.object_count()
    }

    pub fn completed_count(&self) -> u32 {
        self.registry.completed_count()
    }

    /// HUD counters and labels, as one owned snapshot.
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            current_area: self.path.station(self.current_area).name.clone(),
            time_per_step: self.time_per_step,
            object_count: self.registry.object_count(),
            completed_count: self.registry.completed_count(),
            auto_move: self.auto_move,
            spawn_enabled: self.spawner.enabled(),
        }
    }

    /// Owned per-token snapshots for rendering.
    pub fn material_snapshots(&self) -> Vec<MaterialSnapshot> {
        self.registry
            .materials()
            .iter()
            .map(|m| MaterialSnapshot {
                position: m.position,
                velocity: m.velocity,
                kind: m.kind,
                radius: self.material_radius,
            })
            .collect()
    }

    /// The occupancy grid at the configured resolution.
    pub fn occupancy(&self) -> OccupancyGrid {
        let (w, h) = self.resolution;
        export::occupancy_grid(self.registry.materials(), w as usize, h as usize)
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub fn registry_mut(&mut self) -> &mut MaterialRegistry {
        &mut self.registry
    }
}

// ===========================================================================
// Tests
// ===========================================================================
