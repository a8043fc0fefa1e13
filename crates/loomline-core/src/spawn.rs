//! Rate-limited token creation at the entrance station.
//!
//! The limit is strict: at most one spawn event per `1 / item_rate` seconds
//! regardless of how many ticks fall in that window. There is no catch-up
//! or backlog spawning -- a long gap between ticks still yields one event.

use serde::{Deserialize, Serialize};

/// Decides *when* to spawn; the engine decides *what* (one Cotton + Fabric
/// pair per event).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnScheduler {
    item_rate: f32,
    last_spawn_time: f64,
    enabled: bool,
}

impl SpawnScheduler {
    /// `item_rate` is spawn events per second; validated positive by the
    /// configuration layer. `now` seeds the rate limiter so the first
    /// event waits a full interval.
    pub fn new(item_rate: f32, now: f64) -> Self {
        Self {
            item_rate,
            last_spawn_time: now,
            enabled: true,
        }
    }

    fn interval(&self) -> f64 {
        1.0 / self.item_rate as f64
    }

    /// Automatic spawn check, run once per tick. Returns true when a spawn
    /// event fires; the caller creates the tokens.
    pub fn maybe_spawn(&mut self, now: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.try_fire(now)
    }

    /// Manual spawn trigger (the operator's key press). Ignores the
    /// enabled flag but keeps the rate limit.
    pub fn request_spawn(&mut self, now: f64) -> bool {
        self.try_fire(now)
    }

    fn try_fire(&mut self, now: f64) -> bool {
        if now - self.last_spawn_time >= self.interval() {
            self.last_spawn_time = now;
            true
        } else {
            false
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn last_spawn_time(&self) -> f64 {
        self.last_spawn_time
    }
}
