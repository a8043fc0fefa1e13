//! Loomline Core -- the material-transport simulation engine for a textile
//! factory floor.
//!
//! Discrete material tokens travel through a fixed sequence of factory
//! stations connected by a conveyor path. The engine tracks per-token path
//! progress, per-station dwell time, and aggregate throughput counters.
//! Rendering, input handling, and pacing live in presentation crates; this
//! crate is pure in-memory computation.
//!
//! # Tick Pipeline
//!
//! Each call to [`engine::FactoryEngine::tick`] runs one synchronous pass:
//!
//! 1. **Spawn** -- the rate-limited scheduler may create one pair of raw
//!    materials at the entrance station.
//! 2. **Transport** -- every live token advances its path progress, wraps
//!    segments, transitions stations, and is re-interpolated onto the
//!    conveyor path.
//! 3. **Promote** -- tokens reaching the terminal station become finished
//!    goods and leave in-transit accounting.
//! 4. **Freeze check** -- tokens far from their next station for too long
//!    get their (vestigial) velocity zeroed as a soft stall signal.
//!
//! There is no interleaving within a tick and no token interaction;
//! presentation layers read state between ticks only.
//!
//! # Key Types
//!
//! - [`engine::FactoryEngine`] -- owns all simulation state and runs the
//!   tick pipeline.
//! - [`path::PathModel`] -- ordered stations + conveyor waypoints, frozen
//!   at startup.
//! - [`registry::MaterialRegistry`] -- the live token collection and the
//!   throughput counters.
//! - [`spawn::SpawnScheduler`] -- strict spawn rate limiting.
//! - [`export::OccupancyGrid`] -- lossy 0/1 projection of token positions
//!   for non-graphical output.
//! - [`config::SimConfig`] -- the validated configuration record.
//!
//! Time is passed in explicitly as seconds (`now: f64`), so the engine is
//! deterministic under a virtual clock; wall-clock pacing is an external
//! concern.

pub mod config;
pub mod engine;
pub mod export;
pub mod material;
#[cfg(feature = "params-loader")]
pub mod params;
pub mod path;
pub mod query;
pub mod registry;
pub mod spawn;
pub mod vec2;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
