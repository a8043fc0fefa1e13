//! Headless factory runner: loads a parameter file, drives the engine at
//! ~60 Hz, and prints HUD lines -- or, with `--print-only`, runs a single
//! tick and prints the occupancy grid.
//!
//! Run with: `cargo run --package loomline-demo -- [--params <file>]
//! [--print-only] [--ticks <n>]`

use std::path::PathBuf;
use std::time::{Duration, Instant};

use loomline_core::engine::FactoryEngine;
use loomline_core::export::OccupancyGrid;
use loomline_core::params::{self, ParamsError};
use tracing::info;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("unknown argument '{0}' (expected --params <file>, --print-only, --ticks <n>)")]
    Usage(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to load {path}: {source}")]
    Params { path: PathBuf, source: ParamsError },
    #[error(transparent)]
    Config(#[from] loomline_core::config::ConfigError),
}

struct Args {
    params: PathBuf,
    print_only: bool,
    ticks: u64,
}

fn parse_args() -> Result<Args, DemoError> {
    let mut args = Args {
        params: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/params.json")),
        print_only: false,
        ticks: 1800, // 30 s at 60 Hz
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--params" => {
                let path = iter.next().ok_or_else(|| DemoError::Usage(arg.clone()))?;
                args.params = PathBuf::from(path);
            }
            "--print-only" => args.print_only = true,
            "--ticks" => {
                let n = iter.next().ok_or_else(|| DemoError::Usage(arg.clone()))?;
                args.ticks = n.parse().map_err(|_| DemoError::Usage(n))?;
            }
            other => return Err(DemoError::Usage(other.to_string())),
        }
    }
    Ok(args)
}

/// Print the 0/1 grid, one digit per cell, rows top to bottom.
fn print_grid(grid: &OccupancyGrid) {
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("{}", line.join(" "));
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let json = std::fs::read_to_string(&args.params).map_err(|source| DemoError::Read {
        path: args.params.clone(),
        source,
    })?;
    let config = params::load_params_json(&json).map_err(|source| DemoError::Params {
        path: args.params.clone(),
        source,
    })?;

    info!(
        stations = config.stations.len(),
        waypoints = config.conveyor_path.len(),
        "loaded parameters from {}",
        args.params.display()
    );

    let start = Instant::now();
    let mut engine = FactoryEngine::new(config, 0.0)?;

    if args.print_only {
        engine.tick(start.elapsed().as_secs_f64());
        print_grid(&engine.occupancy());
        return Ok(());
    }

    let dt = Duration::from_secs_f64(1.0 / 60.0);
    let mut ticks_run = 0u64;
    // One cooperative stop check per loop iteration; pacing is an external
    // throttle, not a correctness requirement.
    while ticks_run < args.ticks {
        engine.tick(start.elapsed().as_secs_f64());
        ticks_run += 1;

        if ticks_run % 60 == 0 {
            let hud = engine.hud();
            println!(
                "[{:>6.1}s] area={:<16} time/step={:>5.2}s objects={:<4} completed={}",
                start.elapsed().as_secs_f64(),
                hud.current_area,
                hud.time_per_step,
                hud.object_count,
                hud.completed_count,
            );
        }

        std::thread::sleep(dt);
    }

    let hud = engine.hud();
    println!(
        "After {ticks_run} ticks: {} in transit, {} completed.",
        hud.object_count, hud.completed_count
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
