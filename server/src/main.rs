//! world-server: the authoritative Wyrmgrid world over a line-based
//! TCP protocol.
//!
//! Usage:
//!   world-server --config world.json
//!   world-server --bind 0.0.0.0:4711 --seed 99

use anyhow::{Context, Result};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use wyrmgrid_core::{config::WorldConfig, world::World};

mod session;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => WorldConfig::load(&w[1])?,
        None => WorldConfig::default(),
    };
    if let Some(w) = args.windows(2).find(|w| w[0] == "--bind") {
        config.bind_addr = w[1].clone();
    }
    config.master_seed = parse_arg(&args, "--seed", config.master_seed);
    config.grid_width = parse_arg(&args, "--width", config.grid_width);
    config.grid_height = parse_arg(&args, "--height", config.grid_height);

    let world = Arc::new(Mutex::new(World::new(&config)?));

    if config.tick_interval_ms > 0 {
        spawn_ticker(Arc::clone(&world), config.tick_interval_ms);
    }

    let listener = TcpListener::bind(&config.bind_addr)
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    log::info!("listening on {}", config.bind_addr);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let world = Arc::clone(&world);
                let _ = thread::spawn(move || session::run(world, stream));
            }
            Err(e) => log::warn!("accept failed: {e}"),
        }
    }
    Ok(())
}

/// Background world clock. Each beat advances the tick under the same
/// lock the sessions use, so a handler never observes a half-applied
/// tick.
fn spawn_ticker(world: Arc<Mutex<World>>, interval_ms: u64) {
    let _ = thread::spawn(move || loop {
        thread::sleep(Duration::from_millis(interval_ms));
        let mut guard = match world.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = guard.advance_tick();
    });
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
