//! Grid Kernel Demo
//!
//! Generates a room-and-cavern map, prints it, and checks that the same
//! seed reproduces the same map.
//!
//! Usage: `grid-kernel [seed]`. Log level comes from `RUST_LOG` (default `info`).

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use grid_kernel::{
    VERSION,
    core::hash::hash_array,
    demo::{generate_map, render, DemoConfig},
};

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Grid Kernel v{}", VERSION);

    let mut config = DemoConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        config.seed = arg
            .parse()
            .with_context(|| format!("seed must be an unsigned integer, got {arg:?}"))?;
    }

    demo_map(&config)
}

/// Generate, print, and regenerate to verify determinism.
fn demo_map(config: &DemoConfig) -> Result<()> {
    info!("=== Generating Map ===");
    info!("Size: {}x{}", config.width, config.height);
    info!("Seed: {}", config.seed);

    let map = generate_map(config).context("invalid demo config")?;
    println!("{}", render(&map));

    let hash = hash_array(&map);
    info!("Map Hash: {}", hex::encode(hash));

    info!("=== Verifying Determinism ===");
    let replay = generate_map(config)?;
    let replay_hash = hash_array(&replay);
    info!("Replay Hash: {}", hex::encode(replay_hash));

    if hash != replay_hash {
        bail!("determinism failure: hashes differ");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");
    Ok(())
}
