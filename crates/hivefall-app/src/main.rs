//! Headless hivefall runner.
//!
//! Runs the simulation at the nominal tick rate with no renderer
//! attached. An optional first argument bounds the run in seconds
//! (default 30). A real platform layer plugs in through the
//! [`Frontend`](hivefall_app::Frontend) trait.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use hivefall_app::HeadlessFrontend;
use hivefall_sim::EngineConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let seconds = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid duration argument: {raw}"))?,
        None => 30,
    };

    let mut frontend = HeadlessFrontend::new(Some(Duration::from_secs(seconds)));
    hivefall_app::run(&mut frontend, EngineConfig::default());

    Ok(())
}
