//! The driver loop: poll, tick, present, pace.

use std::time::{Duration, Instant};

use tracing::info;

use hivefall_core::constants::TICK_RATE;
use hivefall_sim::{Engine, EngineConfig};

use crate::frontend::Frontend;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Run the simulation against a frontend until the engine reports the
/// terminal state.
pub fn run(frontend: &mut dyn Frontend, config: EngineConfig) {
    let mut engine = Engine::new(config);
    let mut next_tick_time = Instant::now();
    let mut prev_tick = Instant::now();

    info!("starting game");

    loop {
        let inputs = frontend.poll_inputs();

        let now = Instant::now();
        let dt = (now - prev_tick).as_secs_f32();
        prev_tick = now;

        if !engine.advance_tick(&inputs, dt) {
            info!(ticks = engine.time().tick, "game over");
            break;
        }

        frontend.present(&engine.drawables());

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}
