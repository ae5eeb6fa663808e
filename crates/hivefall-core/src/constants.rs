//! Simulation constants and tuning parameters.

/// Nominal tick rate the outer driver paces to (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick at the nominal rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Screen ---

pub const SCREEN_WIDTH: f32 = 640.0;
pub const SCREEN_HEIGHT: f32 = 480.0;

// --- Swarm ---

/// Population a full swarm is normalized against when scaling cadence.
pub const SWARM_FULL_STRENGTH: f32 = 55.0;

/// Base cadence interval (seconds) before population scaling.
pub const SWARM_BASE_INTERVAL: f32 = 0.5;

/// Most members allowed to hold an active attack at once.
pub const MAX_CONCURRENT_ATTACKERS: usize = 3;

/// Upper bound of the uniform-random swarm attack cooldown (seconds).
pub const SWARM_ATTACK_COOLDOWN_MAX_SECS: f32 = 10.0;

// --- UFO ---

/// Cooldown between UFO spawns (seconds).
pub const UFO_SPAWN_COOLDOWN_SECS: f32 = 15.0;

/// Cooldown in force when a fresh world is created (seconds).
pub const UFO_INITIAL_SPAWN_COOLDOWN_SECS: f32 = 12.0;

/// Upper bound of the uniform-random UFO attack interval (seconds),
/// divided by the difficulty modifier.
pub const UFO_ATTACK_MAX_INTERVAL_SECS: f32 = 5.0;

// --- Player ---

/// Lifetime of the player's attack effect (seconds); caps the player at
/// one live shot unless the projectile dies sooner.
pub const PLAYER_ATTACK_TIMEOUT_SECS: f32 = 3.0;

// --- Pickups ---

/// Duration of the collected-pickup speed boost (seconds).
pub const PICKUP_BOOST_SECS: f32 = 10.0;

/// Cooldown between pickup spawns (seconds).
pub const PICKUP_SPAWN_COOLDOWN_SECS: f32 = 30.0;

/// Extra y-speed granted to the player's projectiles while boosted.
pub const PICKUP_BOOST_SPEED_BONUS: f32 = 1000.0;

// --- Obstacles ---

/// Per-channel darkening applied to an obstacle's sprite on each hit.
pub const OBSTACLE_FADE_STEP: u8 = 20;
