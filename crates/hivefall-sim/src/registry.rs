//! Component type registration.
//!
//! Resolving every type's policy up front keeps the store's sweep tables
//! complete before the first tick: the ephemeral sweep covers event types
//! that have not been seen yet, and every timed effect gets its timer
//! advanced from the start.

use hivefall_core::components::*;
use hivefall_core::events::*;
use hivefall_store::Store;

pub fn register_all(store: &mut Store) {
    // Persistent data.
    store.register::<GameState>();
    store.register::<GameConfig>();
    store.register::<Position>();
    store.register::<Collider>();
    store.register::<Mobility>();
    store.register::<Health>();
    store.register::<ContactDamage>();
    store.register::<Weapon>();
    store.register::<Projectile>();
    store.register::<Bounty>();
    store.register::<Sprite>();
    store.register::<Label>();
    store.register::<UiNode>();
    store.register::<Obstacle>();
    store.register::<Pickup>();
    store.register::<Dormant>();
    store.register::<Doomed>();
    store.register::<TitleScreen>();
    store.register::<StartTrigger>();
    store.register::<Player>();
    store.register::<Score>();
    store.register::<Lives>();
    store.register::<ScoreReadout>();
    store.register::<LivesReadout>();
    store.register::<Swarm>();
    store.register::<SwarmMember>();
    store.register::<SwarmLeftmost>();
    store.register::<SwarmRightmost>();
    store.register::<Ufo>();

    // Single-tick events.
    store.register::<PlayerInput>();
    store.register::<MoveIntent>();
    store.register::<PositionUpdate>();
    store.register::<CollisionProbe>();
    store.register::<AttackEvent>();
    store.register::<DamageEvent>();
    store.register::<HealthDelta>();
    store.register::<DeathEvent>();
    store.register::<ScoreEvent>();
    store.register::<PlayerDeath>();
    store.register::<GameEvent>();
    store.register::<UiEvent>();
    store.register::<PickupEvent>();

    // Timed effects.
    store.register_timed::<SwarmCadence>();
    store.register_timed::<TrajectoryEffect>();
    store.register_timed::<AttackEffect>();
    store.register_timed::<SwarmAttackCooldown>();
    store.register_timed::<UfoSpawnCooldown>();
    store.register_timed::<UfoAttackCooldown>();
    store.register_timed::<PickupBoost>();
    store.register_timed::<PickupSpawnCooldown>();
}
