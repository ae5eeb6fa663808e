//! Item stage: pickup collection and cooldown-gated pickup spawning.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hivefall_core::components::{
    GameConfig, PickupBoost, PickupSpawnCooldown, Player, Position,
};
use hivefall_core::constants::{PICKUP_BOOST_SECS, PICKUP_SPAWN_COOLDOWN_SECS};
use hivefall_core::events::PickupEvent;
use hivefall_core::types::{Bounds, Expiry};
use hivefall_store::{cleanup_effect, Store};

use super::CleanupFn;
use crate::spawn;

pub fn run(store: &mut Store, rng: &mut ChaCha8Rng) -> CleanupFn {
    collect_pickups(store);
    spawn_pickup(store, rng);

    cleanup
}

fn cleanup(store: &mut Store) {
    cleanup_effect::<PickupSpawnCooldown>(store);
    cleanup_effect::<PickupBoost>(store);
}

fn collect_pickups(store: &mut Store) {
    for entity in store.entities::<PickupEvent>() {
        store.add(entity, PickupBoost {
            expiry: Expiry::after(PICKUP_BOOST_SECS),
        });
    }
}

/// Spawn a pickup at a random x on the player's row, gated by the world
/// cooldown and suppressed while a boost is already active.
fn spawn_pickup(store: &mut Store, rng: &mut ChaCha8Rng) {
    let Some((world, config)) = store.unique_read::<GameConfig>() else {
        return;
    };
    if store.has::<PickupSpawnCooldown>(world) {
        return;
    }

    let Some(player) = store.unique::<Player>() else {
        return;
    };
    if store.has::<PickupBoost>(player) {
        return;
    }
    let Some(position) = store.read::<Position>(player) else {
        return;
    };

    let span = (config.screen.x - config.tile).max(1.0);
    let x = rng.gen_range(0.0..span);
    spawn::pickup(
        store,
        Bounds::new(
            x + config.tile,
            position.bounds.position.y,
            config.tile,
            config.tile,
        ),
    );
    store.add(world, PickupSpawnCooldown {
        expiry: Expiry::after(PICKUP_SPAWN_COOLDOWN_SECS),
    });
}
