//! Attack stage: attack requests become projectiles plus an attack
//! effect tying shooter to shot.

use hecs::Entity;

use hivefall_core::components::{AttackEffect, Position, Weapon};
use hivefall_core::enums::Direction;
use hivefall_core::events::AttackEvent;
use hivefall_core::types::Expiry;
use hivefall_store::{cleanup_effect, Store};

use super::CleanupFn;
use crate::spawn;

pub fn run(store: &mut Store) -> CleanupFn {
    process_attacks(store);
    expire_orphaned_effects(store);

    cleanup
}

fn cleanup(store: &mut Store) {
    cleanup_effect::<AttackEffect>(store);
}

/// Fire for each attack request, unless the shooter already has a live
/// attack effect — that is what limits an entity to one shot in flight.
fn process_attacks(store: &mut Store) {
    for entity in store.entities::<AttackEvent>() {
        for event in store.instances::<AttackEvent>(entity) {
            if store.has::<AttackEffect>(entity) {
                continue;
            }
            let Some(position) = store.read::<Position>(entity) else {
                continue;
            };
            let Some(weapon) = store.read::<Weapon>(entity) else {
                continue;
            };

            let projectile = match weapon.direction {
                Direction::Up => spawn::upward_projectile(store, entity, position.bounds),
                Direction::Down => spawn::downward_projectile(store, entity, position.bounds),
                _ => continue,
            };

            store.add(entity, AttackEffect {
                projectile,
                expiry: Expiry::from_timeout(event.timeout),
            });
        }
    }
}

/// Flag attack effects whose projectile no longer exists; the effect is
/// what blocks re-firing, so it must not outlive its shot.
fn expire_orphaned_effects(store: &mut Store) {
    for entity in store.entities::<AttackEffect>() {
        let orphaned: Vec<Entity> = store
            .instances::<AttackEffect>(entity)
            .iter()
            .map(|effect| effect.projectile)
            .filter(|projectile| !store.contains(*projectile))
            .collect();
        if orphaned.is_empty() {
            continue;
        }
        store.mutate::<AttackEffect>(entity, |effect| {
            if orphaned.contains(&effect.projectile) {
                effect.expiry.flag();
            }
        });
    }
}
