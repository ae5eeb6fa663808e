//! Collision stage: brute-force AABB pass of every pending probe against
//! every collidable, with symmetric friendly-fire exclusion.
//!
//! O(n²) over tens of entities; fine at this scale.

use hivefall_core::components::{Collider, Pickup, Position, Projectile, SwarmMember};
use hivefall_core::enums::Direction;
use hivefall_core::events::{CollisionProbe, DamageEvent, PickupEvent};
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    resolve(store);

    no_cleanup
}

/// A downward projectile never hits a swarm member; evaluated for both
/// orientations of a candidate pair.
fn friendly_fire(projectile: Option<&Projectile>, other_is_member: bool) -> bool {
    projectile.is_some_and(|p| other_is_member && p.direction == Direction::Down)
}

fn resolve(store: &mut Store) {
    let movers = store.entities::<CollisionProbe>();
    let targets = store.entities2::<Collider, Position>();

    for mover in movers {
        let Some(probe) = store.read::<CollisionProbe>(mover) else {
            continue;
        };
        let mover_projectile = store.read::<Projectile>(mover);
        let mover_is_member = store.has::<SwarmMember>(mover);

        for &target in &targets {
            if target == mover {
                continue;
            }

            let target_projectile = store.read::<Projectile>(target);
            let target_is_member = store.has::<SwarmMember>(target);
            if friendly_fire(target_projectile.as_ref(), mover_is_member)
                || friendly_fire(mover_projectile.as_ref(), target_is_member)
            {
                continue;
            }

            let Some(target_position) = store.read::<Position>(target) else {
                continue;
            };
            if !probe.bounds.overlaps(&target_position.bounds) {
                continue;
            }

            // Pickup contact: the mover collects, the item is consumed.
            if store.has::<Pickup>(target) {
                store.add(mover, PickupEvent);
                store.add(target, DamageEvent { dealer: mover });
                continue;
            }
            if store.has::<Pickup>(mover) {
                store.add(target, PickupEvent);
                store.add(mover, DamageEvent { dealer: target });
                continue;
            }

            // Projectiles attribute their shooter; everything else deals
            // as itself.
            let mover_dealer = mover_projectile
                .as_ref()
                .map(|p| p.shooter)
                .unwrap_or(mover);
            let target_dealer = target_projectile
                .as_ref()
                .map(|p| p.shooter)
                .unwrap_or(target);
            store.add(mover, DamageEvent {
                dealer: target_dealer,
            });
            store.add(target, DamageEvent {
                dealer: mover_dealer,
            });
        }
    }
}
