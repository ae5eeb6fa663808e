//! Movement stage: trajectory effects contribute intents, intents sum
//! into one candidate box per entity, and the candidate is classified
//! against the play field.

use glam::Vec2;

use hivefall_core::components::{GameState, Mobility, Position, Projectile, TrajectoryEffect, Ufo};
use hivefall_core::events::{CollisionProbe, DeathEvent, MoveIntent, PositionUpdate};
use hivefall_store::{cleanup_effect, Store};

use super::CleanupFn;

pub fn run(store: &mut Store) -> CleanupFn {
    apply_trajectories(store);
    resolve_intents(store);

    cleanup
}

fn cleanup(store: &mut Store) {
    cleanup_effect::<TrajectoryEffect>(store);
}

fn step_toward(delta: f32) -> f32 {
    if delta < 0.0 {
        1.0
    } else if delta > 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Each trajectory effect drifts its entity toward the target point at
/// the entity's speed. Mobility is read through the store, so any
/// registered speed hook applies here.
fn apply_trajectories(store: &mut Store) {
    let dt = store.dt();

    for entity in store.entities2::<TrajectoryEffect, Mobility>() {
        let Some(mobility) = store.read::<Mobility>(entity) else {
            continue;
        };
        let Some(position) = store.read::<Position>(entity) else {
            continue;
        };

        for effect in store.instances::<TrajectoryEffect>(entity) {
            let diff = position.bounds.position - effect.target;
            let delta = Vec2::new(
                mobility.speeds.x * dt * step_toward(diff.x),
                mobility.speeds.y * dt * step_toward(diff.y),
            );
            store.add(entity, MoveIntent { delta });
        }
    }
}

/// Sum this tick's intents into one net displacement, classify the
/// candidate box, and emit the collision probe plus position update.
/// Exiting the field leaves ordinary entities unmoved; projectiles and
/// roamers die once fully outside.
fn resolve_intents(store: &mut Store) {
    let Some((_, game)) = store.unique_read::<GameState>() else {
        return;
    };
    let field = game.bounds;

    for entity in store.entities::<MoveIntent>() {
        let Some(position) = store.read::<Position>(entity) else {
            continue;
        };

        let net = store.fold::<MoveIntent, Vec2>(entity, Vec2::ZERO, |acc, intent| {
            acc + intent.delta
        });
        let candidate = position.bounds.translated(net);

        if candidate.escapes(&field) {
            if !store.has::<Projectile>(entity) && !store.has::<Ufo>(entity) {
                continue;
            }
            if candidate.fully_outside(&field) {
                store.add(entity, DeathEvent { killed_by: None });
                continue;
            }
        }

        store.add(entity, CollisionProbe { bounds: candidate });
        store.add(entity, PositionUpdate {
            coords: candidate.position,
        });
    }
}
