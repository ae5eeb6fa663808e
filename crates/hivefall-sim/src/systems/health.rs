//! Health stage: applies deltas, detects the death crossing, and darkens
//! damaged obstacles.

use hivefall_core::components::{Health, Obstacle, Sprite};
use hivefall_core::constants::OBSTACLE_FADE_STEP;
use hivefall_core::events::{DeathEvent, HealthDelta};
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    for entity in store.entities2::<HealthDelta, Health>() {
        let deltas = store.instances::<HealthDelta>(entity);
        let Some(health) = store.read::<Health>(entity) else {
            continue;
        };

        // Apply every delta, unclamped. If the result sits at or below
        // zero, emit exactly one death signal for the whole tick,
        // attributing the last dealer.
        let mut current = health.current;
        for delta in &deltas {
            current += delta.amount;
        }
        store.mutate::<Health>(entity, |health| health.current = current);

        if current <= 0 {
            if let Some(last) = deltas.last() {
                store.add(entity, DeathEvent {
                    killed_by: Some(last.dealer),
                });
            }
        }

        // Obstacles show accumulated damage by fading toward black,
        // floored at zero, whether or not they also died.
        if store.has::<Obstacle>(entity) {
            for _ in &deltas {
                store.mutate::<Sprite>(entity, |sprite| {
                    sprite.color.r = sprite.color.r.saturating_sub(OBSTACLE_FADE_STEP);
                    sprite.color.g = sprite.color.g.saturating_sub(OBSTACLE_FADE_STEP);
                    sprite.color.b = sprite.color.b.saturating_sub(OBSTACLE_FADE_STEP);
                    sprite.color.a = sprite.color.a.saturating_sub(OBSTACLE_FADE_STEP);
                });
            }
        }
    }

    no_cleanup
}
