//! Damage stage: contact signals become health deltas, attributed to the
//! dealer. A dealer that no longer exists deals nothing.

use hivefall_core::components::ContactDamage;
use hivefall_core::events::{DamageEvent, HealthDelta};
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    for entity in store.entities::<DamageEvent>() {
        for event in store.instances::<DamageEvent>(entity) {
            let Some(damage) = store.read::<ContactDamage>(event.dealer) else {
                continue;
            };
            store.add(entity, HealthDelta {
                amount: -damage.amount,
                dealer: event.dealer,
            });
        }
    }

    no_cleanup
}
