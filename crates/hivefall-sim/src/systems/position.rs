//! Position-commit stage: applies resolved coordinates.

use hivefall_core::components::Position;
use hivefall_core::events::PositionUpdate;
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    for entity in store.entities::<PositionUpdate>() {
        for update in store.instances::<PositionUpdate>(entity) {
            store.mutate::<Position>(entity, |position| {
                position.bounds.position = update.coords;
            });
        }
    }

    no_cleanup
}
