//! Player reactor: a player death costs a life; running out of lives
//! ends the game.

use hivefall_core::components::{Lives, Player};
use hivefall_core::enums::{GameSignal, UiSignal};
use hivefall_core::events::{GameEvent, PlayerDeath, UiEvent};
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    let Some(player) = store.unique::<Player>() else {
        return no_cleanup;
    };

    for entity in store.entities::<PlayerDeath>() {
        for _ in store.instances::<PlayerDeath>(entity) {
            store.mutate::<Lives>(player, |lives| lives.count -= 1);
            store.add(entity, UiEvent {
                signal: UiSignal::RefreshLives,
            });

            let remaining = store
                .read::<Lives>(player)
                .map(|lives| lives.count)
                .unwrap_or(0);
            if remaining <= 0 {
                store.add(entity, GameEvent {
                    signal: GameSignal::GameOver,
                });
            }
        }
    }

    no_cleanup
}
