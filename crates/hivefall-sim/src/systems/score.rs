//! Score stage: credits recorded bounties to killers.

use hivefall_core::components::{Bounty, Player, Score};
use hivefall_core::enums::UiSignal;
use hivefall_core::events::{ScoreEvent, UiEvent};
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    let player = store.unique::<Player>();

    for entity in store.entities::<ScoreEvent>() {
        for event in store.instances::<ScoreEvent>(entity) {
            let Some(bounty) = store.read::<Bounty>(event.bounty_of) else {
                continue;
            };
            store.mutate::<Score>(entity, |score| {
                score.value += bounty.points * bounty.multiplier;
            });
            if Some(entity) == player {
                store.add(entity, UiEvent {
                    signal: UiSignal::RefreshScore,
                });
            }
        }
    }

    no_cleanup
}
