//! Death stage: routes death signals to their consequences and flags the
//! dying entity for the end-of-tick removal sweep.

use tracing::info;

use hivefall_core::components::{Bounty, Doomed, Player, StartTrigger};
use hivefall_core::enums::GameSignal;
use hivefall_core::events::{DeathEvent, GameEvent, PlayerDeath, ScoreEvent};
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    let player = store.unique::<Player>();
    let start_trigger = store.unique::<StartTrigger>();

    for entity in store.entities::<DeathEvent>() {
        // The player is never removed outright; the player reactor
        // decides what losing a life means.
        if Some(entity) == player {
            for event in store.instances::<DeathEvent>(entity) {
                info!(killed_by = ?event.killed_by, "player killed");
            }
            store.add(entity, PlayerDeath);
            continue;
        }

        if Some(entity) == start_trigger {
            store.add(entity, GameEvent {
                signal: GameSignal::NextStage,
            });
        }

        if store.has::<Bounty>(entity) {
            for event in store.instances::<DeathEvent>(entity) {
                if let Some(killer) = event.killed_by {
                    store.add(killer, ScoreEvent { bounty_of: entity });
                }
            }
        }

        // Actual destruction happens once, in the pipeline's sweep.
        store.add(entity, Doomed);
    }

    no_cleanup
}
