//! Game stage: the stage director's reactor for quit, game-over, and
//! stage-advance signals.

use hecs::Entity;
use tracing::info;

use hivefall_core::components::{Dormant, GameState, Player, StartTrigger, TitleScreen};
use hivefall_core::content;
use hivefall_core::enums::GameSignal;
use hivefall_core::events::GameEvent;
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};
use crate::stage;

pub fn run(store: &mut Store) -> CleanupFn {
    let mut signals: Vec<(Entity, GameSignal)> = Vec::new();
    for entity in store.entities::<GameEvent>() {
        for event in store.instances::<GameEvent>(entity) {
            signals.push((entity, event.signal));
        }
    }

    for (raiser, signal) in signals {
        match signal {
            GameSignal::Quit => {
                info!("quit requested");
                if let Some(game) = store.unique::<GameState>() {
                    store.mutate::<GameState>(game, |state| state.over = true);
                }
            }
            GameSignal::GameOver => {
                info!("game over");
                stage::load(store, content::GAME_OVER);
                // The player stays, but stops responding to input.
                if let Some(player) = store.unique::<Player>() {
                    store.add(player, Dormant);
                }
            }
            GameSignal::NextStage => advance_stage(store, raiser),
        }
    }

    no_cleanup
}

/// Raised by the start trigger: begin at stage 1 and strip the title
/// screen. Raised by a cleared swarm: move on to the next stage.
fn advance_stage(store: &mut Store, raiser: Entity) {
    if store.unique::<StartTrigger>() == Some(raiser) {
        if let Some(game) = store.unique::<GameState>() {
            store.mutate::<GameState>(game, |state| state.stage = 1);
        }
        stage::load(store, content::stage(1));
        for leftover in store.entities::<TitleScreen>() {
            store.despawn(leftover);
        }
        info!("game started");
    } else {
        let next = store
            .unique_read::<GameState>()
            .map(|(_, game)| game.stage + 1)
            .unwrap_or(1);
        if let Some(game) = store.unique::<GameState>() {
            store.mutate::<GameState>(game, |state| state.stage = next);
        }
        stage::load(store, content::stage(next));
        info!(stage = next, "stage cleared");
    }
}
