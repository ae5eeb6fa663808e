//! UI reactor: refresh signals rewrite readout label text. Display only;
//! gameplay state is untouched.

use hivefall_core::components::{Label, Lives, LivesReadout, Player, Score, ScoreReadout};
use hivefall_core::enums::UiSignal;
use hivefall_core::events::UiEvent;
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    let Some(player) = store.unique::<Player>() else {
        return no_cleanup;
    };

    for entity in store.entities::<UiEvent>() {
        for event in store.instances::<UiEvent>(entity) {
            match event.signal {
                UiSignal::RefreshScore => {
                    let Some(score) = store.read::<Score>(player) else {
                        continue;
                    };
                    let Some(readout) = store.unique::<ScoreReadout>() else {
                        continue;
                    };
                    store.mutate::<Label>(readout, |label| {
                        label.text = format!("SCORE: {}", score.value);
                    });
                }
                UiSignal::RefreshLives => {
                    let Some(lives) = store.read::<Lives>(player) else {
                        continue;
                    };
                    let Some(readout) = store.unique::<LivesReadout>() else {
                        continue;
                    };
                    store.mutate::<Label>(readout, |label| {
                        label.text = format!("LIVES: {}", lives.count);
                    });
                }
            }
        }
    }

    no_cleanup
}
