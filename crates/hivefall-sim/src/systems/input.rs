//! Input stage: turns decoded player inputs into movement intents,
//! attack requests, and the quit signal.

use glam::Vec2;

use hivefall_core::components::{Dormant, GameState, Mobility};
use hivefall_core::constants::PLAYER_ATTACK_TIMEOUT_SECS;
use hivefall_core::enums::{Action, Direction, GameSignal};
use hivefall_core::events::{AttackEvent, GameEvent, MoveIntent, PlayerInput};
use hivefall_store::Store;

use super::{no_cleanup, CleanupFn};

pub fn run(store: &mut Store) -> CleanupFn {
    let dt = store.dt();

    for entity in store.entities::<PlayerInput>() {
        let dormant = store.has::<Dormant>(entity);
        let base_speed = store
            .read::<Mobility>(entity)
            .map(|mobility| mobility.speeds.x * dt)
            .unwrap_or(0.0);

        for input in store.instances::<PlayerInput>(entity) {
            match input.action {
                Some(Action::Shoot) if !dormant => {
                    store.add(entity, AttackEvent {
                        timeout: Some(PLAYER_ATTACK_TIMEOUT_SECS),
                    });
                }
                Some(Action::Quit) => {
                    // Quit works even when the player is dormant.
                    if let Some(game) = store.unique::<GameState>() {
                        store.add(game, GameEvent {
                            signal: GameSignal::Quit,
                        });
                    }
                }
                _ => {}
            }

            if dormant {
                continue;
            }
            match input.movement {
                Some(Direction::Left) => {
                    store.add(entity, MoveIntent {
                        delta: Vec2::new(-base_speed, 0.0),
                    });
                }
                Some(Direction::Right) => {
                    store.add(entity, MoveIntent {
                        delta: Vec2::new(base_speed, 0.0),
                    });
                }
                _ => {}
            }
        }
    }

    no_cleanup
}
