//! Pipeline stages, one module per stage, run in fixed order each tick:
//! AI → Input → Attack → Movement → Position → Collision → Damage →
//! Health → Death → Score → Player → Item → UI → Game.
//!
//! Each stage's `run` returns a cleanup callback; the pipeline executes
//! all of them after the last stage, before the global event sweep.
//! Stages collect entity id lists before operating, so no store borrow
//! is ever held across a mutation.

use hivefall_store::Store;

pub mod ai;
pub mod attack;
pub mod collision;
pub mod damage;
pub mod death;
pub mod game;
pub mod health;
pub mod input;
pub mod item;
pub mod movement;
pub mod player;
pub mod position;
pub mod score;
pub mod ui;

/// End-of-tick cleanup hook returned by every stage.
pub type CleanupFn = fn(&mut Store);

/// Cleanup for stages with nothing to expire.
pub fn no_cleanup(_store: &mut Store) {}
