//! Single-tick event components.
//!
//! Every type here carries an ephemeral policy: the pipeline's global
//! sweep purges all instances after the last stage, consumed or not.

use glam::Vec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::components::policy;
use crate::enums::{Action, Direction, GameSignal, UiSignal};
use crate::policy::{Component, Policy};
use crate::types::Bounds;

/// One decoded player input for this tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerInput {
    pub movement: Option<Direction>,
    pub action: Option<Action>,
}
policy!(PlayerInput, Policy::event());

impl PlayerInput {
    pub fn movement(movement: Direction) -> Self {
        Self {
            movement: Some(movement),
            action: None,
        }
    }

    pub fn action(action: Action) -> Self {
        Self {
            movement: None,
            action: Some(action),
        }
    }
}

/// One movement contribution for this tick; contributions on an entity
/// are summed into a single net displacement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveIntent {
    pub delta: Vec2,
}
policy!(MoveIntent, Policy::event());

/// Resolved coordinates for the position-commit stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub coords: Vec2,
}
policy!(PositionUpdate, Policy::event().no_stack());

/// Candidate bounding box handed to the collision resolver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionProbe {
    pub bounds: Bounds,
}
policy!(CollisionProbe, Policy::event().no_stack());

/// Request to fire this entity's weapon. `timeout` bounds the lifetime
/// of the resulting attack effect; `None` means the effect lives until
/// its projectile is gone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackEvent {
    pub timeout: Option<f32>,
}
policy!(AttackEvent, Policy::event());

/// Contact damage signal, attributing the originating entity.
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub dealer: Entity,
}
policy!(DamageEvent, Policy::event());

/// Health delta (negative for damage), attributed to the dealer.
#[derive(Debug, Clone, Copy)]
pub struct HealthDelta {
    pub amount: i32,
    pub dealer: Entity,
}
policy!(HealthDelta, Policy::event());

/// Health crossed to zero or below.
#[derive(Debug, Clone, Copy)]
pub struct DeathEvent {
    pub killed_by: Option<Entity>,
}
policy!(DeathEvent, Policy::event());

/// Credit the holder with the bounty recorded on `bounty_of`.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEvent {
    pub bounty_of: Entity,
}
policy!(ScoreEvent, Policy::event());

/// The player entity died this tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerDeath;
policy!(PlayerDeath, Policy::event());

/// World-level control signal for the stage director.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameEvent {
    pub signal: GameSignal,
}
policy!(GameEvent, Policy::event());

/// UI refresh request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UiEvent {
    pub signal: UiSignal,
}
policy!(UiEvent, Policy::event());

/// The holder touched a pickup this tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupEvent;
policy!(PickupEvent, Policy::event());
