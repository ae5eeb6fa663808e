//! Components attached to entities, and their lifecycle policies.
//!
//! Components are plain data; behavior lives in the sim crate's stages.
//! Types holding a `hecs::Entity` handle stay out of serde — the only
//! serialized surface is the drawable snapshot.

use glam::Vec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::Direction;
use crate::policy::{Component, Policy, Timed};
use crate::types::{Bounds, Expiry, Rgba};

macro_rules! policy {
    ($ty:ty, $p:expr) => {
        impl Component for $ty {
            const POLICY: Policy = $p;
        }
    };
}

macro_rules! timed {
    ($($ty:ty),+ $(,)?) => {$(
        impl Timed for $ty {
            fn expiry(&self) -> &Expiry {
                &self.expiry
            }
            fn expiry_mut(&mut self) -> &mut Expiry {
                &mut self.expiry
            }
        }
    )+};
}

pub(crate) use policy;

// ---- World records ----

/// The play field and terminal state. Exactly one per world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub bounds: Bounds,
    pub over: bool,
    pub stage: u32,
}
policy!(GameState, Policy::data().unique().required());

impl GameState {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            over: false,
            stage: 1,
        }
    }
}

/// Screen geometry shared by spawn factories and the stage director.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub screen: Vec2,
    pub tile: f32,
}
policy!(GameConfig, Policy::data().unique().required());

// ---- Spatial ----

/// Placement in the play field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub bounds: Bounds,
}
policy!(Position, Policy::data());

/// Participates in collision resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider;
policy!(Collider, Policy::data());

/// Base movement speeds (per-axis magnitudes). Reads go through the
/// store's transform hook, so effects can rescale speed without
/// touching the stored value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    pub speeds: Vec2,
}
policy!(Mobility, Policy::data());

// ---- Combat ----

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub max: i32,
    pub current: i32,
}
policy!(Health, Policy::data());

impl Health {
    pub fn new(max: i32) -> Self {
        Self { max, current: max }
    }
}

/// Damage dealt on contact, attributed to this entity as dealer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContactDamage {
    pub amount: i32,
}
policy!(ContactDamage, Policy::data());

/// Ability to fire projectiles in a fixed direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub direction: Direction,
}
policy!(Weapon, Policy::data());

/// A fired projectile, remembering who shot it.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub shooter: Entity,
    pub direction: Direction,
}
policy!(Projectile, Policy::data());

/// Points awarded to whoever destroys this entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounty {
    pub points: i32,
    pub multiplier: i32,
}
policy!(Bounty, Policy::data());

impl Bounty {
    pub fn new(points: i32) -> Self {
        Self {
            points,
            multiplier: 1,
        }
    }
}

// ---- Presentation ----

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub color: Rgba,
}
policy!(Sprite, Policy::data());

/// Text content for UI elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub color: Rgba,
}
policy!(Label, Policy::data());

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Rgba::WHITE,
        }
    }
}

/// Rendered in the UI overlay pass, after all world elements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UiNode;
policy!(UiNode, Policy::data());

// ---- Markers ----

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;
policy!(Obstacle, Policy::data());

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;
policy!(Pickup, Policy::data());

/// Input-unresponsive (set on the player at game over).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dormant;
policy!(Dormant, Policy::data());

/// Flagged for destruction in the pipeline's end-of-tick sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Doomed;
policy!(Doomed, Policy::data());

/// Exists only on the title screen; removed when stage 1 loads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TitleScreen;
policy!(TitleScreen, Policy::data());

/// The block whose destruction starts the game proper.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StartTrigger;
policy!(StartTrigger, Policy::data().unique().required());

// ---- Player ----

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;
policy!(Player, Policy::data().unique());

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Score {
    pub value: i32,
}
policy!(Score, Policy::data());

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lives {
    pub count: i32,
}
policy!(Lives, Policy::data());

/// UI element showing the player's score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreReadout;
policy!(ScoreReadout, Policy::data().unique());

/// UI element showing the player's remaining lives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LivesReadout;
policy!(LivesReadout, Policy::data().unique());

// ---- Swarm ----

/// The swarm's group record; bounds are recomputed from member
/// positions, never authoritative.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Swarm {
    pub bounds: Bounds,
}
policy!(Swarm, Policy::data().unique());

/// Membership in the swarm, pointing back at the group entity.
#[derive(Debug, Clone, Copy)]
pub struct SwarmMember {
    pub swarm: Entity,
}
policy!(SwarmMember, Policy::data());

/// Tags the member currently on the swarm's left boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwarmLeftmost;
policy!(SwarmLeftmost, Policy::data());

/// Tags the member currently on the swarm's right boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwarmRightmost;
policy!(SwarmRightmost, Policy::data());

/// The independently roaming hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ufo;
policy!(Ufo, Policy::data());

// ---- Effects ----

/// Swarm movement state machine plus its cadence timer. The expiry
/// timer is the cadence gate: restarted with the population-scaled
/// interval after every beat, never used for removal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwarmCadence {
    pub direction: Direction,
    /// Horizontal direction to resume after a down-step.
    pub queued: Direction,
    pub expiry: Expiry,
}
policy!(SwarmCadence, Policy::effect().no_stack());

/// Continuous drift toward a target point, applied every tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrajectoryEffect {
    pub target: Vec2,
    pub expiry: Expiry,
}
policy!(TrajectoryEffect, Policy::effect());

impl TrajectoryEffect {
    pub fn toward(target: Vec2) -> Self {
        Self {
            target,
            expiry: Expiry::never(),
        }
    }
}

/// An in-flight attack, tied to the projectile it launched. Expires on
/// its optional timer or as soon as the projectile is gone.
#[derive(Debug, Clone, Copy)]
pub struct AttackEffect {
    pub projectile: Entity,
    pub expiry: Expiry,
}
policy!(AttackEffect, Policy::effect().stacking());

/// Swarm-wide cooldown between attacker selections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwarmAttackCooldown {
    pub expiry: Expiry,
}
policy!(SwarmAttackCooldown, Policy::effect().stacking());

/// World-level cooldown gating the next UFO spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UfoSpawnCooldown {
    pub expiry: Expiry,
}
policy!(UfoSpawnCooldown, Policy::effect().stacking());

/// Per-UFO cooldown so only one pending attack exists at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UfoAttackCooldown {
    pub expiry: Expiry,
}
policy!(UfoAttackCooldown, Policy::effect().stacking());

/// Speed boost granted while a collected pickup is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupBoost {
    pub expiry: Expiry,
}
policy!(PickupBoost, Policy::effect());

/// World-level cooldown gating the next pickup spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupSpawnCooldown {
    pub expiry: Expiry,
}
policy!(PickupSpawnCooldown, Policy::effect());

timed!(
    SwarmCadence,
    TrajectoryEffect,
    AttackEffect,
    SwarmAttackCooldown,
    UfoSpawnCooldown,
    UfoAttackCooldown,
    PickupBoost,
    PickupSpawnCooldown,
);
