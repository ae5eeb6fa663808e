//! AI stage: swarm movement and attack selection, UFO spawn and attacks.

use glam::Vec2;
use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hivefall_core::components::{
    AttackEffect, GameConfig, GameState, Mobility, Position, Swarm, SwarmAttackCooldown,
    SwarmCadence, SwarmLeftmost, SwarmMember, SwarmRightmost, Ufo, UfoAttackCooldown,
    UfoSpawnCooldown,
};
use hivefall_core::constants::{
    MAX_CONCURRENT_ATTACKERS, SWARM_ATTACK_COOLDOWN_MAX_SECS, SWARM_BASE_INTERVAL,
    SWARM_FULL_STRENGTH, UFO_ATTACK_MAX_INTERVAL_SECS, UFO_SPAWN_COOLDOWN_SECS,
};
use hivefall_core::enums::{Direction, GameSignal};
use hivefall_core::events::{AttackEvent, GameEvent, MoveIntent};
use hivefall_core::types::{Bounds, Expiry, Timer};
use hivefall_store::{cleanup_effect, Store};

use super::CleanupFn;
use crate::spawn;

pub fn run(store: &mut Store, rng: &mut ChaCha8Rng) -> CleanupFn {
    update_swarm(store);
    update_ufo(store, rng);

    select_swarm_attacker(store, rng);
    ufo_attacks(store, rng);

    cleanup
}

fn cleanup(store: &mut Store) {
    cleanup_effect::<SwarmAttackCooldown>(store);
    cleanup_effect::<UfoSpawnCooldown>(store);
    cleanup_effect::<UfoAttackCooldown>(store);
}

/// Difficulty scalar derived from the current stage number.
pub fn difficulty_modifier(store: &Store) -> f32 {
    let stage = store
        .unique_read::<GameState>()
        .map(|(_, game)| game.stage)
        .unwrap_or(1);
    (stage as f32 / 2.0).max(1.0)
}

/// Cadence interval for the given population: shortens monotonically as
/// members are eliminated.
pub fn cadence_interval(members: usize) -> f32 {
    let diff = (SWARM_FULL_STRENGTH - members as f32).max(1.0);
    SWARM_BASE_INTERVAL / (diff / 2.0)
}

/// One step of motion in `direction`. Horizontal speed scales with
/// difficulty; vertical does not.
fn directed_speed(store: &Store, speeds: Vec2, direction: Direction) -> Vec2 {
    let modifier = difficulty_modifier(store);
    match direction {
        Direction::Left => Vec2::new(-speeds.x * modifier, 0.0),
        Direction::Right => Vec2::new(speeds.x * modifier, 0.0),
        Direction::Down => Vec2::new(0.0, speeds.y),
        Direction::Up => Vec2::new(0.0, -speeds.y),
    }
}

// ---- Swarm movement ----

fn update_swarm(store: &mut Store) {
    for swarm in store.entities::<SwarmCadence>() {
        if swarm_hits_field_edge(store, swarm) {
            shift_swarm_down(store, swarm);
        }

        if swarm_should_step(store, swarm) {
            step_swarm(store, swarm);
            rearm_cadence(store, swarm);
        }
    }
}

/// Queue a down-step and remember the opposite horizontal direction.
fn shift_swarm_down(store: &mut Store, swarm: Entity) {
    store.mutate::<SwarmCadence>(swarm, |cadence| match cadence.direction {
        Direction::Left => {
            cadence.direction = Direction::Down;
            cadence.queued = Direction::Right;
        }
        Direction::Right => {
            cadence.direction = Direction::Down;
            cadence.queued = Direction::Left;
        }
        _ => {}
    });
}

fn swarm_hits_field_edge(store: &mut Store, swarm: Entity) -> bool {
    // Boundary markers vanish with their owners; recompute when either
    // side is untagged.
    if !store.exists::<SwarmLeftmost>() || !store.exists::<SwarmRightmost>() {
        refresh_swarm_bounds(store, swarm);
    }

    let Some(cadence) = store.read::<SwarmCadence>(swarm) else {
        return false;
    };
    match cadence.direction {
        Direction::Left | Direction::Right => {
            edge_member_would_escape(store, swarm, cadence.direction)
        }
        _ => false,
    }
}

/// Recompute the group's bounds from member positions and tag the
/// extremal members. An empty swarm raises the stage-advance signal
/// instead.
fn refresh_swarm_bounds(store: &mut Store, swarm: Entity) {
    let members = store.entities::<SwarmMember>();
    if members.is_empty() {
        store.add(swarm, GameEvent {
            signal: GameSignal::NextStage,
        });
        return;
    }

    // Union of member boxes: minimum over min-corners, maximum over
    // max-corners (position + size).
    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    for &member in &members {
        let Some(position) = store.read::<Position>(member) else {
            continue;
        };
        let [x0, y0, x1, y1] = position.bounds.corners();
        min.x = min.x.min(x0);
        min.y = min.y.min(y0);
        max.x = max.x.max(x1);
        max.y = max.y.max(y1);
    }

    let bounds = Bounds::from_parts(min, max - min);
    store.mutate::<Swarm>(swarm, |group| group.bounds = bounds);

    for &member in &members {
        let Some(position) = store.read::<Position>(member) else {
            continue;
        };
        let [x0, _, x1, _] = position.bounds.corners();
        if x0 <= min.x {
            store.add(member, SwarmLeftmost);
        }
        if x1 >= max.x {
            store.add(member, SwarmRightmost);
        }
    }
}

/// Project one step for the extremal member on the moving side and test
/// whether it would cross the play-field edge.
fn edge_member_would_escape(store: &Store, swarm: Entity, direction: Direction) -> bool {
    let Some((_, game)) = store.unique_read::<GameState>() else {
        return false;
    };
    let Some(mobility) = store.read::<Mobility>(swarm) else {
        return false;
    };

    let edge_members = match direction {
        Direction::Left => store.entities::<SwarmLeftmost>(),
        _ => store.entities::<SwarmRightmost>(),
    };
    let Some(&edge) = edge_members.first() else {
        return false;
    };
    let Some(position) = store.read::<Position>(edge) else {
        return false;
    };

    let step = directed_speed(store, mobility.speeds, direction);
    position.bounds.translated(step).escapes(&game.bounds)
}

fn swarm_should_step(store: &Store, swarm: Entity) -> bool {
    store
        .find::<SwarmCadence>(swarm, |cadence| {
            cadence.expiry.timer.is_some_and(|timer| timer.has_elapsed())
        })
        .is_some()
}

/// Issue this beat's move intent to every member.
fn step_swarm(store: &mut Store, swarm: Entity) {
    let Some(cadence) = store.read::<SwarmCadence>(swarm) else {
        return;
    };
    let Some(mobility) = store.read::<Mobility>(swarm) else {
        return;
    };
    let members = store.entities::<SwarmMember>();
    if members.is_empty() {
        return;
    }

    let step = directed_speed(store, mobility.speeds, cadence.direction);
    if step == Vec2::ZERO {
        return;
    }
    for member in members {
        store.add(member, MoveIntent { delta: step });
    }
}

/// Resume the queued direction after a down-step and rearm the cadence
/// timer with the population-scaled interval.
fn rearm_cadence(store: &mut Store, swarm: Entity) {
    let members = store.entities::<SwarmMember>().len();
    if members == 0 {
        return;
    }

    let interval = cadence_interval(members);
    store.mutate::<SwarmCadence>(swarm, |cadence| {
        if cadence.direction == Direction::Down {
            cadence.direction = cadence.queued;
        }
        match cadence.expiry.timer.as_mut() {
            Some(timer) => timer.restart(interval),
            None => cadence.expiry.timer = Some(Timer::new(interval)),
        }
    });
}

// ---- UFO ----

/// Spawn a roamer when none exists and the spawn cooldown has cleared.
fn update_ufo(store: &mut Store, rng: &mut ChaCha8Rng) {
    let Some(world) = store.unique::<GameConfig>() else {
        return;
    };
    if store.has::<UfoSpawnCooldown>(world) {
        return;
    }
    if store.exists::<Ufo>() {
        return;
    }

    spawn::ufo(store, rng);
    store.add(world, UfoSpawnCooldown {
        expiry: Expiry::after(UFO_SPAWN_COOLDOWN_SECS),
    });
}

// ---- Attacks ----

/// Pick a random non-attacking member to attack, throttled by the
/// swarm-wide cooldown and the concurrent-attacker cap.
fn select_swarm_attacker(store: &mut Store, rng: &mut ChaCha8Rng) {
    let Some(swarm) = store.unique::<Swarm>() else {
        return;
    };

    if store.has::<SwarmAttackCooldown>(swarm) {
        let due = store
            .find::<SwarmAttackCooldown>(swarm, |cooldown| cooldown.expiry.is_due())
            .is_some();
        if !due {
            return;
        }
        store.remove::<SwarmAttackCooldown>(swarm);
    }

    let attacking = store.entities2::<SwarmMember, AttackEffect>();
    if attacking.len() >= MAX_CONCURRENT_ATTACKERS {
        return;
    }

    let mut pool = store.entities::<SwarmMember>();
    pool.retain(|member| !attacking.contains(member));
    if pool.is_empty() {
        return;
    }

    let chosen = pool[rng.gen_range(0..pool.len())];
    store.add(chosen, AttackEvent { timeout: None });

    let delay = rng.gen_range(0.0..SWARM_ATTACK_COOLDOWN_MAX_SECS);
    store.add(swarm, SwarmAttackCooldown {
        expiry: Expiry::after(delay),
    });
}

/// Each live roamer attacks on its own random interval, scaled down by
/// difficulty, with one pending attack at a time.
fn ufo_attacks(store: &mut Store, rng: &mut ChaCha8Rng) {
    for ufo in store.entities::<Ufo>() {
        if store.has::<UfoAttackCooldown>(ufo) {
            continue;
        }

        let modifier = difficulty_modifier(store);
        let interval = rng.gen_range(0.0..UFO_ATTACK_MAX_INTERVAL_SECS) / modifier;
        store.add(ufo, AttackEvent { timeout: None });
        store.add(ufo, UfoAttackCooldown {
            expiry: Expiry::after(interval),
        });
    }
}
