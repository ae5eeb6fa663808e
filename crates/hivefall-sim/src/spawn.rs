//! Entity spawn factories.
//!
//! Each stage/UI layout symbol maps to one of these; the sim's AI also
//! calls the UFO and projectile factories directly.

use glam::Vec2;
use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use hivefall_core::components::*;
use hivefall_core::constants::*;
use hivefall_core::enums::Direction;
use hivefall_core::types::{Bounds, Expiry, Rgba};
use hivefall_store::Store;

/// A layout-driven factory: takes the tile's pixel rect.
pub type Factory = fn(&mut Store, Bounds) -> Entity;

/// Stage-layout symbol table. Unrecognized symbols map to `None` and are
/// skipped by the builder.
pub fn stage_factory(symbol: char) -> Option<Factory> {
    match symbol {
        'P' => Some(player),
        'S' => Some(swarm_member_small),
        'M' => Some(swarm_member_medium),
        'L' => Some(swarm_member_large),
        'H' => Some(hive),
        '@' => Some(red_block),
        '!' => Some(start_block),
        '#' => Some(green_block),
        '%' => Some(title_block_small),
        '&' => Some(title_block),
        _ => None,
    }
}

/// UI-layout symbol table.
pub fn ui_factory(symbol: char) -> Option<Factory> {
    match symbol {
        'S' => Some(score_readout),
        'L' => Some(lives_readout),
        _ => None,
    }
}

/// The world record entity: play field, screen geometry, and the initial
/// world-level cooldowns.
pub fn game_world(store: &mut Store, screen: Vec2, tile: f32) -> Entity {
    let entity = store.spawn();
    debug!(?screen, tile, "create world");
    store.add(entity, GameConfig { screen, tile });
    store.add(
        entity,
        GameState::new(Bounds::from_parts(Vec2::ZERO, screen)),
    );
    store.add(entity, UfoSpawnCooldown {
        expiry: Expiry::after(UFO_INITIAL_SPAWN_COOLDOWN_SECS),
    });
    store.add(entity, PickupSpawnCooldown {
        expiry: Expiry::after(PICKUP_SPAWN_COOLDOWN_SECS),
    });
    entity
}

/// The swarm group entity. Replaces any previous group wholesale; its
/// speeds are derived from the screen, not the tile rect.
pub fn hive(store: &mut Store, _rect: Bounds) -> Entity {
    if let Some(previous) = store.unique::<Swarm>() {
        store.despawn(previous);
    }
    store.clear::<SwarmCadence>();

    let screen = store
        .unique_read::<GameConfig>()
        .map(|(_, config)| config.screen)
        .unwrap_or(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT));

    let entity = store.spawn();
    debug!("create swarm group");
    store.add(entity, Swarm::default());
    store.add(entity, SwarmCadence {
        direction: Direction::Right,
        queued: Direction::Right,
        expiry: Expiry::after(SWARM_BASE_INTERVAL),
    });
    store.add(entity, Mobility {
        speeds: Vec2::new(screen.x / 200.0, screen.y / 50.0),
    });
    entity
}

pub fn player(store: &mut Store, rect: Bounds) -> Entity {
    let [x, y] = [rect.position.x, rect.position.y];
    let [w, h] = [rect.size.x, rect.size.y];

    let entity = store.spawn();
    debug!("create player");
    store.add(entity, Collider);
    store.add(entity, Player);
    store.add(entity, Position {
        bounds: Bounds::new(x - w / 4.0, y + h / 2.0, w * 1.5, h / 2.0),
    });
    store.add(entity, Sprite {
        color: Rgba::new(0, 255, 0, 255),
    });
    store.add(entity, Mobility {
        speeds: Vec2::splat(w * 10.0),
    });
    store.add(entity, Weapon {
        direction: Direction::Up,
    });
    store.add(entity, Health::new(10));
    store.add(entity, ContactDamage { amount: 25 });
    store.add(entity, Score::default());
    store.add(entity, Lives { count: 3 });
    entity
}

fn swarm_member(store: &mut Store, rect: Bounds) -> Entity {
    let swarm = match store.unique::<Swarm>() {
        Some(swarm) => swarm,
        None => hive(store, rect),
    };

    let [x, y] = [rect.position.x, rect.position.y];
    let [w, h] = [rect.size.x, rect.size.y];
    let pad = 7.0;

    let entity = store.spawn();
    store.add(entity, Collider);
    store.add(entity, SwarmMember { swarm });
    store.add(entity, Position {
        bounds: Bounds::new(x - pad, y, w + pad, h),
    });
    store.add(entity, Mobility {
        speeds: Vec2::new(w / 2.0, w),
    });
    store.add(entity, Weapon {
        direction: Direction::Down,
    });
    store.add(entity, Health::new(10));
    store.add(entity, ContactDamage { amount: 25 });
    entity
}

pub fn swarm_member_small(store: &mut Store, rect: Bounds) -> Entity {
    let entity = swarm_member(store, rect);
    store.add(entity, Bounty::new(10));
    store.add(entity, Sprite {
        color: Rgba::new(205, 205, 205, 255),
    });
    entity
}

pub fn swarm_member_medium(store: &mut Store, rect: Bounds) -> Entity {
    let entity = swarm_member(store, rect);
    store.add(entity, Bounty::new(20));
    store.add(entity, Sprite {
        color: Rgba::new(230, 230, 230, 255),
    });
    entity
}

pub fn swarm_member_large(store: &mut Store, rect: Bounds) -> Entity {
    let entity = swarm_member(store, rect);
    store.add(entity, Bounty::new(40));
    store.add(entity, Sprite {
        color: Rgba::WHITE,
    });
    entity
}

/// The roaming hostile. Enters just off the left edge at the top row and
/// drifts across toward the far right.
pub fn ufo(store: &mut Store, rng: &mut ChaCha8Rng) -> Entity {
    let (screen, tile) = store
        .unique_read::<GameConfig>()
        .map(|(_, config)| (config.screen, config.tile))
        .unwrap_or((Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), 20.0));

    let w = tile + 15.0;
    let x = 10.0 - w;
    let y = tile / 2.0;

    let entity = store.spawn();
    debug!("ufo spawned");
    store.add(entity, Ufo);
    store.add(entity, Collider);
    store.add(entity, Position {
        bounds: Bounds::new(x, y, w, tile),
    });
    store.add(entity, Weapon {
        direction: Direction::Down,
    });
    store.add(entity, Health::new(10));
    store.add(entity, ContactDamage { amount: 100 });
    store.add(entity, Bounty::new(150));
    store.add(entity, Mobility {
        speeds: Vec2::splat(tile * 4.0),
    });
    store.add(
        entity,
        TrajectoryEffect::toward(Vec2::new(tile * screen.x, tile / 2.0)),
    );
    store.add(entity, Sprite {
        color: Rgba::new(255, 0, 0, 255),
    });
    store.add(entity, UfoAttackCooldown {
        expiry: Expiry::after(rng.gen_range(0.0..UFO_ATTACK_MAX_INTERVAL_SECS)),
    });
    entity
}

fn projectile_base(store: &mut Store, shooter_bounds: Bounds) -> Entity {
    let entity = store.spawn();
    store.add(entity, Collider);
    store.add(entity, Mobility {
        speeds: Vec2::new(0.0, shooter_bounds.size.x * 10.0),
    });
    store.add(entity, Sprite {
        color: Rgba::WHITE,
    });
    store.add(entity, Health::new(1));
    entity
}

pub fn upward_projectile(store: &mut Store, shooter: Entity, bounds: Bounds) -> Entity {
    let [x, y] = [bounds.position.x, bounds.position.y];
    let [w, h] = [bounds.size.x, bounds.size.y];
    let new_w = w / 5.0;
    let new_h = h * 2.0;
    let new_x = x + w / 2.0 - new_w / 2.0;
    let new_y = y - new_h - 1.0;

    let entity = projectile_base(store, bounds);
    store.add(entity, TrajectoryEffect::toward(Vec2::new(new_x, -10_000.0)));
    store.add(entity, Position {
        bounds: Bounds::new(new_x, new_y, new_w, new_h),
    });
    store.add(entity, Projectile {
        shooter,
        direction: Direction::Up,
    });
    entity
}

pub fn downward_projectile(store: &mut Store, shooter: Entity, bounds: Bounds) -> Entity {
    let [x, y] = [bounds.position.x, bounds.position.y];
    let [w, h] = [bounds.size.x, bounds.size.y];
    let new_w = w / 5.0;
    let new_h = h;
    let new_x = x + w / 2.0 - new_w / 2.0;
    let new_y = y + new_h;

    let entity = projectile_base(store, bounds);
    store.add(entity, TrajectoryEffect::toward(Vec2::new(new_x, 10_000.0)));
    store.add(entity, Position {
        bounds: Bounds::new(new_x, new_y + 1.0, new_w, new_h),
    });
    store.add(entity, Projectile {
        shooter,
        direction: Direction::Down,
    });
    // Shooting one down is worth a few points.
    store.add(entity, Bounty::new(10));
    entity
}

pub fn pickup(store: &mut Store, bounds: Bounds) -> Entity {
    let entity = store.spawn();
    debug!("pickup spawned");
    store.add(entity, Collider);
    store.add(entity, Health::new(1));
    store.add(entity, Sprite {
        color: Rgba::new(255, 255, 0, 255),
    });
    store.add(entity, Position { bounds });
    store.add(entity, Pickup);
    entity
}

fn obstacle_base(store: &mut Store) -> Entity {
    let entity = store.spawn();
    store.add(entity, Obstacle);
    store.add(entity, Collider);
    store.add(entity, ContactDamage { amount: 1 });
    entity
}

pub fn title_block(store: &mut Store, rect: Bounds) -> Entity {
    let entity = obstacle_base(store);
    store.add(entity, Sprite {
        color: Rgba::new(0, 255, 0, 255),
    });
    store.add(entity, Position { bounds: rect });
    store.add(entity, Health::new(50));
    store.add(entity, TitleScreen);
    entity
}

pub fn title_block_small(store: &mut Store, rect: Bounds) -> Entity {
    let entity = obstacle_base(store);
    store.add(entity, Sprite {
        color: Rgba::new(0, 255, 0, 255),
    });
    store.add(entity, Position {
        bounds: Bounds::new(
            rect.position.x,
            rect.position.y,
            rect.size.x - 5.0,
            rect.size.y,
        ),
    });
    store.add(entity, Health::new(50));
    store.add(entity, TitleScreen);
    entity
}

pub fn red_block(store: &mut Store, rect: Bounds) -> Entity {
    let entity = obstacle_base(store);
    store.add(entity, Sprite {
        color: Rgba::new(255, 0, 0, 255),
    });
    store.add(entity, Position { bounds: rect });
    store.add(entity, Health::new(1));
    store.add(entity, Bounty::new(1));
    entity
}

pub fn green_block(store: &mut Store, rect: Bounds) -> Entity {
    let entity = obstacle_base(store);
    store.add(entity, Sprite {
        color: Rgba::new(0, 255, 0, 255),
    });
    store.add(entity, Position { bounds: rect });
    store.add(entity, Health::new(100));
    entity
}

/// The block that starts the game when destroyed.
pub fn start_block(store: &mut Store, rect: Bounds) -> Entity {
    let entity = obstacle_base(store);
    store.add(entity, Sprite {
        color: Rgba::new(67, 189, 255, 255),
    });
    store.add(entity, Position { bounds: rect });
    store.add(entity, Health::new(1));
    store.add(entity, StartTrigger);
    store.add(entity, TitleScreen);
    entity
}

pub fn score_readout(store: &mut Store, rect: Bounds) -> Entity {
    let entity = store.spawn();
    store.add(entity, Position { bounds: rect });
    store.add(entity, Sprite {
        color: Rgba::new(0, 0, 0, 0),
    });
    store.add(entity, UiNode);
    store.add(entity, Label::new("SCORE: 0"));
    store.add(entity, ScoreReadout);
    entity
}

pub fn lives_readout(store: &mut Store, rect: Bounds) -> Entity {
    let entity = store.spawn();
    store.add(entity, Position { bounds: rect });
    store.add(entity, Sprite {
        color: Rgba::new(0, 0, 0, 0),
    });
    store.add(entity, UiNode);
    store.add(entity, Label::new("LIVES: 3"));
    store.add(entity, LivesReadout);
    entity
}
