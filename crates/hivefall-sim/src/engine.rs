//! The simulation engine: owns the store and RNG, runs the stage
//! pipeline once per `advance_tick`, and serves drawable snapshots.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hivefall_core::components::{
    Doomed, GameState, Mobility, PickupBoost, Player, Projectile,
};
use hivefall_core::constants::{PICKUP_BOOST_SPEED_BONUS, SCREEN_HEIGHT, SCREEN_WIDTH};
use hivefall_core::content;
use hivefall_core::enums::{Action, Direction, InputSymbol};
use hivefall_core::events::PlayerInput;
use hivefall_core::types::{Drawable, SimTime};
use hivefall_store::Store;

use crate::systems::{self, CleanupFn};
use crate::{drawables, registry, spawn, stage};

/// Configuration for starting a new simulation.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    pub width: f32,
    pub height: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// The simulation engine. Boots onto the title screen; the start block
/// transitions into stage 1 when shot.
pub struct Engine {
    store: Store,
    rng: ChaCha8Rng,
    time: SimTime,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let mut store = Store::new();
        registry::register_all(&mut store);

        let screen = Vec2::new(config.width, config.height);
        let columns = content::TITLE[0].len() as f32;
        spawn::game_world(&mut store, screen, screen.x / columns);
        register_speed_boost_hook(&mut store);

        stage::build(&mut store, content::TITLE);
        stage::build_ui(&mut store, content::UI);

        Self {
            store,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: SimTime::default(),
        }
    }

    /// Advance the world by exactly one tick. Returns `false` once the
    /// terminal flag is set and the outer driver should stop.
    pub fn advance_tick(&mut self, inputs: &[InputSymbol], dt: f32) -> bool {
        self.store.set_dt(dt);
        self.store.advance_timers();
        self.register_inputs(inputs);

        self.run_stages();

        // Global sweep: every ephemeral component goes, then entities
        // flagged by the death stage are destroyed with all their
        // components.
        self.store.clear_events();
        for entity in self.store.entities::<Doomed>() {
            self.store.despawn(entity);
        }

        self.time.advance(dt);

        !self
            .store
            .unique_read::<GameState>()
            .map(|(_, game)| game.over)
            .unwrap_or(true)
    }

    /// Drawable snapshot: world elements first, UI overlay last.
    pub fn drawables(&self) -> Vec<Drawable> {
        drawables::collect(&self.store)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only store access (tests, diagnostics).
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable store access (tests, scenario setup).
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    fn register_inputs(&mut self, inputs: &[InputSymbol]) {
        let Some(player) = self.store.unique::<Player>() else {
            return;
        };
        for input in inputs {
            let event = match input {
                InputSymbol::Shoot => PlayerInput::action(Action::Shoot),
                InputSymbol::Quit => PlayerInput::action(Action::Quit),
                InputSymbol::Left => PlayerInput::movement(Direction::Left),
                InputSymbol::Right => PlayerInput::movement(Direction::Right),
                // Up/Down/Menu mean nothing to this game.
                _ => continue,
            };
            self.store.add(player, event);
        }
    }

    /// Run all stages in pipeline order, then their cleanups in the same
    /// order.
    fn run_stages(&mut self) {
        let store = &mut self.store;
        let cleanups: [CleanupFn; 14] = [
            systems::ai::run(store, &mut self.rng),
            systems::input::run(store),
            systems::attack::run(store),
            systems::movement::run(store),
            systems::position::run(store),
            systems::collision::run(store),
            systems::damage::run(store),
            systems::health::run(store),
            systems::death::run(store),
            systems::score::run(store),
            systems::player::run(store),
            systems::item::run(store, &mut self.rng),
            systems::ui::run(store),
            systems::game::run(store),
        ];

        for cleanup in cleanups {
            cleanup(store);
        }
    }
}

/// Read hook on `Mobility`: while the player holds an active pickup
/// boost, the player's own projectiles read with extra upward speed.
fn register_speed_boost_hook(store: &mut Store) {
    store.register_transform::<Mobility>(|store, entity, mut mobility| {
        let Some(projectile) = store.read::<Projectile>(entity) else {
            return mobility;
        };
        let Some(player) = store.unique::<Player>() else {
            return mobility;
        };
        if projectile.shooter != player || !store.has::<PickupBoost>(player) {
            return mobility;
        }
        mobility.speeds.y += PICKUP_BOOST_SPEED_BONUS;
        mobility
    });
}
