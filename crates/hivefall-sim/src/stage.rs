//! Stage director: turns declarative symbol grids into entities and
//! handles stage-to-stage transitions.

use tracing::info;

use hivefall_core::components::{GameConfig, SwarmCadence, SwarmMember};
use hivefall_core::content::Layout;
use hivefall_core::types::Bounds;
use hivefall_store::Store;

use crate::spawn;

/// Instantiate a stage layout. Tile size derives from the layout's own
/// column count so every grid spans the full screen width. Unrecognized
/// symbols are skipped silently.
pub fn build(store: &mut Store, layout: Layout) {
    build_with(store, layout, spawn::stage_factory);
}

/// Instantiate the UI overlay layout.
pub fn build_ui(store: &mut Store, layout: Layout) {
    build_with(store, layout, spawn::ui_factory);
}

fn build_with(
    store: &mut Store,
    layout: Layout,
    factory_for: fn(char) -> Option<spawn::Factory>,
) {
    let Some((_, config)) = store.unique_read::<GameConfig>() else {
        return;
    };
    let columns = layout.first().map_or(0, |row| row.len());
    if columns == 0 {
        return;
    }
    let tile = config.screen.x / columns as f32;

    for (row, line) in layout.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            let Some(factory) = factory_for(symbol) else {
                continue;
            };
            factory(
                store,
                Bounds::new(col as f32 * tile, row as f32 * tile, tile, tile),
            );
        }
    }
}

/// Tear down swarm state and load new stage content: the cadence record
/// is cleared and any remaining swarm members despawn before the layout
/// builds.
pub fn load(store: &mut Store, layout: Layout) {
    store.clear::<SwarmCadence>();
    for member in store.entities::<SwarmMember>() {
        store.despawn(member);
    }
    build(store, layout);
    info!("stage content loaded");
}
