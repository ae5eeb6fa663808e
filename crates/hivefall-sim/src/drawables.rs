//! Drawable snapshot for the outer driver.

use hivefall_core::components::{Label, Position, Sprite, UiNode};
use hivefall_core::types::Drawable;
use hivefall_store::Store;

/// Collect everything renderable: world elements first, UI elements
/// last, so the UI overlays render on top. UI nodes carry their label
/// text and the label's color.
pub fn collect(store: &Store) -> Vec<Drawable> {
    let mut world = Vec::new();
    let mut ui = Vec::new();

    for entity in store.entities2::<Sprite, Position>() {
        let Some(sprite) = store.read::<Sprite>(entity) else {
            continue;
        };
        let Some(position) = store.read::<Position>(entity) else {
            continue;
        };

        let bounds = position.bounds;
        let mut drawable = Drawable {
            x: bounds.position.x,
            y: bounds.position.y,
            w: bounds.size.x,
            h: bounds.size.y,
            color: sprite.color,
            text: None,
        };

        if store.has::<UiNode>(entity) {
            if let Some(label) = store.read::<Label>(entity) {
                drawable.color = label.color;
                drawable.text = Some(label.text);
            }
            ui.push(drawable);
        } else {
            world.push(drawable);
        }
    }

    world.extend(ui);
    world
}
