//! The store itself: policy-driven component operations over hecs.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use hecs::{Entity, World};
use tracing::debug;

use hivefall_core::policy::{Component, Timed};

/// Internal per-entity container holding every live instance of one
/// component type. Non-stacking types never grow past one item.
struct Slot<T> {
    items: Vec<T>,
}

/// Registration-time record for one component type: its policy plus the
/// monomorphized maintenance hooks the sweeps need.
struct TypeEntry {
    ephemeral: bool,
    clear: fn(&mut World),
    advance: Option<fn(&mut World, f32)>,
}

struct TransformFn<T>(Box<dyn Fn(&Store, Entity, T) -> T + Send + Sync>);

fn clear_slots<T: Component>(world: &mut World) {
    let ids: Vec<Entity> = world
        .query_mut::<&Slot<T>>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in ids {
        let _ = world.remove_one::<Slot<T>>(entity);
    }
}

fn advance_slots<T: Timed>(world: &mut World, dt: f32) {
    for (_, slot) in world.query_mut::<&mut Slot<T>>() {
        for item in &mut slot.items {
            if let Some(timer) = item.expiry_mut().timer.as_mut() {
                timer.advance(dt);
            }
        }
    }
}

/// Component storage with lifecycle enforcement.
///
/// All reads and writes are short, non-overlapping borrows; stages
/// collect entity id lists first and then operate entity by entity, so
/// no query is ever held across a mutation.
pub struct Store {
    world: World,
    types: HashMap<TypeId, TypeEntry>,
    uniques: HashMap<TypeId, Entity>,
    transforms: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    dt: f32,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            types: HashMap::new(),
            uniques: HashMap::new(),
            transforms: HashMap::new(),
            dt: 0.0,
        }
    }

    // ---- Registration ----

    /// Record a type in the policy table. Idempotent; `add` calls this
    /// implicitly, so explicit registration is only needed for timed
    /// types (see [`Store::register_timed`]) or so that the ephemeral
    /// sweep covers types that have not been added yet.
    pub fn register<T: Component>(&mut self) {
        self.types.entry(TypeId::of::<T>()).or_insert(TypeEntry {
            ephemeral: T::POLICY.ephemeral,
            clear: clear_slots::<T>,
            advance: None,
        });
    }

    /// Record a timed type; its embedded timers are advanced by
    /// [`Store::advance_timers`] once per tick.
    pub fn register_timed<T: Timed>(&mut self) {
        let entry = self.types.entry(TypeId::of::<T>()).or_insert(TypeEntry {
            ephemeral: T::POLICY.ephemeral,
            clear: clear_slots::<T>,
            advance: None,
        });
        entry.advance = Some(advance_slots::<T>);
    }

    /// Install a read-time hook for `T`: every value returned by
    /// [`Store::read`] or [`Store::instances`] passes through it first.
    pub fn register_transform<T: Component>(
        &mut self,
        hook: impl Fn(&Store, Entity, T) -> T + Send + Sync + 'static,
    ) {
        self.transforms
            .insert(TypeId::of::<T>(), Box::new(TransformFn(Box::new(hook))));
    }

    // ---- Entities ----

    pub fn spawn(&mut self) -> Entity {
        self.world.spawn(())
    }

    /// Destroy an entity and all of its components. Unknown entities are
    /// ignored.
    pub fn despawn(&mut self, entity: Entity) {
        if self.world.despawn(entity).is_ok() {
            self.uniques.retain(|_, owner| *owner != entity);
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    // ---- Component ops ----

    /// Attach an instance of `T`, honoring its policy: a second instance
    /// on a non-stacking type is dropped, and a unique type already owned
    /// by a live entity rejects new owners.
    pub fn add<T: Component>(&mut self, entity: Entity, value: T) {
        self.register::<T>();
        if !self.world.contains(entity) {
            return;
        }

        let policy = T::POLICY;
        if policy.unique {
            let id = TypeId::of::<T>();
            match self.uniques.get(&id) {
                Some(&owner) if owner != entity && self.slot_alive::<T>(owner) => {
                    debug!(
                        component = std::any::type_name::<T>(),
                        "unique type already owned, add ignored"
                    );
                    return;
                }
                _ => {
                    self.uniques.insert(id, entity);
                }
            }
        }

        match self.world.query_one_mut::<&mut Slot<T>>(entity) {
            Ok(slot) => {
                if policy.stacking {
                    slot.items.push(value);
                }
                // Non-stacking: the existing instance stands.
            }
            Err(_) => {
                let _ = self.world.insert_one(entity, Slot { items: vec![value] });
            }
        }
    }

    /// Remove every instance of `T` from one entity.
    pub fn remove<T: Component>(&mut self, entity: Entity) {
        let _ = self.world.remove_one::<Slot<T>>(entity);
        if T::POLICY.unique && self.uniques.get(&TypeId::of::<T>()) == Some(&entity) {
            self.uniques.remove(&TypeId::of::<T>());
        }
    }

    /// First instance of `T` on the entity, cloned, with any registered
    /// read hook applied. Absent components read as `None`, never a
    /// fault.
    pub fn read<T: Component>(&self, entity: Entity) -> Option<T> {
        let value = {
            let slot = self.world.get::<&Slot<T>>(entity).ok()?;
            slot.items.first()?.clone()
        };
        Some(self.apply_transform(entity, value))
    }

    /// Every instance of `T` on the entity, cloned, read hook applied.
    pub fn instances<T: Component>(&self, entity: Entity) -> Vec<T> {
        let items = match self.world.get::<&Slot<T>>(entity) {
            Ok(slot) => slot.items.clone(),
            Err(_) => return Vec::new(),
        };
        items
            .into_iter()
            .map(|value| self.apply_transform(entity, value))
            .collect()
    }

    /// Mutate every instance of `T` on the entity in place.
    pub fn mutate<T: Component>(&mut self, entity: Entity, f: impl FnMut(&mut T)) {
        if let Ok(slot) = self.world.query_one_mut::<&mut Slot<T>>(entity) {
            slot.items.iter_mut().for_each(f);
        }
    }

    /// Keep only the instances satisfying `keep`; the component vanishes
    /// from the entity when none remain.
    pub fn retain<T: Component>(&mut self, entity: Entity, mut keep: impl FnMut(&T) -> bool) {
        let now_empty = match self.world.query_one_mut::<&mut Slot<T>>(entity) {
            Ok(slot) => {
                slot.items.retain(|item| keep(item));
                slot.items.is_empty()
            }
            Err(_) => false,
        };
        if now_empty {
            self.remove::<T>(entity);
        }
    }

    /// Fold over all instances of `T` on the entity.
    pub fn fold<T: Component, A>(
        &self,
        entity: Entity,
        init: A,
        f: impl FnMut(A, &T) -> A,
    ) -> A {
        match self.world.get::<&Slot<T>>(entity) {
            Ok(slot) => slot.items.iter().fold(init, f),
            Err(_) => init,
        }
    }

    /// First instance matching the predicate, cloned.
    pub fn find<T: Component>(
        &self,
        entity: Entity,
        mut pred: impl FnMut(&T) -> bool,
    ) -> Option<T> {
        self.world
            .get::<&Slot<T>>(entity)
            .ok()?
            .items
            .iter()
            .find(|item| pred(item))
            .cloned()
    }

    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.world.satisfies::<&Slot<T>>(entity).unwrap_or(false)
    }

    /// True when any entity holds an instance of `T`.
    pub fn exists<T: Component>(&self) -> bool {
        let mut query = self.world.query::<&Slot<T>>();
        query.iter().next().is_some()
    }

    // ---- Queries ----

    /// Ids of every entity holding `T`.
    pub fn entities<T: Component>(&self) -> Vec<Entity> {
        let mut query = self.world.query::<&Slot<T>>();
        query.iter().map(|(entity, _)| entity).collect()
    }

    /// Ids of every entity holding both `A` and `B`.
    pub fn entities2<A: Component, B: Component>(&self) -> Vec<Entity> {
        let mut query = self.world.query::<(&Slot<A>, &Slot<B>)>();
        query.iter().map(|(entity, _)| entity).collect()
    }

    /// The single owner of a unique type. Served from the index; falls
    /// back to a scan if the index went stale through removal.
    pub fn unique<T: Component>(&self) -> Option<Entity> {
        if let Some(&owner) = self.uniques.get(&TypeId::of::<T>()) {
            if self.has::<T>(owner) {
                return Some(owner);
            }
        }
        let mut query = self.world.query::<&Slot<T>>();
        query.iter().next().map(|(entity, _)| entity)
    }

    /// Owner and value of a unique type in one call.
    pub fn unique_read<T: Component>(&self) -> Option<(Entity, T)> {
        let entity = self.unique::<T>()?;
        let value = self.read::<T>(entity)?;
        Some((entity, value))
    }

    // ---- Sweeps ----

    /// Drop every instance of `T` world-wide.
    pub fn clear<T: Component>(&mut self) {
        clear_slots::<T>(&mut self.world);
        if T::POLICY.unique {
            self.uniques.remove(&TypeId::of::<T>());
        }
    }

    /// The pipeline's global end-of-tick sweep: purge every registered
    /// ephemeral type, consumed or not.
    pub fn clear_events(&mut self) {
        for entry in self.types.values() {
            if entry.ephemeral {
                (entry.clear)(&mut self.world);
            }
        }
    }

    /// Advance the embedded timer of every registered timed type by the
    /// current tick delta. Called once per tick by the pipeline.
    pub fn advance_timers(&mut self) {
        for entry in self.types.values() {
            if let Some(advance) = entry.advance {
                advance(&mut self.world, self.dt);
            }
        }
    }

    /// Wall-time delta for the current tick, fed in by the driver.
    pub fn set_dt(&mut self, dt: f32) {
        self.dt = dt;
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    // ---- Internal ----

    fn slot_alive<T: Component>(&self, entity: Entity) -> bool {
        self.world.contains(entity) && self.has::<T>(entity)
    }

    fn apply_transform<T: Component>(&self, entity: Entity, value: T) -> T {
        match self
            .transforms
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<TransformFn<T>>())
        {
            Some(hook) => (hook.0)(self, entity, value),
            None => value,
        }
    }
}

/// Remove every due instance of a timed type, world-wide: expired timer
/// or explicit cleanup flag. Stage cleanup callbacks call this for the
/// effect types they own.
pub fn cleanup_effect<T: Timed>(store: &mut Store) {
    for entity in store.entities::<T>() {
        store.retain::<T>(entity, |item| !item.expiry().is_due());
    }
}
