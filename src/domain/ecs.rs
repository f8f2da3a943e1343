//! Entity/component store.
//!
//! Entities are plain indices handed out by a monotonic counter. The
//! component set is closed, so each kind lives in its own column indexed
//! by entity (struct-of-arrays) instead of a type-erased map. The store
//! knows nothing about grids; spatial meaning lives in [`super::Grid`].

use super::cell::{CellMeta, LifeState, Position};

/// Opaque entity identifier. Never reused within one store.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EntityId(u32);

impl EntityId {
    /// Column index for this entity
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Discriminator for the component kinds the store can hold.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ComponentKind {
    Position,
    Life,
    Meta,
}

/// A column of optional component values, one slot per entity.
#[derive(Clone, Debug)]
pub struct Column<T> {
    slots: Vec<Option<T>>,
}

impl<T> Column<T> {
    const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    fn grow(&mut self) {
        self.slots.push(None);
    }

    #[inline]
    fn get(&self, entity: EntityId) -> Option<&T> {
        self.slots.get(entity.index()).and_then(Option::as_ref)
    }

    #[inline]
    fn get_mut(&mut self, entity: EntityId) -> Option<&mut T> {
        self.slots.get_mut(entity.index()).and_then(Option::as_mut)
    }

    fn insert(&mut self, entity: EntityId, value: T) {
        if let Some(slot) = self.slots.get_mut(entity.index()) {
            *slot = Some(value);
        }
    }

    fn remove(&mut self, entity: EntityId) {
        if let Some(slot) = self.slots.get_mut(entity.index()) {
            *slot = None;
        }
    }

    fn contains(&self, entity: EntityId) -> bool {
        self.get(entity).is_some()
    }
}

/// A record type that can be attached to an entity.
pub trait Component: Copy + Send + Sync + 'static {
    const KIND: ComponentKind;

    #[doc(hidden)]
    fn column(world: &World) -> &Column<Self>;

    #[doc(hidden)]
    fn column_mut(world: &mut World) -> &mut Column<Self>;
}

impl Component for Position {
    const KIND: ComponentKind = ComponentKind::Position;

    fn column(world: &World) -> &Column<Self> {
        &world.positions
    }

    fn column_mut(world: &mut World) -> &mut Column<Self> {
        &mut world.positions
    }
}

impl Component for LifeState {
    const KIND: ComponentKind = ComponentKind::Life;

    fn column(world: &World) -> &Column<Self> {
        &world.lives
    }

    fn column_mut(world: &mut World) -> &mut Column<Self> {
        &mut world.lives
    }
}

impl Component for CellMeta {
    const KIND: ComponentKind = ComponentKind::Meta;

    fn column(world: &World) -> &Column<Self> {
        &world.metas
    }

    fn column_mut(world: &mut World) -> &mut Column<Self> {
        &mut world.metas
    }
}

/// World owns entity lifecycle and every component column.
#[derive(Clone, Debug)]
pub struct World {
    live: Vec<bool>,
    positions: Column<Position>,
    lives: Column<LifeState>,
    metas: Column<CellMeta>,
}

impl World {
    pub const fn new() -> Self {
        Self {
            live: Vec::new(),
            positions: Column::new(),
            lives: Column::new(),
            metas: Column::new(),
        }
    }

    /// Allocate a fresh entity with no components
    pub fn create_entity(&mut self) -> EntityId {
        let id = EntityId(self.live.len() as u32);
        self.live.push(true);
        self.positions.grow();
        self.lives.grow();
        self.metas.grow();
        id
    }

    /// Number of entities that have not been removed
    pub fn entity_count(&self) -> usize {
        self.live.iter().filter(|&&live| live).count()
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.live.get(entity.index()).copied().unwrap_or(false)
    }

    /// Attach a component, replacing any previous one of the same kind.
    /// Unknown or removed entities are ignored.
    pub fn add_component<T: Component>(&mut self, entity: EntityId, component: T) {
        if self.contains(entity) {
            T::column_mut(self).insert(entity, component);
        }
    }

    /// Builder-style variant of [`World::add_component`]
    pub fn with_component<T: Component>(&mut self, entity: EntityId, component: T) -> &mut Self {
        self.add_component(entity, component);
        self
    }

    pub fn get_component<T: Component>(&self, entity: EntityId) -> Option<&T> {
        T::column(self).get(entity)
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        T::column_mut(self).get_mut(entity)
    }

    /// Check whether an entity carries a component of the given kind
    pub fn has_component(&self, entity: EntityId, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Position => self.positions.contains(entity),
            ComponentKind::Life => self.lives.contains(entity),
            ComponentKind::Meta => self.metas.contains(entity),
        }
    }

    /// Detach a component by kind. Removing something absent is a no-op.
    pub fn remove_component(&mut self, entity: EntityId, kind: ComponentKind) {
        match kind {
            ComponentKind::Position => self.positions.remove(entity),
            ComponentKind::Life => self.lives.remove(entity),
            ComponentKind::Meta => self.metas.remove(entity),
        }
    }

    /// Drop an entity and all of its components. The id is never handed out again.
    pub fn remove_entity(&mut self, entity: EntityId) {
        if let Some(live) = self.live.get_mut(entity.index()) {
            *live = false;
        }
        self.positions.remove(entity);
        self.lives.remove(entity);
        self.metas.remove(entity);
    }

    /// Entities that carry every listed kind, in ascending id order
    pub fn entities_with(&self, kinds: &[ComponentKind]) -> Vec<EntityId> {
        (0..self.live.len() as u32)
            .map(EntityId)
            .filter(|&id| self.contains(id))
            .filter(|&id| kinds.iter().all(|&kind| self.has_component(id, kind)))
            .collect()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState;

    #[test]
    fn test_ids_are_monotonic() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        world.remove_entity(a);
        let c = world.create_entity();

        assert!(a < b && b < c);
        assert_eq!(world.entity_count(), 2);
    }

    #[test]
    fn test_add_get_replace() {
        let mut world = World::new();
        let e = world.create_entity();

        assert!(world.get_component::<Position>(e).is_none());

        world.add_component(e, Position::new(1, 2));
        world.add_component(e, Position::new(3, 4));
        assert_eq!(world.get_component::<Position>(e), Some(&Position::new(3, 4)));
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, LifeState::default());

        if let Some(life) = world.get_component_mut::<LifeState>(e) {
            life.current = CellState::Alive;
        }
        assert_eq!(world.get_component::<LifeState>(e).map(|l| l.current), Some(CellState::Alive));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, CellMeta::default());

        world.remove_component(e, ComponentKind::Meta);
        world.remove_component(e, ComponentKind::Meta);
        world.remove_component(e, ComponentKind::Position);
        assert!(!world.has_component(e, ComponentKind::Meta));

        world.remove_entity(e);
        world.remove_entity(e);
        assert!(!world.contains(e));
    }

    #[test]
    fn test_removed_entity_rejects_components() {
        let mut world = World::new();
        let e = world.create_entity();
        world.remove_entity(e);
        world.add_component(e, Position::new(0, 0));
        assert!(world.get_component::<Position>(e).is_none());
    }

    #[test]
    fn test_entities_with_is_intersection() {
        let mut world = World::new();
        let full = world.create_entity();
        let partial = world.create_entity();
        let bare = world.create_entity();

        world
            .with_component(full, Position::new(0, 0))
            .with_component(full, LifeState::default())
            .with_component(full, CellMeta::default());
        world.add_component(partial, Position::new(1, 0));

        assert_eq!(
            world.entities_with(&[ComponentKind::Position, ComponentKind::Life, ComponentKind::Meta]),
            vec![full]
        );
        assert_eq!(world.entities_with(&[ComponentKind::Position]), vec![full, partial]);
        assert_eq!(world.entities_with(&[]), vec![full, partial, bare]);
    }
}
