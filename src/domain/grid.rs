use super::cell::{CellMeta, CellState, LifeState, Position};
use super::ecs::{EntityId, World};
use rand::Rng;

/// Moore neighborhood offsets, row-major so neighbor order is deterministic.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// A cell as seen by renderers: where it is, what it is, how old it is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellView {
    pub position: Position,
    pub state: CellState,
    pub age: u32,
}

/// Grid maps (x, y) coordinates onto cell entities stored in a [`World`].
/// Edges are hard boundaries: there is no wrap-around.
pub struct Grid {
    width: usize,
    height: usize,
    world: World,
    /// Row-major, one entity per coordinate
    cells: Vec<EntityId>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Self {
        let mut world = World::new();
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let entity = world.create_entity();
                world
                    .with_component(entity, Position::new(x, y))
                    .with_component(entity, LifeState::default())
                    .with_component(entity, CellMeta::default());
                entity
            })
            .collect();

        tracing::info!(width, height, "grid created");

        Self { width, height, world, cells }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> usize {
        self.width * self.height
    }

    /// Entity at a coordinate, or None when it lies outside the grid
    pub fn cell_at(&self, x: isize, y: isize) -> Option<EntityId> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// In-bounds Moore neighbors, 3 at a corner, 5 on an edge, 8 inside
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<EntityId> {
        self.neighbor_iter(x, y).collect()
    }

    fn neighbor_iter(&self, x: usize, y: usize) -> impl Iterator<Item = EntityId> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.cell_at(x as isize + dx, y as isize + dy))
    }

    /// Current states of the neighbors of (x, y), appended to `out` after clearing it
    pub fn neighbor_states_into(&self, x: usize, y: usize, out: &mut Vec<CellState>) {
        out.clear();
        out.extend(
            self.neighbor_iter(x, y)
                .filter_map(|id| self.world.get_component::<LifeState>(id))
                .map(|life| life.current),
        );
    }

    /// Every cell entity in row-major order
    pub fn all_cells(&self) -> &[EntityId] {
        &self.cells
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn position(&self, entity: EntityId) -> Option<Position> {
        self.world.get_component::<Position>(entity).copied()
    }

    pub fn life(&self, entity: EntityId) -> Option<LifeState> {
        self.world.get_component::<LifeState>(entity).copied()
    }

    pub fn meta(&self, entity: EntityId) -> Option<CellMeta> {
        self.world.get_component::<CellMeta>(entity).copied()
    }

    /// Current state at a coordinate
    pub fn state_at(&self, x: usize, y: usize) -> Option<CellState> {
        self.lookup(x, y)
            .and_then(|id| self.life(id))
            .map(|life| life.current)
    }

    /// Age/generation bookkeeping at a coordinate
    pub fn meta_at(&self, x: usize, y: usize) -> Option<CellMeta> {
        self.lookup(x, y).and_then(|id| self.meta(id))
    }

    fn lookup(&self, x: usize, y: usize) -> Option<EntityId> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Overwrite both buffers of one cell, bypassing the rule.
    /// Out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) {
        if let Some(life) = self
            .lookup(x, y)
            .and_then(|id| self.world.get_component_mut::<LifeState>(id))
        {
            *life = LifeState::settled(state);
        }
    }

    /// Population in the canonical Alive state only
    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .filter_map(|&id| self.world.get_component::<LifeState>(id))
            .filter(|life| life.current.is_alive())
            .count()
    }

    /// Kill every cell and wipe its bookkeeping
    pub fn clear(&mut self) {
        for &id in &self.cells {
            if let Some(life) = self.world.get_component_mut::<LifeState>(id) {
                *life = LifeState::settled(CellState::Dead);
            }
            if let Some(meta) = self.world.get_component_mut::<CellMeta>(id) {
                *meta = CellMeta::default();
            }
        }
    }

    /// Set each cell Alive with the given probability, Dead otherwise
    pub fn randomize<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        for &id in &self.cells {
            let roll: f64 = rng.random();
            if let Some(life) = self.world.get_component_mut::<LifeState>(id) {
                let state = if roll < probability { CellState::Alive } else { CellState::Dead };
                *life = LifeState::settled(state);
            }
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells.iter().filter_map(|&id| {
            let position = self.position(id)?;
            let life = self.life(id)?;
            let age = self.meta(id).map_or(0, |meta| meta.age);
            Some(CellView { position, state: life.current, age })
        })
    }
}
