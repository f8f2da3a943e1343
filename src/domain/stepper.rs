//! Generation stepper: timing, pause/speed control and the two-phase
//! synchronous update.

use rayon::prelude::*;

use super::cell::{CellMeta, CellState, LifeState};
use super::ecs::EntityId;
use super::{ExecutionMode, Grid, Rule};

/// Generations per second at speed 1.0
pub const DEFAULT_BASE_RATE: f32 = 10.0;

/// Stepper owns the active rule and decides when a generation happens.
/// It never owns the grid; callers lend it for each tick.
#[derive(Clone, Debug)]
pub struct Stepper {
    rule: Rule,
    mode: ExecutionMode,
    paused: bool,
    speed: f32,
    base_rate: f32,
    timer: f32,
    generation: u64,
}

impl Stepper {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            mode: ExecutionMode::default(),
            paused: false,
            speed: 1.0,
            base_rate: DEFAULT_BASE_RATE,
            timer: 0.0,
            generation: 0,
        }
    }

    /// Set generations per second at speed 1.0 (builder pattern)
    pub fn with_base_rate(mut self, base_rate: f32) -> Self {
        self.base_rate = base_rate;
        self
    }

    /// Set the compute-phase execution mode (builder pattern)
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Swap the active rule. Grid contents are left as they are.
    pub fn set_rule(&mut self, rule: Rule) {
        tracing::info!(rule = rule.name(), "rule switched");
        self.rule = rule;
        self.generation = 0;
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ExecutionMode) {
        self.mode = mode;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Speed multiplier. Must be positive; callers clamp it.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Generations stepped since the last reset or rule switch
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset(&mut self) {
        self.generation = 0;
    }

    /// Seconds between generations at the current speed
    pub fn interval(&self) -> f32 {
        1.0 / (self.base_rate * self.speed)
    }

    /// Advance the timer by one frame, stepping at most once.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, delta_time: f32, grid: &mut Grid) -> bool {
        if self.paused {
            return false;
        }

        self.timer += delta_time;
        if self.timer < self.interval() {
            return false;
        }

        self.timer = 0.0;
        self.step(grid);
        true
    }

    /// Compute and commit exactly one generation for every cell
    pub fn step(&mut self, grid: &mut Grid) {
        let order = grid.all_cells().to_vec();
        let computed = compute_phase(grid, self.rule, &order, self.mode);
        commit_phase(grid, &computed, self.generation);
        self.generation += 1;
        tracing::trace!(generation = self.generation, "generation committed");
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(Rule::default())
    }
}

/// Next state for one cell from pre-tick values, or None if it lacks a component
fn evaluate(grid: &Grid, rule: Rule, id: EntityId, scratch: &mut Vec<CellState>) -> Option<CellState> {
    let position = grid.position(id)?;
    let life = grid.life(id)?;
    let meta = grid.meta(id)?;
    grid.neighbor_states_into(position.x, position.y, scratch);
    Some(rule.compute_next_state(life.current, scratch, meta.age))
}

/// Fill `next` for every cell in `order` from current states only.
/// Returns the cells that were computed; incomplete cells are skipped.
pub(crate) fn compute_phase(
    grid: &mut Grid,
    rule: Rule,
    order: &[EntityId],
    mode: ExecutionMode,
) -> Vec<EntityId> {
    let results: Vec<(EntityId, Option<CellState>)> = {
        let view: &Grid = grid;
        match mode {
            ExecutionMode::Serial => {
                let mut scratch = Vec::with_capacity(8);
                order
                    .iter()
                    .map(|&id| (id, evaluate(view, rule, id, &mut scratch)))
                    .collect()
            }
            ExecutionMode::Parallel => order
                .par_iter()
                .map_init(
                    || Vec::with_capacity(8),
                    |scratch, &id| (id, evaluate(view, rule, id, scratch)),
                )
                .collect(),
        }
    };

    let world = grid.world_mut();
    results
        .into_iter()
        .filter_map(|(id, next)| {
            let life = world.get_component_mut::<LifeState>(id)?;
            life.next = next?;
            Some(id)
        })
        .collect()
}

/// Copy `next` into `current` and update age/generation bookkeeping
pub(crate) fn commit_phase(grid: &mut Grid, computed: &[EntityId], tick: u64) {
    let world = grid.world_mut();
    for &id in computed {
        let Some(life) = world.get_component_mut::<LifeState>(id) else {
            continue;
        };
        let previous = life.commit();
        let current = life.current;
        if let Some(meta) = world.get_component_mut::<CellMeta>(id) {
            meta.record(previous, current, tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComponentKind;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snapshot(grid: &Grid) -> Vec<CellState> {
        grid.iter_cells().map(|cell| cell.state).collect()
    }

    fn alive_positions(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = grid
            .iter_cells()
            .filter(|cell| cell.state.is_alive())
            .map(|cell| (cell.position.x, cell.position.y))
            .collect();
        cells.sort();
        cells
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(5, 5);
        for x in 1..4 {
            grid.set_cell(x, 2, CellState::Alive);
        }
        let mut stepper = Stepper::new(Rule::GameOfLife);

        stepper.step(&mut grid);
        assert_eq!(alive_positions(&grid), vec![(2, 1), (2, 2), (2, 3)]);

        stepper.step(&mut grid);
        assert_eq!(alive_positions(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut grid = Grid::new(8, 8);
        presets::glider().place_on(&mut grid, 0, 0);
        let start = alive_positions(&grid);
        assert_eq!(start, vec![(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);

        let mut stepper = Stepper::new(Rule::GameOfLife);
        for _ in 0..4 {
            stepper.step(&mut grid);
        }

        let shifted: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(alive_positions(&grid), shifted);
        assert_eq!(stepper.generation(), 4);
    }

    #[test]
    fn test_determinism() {
        let run = || {
            let mut grid = Grid::new(20, 15);
            grid.randomize(0.35, &mut StdRng::seed_from_u64(99));
            let mut stepper = Stepper::new(Rule::HighLife);
            (0..10)
                .map(|_| {
                    stepper.step(&mut grid);
                    snapshot(&grid)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_processing_order_does_not_matter() {
        for rule in Rule::ALL {
            let mut forward = Grid::new(12, 12);
            forward.randomize(0.4, &mut StdRng::seed_from_u64(5));
            let mut backward = Grid::new(12, 12);
            backward.randomize(0.4, &mut StdRng::seed_from_u64(5));

            let order = forward.all_cells().to_vec();
            let reversed: Vec<_> = order.iter().rev().copied().collect();

            let a = compute_phase(&mut forward, rule, &order, ExecutionMode::Serial);
            let b = compute_phase(&mut backward, rule, &reversed, ExecutionMode::Serial);
            commit_phase(&mut forward, &a, 0);
            commit_phase(&mut backward, &b, 0);

            assert_eq!(snapshot(&forward), snapshot(&backward), "{}", rule.name());
        }
    }

    #[test]
    fn test_compute_phase_leaves_current_untouched() {
        let mut grid = Grid::new(5, 5);
        for x in 1..4 {
            grid.set_cell(x, 2, CellState::Alive);
        }
        let before = snapshot(&grid);
        let order = grid.all_cells().to_vec();
        compute_phase(&mut grid, Rule::GameOfLife, &order, ExecutionMode::Serial);
        assert_eq!(snapshot(&grid), before);
    }

    #[test]
    fn test_parallel_matches_serial() {
        for rule in Rule::ALL {
            let mut serial = Grid::new(40, 30);
            serial.randomize(0.3, &mut StdRng::seed_from_u64(11));
            let mut parallel = Grid::new(40, 30);
            parallel.randomize(0.3, &mut StdRng::seed_from_u64(11));

            let mut a = Stepper::new(rule);
            let mut b = Stepper::new(rule).with_mode(ExecutionMode::Parallel);
            for _ in 0..5 {
                a.step(&mut serial);
                b.step(&mut parallel);
            }
            assert_eq!(snapshot(&serial), snapshot(&parallel), "{}", rule.name());
        }
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        for rule in Rule::ALL {
            let mut grid = Grid::new(10, 10);
            let mut stepper = Stepper::new(rule);
            for _ in 0..20 {
                stepper.step(&mut grid);
            }
            assert!(grid.iter_cells().all(|cell| cell.state.is_dead()), "{}", rule.name());
        }
    }

    #[test]
    fn test_age_and_generation_bookkeeping() {
        // A block is a still life, so each cell stays alive
        let mut grid = Grid::new(6, 6);
        presets::block().place_on(&mut grid, 2, 2);
        let mut stepper = Stepper::new(Rule::GameOfLife);

        for _ in 0..5 {
            stepper.step(&mut grid);
        }
        assert_eq!(grid.meta_at(2, 2).map(|m| m.age), Some(5));

        // Isolate one cell: it dies on the next tick
        grid.clear();
        grid.set_cell(0, 0, CellState::Alive);
        stepper.step(&mut grid);
        assert_eq!(grid.state_at(0, 0), Some(CellState::Dead));
        assert_eq!(grid.meta_at(0, 0).map(|m| m.age), Some(0));
    }

    #[test]
    fn test_generation_records_birth_tick() {
        // Blinker: (1,2) is born on tick 1 (the second step)
        let mut grid = Grid::new(5, 5);
        for y in 1..4 {
            grid.set_cell(2, y, CellState::Alive);
        }
        let mut stepper = Stepper::new(Rule::GameOfLife);

        stepper.step(&mut grid); // tick 0: horizontal, (1,2) born
        assert_eq!(grid.meta_at(1, 2).map(|m| m.generation), Some(0));

        stepper.step(&mut grid); // tick 1: vertical, (1,2) dies
        stepper.step(&mut grid); // tick 2: horizontal again
        let meta = grid.meta_at(1, 2).unwrap();
        assert_eq!(meta.generation, 2);
        assert_eq!(meta.age, 1);

        // The centre never dies, so its birth tick is untouched
        assert_eq!(grid.meta_at(2, 2).map(|m| m.age), Some(3));
    }

    #[test]
    fn test_wireworld_signal_propagation() {
        let mut grid = Grid::new(7, 3);
        for x in 0..7 {
            grid.set_cell(x, 1, CellState::Conductor);
        }
        grid.set_cell(0, 1, CellState::ElectronTail);
        grid.set_cell(1, 1, CellState::ElectronHead);
        let mut stepper = Stepper::new(Rule::Wireworld);

        stepper.step(&mut grid);
        assert_eq!(grid.state_at(0, 1), Some(CellState::Conductor));
        assert_eq!(grid.state_at(1, 1), Some(CellState::ElectronTail));
        assert_eq!(grid.state_at(2, 1), Some(CellState::ElectronHead));
        assert_eq!(grid.state_at(3, 1), Some(CellState::Conductor));
    }

    #[test]
    fn test_wireworld_conductor_with_three_heads_holds() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(1, 1, CellState::Conductor);
        grid.set_cell(0, 0, CellState::ElectronHead);
        grid.set_cell(1, 0, CellState::ElectronHead);
        grid.set_cell(2, 0, CellState::ElectronHead);
        let mut stepper = Stepper::new(Rule::Wireworld);

        stepper.step(&mut grid);
        assert_eq!(grid.state_at(1, 1), Some(CellState::Conductor));
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut grid = Grid::new(3, 3);
        let mut stepper = Stepper::new(Rule::GameOfLife);
        assert!((stepper.interval() - 0.1).abs() < 1e-6);

        assert!(!stepper.tick(0.05, &mut grid));
        assert_eq!(stepper.generation(), 0);
        assert!(stepper.tick(0.06, &mut grid));
        assert_eq!(stepper.generation(), 1);

        // Accumulator was reset, so a large frame still steps once
        assert!(stepper.tick(1.0, &mut grid));
        assert_eq!(stepper.generation(), 2);
    }

    #[test]
    fn test_tick_respects_speed_and_pause() {
        let mut grid = Grid::new(3, 3);
        let mut stepper = Stepper::new(Rule::GameOfLife);
        stepper.set_speed(5.0);
        assert!((stepper.interval() - 0.02).abs() < 1e-6);

        stepper.set_paused(true);
        assert!(!stepper.tick(10.0, &mut grid));
        assert_eq!(stepper.generation(), 0);

        // Paused stepper can still be stepped by hand
        stepper.step(&mut grid);
        assert_eq!(stepper.generation(), 1);
    }

    #[test]
    fn test_set_rule_resets_generation_but_keeps_cells() {
        let mut grid = Grid::new(5, 5);
        grid.set_cell(2, 2, CellState::Alive);
        let mut stepper = Stepper::new(Rule::Wireworld);
        stepper.step(&mut grid);
        stepper.step(&mut grid);
        assert_eq!(stepper.generation(), 2);

        stepper.set_rule(Rule::Seeds);
        assert_eq!(stepper.generation(), 0);
        assert_eq!(stepper.rule(), Rule::Seeds);
        assert_eq!(grid.state_at(2, 2), Some(CellState::Alive));

        stepper.reset();
        assert_eq!(stepper.generation(), 0);
    }

    #[test]
    fn test_incomplete_cell_is_skipped() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(1, 1, CellState::Alive);
        let id = grid.cell_at(1, 1).unwrap();
        grid.world_mut().remove_component(id, ComponentKind::Meta);

        let mut stepper = Stepper::new(Rule::GameOfLife);
        stepper.step(&mut grid);

        // Lonely cell would die, but it was skipped
        assert_eq!(grid.state_at(1, 1), Some(CellState::Alive));
        assert_eq!(stepper.generation(), 1);
    }
}
