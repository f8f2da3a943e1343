use super::{CellState, Grid, Rule};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Rule the pattern is meant to run under
    pub rule: Rule,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize, CellState)>, // Relative coordinates and state
}

impl Pattern {
    /// Create a pattern whose listed cells are all Alive
    pub fn new(name: &'static str, description: &'static str, rule: Rule, cells: Vec<(usize, usize)>) -> Self {
        let cells = cells.into_iter().map(|(x, y)| (x, y, CellState::Alive)).collect();
        Self::with_states(name, description, rule, cells)
    }

    /// Create a pattern with an explicit state per cell
    pub fn with_states(
        name: &'static str,
        description: &'static str,
        rule: Rule,
        cells: Vec<(usize, usize, CellState)>,
    ) -> Self {
        let width = cells.iter().map(|&(x, _, _)| x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|&(_, y, _)| y).max().map_or(0, |y| y + 1);
        Self { name, description, rule, width, height, cells }
    }

    /// Place pattern on grid at specified position; parts falling off the edge are dropped
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for &(dx, dy, state) in &self.cells {
            grid.set_cell(x + dx, y + dy, state);
        }
    }

    /// Place pattern centred on the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (w, h) = grid.dimensions();
        let x = w.saturating_sub(self.width) / 2;
        let y = h.saturating_sub(self.height) / 2;
        self.place_on(grid, x, y);
    }
}

/// Seed patterns for each rule family
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            Rule::GameOfLife,
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            Rule::GameOfLife,
            vec![(0, 1), (1, 1), (2, 1)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            Rule::GameOfLife,
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            Rule::GameOfLife,
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// HighLife replicator
    pub fn replicator() -> Pattern {
        Pattern::new(
            "Replicator",
            "Copies itself under HighLife",
            Rule::HighLife,
            vec![
                (2, 0), (3, 0), (4, 0),
                (1, 1), (4, 1),
                (0, 2), (4, 2),
                (0, 3), (3, 3),
                (0, 4), (1, 4), (2, 4),
            ],
        )
    }

    /// Two firing cells that seed Brian's Brain
    pub fn brain_spark() -> Pattern {
        Pattern::with_states(
            "Spark",
            "Firing pair",
            Rule::BriansBrain,
            vec![(0, 0, CellState::Firing), (1, 0, CellState::Firing)],
        )
    }

    /// Wireworld clock: an electron circling a square loop of wire
    pub fn wire_loop() -> Pattern {
        let mut cells = Vec::new();
        for i in 0..6 {
            cells.push((i, 0, CellState::Conductor));
            cells.push((i, 5, CellState::Conductor));
        }
        for j in 1..5 {
            cells.push((0, j, CellState::Conductor));
            cells.push((5, j, CellState::Conductor));
        }
        // Later entries win when placed
        cells.push((1, 0, CellState::ElectronTail));
        cells.push((2, 0, CellState::ElectronHead));
        Pattern::with_states("Wire loop", "Electron circling a loop", Rule::Wireworld, cells)
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            block(),
            r_pentomino(),
            replicator(),
            brain_spark(),
            wire_loop(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_cells() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let empty = Pattern::new("Empty", "", Rule::GameOfLife, vec![]);
        assert_eq!((empty.width, empty.height), (0, 0));
    }

    #[test]
    fn test_place_clips_at_edges() {
        let mut grid = Grid::new(4, 4);
        presets::block().place_on(&mut grid, 3, 3);
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn test_place_centered() {
        let mut grid = Grid::new(10, 10);
        presets::block().place_centered(&mut grid);
        assert_eq!(grid.state_at(4, 4), Some(CellState::Alive));
        assert_eq!(grid.state_at(5, 5), Some(CellState::Alive));
        assert_eq!(grid.alive_count(), 4);
    }

    #[test]
    fn test_wire_loop_has_one_electron() {
        let mut grid = Grid::new(6, 6);
        presets::wire_loop().place_on(&mut grid, 0, 0);
        let heads = grid.iter_cells().filter(|c| c.state == CellState::ElectronHead).count();
        let tails = grid.iter_cells().filter(|c| c.state == CellState::ElectronTail).count();
        assert_eq!((heads, tails), (1, 1));
    }

    #[test]
    fn test_presets_have_unique_names() {
        let patterns = presets::all_patterns();
        let mut names: Vec<_> = patterns.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), patterns.len());
    }
}
