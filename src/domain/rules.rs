use super::CellState;

/// Count how many neighbors are in a particular state
pub fn count_in_state(neighbors: &[CellState], state: CellState) -> usize {
    neighbors.iter().filter(|&&s| s == state).count()
}

/// The supported cellular automaton rules.
/// Every rule is stateless; the variant alone decides behavior.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Rule {
    /// Conway's Game of Life (B3/S23)
    #[default]
    GameOfLife,
    /// Brian's Brain: Dead -> Firing -> Dying -> Dead
    BriansBrain,
    /// Wireworld: electrons travelling along conductors
    Wireworld,
    /// Seeds (B2/S): nothing survives
    Seeds,
    /// HighLife (B36/S23): Life plus a replicator birth count
    HighLife,
}

impl Rule {
    /// All rules in selection order (keys 1-5)
    pub const ALL: [Rule; 5] = [
        Rule::GameOfLife,
        Rule::BriansBrain,
        Rule::Wireworld,
        Rule::Seeds,
        Rule::HighLife,
    ];

    /// Rule at a selection index, if any
    pub fn from_index(index: usize) -> Option<Rule> {
        Self::ALL.get(index).copied()
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Rule::GameOfLife => "Game of Life",
            Rule::BriansBrain => "Brian's Brain",
            Rule::Wireworld => "Wireworld",
            Rule::Seeds => "Seeds",
            Rule::HighLife => "HighLife",
        }
    }

    /// Short description
    pub const fn description(self) -> &'static str {
        match self {
            Rule::GameOfLife => "B3/S23 - Classic",
            Rule::BriansBrain => "B2/S/3 - Firing, dying",
            Rule::Wireworld => "Electron heads along conductors",
            Rule::Seeds => "B2/S - Exploding",
            Rule::HighLife => "B36/S23 - Replicators",
        }
    }

    /// Compute the next state of one cell.
    /// `age` is accepted for rules that care about it; none of the current ones do.
    pub fn compute_next_state(self, current: CellState, neighbors: &[CellState], _age: u32) -> CellState {
        match self {
            Rule::GameOfLife => {
                match (current, count_in_state(neighbors, CellState::Alive)) {
                    (CellState::Alive, 2 | 3) => CellState::Alive,
                    (CellState::Alive, _) => CellState::Dead,
                    (_, 3) => CellState::Alive,
                    _ => CellState::Dead,
                }
            }
            Rule::HighLife => {
                match (current, count_in_state(neighbors, CellState::Alive)) {
                    (CellState::Alive, 2 | 3) => CellState::Alive,
                    (CellState::Alive, _) => CellState::Dead,
                    (_, 3 | 6) => CellState::Alive,
                    _ => CellState::Dead,
                }
            }
            Rule::Seeds => {
                match (current, count_in_state(neighbors, CellState::Alive)) {
                    (CellState::Alive, _) => CellState::Dead,
                    (_, 2) => CellState::Alive,
                    _ => CellState::Dead,
                }
            }
            Rule::BriansBrain => match current {
                CellState::Firing => CellState::Dying,
                CellState::Dying => CellState::Dead,
                _ if count_in_state(neighbors, CellState::Firing) == 2 => CellState::Firing,
                _ => CellState::Dead,
            },
            Rule::Wireworld => match current {
                CellState::ElectronHead => CellState::ElectronTail,
                CellState::ElectronTail => CellState::Conductor,
                CellState::Conductor => match count_in_state(neighbors, CellState::ElectronHead) {
                    1 | 2 => CellState::ElectronHead,
                    _ => CellState::Conductor,
                },
                // Dead stays Dead; states foreign to this rule are left alone
                other => other,
            },
        }
    }
}
