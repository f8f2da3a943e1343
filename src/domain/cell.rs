/// CellState enumerates every state any of the supported automata can use.
/// Each rule only ever produces a subset of these.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
    Dying,
    Firing,
    Conductor,
    ElectronHead,
    ElectronTail,
}

impl CellState {
    /// Check if the cell is in the canonical Alive state
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Dead is the only state that is never drawn
    pub const fn is_dead(self) -> bool {
        matches!(self, CellState::Dead)
    }
}

/// Grid coordinate of a cell entity. Never changes after creation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Double-buffered life state.
/// `next` is scratch space for the compute phase and is only meaningful
/// until the commit phase copies it into `current`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LifeState {
    pub current: CellState,
    pub next: CellState,
}

impl LifeState {
    /// Both buffers set to the same state
    pub const fn settled(state: CellState) -> Self {
        Self { current: state, next: state }
    }

    /// Copy `next` into `current`, returning the state it replaced
    pub fn commit(&mut self) -> CellState {
        std::mem::replace(&mut self.current, self.next)
    }
}

/// Per-cell bookkeeping updated during the commit phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CellMeta {
    /// Consecutive ticks spent Alive, 0 otherwise
    pub age: u32,
    /// Tick index of the most recent transition into Alive
    pub generation: u64,
}

impl CellMeta {
    /// Apply one committed transition.
    pub fn record(&mut self, previous: CellState, current: CellState, tick: u64) {
        if current.is_alive() {
            if !previous.is_alive() {
                self.generation = tick;
            }
            self.age = self.age.saturating_add(1);
        } else {
            self.age = 0;
        }
    }
}
