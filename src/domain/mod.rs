mod cell;
mod ecs;
mod grid;
mod rules;
mod patterns;
mod execution;
mod stepper;

pub use cell::{CellState, Position, LifeState, CellMeta};
pub use ecs::{EntityId, ComponentKind, Component, Column, World};
pub use grid::{Grid, CellView};
pub use rules::{Rule, count_in_state};
pub use patterns::{Pattern, presets};
pub use execution::ExecutionMode;
pub use stepper::{Stepper, DEFAULT_BASE_RATE};
