// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Configuration, commands and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{CellState, Grid, Pattern, Rule, Stepper, ExecutionMode, World, EntityId, presets};
pub use application::{Command, Simulation, SimulationConfig, ConfigError, Stats, Viewport};
pub use rendering::cell_color;
