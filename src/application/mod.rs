mod command;
mod config;
mod simulation;
mod viewport;

pub use command::Command;
pub use config::{ConfigError, SimulationConfig};
pub use simulation::{Simulation, Stats};
pub use viewport::Viewport;
