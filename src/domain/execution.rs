//! Execution mode for the compute phase of a generation.
//!
//! Both modes read only pre-tick state, so they always agree; the
//! parallel one just spreads the rule evaluations across rayon's pool.

/// How the compute phase visits cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One cell after another on the calling thread
    #[default]
    Serial,
    /// Rule evaluation fanned out with rayon, results written back in order
    Parallel,
}

impl ExecutionMode {
    /// Get all available modes
    pub fn all() -> Vec<ExecutionMode> {
        vec![ExecutionMode::Serial, ExecutionMode::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Serial => "Serial",
            ExecutionMode::Parallel => "Parallel",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ExecutionMode::Serial => ExecutionMode::Parallel,
            ExecutionMode::Parallel => ExecutionMode::Serial,
        }
    }
}
