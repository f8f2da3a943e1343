/// Everything the host can ask the simulation to do.
/// Input collaborators produce these; [`super::Simulation`] consumes them
/// once per frame, before the generation timer advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    /// Single generation, honoured only while paused
    Step,
    Randomize,
    Clear,
    /// Switch to the rule at this index and clear the board
    SelectRule(usize),
    SpeedUp,
    SpeedDown,
    /// Overwrite one cell directly, bypassing the rule
    Paint { x: usize, y: usize, alive: bool },
    /// Drop the preset at this index onto the centre of the board
    PlacePattern(usize),
    ToggleExecutionMode,
}

impl Command {
    /// Short label for buttons and logs
    pub fn label(&self) -> &'static str {
        match self {
            Command::TogglePause => "Play/Pause",
            Command::Step => "Step",
            Command::Randomize => "Random",
            Command::Clear => "Clear",
            Command::SelectRule(_) => "Rule",
            Command::SpeedUp => "Faster",
            Command::SpeedDown => "Slower",
            Command::Paint { .. } => "Paint",
            Command::PlacePattern(_) => "Pattern",
            Command::ToggleExecutionMode => "Mode",
        }
    }
}
