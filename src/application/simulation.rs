use std::collections::VecDeque;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{Command, ConfigError, SimulationConfig};
use crate::domain::{CellState, ExecutionMode, Grid, Pattern, Rule, Stepper, presets};

/// Figures the status panel shows each frame
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub generation: u64,
    pub population: usize,
    pub total_cells: usize,
    /// Population as a percentage of all cells
    pub density: f32,
    pub rule_name: &'static str,
    pub rule_description: &'static str,
    /// Name and description of the last preset placed since the board was reset
    pub pattern: Option<(&'static str, &'static str)>,
    pub speed: f32,
    pub paused: bool,
    pub mode: ExecutionMode,
    pub last_step_ms: f32,
}

/// Simulation orchestrates the grid, the stepper and the command queue.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    grid: Grid,
    stepper: Stepper,
    config: SimulationConfig,
    rng: StdRng,
    commands: VecDeque<Command>,
    patterns: Vec<Pattern>,
    last_pattern: Option<usize>,
    last_step_ms: f32,
}

impl Simulation {
    /// Build a simulation and seed it at the configured initial density
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut grid = Grid::new(config.width, config.height);
        grid.randomize(config.initial_density, &mut rng);

        let mut stepper = Stepper::new(Rule::default())
            .with_base_rate(config.base_rate)
            .with_mode(config.mode);
        stepper.set_speed(config.speed);
        stepper.set_paused(config.start_paused);

        tracing::info!(
            width = config.width,
            height = config.height,
            seed = ?config.seed,
            mode = config.mode.name(),
            "simulation ready"
        );

        Ok(Self {
            grid,
            stepper,
            config,
            rng,
            commands: VecDeque::new(),
            patterns: presets::all_patterns(),
            last_pattern: None,
            last_step_ms: 0.0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Queue commands for the next [`Simulation::tick`]
    pub fn extend(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }

    /// Drain the queue, then advance the generation timer.
    /// Returns whether a generation was computed by the timer.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        self.process_commands();

        let start = Instant::now();
        let stepped = self.stepper.tick(delta_time, &mut self.grid);
        if stepped {
            self.record_step_time(start);
        }
        stepped
    }

    fn record_step_time(&mut self, start: Instant) {
        self.last_step_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Apply every queued command in arrival order
    pub fn process_commands(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            self.apply(command);
        }
    }

    /// Apply a single command immediately
    pub fn apply(&mut self, command: Command) {
        tracing::debug!(?command, "applying command");

        match command {
            Command::TogglePause => {
                let paused = !self.stepper.is_paused();
                self.stepper.set_paused(paused);
            }
            Command::Step => {
                if self.stepper.is_paused() {
                    let start = Instant::now();
                    self.stepper.step(&mut self.grid);
                    self.record_step_time(start);
                }
            }
            Command::Randomize => {
                self.grid.randomize(self.config.random_density, &mut self.rng);
                self.stepper.reset();
                self.last_pattern = None;
                tracing::info!(density = self.config.random_density, "grid randomized");
            }
            Command::Clear => {
                self.grid.clear();
                self.stepper.reset();
                self.last_pattern = None;
                tracing::info!("grid cleared");
            }
            Command::SelectRule(index) => match Rule::from_index(index) {
                Some(rule) => self.switch_rule(rule),
                None => tracing::debug!(index, "ignoring unknown rule index"),
            },
            Command::SpeedUp => self.adjust_speed(self.config.speed_step),
            Command::SpeedDown => self.adjust_speed(-self.config.speed_step),
            Command::Paint { x, y, alive } => {
                let state = if alive { CellState::Alive } else { CellState::Dead };
                self.grid.set_cell(x, y, state);
            }
            Command::PlacePattern(index) => self.place_pattern(index),
            Command::ToggleExecutionMode => {
                let mode = self.stepper.mode().toggled();
                self.stepper.set_mode(mode);
                tracing::info!(mode = mode.name(), "execution mode changed");
            }
        }
    }

    fn adjust_speed(&mut self, delta: f32) {
        let speed = self.config.clamp_speed(self.stepper.speed() + delta);
        self.stepper.set_speed(speed);
    }

    /// Cells left over from another rule mean nothing under the new one
    fn switch_rule(&mut self, rule: Rule) {
        self.stepper.set_rule(rule);
        self.grid.clear();
        self.last_pattern = None;
    }

    /// Drop a preset in the middle of the board, switching to its rule if needed
    fn place_pattern(&mut self, index: usize) {
        let Some(rule) = self.patterns.get(index).map(|pattern| pattern.rule) else {
            tracing::debug!(index, "ignoring unknown pattern index");
            return;
        };
        if rule != self.stepper.rule() {
            self.switch_rule(rule);
        }

        let pattern = &self.patterns[index];
        pattern.place_centered(&mut self.grid);
        self.last_pattern = Some(index);
        tracing::info!(pattern = pattern.name, description = pattern.description, "pattern placed");
    }

    /// Snapshot of the status figures
    pub fn stats(&self) -> Stats {
        let population = self.grid.alive_count();
        let total_cells = self.grid.total_cells();
        Stats {
            generation: self.stepper.generation(),
            population,
            total_cells,
            density: population as f32 / total_cells as f32 * 100.0,
            rule_name: self.stepper.rule().name(),
            rule_description: self.stepper.rule().description(),
            pattern: self
                .last_pattern
                .and_then(|index| self.patterns.get(index))
                .map(|pattern| (pattern.name, pattern.description)),
            speed: self.stepper.speed(),
            paused: self.stepper.is_paused(),
            mode: self.stepper.mode(),
            last_step_ms: self.last_step_ms,
        }
    }
}
