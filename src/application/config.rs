//! Simulation configuration
//!
//! Defaults match the classic setup: an 80x60 board seeded at 20% density,
//! ten generations per second, speed adjustable in half steps.

use thiserror::Error;

use crate::domain::{DEFAULT_BASE_RATE, ExecutionMode};

/// Errors raised by [`SimulationConfig::validate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must contain at least one cell, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid of {width}x{height} exceeds {max} cells")]
    GridTooLarge { width: usize, height: usize, max: usize },

    #[error("{name} must be within [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("speed bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    SpeedBounds { min: f32, max: f32 },

    #[error("speed {speed} is outside [{min}, {max}]")]
    SpeedOutOfRange { speed: f32, min: f32, max: f32 },

    #[error("speed step must be positive, got {0}")]
    SpeedStep(f32),

    #[error("base rate must be positive, got {0}")]
    BaseRate(f32),
}

/// Everything needed to build a [`super::Simulation`]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Alive probability used once at startup
    pub initial_density: f64,
    /// Alive probability used by the randomize command
    pub random_density: f64,
    pub speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub speed_step: f32,
    /// Generations per second at speed 1.0
    pub base_rate: f32,
    /// Age at which the Alive colour stops changing
    pub age_saturation: u32,
    pub start_paused: bool,
    pub mode: ExecutionMode,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 60,
            initial_density: 0.2,
            random_density: 0.3,
            speed: 1.0,
            min_speed: 0.5,
            max_speed: 5.0,
            speed_step: 0.5,
            base_rate: DEFAULT_BASE_RATE,
            age_saturation: 20,
            start_paused: false,
            mode: ExecutionMode::Serial,
            seed: None,
        }
    }
}

/// Largest board [`SimulationConfig::validate`] accepts
pub const MAX_CELLS: usize = u32::MAX as usize;

fn positive(value: f32) -> bool {
    !value.is_nan() && value > 0.0
}

impl SimulationConfig {
    /// Defaults overlaid with `LIFE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each `LIFE_*` key.
    /// Values that fail to parse are skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
            let raw = lookup(key)?;
            match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(key, value = %raw, "ignoring unparseable setting");
                    None
                }
            }
        }

        let mut config = Self::default();

        if let Some(width) = parsed(&lookup, "LIFE_WIDTH") {
            config.width = width;
        }
        if let Some(height) = parsed(&lookup, "LIFE_HEIGHT") {
            config.height = height;
        }
        if let Some(density) = parsed(&lookup, "LIFE_DENSITY") {
            config.initial_density = density;
        }
        if let Some(seed) = parsed(&lookup, "LIFE_SEED") {
            config.seed = Some(seed);
        }
        if let Some(raw) = lookup("LIFE_PARALLEL") {
            let enabled = raw == "1" || raw.eq_ignore_ascii_case("true");
            config.mode = if enabled { ExecutionMode::Parallel } else { ExecutionMode::Serial };
        }

        config
    }

    /// Check every field against its documented range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        // Entity ids are u32, one per cell
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::GridTooLarge {
                    width: self.width,
                    height: self.height,
                    max: MAX_CELLS,
                });
            }
        }

        for (name, value) in [
            ("initial density", self.initial_density),
            ("random density", self.random_density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }

        if !positive(self.min_speed) || !positive(self.max_speed) || self.min_speed > self.max_speed {
            return Err(ConfigError::SpeedBounds { min: self.min_speed, max: self.max_speed });
        }
        if !(self.min_speed..=self.max_speed).contains(&self.speed) {
            return Err(ConfigError::SpeedOutOfRange {
                speed: self.speed,
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !positive(self.speed_step) {
            return Err(ConfigError::SpeedStep(self.speed_step));
        }
        if !positive(self.base_rate) {
            return Err(ConfigError::BaseRate(self.base_rate));
        }

        Ok(())
    }

    /// Clamp a requested speed into the configured bounds
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.min_speed, self.max_speed)
    }
}
