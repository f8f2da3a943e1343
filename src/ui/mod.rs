mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::{Command, Stats};
use crate::domain::Rule;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_GAP: f32 = 8.0;
const BUTTONS_TOP: f32 = 440.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Key help shown under the status block
pub const KEY_HELP: &[&str] = &[
    "Space: Play/Pause",
    "S: Step (paused)",
    "R: Randomize",
    "C: Clear",
    "1-5: Rule",
    "+/-: Speed",
    "P: Next pattern",
    "M: Serial/Parallel",
    "LMB: Draw  RMB: Erase",
];

/// Status text, one entry per line
pub fn status_lines(stats: &Stats) -> Vec<String> {
    vec![
        format!("Rule: {}", stats.rule_name),
        format!("Generation: {}", stats.generation),
        format!("Population: {}", stats.population),
        format!("Density: {:.2}%", stats.density),
        format!("Speed: {:.1}x", stats.speed),
        format!("Status: {}", if stats.paused { "Paused" } else { "Running" }),
        format!("Mode: {}", stats.mode.name()),
        format!("Step: {:.2}ms", stats.last_step_ms),
        format!("Pattern: {}", stats.pattern.map_or("-", |(name, _)| name)),
    ]
}

/// What the active rule does, then the last placed pattern if any
pub fn description_lines(stats: &Stats) -> Vec<&'static str> {
    std::iter::once(stats.rule_description)
        .chain(stats.pattern.map(|(_, description)| description))
        .collect()
}

/// Rule list with its selection key
pub fn rule_lines() -> Vec<String> {
    Rule::ALL
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}: {}", i + 1, rule.name()))
        .collect()
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        Command::TogglePause,
        Command::Step,
        Command::Randomize,
        Command::Clear,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, command)| {
        let y = BUTTONS_TOP + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
        Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, command)
    })
    .collect()
}
