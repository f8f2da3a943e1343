use macroquad::prelude::Color;

use crate::domain::CellState;

/// Age at which Alive cells reach their final colour
pub const AGE_SATURATION: u32 = 20;

const YOUNG: (u8, u8, u8) = (76, 175, 80); // green
const OLD: (u8, u8, u8) = (255, 175, 0); // amber

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

/// Display colour for a cell, using the default age saturation
pub fn cell_color(state: CellState, age: u32) -> Color {
    cell_color_with(state, age, AGE_SATURATION)
}

/// Display colour for a cell. Alive cells fade from young to old as they
/// approach `saturation`; every other state has a fixed colour.
pub fn cell_color_with(state: CellState, age: u32, saturation: u32) -> Color {
    match state {
        CellState::Alive => {
            let t = (age as f32 / saturation.max(1) as f32).min(1.0);
            Color::from_rgba(
                lerp(YOUNG.0, OLD.0, t),
                lerp(YOUNG.1, OLD.1, t),
                lerp(YOUNG.2, OLD.2, t),
                255,
            )
        }
        CellState::Dead => Color::from_rgba(26, 26, 26, 255),
        CellState::Dying => Color::from_rgba(255, 107, 107, 255),
        CellState::Firing => Color::from_rgba(255, 215, 0, 255),
        CellState::Conductor => Color::from_rgba(74, 144, 226, 255),
        CellState::ElectronHead => Color::from_rgba(0, 255, 255, 255),
        CellState::ElectronTail => Color::from_rgba(255, 0, 255, 255),
    }
}
