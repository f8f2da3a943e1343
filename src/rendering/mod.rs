mod palette;

pub use palette::{AGE_SATURATION, cell_color, cell_color_with};

use macroquad::prelude::*;

use crate::application::{Simulation, Viewport};
use crate::ui::{self, Button, PANEL_WIDTH};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw every non-dead cell of the board
pub fn draw_grid(sim: &Simulation, viewport: &Viewport) {
    let (gw, gh) = sim.grid().dimensions();
    let board_color = Color::from_rgba(15, 15, 15, 255);
    draw_rectangle(
        viewport.origin_x,
        viewport.origin_y,
        gw as f32 * viewport.cell_size,
        gh as f32 * viewport.cell_size,
        board_color,
    );

    // Leave a gap between cells once they are big enough to show it
    let inset = if viewport.cell_size >= 4.0 { viewport.cell_size * 0.1 } else { 0.0 };
    let size = viewport.cell_size - inset;
    let saturation = sim.config().age_saturation;

    for cell in sim.grid().iter_cells().filter(|cell| !cell.state.is_dead()) {
        let (sx, sy) = viewport.grid_to_screen(cell.position.x, cell.position.y);
        draw_rectangle(sx, sy, size, size, cell_color_with(cell.state, cell.age, saturation));
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        ui::panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the side panel with status, rule list, help and buttons
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();

    let px = ui::panel_x() + 8.0;
    let stats = sim.stats();
    let accent = Color::from_rgba(0, 255, 150, 255);
    let dim = Color::from_rgba(150, 150, 150, 255);

    draw_text("Status", px, 24.0, 18.0, WHITE);
    for (i, line) in ui::status_lines(&stats).iter().enumerate() {
        draw_text(line, px, 44.0 + i as f32 * 16.0, 15.0, accent);
    }

    let cells = format!("Cells: {}", format_number(stats.total_cells));
    draw_text(&cells, px, 190.0, 14.0, dim);

    draw_text("Rules", px, 214.0, 18.0, WHITE);
    let active = stats.rule_name;
    for (i, line) in ui::rule_lines().iter().enumerate() {
        let color = if line.ends_with(active) { accent } else { GRAY };
        draw_text(line, px, 232.0 + i as f32 * 14.0, 13.0, color);
    }
    for (i, line) in ui::description_lines(&stats).iter().enumerate() {
        draw_text(line, px, 302.0 + i as f32 * 12.0, 12.0, dim);
    }

    draw_text("Controls", px, 332.0, 16.0, WHITE);
    for (i, line) in ui::KEY_HELP.iter().enumerate() {
        draw_text(line, px, 348.0 + i as f32 * 9.5, 11.0, GRAY);
    }

    buttons.iter().for_each(|button| button.draw(mouse_pos));

    let fps = format!("FPS: {}", get_fps());
    draw_text(&fps, px, screen_height() - 12.0, 12.0, dim);
}
