use macroquad::prelude::*;

use crate::application::Command;

/// Button UI component that issues a command when clicked
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    command: Command,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, command: Command) -> Self {
        Self { x, y, width, height, command }
    }

    /// Check if a point lies on the button
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let label = self.command.label();
        let text_size = measure_text(label, None, 18, 1.0);
        draw_text(
            label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Command to issue if the button was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        (self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)).then_some(self.command)
    }
}
