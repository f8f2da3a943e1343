use macroquad::prelude::*;

use crate::application::{Command, Viewport};
use crate::ui::Button;

/// Single-press key bindings
const KEY_BINDINGS: [(KeyCode, Command); 13] = [
    (KeyCode::Space, Command::TogglePause),
    (KeyCode::S, Command::Step),
    (KeyCode::R, Command::Randomize),
    (KeyCode::C, Command::Clear),
    (KeyCode::Key1, Command::SelectRule(0)),
    (KeyCode::Key2, Command::SelectRule(1)),
    (KeyCode::Key3, Command::SelectRule(2)),
    (KeyCode::Key4, Command::SelectRule(3)),
    (KeyCode::Key5, Command::SelectRule(4)),
    (KeyCode::Equal, Command::SpeedUp),
    (KeyCode::KpAdd, Command::SpeedUp),
    (KeyCode::Minus, Command::SpeedDown),
    (KeyCode::M, Command::ToggleExecutionMode),
];

/// Cycles through the preset patterns on each press of P
#[derive(Default)]
pub struct PatternCursor {
    next: usize,
}

impl PatternCursor {
    /// Index to place now, or None when there are no patterns
    pub fn advance(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let index = self.next % count;
        self.next = index + 1;
        Some(index)
    }
}

/// Commands for whichever bound keys `pressed` reports
pub fn keyboard_commands(pressed: impl Fn(KeyCode) -> bool) -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

/// Draw with the left button, erase with the right one.
/// Presses on a button belong to the button.
pub fn pointer_command(
    viewport: &Viewport,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    left_down: bool,
    right_down: bool,
) -> Option<Command> {
    let alive = match (left_down, right_down) {
        (true, _) => true,
        (false, true) => false,
        (false, false) => return None,
    };
    if buttons.iter().any(|button| button.contains(mouse_pos)) {
        return None;
    }
    let (x, y) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1)?;
    Some(Command::Paint { x, y, alive })
}

/// Poll keyboard and mouse for this frame
pub fn poll(
    viewport: &Viewport,
    buttons: &[Button],
    cursor: &mut PatternCursor,
    pattern_count: usize,
    mouse_pos: (f32, f32),
) -> Vec<Command> {
    let mut commands = keyboard_commands(is_key_pressed);

    if is_key_pressed(KeyCode::P) {
        commands.extend(cursor.advance(pattern_count).map(Command::PlacePattern));
    }

    commands.extend(buttons.iter().filter_map(|button| button.clicked(mouse_pos)));

    commands.extend(pointer_command(
        viewport,
        buttons,
        mouse_pos,
        is_mouse_button_down(MouseButton::Left),
        is_mouse_button_down(MouseButton::Right),
    ));

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_commands() {
        let commands = keyboard_commands(|key| matches!(key, KeyCode::Space | KeyCode::Key3));
        assert_eq!(commands, vec![Command::TogglePause, Command::SelectRule(2)]);
        assert!(keyboard_commands(|_| false).is_empty());
    }

    #[test]
    fn test_pointer_paint_and_erase() {
        let viewport = Viewport::fit((10, 10), 100.0, 100.0);

        assert_eq!(
            pointer_command(&viewport, &[], (15.0, 25.0), true, false),
            Some(Command::Paint { x: 1, y: 2, alive: true })
        );
        assert_eq!(
            pointer_command(&viewport, &[], (15.0, 25.0), false, true),
            Some(Command::Paint { x: 1, y: 2, alive: false })
        );
        assert_eq!(pointer_command(&viewport, &[], (15.0, 25.0), false, false), None);
        assert_eq!(pointer_command(&viewport, &[], (150.0, 25.0), true, false), None);
    }

    #[test]
    fn test_button_press_does_not_paint() {
        // 800px grid area with a panel button at x 800..1000
        let viewport = Viewport::fit((2000, 2000), 800.0, 720.0);
        let buttons = [Button::new(800.0, 440.0, 200.0, 36.0, Command::Clear)];

        assert_eq!(pointer_command(&viewport, &buttons, (900.0, 450.0), true, false), None);
        assert!(matches!(
            pointer_command(&viewport, &buttons, (400.0, 360.0), true, false),
            Some(Command::Paint { alive: true, .. })
        ));

        // A button overlapping the board still wins
        let overlapping = [Button::new(390.0, 350.0, 20.0, 20.0, Command::Step)];
        assert_eq!(pointer_command(&viewport, &overlapping, (400.0, 360.0), true, false), None);
    }

    #[test]
    fn test_pattern_cursor_wraps() {
        let mut cursor = PatternCursor::default();
        assert_eq!(cursor.advance(0), None);
        assert_eq!(cursor.advance(2), Some(0));
        assert_eq!(cursor.advance(2), Some(1));
        assert_eq!(cursor.advance(2), Some(0));
    }
}
