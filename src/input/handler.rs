use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// Logical commands the game understands, decoupled from concrete keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Steer the snake.
    Steer(Direction),
    /// Toggle between Running and Paused.
    TogglePause,
    /// Resume from pause, or acknowledge a game over and start a new round.
    Resume,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Steering - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Steering - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Controls
            KeyCode::Char(' ') => KeyAction::TogglePause,
            KeyCode::Enter => KeyAction::Resume,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
