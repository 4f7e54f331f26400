//! Key dispatch: translates crossterm key events into game inputs.

use crate::game::logic::GameInput;
use crate::game::types::GameMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// What a key press means to the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the simulation.
    Game(GameInput),
    /// Leave the program.
    Quit,
    /// Key release/repeat noise; ignore entirely.
    None,
}

/// Map a key event to an action. Phase-specific meaning (start vs flap vs
/// restart) is decided by the simulation, not here.
pub fn map_key(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => KeyAction::Game(GameInput::Flap),
        KeyCode::Char('1') => KeyAction::Game(GameInput::SelectMode(GameMode::Classic)),
        KeyCode::Char('2') => KeyAction::Game(GameInput::SelectMode(GameMode::Stormfront)),
        KeyCode::Char('3') => KeyAction::Game(GameInput::SelectMode(GameMode::Surge)),
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Game(GameInput::Other),
    }
}
