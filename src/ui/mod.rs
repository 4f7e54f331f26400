//! Terminal rendering. Scene code only reads the simulation state; the
//! simulation never depends on anything in here.

pub mod game_common;
pub mod game_scene;

use crate::game::types::GameWorld;
use ratatui::Frame;

/// Draw the current frame.
pub fn draw_ui(frame: &mut Frame, world: &GameWorld) {
    let size = frame.size();
    game_scene::render_game(frame, size, world);
}
