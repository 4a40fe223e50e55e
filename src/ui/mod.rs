pub mod game_common;
pub mod snake_scene;

use crate::engine::GameSnapshot;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, snapshot: &GameSnapshot) {
    let size = frame.size();
    snake_scene::render_snake_scene(frame, size, snapshot);
}
