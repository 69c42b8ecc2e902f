use macroquad::prelude::*;
use crate::application::LifeState;
use crate::domain::{presets, Board};
use crate::rendering::square_size;
use crate::toys::Steering;

/// Process keyboard input for the Life viewer functionally
pub fn process_life_keys(state: LifeState) -> LifeState {
    type KeyAction = (KeyCode, fn(LifeState) -> LifeState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, LifeState::toggle_running),
        (KeyCode::C, LifeState::clear),
        (KeyCode::R, |s| s.reseed(::rand::random())),
        (KeyCode::G, stamp_glider_at_centre),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

fn stamp_glider_at_centre(state: LifeState) -> LifeState {
    let (x, y) = (state.grid.columns() / 2, state.grid.rows() / 2);
    state.stamp(&presets::glider(), x, y)
}

/// Press the square under the cursor on a left click.
/// Returns whether a press landed.
pub fn handle_board_click(board: &mut Board) -> bool {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return false;
    }
    let (mx, my) = mouse_position();
    let (w, h) = square_size(board);
    board
        .square_at(mx, my, w, h)
        .is_some_and(|(x, y)| board.press(x, y))
}

/// Arrow keys held this frame
pub fn steering() -> Steering {
    Steering {
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
    }
}
