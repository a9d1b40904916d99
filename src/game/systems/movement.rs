//! Paddle movement system.
//!
//! This module moves both paddles according to the keys held this frame.

use std::time::Duration;

use crate::game::input::InputFrame;
use crate::game::state::GameState;
use crate::game::types::{Action, Side};

/// Move both paddles for one frame.
pub fn move_paddles(game_state: &mut GameState, input: &InputFrame, dt: Duration) {
    let max_height = game_state.height as f64;

    for side in [Side::Left, Side::Right] {
        let moving_up = input.contains(Action::Up(side));
        let moving_down = input.contains(Action::Down(side));
        game_state
            .paddle_mut(side)
            .update_position(max_height, moving_up, moving_down, dt);
    }
}
