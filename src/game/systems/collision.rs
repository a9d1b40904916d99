//! Ball physics system.
//!
//! Bounces the ball off the top and bottom walls and off the paddle it is
//! heading toward, then moves it and speeds it up slightly.

use std::time::Duration;

use crate::config::game::VELOCITY_INCREASE;
use crate::game::entities::{Ball, Paddle};
use crate::game::state::GameState;

/// Advance the ball by one frame.
pub fn advance_ball(game_state: &mut GameState, dt: Duration) {
    let max_height = game_state.height as f64;
    let target = if game_state.ball.is_moving_left() {
        &game_state.left
    } else {
        &game_state.right
    };

    let ball = &mut game_state.ball;
    bounce_off_walls(ball, max_height, dt);
    bounce_off_paddle(ball, target, dt);

    ball.position = ball.next_position(dt);
    ball.velocity.vx *= VELOCITY_INCREASE;
    ball.velocity.vy *= VELOCITY_INCREASE;
}

/// Negate the vertical speed if the next step would touch a wall.
pub fn bounce_off_walls(ball: &mut Ball, max_height: f64, dt: Duration) {
    let next = ball.next_position(dt);
    if next.y <= 0.0 || next.y >= max_height {
        ball.velocity.vy = -ball.velocity.vy;
    }
}

/// Negate the horizontal speed if the ball reaches the paddle's column this
/// step at a height the paddle covers.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, dt: Duration) {
    let column = paddle.position.x;
    let next = ball.next_position(dt);
    let reaches_column = if ball.is_moving_left() {
        next.x <= column
    } else {
        next.x >= column
    };

    if reaches_column && paddle.collides_with(ball.crossing_at_column(column)) {
        ball.velocity.vx = -ball.velocity.vx;
    }
}
