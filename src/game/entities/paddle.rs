//! Paddle entity logic.
//!
//! A paddle is a vertical bar centred on `position`, covering
//! `extend_down` cells below and `extend_up` cells above its centre cell.

use std::time::Duration;

use crate::config::game::PADDLE_SPEED;
use crate::game::types::{Position2D, Side};

#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    pub extend_up: usize,
    pub extend_down: usize,
    pub position: Position2D,
    pub speed: f64,
}

impl Paddle {
    pub fn new(side: Side, extend_up: usize, extend_down: usize, position: Position2D) -> Self {
        Self {
            side,
            extend_up,
            extend_down,
            position,
            speed: PADDLE_SPEED,
        }
    }

    /// Paddle centred on its own back line: column 0 on the left, `width` on the right.
    pub fn at_start(side: Side, extend_up: usize, extend_down: usize, width: usize, height: usize) -> Self {
        Self::new(side, extend_up, extend_down, Self::start_position(side, width, height))
    }

    pub fn start_position(side: Side, width: usize, height: usize) -> Position2D {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => width as f64,
        };
        Position2D::new(x, height as f64 / 2.0)
    }

    /// Return to the start position for this paddle's side.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.position = Self::start_position(self.side, width, height);
    }

    /// Move the paddle for `dt` and keep it inside the board.
    /// Holding both directions leaves the paddle where it is.
    pub fn update_position(&mut self, max_height: f64, moving_up: bool, moving_down: bool, dt: Duration) {
        let step = self.speed * dt.as_secs_f64();
        match (moving_up, moving_down) {
            (true, false) => self.position.y += step,
            (false, true) => self.position.y -= step,
            _ => {}
        }

        self.position.y = self
            .position
            .y
            .min(max_height - self.extend_up as f64)
            .max(self.extend_down as f64);
    }

    /// Whether the cell containing `position` is covered by the paddle.
    pub fn collides_with(&self, position: Position2D) -> bool {
        let cell = position.to_discrete();
        let own = self.position.to_discrete();

        own.x == cell.x
            && own.y.saturating_sub(self.extend_down) <= cell.y
            && cell.y <= own.y + self.extend_up
    }
}
