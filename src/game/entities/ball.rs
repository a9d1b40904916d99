//! Ball entity logic.
//!
//! This module handles spawning the ball and computing where it travels.

use rand::Rng;
use std::time::Duration;

use crate::config::game::{BALL_SPEED_X, BALL_SPEED_Y};
use crate::game::types::{Position2D, Velocity2D};

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Position2D,
    pub velocity: Velocity2D,
}

impl Ball {
    pub fn new(position: Position2D, velocity: Velocity2D) -> Self {
        Self { position, velocity }
    }

    /// Spawn a ball at `position` heading toward a random side.
    pub fn spawn<R: Rng + ?Sized>(position: Position2D, rng: &mut R) -> Self {
        Self::new(position, Self::random_velocity(rng))
    }

    /// Random serve: either direction with equal odds, a horizontal speed in
    /// `BALL_SPEED_X` and a vertical speed in `BALL_SPEED_Y`.
    pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Velocity2D {
        let speed = rng.random_range(BALL_SPEED_X);
        let vx = if rng.random_bool(0.5) { speed } else { -speed };
        let vy = rng.random_range(BALL_SPEED_Y);
        Velocity2D::new(vx, vy)
    }

    /// Where the ball will be after `dt` at its current velocity.
    pub fn next_position(&self, dt: Duration) -> Position2D {
        let secs = dt.as_secs_f64();
        Position2D::new(
            self.position.x + self.velocity.vx * secs,
            self.position.y + self.velocity.vy * secs,
        )
    }

    /// Point where the ball's line of travel crosses the column `x`.
    pub fn crossing_at_column(&self, x: f64) -> Position2D {
        let t = (x - self.position.x) / self.velocity.vx;
        Position2D::new(x, self.position.y + self.velocity.vy * t)
    }

    pub fn is_moving_left(&self) -> bool {
        self.velocity.vx <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_velocity_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let (mut left, mut right) = (0, 0);

        for _ in 0..500 {
            let v = Ball::random_velocity(&mut rng);
            assert!(BALL_SPEED_X.contains(&v.vx.abs()), "vx out of range: {}", v.vx);
            assert!(BALL_SPEED_Y.contains(&v.vy), "vy out of range: {}", v.vy);
            if v.vx < 0.0 { left += 1 } else { right += 1 }
        }

        assert!(left > 0 && right > 0);
    }

    #[test]
    fn test_next_position() {
        let ball = Ball::new(Position2D::new(10.0, 5.0), Velocity2D::new(-10.0, 4.0));
        let next = ball.next_position(Duration::from_millis(500));
        assert_eq!(next, Position2D::new(5.0, 7.0));
    }

    #[test]
    fn test_crossing_at_column() {
        let ball = Ball::new(Position2D::new(10.0, 5.0), Velocity2D::new(-10.0, 2.0));
        let crossing = ball.crossing_at_column(0.0);
        assert_eq!(crossing, Position2D::new(0.0, 7.0));
    }
}
