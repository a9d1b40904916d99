use log::debug;
use std::time::Duration;

use crate::config::GameConfig;
use crate::game::entities::{Ball, Paddle};
use crate::game::input::InputFrame;
use crate::game::systems::{advance_ball, check_goal, move_paddles};
use crate::game::types::{Action, Position2D, Score, Side};

#[derive(Debug, Clone)]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    pub max_score: Option<u32>,
    pub score: Score,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub winner: Option<Side>,
}

impl GameState {
    /// Paddles centred on their back lines, ball served from the middle.
    pub fn new(config: &GameConfig) -> Self {
        let (width, height) = (config.width, config.height);
        GameState {
            width,
            height,
            max_score: config.max_score,
            score: Score::default(),
            left: Paddle::at_start(Side::Left, config.extend_up, config.extend_down, width, height),
            right: Paddle::at_start(Side::Right, config.extend_up, config.extend_down, width, height),
            ball: Ball::spawn(Self::initial_ball_position(width, height), &mut rand::rng()),
            winner: None,
        }
    }

    /// Advance the game by one frame.
    pub fn update(&mut self, input: &InputFrame, dt: Duration) {
        if input.contains(Action::Restart) {
            self.restart();
            return;
        }
        if self.is_over() {
            return;
        }

        move_paddles(self, input, dt);
        advance_ball(self, dt);
        check_goal(self);
    }

    /// Start a new rally. A finished match also gets its score cleared.
    pub fn restart(&mut self) {
        if self.is_over() {
            debug!("Starting a new match after {:?}", self.score);
            self.score = Score::default();
            self.winner = None;
        } else {
            debug!("Rally restarted at {:?}", self.score);
        }
        self.reset_rally();
    }

    /// Put paddles and ball back at their start positions and serve again.
    /// The score is kept.
    pub fn reset_rally(&mut self) {
        self.left.reset(self.width, self.height);
        self.right.reset(self.width, self.height);
        self.ball = Ball::spawn(Self::initial_ball_position(self.width, self.height), &mut rand::rng());
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn initial_ball_position(width: usize, height: usize) -> Position2D {
        Position2D::new(width as f64 / 2.0, height as f64 / 2.0)
    }
}
