//! Fixed-rate game loop.
//!
//! Each frame collects input, advances the simulation by one fixed step and
//! redraws the screen.

use log::{info, trace, warn};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::config::input::INPUT_POLL_INTERVAL;
use crate::error::Result;
use crate::game::input::{collect_input, KeyBindings};
use crate::game::state::GameState;
use crate::game::systems::{build_frame, draw_frame};
use crate::game::terminal::TerminalGuard;
use crate::game::types::{Action, Score};

/// Iterator over frame numbers that never runs faster than its frame rate:
/// `next()` sleeps for whatever is left of the current frame.
pub struct GameLoop {
    frame: u64,
    current_frame_start: Instant,
    duration_per_frame: Duration,
}

impl GameLoop {
    pub fn new(duration_per_frame: Duration) -> Self {
        Self {
            frame: 0,
            current_frame_start: Instant::now(),
            duration_per_frame,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(frame_duration(fps))
    }

    pub fn duration_per_frame(&self) -> Duration {
        self.duration_per_frame
    }
}

impl Iterator for GameLoop {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let end_time = self.current_frame_start + self.duration_per_frame;
        let remaining = end_time.saturating_duration_since(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }

        let frame = self.frame;
        self.frame += 1;
        self.current_frame_start = Instant::now();
        Some(frame)
    }
}

pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}

/// Play until a player quits. Returns the final score.
pub fn run(config: &GameConfig) -> Result<Score> {
    let bindings = KeyBindings::default();
    let mut game_state = GameState::new(config);
    let game_loop = GameLoop::from_fps(config.fps);
    let dt = game_loop.duration_per_frame();

    info!(
        "Game start: {}x{} board, paddle +{}/-{}, {} fps, max score {:?}",
        config.width, config.height, config.extend_up, config.extend_down, config.fps, config.max_score
    );

    let mut terminal = TerminalGuard::enter(io::stdout())?;

    for frame in game_loop {
        let input = collect_input(&bindings, INPUT_POLL_INTERVAL).unwrap_or_else(|e| {
            warn!("Failed to read input: {e}");
            Default::default()
        });

        if !input.is_empty() {
            trace!("Frame {frame}: {input:?}");
        }
        if input.contains(Action::Quit) {
            break;
        }

        game_state.update(&input, dt);

        let lines = build_frame(&game_state);
        if let Err(e) = draw_frame(terminal.out(), &lines) {
            warn!("Failed to display frame: {e}");
        }
    }

    drop(terminal);
    info!(
        "Game over: player1 {} - player2 {}",
        game_state.score.left, game_state.score.right
    );
    Ok(game_state.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(10), Duration::from_millis(100));
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_game_loop_counts_frames() {
        let frames: Vec<u64> = GameLoop::new(Duration::ZERO).take(4).collect();
        assert_eq!(frames, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_game_loop_respects_frame_rate() {
        let start = Instant::now();
        let frames = GameLoop::new(Duration::from_millis(10)).take(5).count();

        assert_eq!(frames, 5);
        // The first frame waits for the initial frame to elapse too.
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
