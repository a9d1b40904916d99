//! Game rendering system (terminal).
//!
//! The frame is first built as plain text lines, then queued to the terminal
//! with crossterm and flushed in one go.

use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, QueueableCommand};
use std::io::{self, Write};

use crate::game::state::GameState;
use crate::game::types::DiscretePosition2D;

pub const WALL: char = '█';
pub const PADDLE: char = '█';
pub const BALL: char = '●';
pub const EMPTY: char = ' ';

/// Build the whole screen: score line, walls, and the board from top to bottom.
pub fn build_frame(game_state: &GameState) -> Vec<String> {
    let wall: String = std::iter::repeat_n(WALL, game_state.width + 1).collect();
    let ball = game_state.ball.position.to_discrete();

    let mut lines = Vec::with_capacity(game_state.height + 7);
    lines.push(String::new());
    lines.push(format!(
        "Goals of player1: {},  Goals of player2: {}",
        game_state.score.left, game_state.score.right
    ));
    lines.push(String::new());
    lines.push(wall.clone());

    for y in (0..=game_state.height).rev() {
        let row = (0..=game_state.width)
            .map(|x| {
                let cell = DiscretePosition2D::new(x, y);
                // Ball drawn over paddles.
                if cell == ball {
                    BALL
                } else if game_state.left.collides_with(cell.to_continuous())
                    || game_state.right.collides_with(cell.to_continuous())
                {
                    PADDLE
                } else {
                    EMPTY
                }
            })
            .collect();
        lines.push(row);
    }

    lines.push(wall);

    if let Some(winner) = game_state.winner {
        lines.push(String::new());
        lines.push(format!(
            "Player {} wins! Press r for a new match or Ctrl+C to quit.",
            winner.player_number()
        ));
    }

    lines
}

/// Replace the terminal content with `lines`.
pub fn draw_frame<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    out.queue(terminal::Clear(ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for line in lines {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }

    out.flush()
}
