//! Terminal setup for the game screen.

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, ExecutableCommand};
use log::warn;
use std::io::{self, Write};

/// Raw mode on the alternate screen with the cursor hidden, for as long as
/// the guard lives. Dropping it restores the terminal, also on error paths.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { out };
        guard.out.execute(EnterAlternateScreen)?;
        guard.out.execute(cursor::Hide)?;
        Ok(guard)
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let restored = self
            .out
            .execute(cursor::Show)
            .and_then(|out| out.execute(LeaveAlternateScreen))
            .map(|_| ())
            .and_then(|_| terminal::disable_raw_mode());
        if let Err(e) = restored {
            warn!("Failed to restore terminal: {e}");
        }
    }
}
