//! Logger setup.
//!
//! `RUST_LOG` controls the level (default `warn`). The game owns the terminal,
//! so logs can be sent to a file instead of stderr.

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

use crate::error::Result;

/// Whether log records end up on stderr next to the program's own messages.
pub fn writes_to_stderr(log_file: Option<&Path>) -> bool {
    log_file.is_none()
}

pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_only_without_log_file() {
        assert!(writes_to_stderr(None));
        assert!(!writes_to_stderr(Some(Path::new("pong.log"))));
    }
}
