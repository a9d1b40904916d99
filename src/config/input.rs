/// Input configuration constants.
use std::time::Duration;

/// How long the input collector waits for a pending event on each poll.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(20);
