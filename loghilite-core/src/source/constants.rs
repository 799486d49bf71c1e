use std::time::Duration;

/// Lines of existing content shown when a follower starts, like `tail -f`.
pub const DEFAULT_INITIAL_LINES: usize = 10;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);
pub const TAIL_CHUNK_SIZE: usize = 8 * 1024;
