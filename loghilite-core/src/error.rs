use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HiliteError {
    //-------------------------------------------------------------------------
    // Rule table
    //-------------------------------------------------------------------------
    #[error("invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule '{rule}' has {found} capture groups but {expected} group transforms")]
    GroupMismatch {
        rule: String,
        expected: usize,
        found: usize,
    },

    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    //-------------------------------------------------------------------------
    // Follow mode
    //-------------------------------------------------------------------------
    #[error("{failed} of {total} followed files failed")]
    FollowFailed { failed: usize, total: usize },
}

impl HiliteError {
    /// The reader side of the output pipe went away (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
