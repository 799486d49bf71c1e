//! Stream Driver
//!
//! Turns the command-line inputs into one stream of highlighted lines:
//!
//! - no files: stdin, line by line, until EOF
//! - files: each file in order, to its end
//! - files with `--follow`: one thread per file tailing it, every line
//!   labelled with its file name and handed to a single writer over a channel
//!
//! stdin / files / followers
//! LineSource
//! Highlighter
//! LineOutput
//! stdout
//!

mod options;
mod output;
mod run;
mod types;


pub use options::{InputMode, RunOptions};
pub use output::LineOutput;
pub use run::{highlight_stream, run, run_hilite, run_with};
pub use types::RunSummary;
