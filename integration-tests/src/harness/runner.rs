use crate::harness::{SharedOutput, init_test_tracing};
use loghilite_core::HiliteError;
use loghilite_core::cli::hilite::{RunOptions, RunSummary, run};
use loghilite_core::source::FollowOptions;
use std::io;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const WAIT: Duration = Duration::from_secs(5);

/// Handle to a follow-mode run on a background thread.
///
/// The run only ends once every followed file is removed, so tests remove
/// their files before calling [`FollowRun::join`].
pub struct FollowRun {
    pub output: SharedOutput,
    handle: JoinHandle<Result<RunSummary, HiliteError>>,
}

impl FollowRun {
    pub fn start(files: Vec<PathBuf>, initial_lines: usize) -> Self {
        init_test_tracing();

        let options = RunOptions::new(files, true).with_follow_options(FollowOptions {
            initial_lines,
            poll_interval: Duration::from_millis(20),
        });

        let output = SharedOutput::default();
        let writer = output.clone();
        let handle = thread::spawn(move || run(&options, io::empty(), writer));

        Self { output, handle }
    }

    pub fn wait_for_lines(&self, n: usize) -> Vec<String> {
        self.output.wait_for_lines(n, WAIT)
    }

    pub fn join(self) -> (Result<RunSummary, HiliteError>, Vec<String>) {
        let result = self.handle.join().expect("run thread panicked");
        (result, self.output.lines())
    }
}
