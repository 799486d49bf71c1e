use crate::source::FollowOptions;
use std::path::PathBuf;

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Stdin,
    /// Read each file to its end, one after another.
    Files(Vec<PathBuf>),
    /// Tail every file concurrently, labelling lines with the file name.
    Follow(Vec<PathBuf>),
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: InputMode,
    pub follow: FollowOptions,
}

impl RunOptions {
    /// Follow without files reads stdin, same as no flag at all.
    pub fn new(files: Vec<PathBuf>, follow: bool) -> Self {
        let mode = match (files.is_empty(), follow) {
            (true, _) => InputMode::Stdin,
            (false, false) => InputMode::Files(files),
            (false, true) => InputMode::Follow(files),
        };

        Self {
            mode,
            follow: FollowOptions::default(),
        }
    }

    pub fn with_follow_options(mut self, follow: FollowOptions) -> Self {
        self.follow = follow;
        self
    }

    /// Stdin and followed files may trickle in, so their output is flushed
    /// after every line.
    pub fn flush_each_line(&self) -> bool {
        !matches!(self.mode, InputMode::Files(_))
    }
}
