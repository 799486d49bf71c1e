use std::io::{self, BufRead};

/// A lazy sequence of lines.
///
/// Each line keeps its terminator, except possibly the last one. `Ok(None)`
/// is the end of the stream. Implementations may block until a line is
/// available.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Lines of a reader that is read once to its end (stdin or a regular file).
pub struct StaticSource<R> {
    reader: R,
}

impl<R: BufRead> StaticSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StaticSource<R> {
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Lifecycle of a followed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowState {
    /// Opening the file and positioning the reader.
    Starting,
    /// Delivering lines as they are appended.
    Streaming,
    /// The file went away or could not be read; no more lines.
    Terminated,
}

impl FollowState {
    pub fn as_str(self) -> &'static str {
        match self {
            FollowState::Starting => "starting",
            FollowState::Streaming => "streaming",
            FollowState::Terminated => "terminated",
        }
    }
}
