use crate::error::HiliteError;
use crate::source::constants::{DEFAULT_INITIAL_LINES, DEFAULT_POLL_INTERVAL};
use crate::source::tail::tail_offset;
use crate::source::types::{FollowState, LineSource};
use notify::{Event, RecursiveMode, Watcher};
use std::fs::{self, File, Metadata};
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FollowOptions {
    /// Lines of existing content to deliver before waiting for new ones.
    pub initial_lines: usize,

    /// Upper bound on how long a follower sleeps between checks when no
    /// change notification arrives.
    pub poll_interval: Duration,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            initial_lines: DEFAULT_INITIAL_LINES,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Continuously reads a growing file, like `tail -f`.
///
/// Blocks while no complete line is available. Change notifications for the
/// file's directory wake the reader early; the poll interval covers
/// filesystems where notification is unavailable. The stream ends once the
/// path no longer names the file being read, either because it was removed
/// or because another file took its place. A file that shrinks below the
/// read position is read again from the start.
///
/// Pipes and other non-regular files are streamed from their current
/// position without replay and end when their writers close them.
pub struct FollowReader {
    path: PathBuf,
    reader: BufReader<File>,
    position: u64,
    pending: Vec<u8>,
    state: FollowState,
    seekable: bool,
    poll_interval: Duration,
    events: Receiver<notify::Result<Event>>,
    _watcher: Option<Box<dyn Watcher + Send>>,
}

impl FollowReader {
    pub fn open(path: impl AsRef<Path>, options: &FollowOptions) -> Result<Self, HiliteError> {
        let path = path.as_ref().to_path_buf();
        log_state(&path, FollowState::Starting);

        let open_err = |source: io::Error| HiliteError::Open {
            path: path.clone(),
            source,
        };

        let mut file = File::open(&path).map_err(open_err)?;
        let seekable = file.metadata().map_err(open_err)?.is_file();

        let position = if seekable {
            let offset = tail_offset(&mut file, options.initial_lines).map_err(open_err)?;
            file.seek(SeekFrom::Start(offset)).map_err(open_err)?
        } else {
            tracing::debug!(path = %path.display(), "not a regular file, streaming without replay");
            0
        };

        let (tx, rx) = mpsc::channel();
        let watcher = if seekable { watch_parent(&path, tx) } else { None };

        let mut reader = Self {
            path,
            reader: BufReader::new(file),
            position,
            pending: Vec::new(),
            state: FollowState::Starting,
            seekable,
            poll_interval: options.poll_interval,
            events: rx,
            _watcher: watcher,
        };
        reader.transition(FollowState::Streaming);

        Ok(reader)
    }

    pub fn state(&self) -> FollowState {
        self.state
    }

    fn transition(&mut self, next: FollowState) {
        if self.state != next {
            self.state = next;
            log_state(&self.path, next);
        }
    }

    /// Drops any partial line and reads the file again from the start.
    fn restart(&mut self) -> io::Result<()> {
        tracing::warn!(path = %self.path.display(), "file truncated, reading from start");
        self.pending.clear();
        self.reader.seek(SeekFrom::Start(0))?;
        self.position = 0;
        Ok(())
    }

    fn terminate(&mut self) -> Option<Vec<u8>> {
        self.transition(FollowState::Terminated);
        (!self.pending.is_empty()).then(|| std::mem::take(&mut self.pending))
    }

    fn wait(&mut self) {
        match self.events.recv_timeout(self.poll_interval) {
            Ok(Err(e)) => tracing::debug!(path = %self.path.display(), error = %e, "watch error"),
            Ok(Ok(_)) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => thread::sleep(self.poll_interval),
        }

        // Collapse bursts of events into a single read pass.
        while self.events.try_recv().is_ok() {}
    }

    /// Whether the file behind the open handle is now shorter than what was
    /// already read.
    fn truncated(&self) -> io::Result<bool> {
        Ok(self.reader.get_ref().metadata()?.len() < self.position)
    }

    /// Whether the path still names the file behind the open handle.
    fn still_followed(&self) -> io::Result<bool> {
        let current = match fs::metadata(&self.path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };

        Ok(same_file(&self.reader.get_ref().metadata()?, &current))
    }
}

impl LineSource for FollowReader {
    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        loop {
            if self.state == FollowState::Terminated {
                return Ok(None);
            }

            let read = match self.reader.read_until(b'\n', &mut self.pending) {
                Ok(n) => n,
                Err(e) => {
                    self.terminate();
                    return Err(e);
                }
            };
            self.position += read as u64;

            if self.pending.last() == Some(&b'\n') {
                return Ok(Some(std::mem::take(&mut self.pending)));
            }

            // A pipe at end of input has no writers left.
            if !self.seekable {
                return Ok(self.terminate());
            }

            // At the current end of the file without a complete line.
            match self.still_followed() {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!(path = %self.path.display(), "path no longer names the followed file");
                    return Ok(self.terminate());
                }
                Err(e) => {
                    self.terminate();
                    return Err(e);
                }
            }

            if self.truncated()? {
                self.restart()?;
                continue;
            }

            self.wait();
        }
    }
}

impl std::fmt::Debug for FollowReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FollowReader")
            .field("path", &self.path)
            .field("position", &self.position)
            .field("state", &self.state)
            .field("seekable", &self.seekable)
            .field("watching", &self._watcher.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(unix)]
fn same_file(a: &Metadata, b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn same_file(_: &Metadata, _: &Metadata) -> bool {
    true
}

fn log_state(path: &Path, state: FollowState) {
    tracing::debug!(path = %path.display(), state = state.as_str(), "follower state");
}

/// Watches the directory containing `path` so removal is noticed as well as
/// appends. Returns `None` when no native watcher is available; the reader
/// then relies on its poll interval alone.
fn watch_parent(
    path: &Path,
    tx: Sender<notify::Result<Event>>,
) -> Option<Box<dyn Watcher + Send>> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut watcher = match notify::recommended_watcher(tx) {
        Ok(w) => w,
        Err(e) => {
            tracing::warn!(error = %e, "native file watcher unavailable, polling instead");
            return None;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        tracing::warn!(
            dir = %dir.display(),
            error = %e,
            "failed to watch directory, polling instead"
        );
        return None;
    }

    Some(Box::new(watcher))
}
