use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory of log files that tests append to, truncate and
/// remove while a run is reading them.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn create(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write log file");
        path
    }

    pub fn append(&self, name: &str, text: &str) {
        let mut f = OpenOptions::new()
            .append(true)
            .open(self.path(name))
            .expect("failed to open log file for append");
        f.write_all(text.as_bytes()).expect("failed to append");
    }

    pub fn truncate(&self, name: &str) {
        OpenOptions::new()
            .write(true)
            .open(self.path(name))
            .and_then(|f| f.set_len(0))
            .expect("failed to truncate");
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.path(name)).expect("failed to remove log file");
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}
