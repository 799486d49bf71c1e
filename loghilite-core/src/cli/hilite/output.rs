use crate::error::HiliteError;
use std::io::Write;

/// Output stream that writes one complete line per call.
pub struct LineOutput<W: Write> {
    inner: W,
    flush_each_line: bool,
    lines: u64,
}

impl<W: Write> LineOutput<W> {
    pub fn new(inner: W, flush_each_line: bool) -> Self {
        Self {
            inner,
            flush_each_line,
            lines: 0,
        }
    }

    pub fn write_line(&mut self, line: &[u8]) -> Result<(), HiliteError> {
        self.inner.write_all(line).map_err(HiliteError::Write)?;
        if self.flush_each_line {
            self.inner.flush().map_err(HiliteError::Write)?;
        }
        self.lines += 1;
        Ok(())
    }

    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn finish(mut self) -> Result<W, HiliteError> {
        self.inner.flush().map_err(HiliteError::Write)?;
        Ok(self.inner)
    }
}
