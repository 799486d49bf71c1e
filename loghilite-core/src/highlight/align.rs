use std::sync::atomic::{AtomicUsize, Ordering};

/// Running maximum width of the line prefix (text up to and including the
/// first `": "`).
///
/// The width only ever grows. One instance is shared by every stream that
/// uses the same rule table, so concurrently followed files pad to the same
/// column.
#[derive(Debug, Default)]
pub struct AlignmentState {
    max_width: AtomicUsize,
}

impl AlignmentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `width` into the running maximum and returns the maximum after
    /// the update.
    pub fn observe(&self, width: usize) -> usize {
        let previous = self.max_width.fetch_max(width, Ordering::AcqRel);
        previous.max(width)
    }

    pub fn current(&self) -> usize {
        self.max_width.load(Ordering::Acquire)
    }
}
