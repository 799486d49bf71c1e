use crate::error::HiliteError;

/// Message from a follower thread to the writer.
pub enum FollowEvent {
    /// A highlighted, labelled line ready to be written as is.
    Line(Vec<u8>),
    /// The follower reached the end of its stream.
    Finished { label: String },
    /// The follower could not open or read its file.
    Failed { label: String, error: HiliteError },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sources: usize,
    pub lines: u64,
}
