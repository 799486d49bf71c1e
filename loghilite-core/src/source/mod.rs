//! Line Sources
//!
//! Everything the driver reads from implements [`LineSource`]:
//!
//! - [`StaticSource`] wraps stdin or an opened file and ends at EOF.
//! - [`FollowReader`] tails a growing file and only ends when the file goes
//!   away.

mod constants;
mod follow;
mod tail;
mod types;


pub use constants::{DEFAULT_INITIAL_LINES, DEFAULT_POLL_INTERVAL};
pub use follow::{FollowOptions, FollowReader};
pub use tail::tail_offset;
pub use types::{FollowState, LineSource, StaticSource};
