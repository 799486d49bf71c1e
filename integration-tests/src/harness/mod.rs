mod files;
mod output;
pub mod runner;
pub mod tracing;

pub use files::LogDir;
pub use output::SharedOutput;
pub use runner::FollowRun;
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
