pub mod cli;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod source;

pub use error::HiliteError;
