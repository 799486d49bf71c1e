//! Line Highlighting
//!
//! A [`Highlighter`] holds an ordered table of [`Rule`]s. Each line runs
//! through every rule in turn:
//!
//! 1. `align` pads the prefix up to the first `": "` to the widest prefix
//!    seen so far ([`AlignmentState`]).
//! 2. `timestamp` paints `HH:MM:SS` runs.
//! 3. `bracketed_number` paints the digits of `[123]`.
//!
//! Rules operate on raw bytes so non-UTF-8 input passes through.

mod align;
mod highlighter;
mod rule;
mod rules;
pub mod style;

#[cfg(test)]
mod tests;

pub use align::AlignmentState;
pub use highlighter::Highlighter;
pub use rule::{AlignRule, Group, PaintRule, Rule};
pub use rules::{
    ALIGN_PATTERN, BRACKETED_NUMBER_PATTERN, TIMESTAMP_PATTERN, default_rules, hour, number, time,
};
