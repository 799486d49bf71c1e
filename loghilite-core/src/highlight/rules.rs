//! The built-in rule table.
//!
//! Colors are fixed here; changing them means rebuilding.

use crate::error::HiliteError;
use crate::highlight::align::AlignmentState;
use crate::highlight::rule::{AlignRule, Group, PaintRule, Rule};
use crate::highlight::style::{Color, Sgr, Style};
use std::sync::Arc;

pub const ALIGN_PATTERN: &str = r"^(.+?: )";
pub const TIMESTAMP_PATTERN: &str = r"(\d\d)(:)(\d\d)(:)(\d\d)";
pub const BRACKETED_NUMBER_PATTERN: &str = r"(\[)(\d+)(\])";

/// Normal red on black.
pub fn hour() -> Sgr {
    Sgr::new()
        .style(Style::Normal)
        .fg(Color::Red)
        .bg(Color::Black)
}

/// Green.
pub fn time() -> Sgr {
    Sgr::new().fg(Color::Green)
}

/// Bold white.
pub fn number() -> Sgr {
    Sgr::new().fg(Color::White).style(Style::Bold)
}

pub fn default_rules(state: Arc<AlignmentState>) -> Result<Vec<Box<dyn Rule>>, HiliteError> {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(AlignRule::new("align", ALIGN_PATTERN, state)?),
        Box::new(PaintRule::new(
            "timestamp",
            TIMESTAMP_PATTERN,
            vec![
                Group::Paint(hour()),
                Group::Pass,
                Group::Paint(time()),
                Group::Pass,
                Group::Paint(time()),
            ],
        )?),
        Box::new(PaintRule::new(
            "bracketed_number",
            BRACKETED_NUMBER_PATTERN,
            vec![Group::Pass, Group::Paint(number()), Group::Pass],
        )?),
    ];

    Ok(rules)
}
