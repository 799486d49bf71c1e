use crate::error::HiliteError;
use crate::highlight::align::AlignmentState;
use crate::highlight::style::Sgr;
use regex::bytes::{Captures, Regex, Replacer};
use std::borrow::Cow;
use std::sync::Arc;

/// A single substitution applied to every line.
///
/// Rules run in table order and each one sees the output of the previous
/// rule. Every non-overlapping match in the line is rewritten.
pub trait Rule: Send + Sync {
    fn name(&self) -> &str;

    fn apply<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]>;
}

/// What happens to one capture group of a [`PaintRule`] match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    Pass,
    Paint(Sgr),
}

/// Compiles a rule pattern for raw bytes.
///
/// Unicode mode is turned off so `.` matches any byte but `\n` and invalid
/// UTF-8 passes through untouched.
pub(crate) fn compile(rule: &str, pattern: &str) -> Result<Regex, HiliteError> {
    regex::bytes::RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .map_err(|source| HiliteError::InvalidPattern {
            rule: rule.to_string(),
            source,
        })
}

//-----------------------------------------------------------------------------
// Paint
//-----------------------------------------------------------------------------

/// Re-emits each capture group of a match, either unchanged or wrapped in an
/// SGR span. Text matched outside any group is dropped.
#[derive(Debug)]
pub struct PaintRule {
    name: String,
    regex: Regex,
    groups: Vec<Group>,
}

impl PaintRule {
    pub fn new(name: &str, pattern: &str, groups: Vec<Group>) -> Result<Self, HiliteError> {
        let regex = compile(name, pattern)?;

        let found = regex.captures_len() - 1;
        if found != groups.len() {
            return Err(HiliteError::GroupMismatch {
                rule: name.to_string(),
                expected: groups.len(),
                found,
            });
        }

        Ok(Self {
            name: name.to_string(),
            regex,
            groups,
        })
    }
}

impl Rule for PaintRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]> {
        self.regex.replace_all(line, PaintGroups(&self.groups))
    }
}

struct PaintGroups<'r>(&'r [Group]);

impl Replacer for PaintGroups<'_> {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut Vec<u8>) {
        for (i, group) in self.0.iter().enumerate() {
            let text = caps.get(i + 1).map_or(&b""[..], |m| m.as_bytes());
            match group {
                Group::Pass => dst.extend_from_slice(text),
                Group::Paint(sgr) => sgr.paint_into(text, dst),
            }
        }
    }
}

//-----------------------------------------------------------------------------
// Align
//-----------------------------------------------------------------------------

/// Right-pads the first capture group to the widest one seen so far.
///
/// Padding is decided when the line is processed and never revisited: a line
/// written before a wider prefix appeared keeps its narrower padding.
#[derive(Debug)]
pub struct AlignRule {
    name: String,
    regex: Regex,
    state: Arc<AlignmentState>,
}

impl AlignRule {
    pub fn new(name: &str, pattern: &str, state: Arc<AlignmentState>) -> Result<Self, HiliteError> {
        let regex = compile(name, pattern)?;

        if regex.captures_len() < 2 {
            return Err(HiliteError::GroupMismatch {
                rule: name.to_string(),
                expected: 1,
                found: 0,
            });
        }

        Ok(Self {
            name: name.to_string(),
            regex,
            state,
        })
    }
}

impl Rule for AlignRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]> {
        self.regex.replace_all(line, PadToColumn(&self.state))
    }
}

struct PadToColumn<'s>(&'s AlignmentState);

impl Replacer for PadToColumn<'_> {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut Vec<u8>) {
        let text = caps.get(1).map_or(&b""[..], |m| m.as_bytes());
        let width = text.len();
        let column = self.0.observe(width);

        dst.extend_from_slice(text);
        dst.resize(dst.len() + (column - width), b' ');
    }
}
