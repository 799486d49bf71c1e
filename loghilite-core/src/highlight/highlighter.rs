use crate::error::HiliteError;
use crate::highlight::align::AlignmentState;
use crate::highlight::rule::Rule;
use crate::highlight::rules::default_rules;
use std::borrow::Cow;
use std::sync::Arc;

/// Ordered rule table applied to one line at a time.
///
/// The table itself is immutable; the only mutable state is the
/// [`AlignmentState`] captured by the alignment rule, which is shared through
/// an `Arc`. A `Highlighter` can therefore be shared between threads.
pub struct Highlighter {
    rules: Vec<Box<dyn Rule>>,
}

impl Highlighter {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Builds the built-in table around `state`.
    pub fn with_default_rules(state: Arc<AlignmentState>) -> Result<Self, HiliteError> {
        Ok(Self::new(default_rules(state)?))
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs every rule over `line`, in order. The line terminator, if any,
    /// is passed through.
    pub fn highlight(&self, line: &[u8]) -> Vec<u8> {
        let mut current: Cow<'_, [u8]> = Cow::Borrowed(line);

        for rule in &self.rules {
            let next = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            current = Cow::Owned(next);
        }

        current.into_owned()
    }
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("rules", &self.rule_names())
            .finish()
    }
}
