use regex_automata::{
    dfa::{dense, regex::Regex, StartKind},
    Anchored, Input,
};

use crate::{MunchError, MunchErrorKind, Result};

/// The action of a rule, dispatched on the matched text.
///
/// `Emit` always produces a token. `EmitOpt` may suppress its token by
/// returning `None`, in which case the matched text is consumed but the scan
/// continues. `Skip` consumes the matched text without ever producing a
/// token (e.g. whitespace).
pub(crate) enum Action<T> {
    /// Produce a token from the matched text.
    Emit(Box<dyn Fn(&str) -> T>),
    /// Produce a token from the matched text, or suppress it.
    EmitOpt(Box<dyn Fn(&str) -> Option<T>>),
    /// Discard the matched text.
    Skip,
}

impl<T> std::fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Emit(_) => write!(f, "Emit"),
            Action::EmitOpt(_) => write!(f, "EmitOpt"),
            Action::Skip => write!(f, "Skip"),
        }
    }
}

/// A single tokenization rule: a compiled regex matcher plus an action.
///
/// The regex is compiled for anchored searches only, since rule selection
/// exclusively asks for matches starting at the front of the window.
pub(crate) struct Rule<T> {
    rx: Regex,
    pattern: String,
    action: Action<T>,
}

impl<T> Rule<T> {
    /// Compile a rule from its pattern. Fails with a pattern error if the
    /// regex does not compile.
    pub(crate) fn new(pattern: &str, action: Action<T>) -> Result<Self> {
        let rx = Regex::builder()
            .dense(dense::Config::new().start_kind(StartKind::Anchored))
            .build(pattern)
            .map_err(|e| {
                MunchError::new(MunchErrorKind::PatternError(e, pattern.to_string()))
            })?;
        Ok(Self {
            rx,
            pattern: pattern.to_string(),
            action,
        })
    }

    /// The length of the longest match anchored at the start of the window,
    /// or `None` if the rule does not match there.
    pub(crate) fn match_len(&self, window: &[u8]) -> Option<usize> {
        let input = Input::new(window).anchored(Anchored::Yes);
        self.rx.find(input).map(|ma| ma.range().len())
    }

    /// The pattern the rule was compiled from.
    #[allow(dead_code)]
    pub(crate) fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The action of the rule.
    pub(crate) fn action(&self) -> &Action<T> {
        &self.action
    }
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("action", &self.action)
            .finish()
    }
}
