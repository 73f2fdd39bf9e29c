use std::io::Read;

use crate::{
    internal::{Action, Rule, TokenizerImpl},
    tokenizer::Tokenizer,
    Result,
};

/// The default maximum token length in bytes.
const DEFAULT_MAX_TOKEN_LEN: usize = 80;

/// What to do when a match fills the whole input buffer.
///
/// The buffer capacity caps the length of any single token. A match that
/// spans the entire buffer may be the truncated prefix of a longer token,
/// and the tokenizer cannot tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Silently accept the capacity-length match as the token.
    #[default]
    Truncate,
    /// Fail with [crate::MunchErrorKind::TokenTooLong].
    Error,
}

/// A builder for creating a [Tokenizer].
///
/// Rules are tried in registration order; on equal match lengths the rule
/// registered first wins. Patterns are compiled when [TokenizerBuilder::build]
/// is called, and the first invalid pattern fails the whole build.
pub struct TokenizerBuilder<T> {
    rules: Vec<(String, Action<T>)>,
    max_token_len: usize,
    overflow_policy: OverflowPolicy,
}

impl<T> TokenizerBuilder<T> {
    /// Creates a new tokenizer builder.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            overflow_policy: OverflowPolicy::default(),
        }
    }

    /// Adds a rule that produces a token from the matched text.
    pub fn token(mut self, pattern: &str, action: impl Fn(&str) -> T + 'static) -> Self {
        self.rules
            .push((pattern.to_string(), Action::Emit(Box::new(action))));
        self
    }

    /// Adds a rule that may produce a token from the matched text.
    ///
    /// When the action returns `None`, the matched text is consumed but no
    /// token is produced and scanning continues, exactly as for a skip rule.
    pub fn token_opt(
        mut self,
        pattern: &str,
        action: impl Fn(&str) -> Option<T> + 'static,
    ) -> Self {
        self.rules
            .push((pattern.to_string(), Action::EmitOpt(Box::new(action))));
        self
    }

    /// Adds a rule that discards the matched text, e.g. for whitespace.
    pub fn skip(mut self, pattern: &str) -> Self {
        self.rules.push((pattern.to_string(), Action::Skip));
        self
    }

    /// Sets the maximum token length in bytes, which is also the capacity of
    /// the input buffer. Defaults to 80.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn max_token_len(mut self, len: usize) -> Self {
        assert!(len > 0, "maximum token length must be at least 1");
        self.max_token_len = len;
        self
    }

    /// Sets the behavior for matches that fill the whole input buffer.
    /// Defaults to [OverflowPolicy::Truncate].
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Builds the tokenizer over the given input source.
    ///
    /// Compiles every pattern and performs the initial fill of the input
    /// buffer, which primes the reader. Fails with
    /// [crate::MunchErrorKind::PatternError] on the first invalid pattern.
    pub fn build<R: Read>(self, reader: R) -> Result<Tokenizer<T, R>> {
        let rules = self
            .rules
            .into_iter()
            .map(|(pattern, action)| Rule::new(&pattern, action))
            .collect::<Result<Vec<_>>>()?;
        Ok(Tokenizer {
            inner: TokenizerImpl::new(rules, reader, self.max_token_len, self.overflow_policy)?,
        })
    }
}

impl<T> Default for TokenizerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TokenizerBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenizerBuilder")
            .field("rules", &self.rules)
            .field("max_token_len", &self.max_token_len)
            .field("overflow_policy", &self.overflow_policy)
            .finish()
    }
}
