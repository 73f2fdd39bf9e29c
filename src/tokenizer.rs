use std::io::Read;

use crate::{internal::TokenizerImpl, Result};

/// A streaming tokenizer.
///
/// It owns an ordered table of pattern/action rules and a byte-oriented
/// input source. Each call to [Tokenizer::next_token] finds the longest
/// prefix of the remaining input matched by any rule (maximal munch, with
/// ties broken in favor of the earliest-declared rule), consumes it, and
/// runs the winning rule's action on the matched text.
///
/// The tokenizer reads from the source on demand through a bounded sliding
/// buffer, so it never holds more than the configured maximum token length
/// of input in memory.
///
/// To create a tokenizer, use the [crate::TokenizerBuilder] to register
/// rules and supply the input source.
///
/// A tokenizer is single-threaded; `next_token` blocks on the source until
/// it can produce a token, confirm end of input, or fail. Dropping the
/// tokenizer drops the source.
pub struct Tokenizer<T, R> {
    pub(crate) inner: TokenizerImpl<T, R>,
}

impl<T, R: Read> Tokenizer<T, R> {
    /// Returns the next token produced by a rule action, or `Ok(None)` at
    /// end of input.
    ///
    /// Spans matched by skip rules and by actions that suppress their token
    /// are consumed transparently; the call keeps scanning until a token is
    /// produced or the input ends.
    ///
    /// End of input is idempotent: once `Ok(None)` has been returned,
    /// further calls keep returning it.
    ///
    /// Fails with [crate::MunchErrorKind::UnrecognizedInput] when no rule
    /// matches any prefix of the remaining input. Such a failure is not
    /// retried internally and the tokenizer state is unreliable afterwards;
    /// callers wanting recovery must re-synchronize the source externally.
    pub fn next_token(&mut self) -> Result<Option<T>> {
        self.inner.next_token()
    }

    /// The byte offset of the next unconsumed byte, i.e. the total number of
    /// bytes consumed by matches so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.inner.offset()
    }

    /// The total number of bytes read from the source so far. This runs
    /// ahead of [Tokenizer::offset] by at most the buffer capacity.
    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.inner.bytes_read()
    }
}

impl<T, R: Read> Iterator for Tokenizer<T, R> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_token().transpose()
    }
}

impl<T, R> std::fmt::Debug for Tokenizer<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").field("inner", &self.inner).finish()
    }
}
