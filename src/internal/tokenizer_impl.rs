use std::io::Read;

use log::trace;

use crate::{
    internal::{Action, InputBuffer, Rule},
    MunchError, MunchErrorKind, OverflowPolicy, Result,
};

/// TokenizerImpl instances are always created by the TokenizerBuilder.
pub(crate) struct TokenizerImpl<T, R> {
    rules: Vec<Rule<T>>,
    buffer: InputBuffer,
    reader: R,
    // Byte offset of the front of the window in the overall input, i.e. the
    // number of bytes consumed so far.
    offset: usize,
    overflow_policy: OverflowPolicy,
}

impl<T, R: Read> TokenizerImpl<T, R> {
    /// Create the tokenizer state and perform the initial fill of the
    /// buffer, which primes the reader.
    pub(crate) fn new(
        rules: Vec<Rule<T>>,
        mut reader: R,
        max_token_len: usize,
        overflow_policy: OverflowPolicy,
    ) -> Result<Self> {
        let mut buffer = InputBuffer::new(max_token_len);
        buffer.refill(&mut reader)?;
        Ok(Self {
            rules,
            buffer,
            reader,
            offset: 0,
            overflow_policy,
        })
    }

    /// Returns the next token, `Ok(None)` at end of input, or an error.
    ///
    /// Repeatedly selects the best rule for the current window, consumes the
    /// matched span and refills the buffer, until a rule's action produces a
    /// token. Spans matched by skip rules and suppressed actions advance the
    /// input without ending the call.
    pub(crate) fn next_token(&mut self) -> Result<Option<T>> {
        if self.buffer.is_empty() {
            return Ok(None);
        }

        loop {
            let Some((consumed, winner)) = self.best_rule() else {
                // No rule recognizes any input at all. Either the window has
                // drained since the last iteration or we are stuck on bytes
                // no rule can match.
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                return Err(MunchError::new(MunchErrorKind::UnrecognizedInput {
                    offset: self.offset,
                    text: String::from_utf8_lossy(self.buffer.window()).into_owned(),
                }));
            };

            if self.overflow_policy == OverflowPolicy::Error && consumed == self.buffer.capacity()
            {
                // The match spans the whole buffer, so the real token may be
                // longer than we can see.
                return Err(MunchError::new(MunchErrorKind::TokenTooLong {
                    capacity: self.buffer.capacity(),
                    text: String::from_utf8_lossy(self.buffer.window()).into_owned(),
                }));
            }

            let text = String::from_utf8_lossy(&self.buffer.window()[..consumed]).into_owned();
            self.buffer.consume(consumed);
            self.buffer.refill(&mut self.reader)?;
            self.offset += consumed;
            trace!(
                "Rule {} consumed {} bytes up to offset {}: {:?}",
                winner,
                consumed,
                self.offset,
                text
            );

            match self.rules[winner].action() {
                Action::Emit(action) => return Ok(Some(action(&text))),
                Action::EmitOpt(action) => {
                    if let Some(token) = action(&text) {
                        return Ok(Some(token));
                    }
                    trace!("Rule {} suppressed its token", winner);
                }
                Action::Skip => {}
            }
        }
    }

    /// Maximal-munch rule selection over the current window.
    ///
    /// Returns the match length and the index of the winning rule, or `None`
    /// if no rule matches a non-empty prefix. A later rule only displaces
    /// the recorded best on a strictly longer match, so on equal lengths the
    /// earliest-declared rule wins.
    fn best_rule(&self) -> Option<(usize, usize)> {
        let window = self.buffer.window();
        let mut best: Option<(usize, usize)> = None;
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(len) = rule.match_len(window) {
                if len > best.map_or(0, |(best_len, _)| best_len) {
                    best = Some((len, index));
                }
            }
        }
        best
    }

    /// The number of bytes consumed so far.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// The total number of bytes read from the source so far.
    #[inline]
    pub(crate) fn bytes_read(&self) -> usize {
        self.buffer.bytes_read()
    }
}

impl<T, R> std::fmt::Debug for TokenizerImpl<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenizerImpl")
            .field("rules", &self.rules)
            .field("buffer", &self.buffer)
            .field("offset", &self.offset)
            .field("overflow_policy", &self.overflow_policy)
            .finish()
    }
}
