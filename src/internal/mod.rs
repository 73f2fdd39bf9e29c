/// Module with the bounded sliding input buffer.
mod buffer;
pub(crate) use buffer::InputBuffer;

/// Module with the compiled rule type.
mod rule;
pub(crate) use rule::{Action, Rule};

/// Module with the scan loop.
mod tokenizer_impl;
pub(crate) use tokenizer_impl::TokenizerImpl;
