#![forbid(missing_docs)]
//! # `munch`
//! The `munch` crate is a library that provides a streaming, rule-driven
//! tokenizer. A tokenizer is built from an ordered list of pattern/action
//! rules and any byte-oriented [std::io::Read] source. It lazily produces
//! tokens on demand: each step finds the longest prefix of the remaining
//! input matched by any rule (maximal munch), breaks ties in favor of the
//! rule registered first, and runs that rule's action on the matched text.
//! Rules without an action discard their matched text, which makes
//! whitespace skipping transparent to the consumer.
//!
//! Input is pulled through a bounded sliding buffer, so sources larger than
//! memory are fine; the buffer capacity caps the length of a single token
//! and is configurable. To match a rule's regex against the front of the
//! buffer, the crate uses the `regex-automata` crate with anchored searches.
//!
//! # Example
//! ```rust
//! use munch::TokenizerBuilder;
//!
//! #[derive(Debug, PartialEq)]
//! enum Token {
//!     Ident(String),
//!     Number(i64),
//!     Assign,
//! }
//!
//! fn main() {
//!     let input = std::io::Cursor::new("a = 10");
//!     let tokenizer = TokenizerBuilder::new()
//!         .token(r"[a-zA-Z_]\w*", |text: &str| Token::Ident(text.to_string()))
//!         .token(r"0|[1-9][0-9]*", |text: &str| Token::Number(text.parse().unwrap()))
//!         .token(r"=", |_| Token::Assign)
//!         .skip(r"[ \t\r\n]+")
//!         .build(input)
//!         .expect("TokenizerBuilder error");
//!     let tokens: Vec<Token> = tokenizer.collect::<Result<_, _>>().unwrap();
//!     assert_eq!(
//!         tokens,
//!         vec![
//!             Token::Ident("a".to_string()),
//!             Token::Assign,
//!             Token::Number(10)
//!         ]
//!     );
//! }
//! ```

/// Module with error definitions
mod errors;
pub use errors::{MunchError, MunchErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// The module with the tokenizer.
mod tokenizer;
pub use tokenizer::Tokenizer;

/// The module with the tokenizer builder.
mod tokenizer_builder;
pub use tokenizer_builder::{OverflowPolicy, TokenizerBuilder};
