// Test complete flow of the tokenizer against an arithmetic token set.
// Run with `cargo test --test tokenizer_test`

use std::io::{Cursor, Read};

use munch::{MunchErrorKind, OverflowPolicy, Result, Tokenizer, TokenizerBuilder};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Name(String),
    Plus,
    Divide,
    Integer(i64),
    Float(f64),
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The rule order is significant: `integer` is registered before `float` on
/// purpose, so that maximal munch (not rule order) is what makes "12.2" a
/// float.
fn arithmetic_builder() -> TokenizerBuilder<Token> {
    TokenizerBuilder::new()
        .token(r"[a-f]+", |text: &str| Token::Name(text.to_string()))
        .token(r"\+", |_| Token::Plus)
        .token(r"/", |_| Token::Divide)
        .token(r"[0-9]+", |text: &str| Token::Integer(text.parse().unwrap()))
        .token(r"[0-9]+\.[0-9]+", |text: &str| {
            Token::Float(text.parse().unwrap())
        })
        .skip(r"[ \t\n]+")
}

fn arithmetic_tokenizer(input: &str) -> Tokenizer<Token, Cursor<Vec<u8>>> {
    arithmetic_builder()
        .build(Cursor::new(input.as_bytes().to_vec()))
        .unwrap()
}

fn collect_tokens<R: Read>(tokenizer: Tokenizer<Token, R>) -> Result<Vec<Token>> {
    tokenizer.collect()
}

#[test]
fn test_expression() {
    init();
    let tokenizer = arithmetic_tokenizer("abc + 5 / 12.2");
    let tokens = collect_tokens(tokenizer).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Name("abc".to_string()),
            Token::Plus,
            Token::Integer(5),
            Token::Divide,
            Token::Float(12.2),
        ]
    );
}

#[test]
fn test_whitespace_only_input() {
    init();
    let mut tokenizer = arithmetic_tokenizer("     ");
    assert_eq!(tokenizer.next_token().unwrap(), None);
    // End of input is idempotent.
    assert_eq!(tokenizer.next_token().unwrap(), None);
    assert_eq!(tokenizer.next_token().unwrap(), None);
}

#[test]
fn test_empty_input() {
    init();
    let mut tokenizer = arithmetic_tokenizer("");
    assert_eq!(tokenizer.next_token().unwrap(), None);
    assert_eq!(tokenizer.next_token().unwrap(), None);
}

#[test]
fn test_long_stream() {
    init();
    // 90 names separated by whitespace runs, much longer than the buffer
    // capacity, so the buffer is refilled many times along the way.
    let input = "abc   \n\t ".repeat(90);
    let tokenizer = arithmetic_tokenizer(&input);
    let tokens = collect_tokens(tokenizer).unwrap();
    assert_eq!(tokens.len(), 90);
    assert!(tokens.iter().all(|t| *t == Token::Name("abc".to_string())));
}

#[test]
fn test_longest_match_wins_over_rule_order() {
    init();
    // `integer` is registered before `float`, but the float rule matches
    // all of "12.2" while the integer rule only matches "12".
    let tokenizer = arithmetic_tokenizer("12.2");
    let tokens = collect_tokens(tokenizer).unwrap();
    assert_eq!(tokens, vec![Token::Float(12.2)]);
}

#[test]
fn test_unrecognized_input() {
    init();
    let mut tokenizer = arithmetic_tokenizer("abc#def");
    assert_eq!(
        tokenizer.next_token().unwrap(),
        Some(Token::Name("abc".to_string()))
    );
    let err = tokenizer.next_token().unwrap_err();
    assert!(matches!(
        err.kind(),
        MunchErrorKind::UnrecognizedInput { offset: 3, text } if text == "#def"
    ));
}

#[test]
fn test_tie_break_prefers_first_registered_rule() {
    init();
    let tokenizer = TokenizerBuilder::new()
        .token(r"[a-c]+", |text: &str| ("abc-rule", text.to_string()))
        .token(r"[a-z]+", |text: &str| ("word-rule", text.to_string()))
        .skip(r" +")
        .build(Cursor::new("abc xyz"))
        .unwrap();
    let tokens: Vec<_> = tokenizer.collect::<Result<_>>().unwrap();
    assert_eq!(
        tokens,
        vec![
            ("abc-rule", "abc".to_string()),
            ("word-rule", "xyz".to_string()),
        ]
    );
}

#[test]
fn test_token_suppression() {
    init();
    // Odd numbers pass through, even numbers are consumed but suppressed.
    let tokenizer = TokenizerBuilder::new()
        .token_opt(r"[0-9]+", |text: &str| {
            let value: i64 = text.parse().unwrap();
            (value % 2 != 0).then_some(value)
        })
        .skip(r" +")
        .build(Cursor::new("1 2 3 4 5"))
        .unwrap();
    let tokens: Vec<i64> = tokenizer.collect::<Result<_>>().unwrap();
    assert_eq!(tokens, vec![1, 3, 5]);
}

#[test]
fn test_all_input_is_accounted_for() {
    init();
    let input = "abc + 5 / 12.2 ".repeat(20);
    let mut tokenizer = arithmetic_tokenizer(&input);
    let mut count = 0;
    while tokenizer.next_token().unwrap().is_some() {
        count += 1;
    }
    assert_eq!(count, 100);
    // Every byte of the input was consumed by exactly one match, and every
    // byte read from the source was consumed.
    assert_eq!(tokenizer.offset(), input.len());
    assert_eq!(tokenizer.bytes_read(), input.len());
}

#[test]
fn test_token_longer_than_default_capacity_is_truncated() {
    init();
    let input = "a".repeat(100);
    let tokenizer = arithmetic_tokenizer(&input);
    let tokens = collect_tokens(tokenizer).unwrap();
    // Reference behavior: the run is silently split at the buffer capacity.
    assert_eq!(
        tokens,
        vec![
            Token::Name("a".repeat(80)),
            Token::Name("a".repeat(20)),
        ]
    );
}

#[test]
fn test_raised_max_token_len_keeps_long_token_whole() {
    init();
    let input = "a".repeat(100);
    let tokenizer = arithmetic_builder()
        .max_token_len(200)
        .build(Cursor::new(input))
        .unwrap();
    let tokens = collect_tokens(tokenizer).unwrap();
    assert_eq!(tokens, vec![Token::Name("a".repeat(100))]);
}

#[test]
fn test_overflow_policy_error_rejects_long_token() {
    init();
    let input = "a".repeat(100);
    let mut tokenizer = arithmetic_builder()
        .overflow_policy(OverflowPolicy::Error)
        .build(Cursor::new(input))
        .unwrap();
    let err = tokenizer.next_token().unwrap_err();
    assert!(matches!(
        err.kind(),
        MunchErrorKind::TokenTooLong { capacity: 80, .. }
    ));
}

#[test]
fn test_tokens_across_refill_boundaries() {
    init();
    // 60-byte names never fit the 80-byte buffer twice, so every other
    // token straddles a refill.
    let input = format!("{} ", "abcdef".repeat(10)).repeat(10);
    let tokenizer = arithmetic_tokenizer(&input);
    let tokens = collect_tokens(tokenizer).unwrap();
    assert_eq!(tokens.len(), 10);
    assert!(tokens
        .iter()
        .all(|t| *t == Token::Name("abcdef".repeat(10))));
}

#[test]
fn test_iterator_surfaces_errors() {
    init();
    let tokenizer = arithmetic_tokenizer("abc # def");
    let results: Vec<Result<Token>> = tokenizer.take(2).collect();
    assert_eq!(
        *results[0].as_ref().unwrap(),
        Token::Name("abc".to_string())
    );
    assert!(results[1].is_err());
}
