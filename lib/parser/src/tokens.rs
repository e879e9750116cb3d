use regex::Regex;
use std::sync::LazyLock;

/// Literals (with an optional language tag or datatype), IRIs, names and separators, in this
/// order of priority.
#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#""(?:[^"\\]|\\.)*"(?:@[A-Za-z\-]+|\^\^(?:<[^>]*>|[^\s;,.{}()]+))?"#,
        r#"|'(?:[^'\\]|\\.)*'(?:@[A-Za-z\-]+|\^\^(?:<[^>]*>|[^\s;,.{}()]+))?"#,
        r"|<[^>]*>",
        r"|[^\s;,.{}()]+",
        r"|[;,.]",
    ))
    .expect("valid token pattern")
});

/// A token of a block of triple patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'block> {
    /// A literal, an IRI, a prefixed name, a variable or any other bare word.
    Term(&'block str),
    /// `.` terminates a triple pattern.
    Dot,
    /// `;` continues with another predicate of the same subject.
    Semicolon,
    /// `,` continues with another object of the same subject and predicate.
    Comma,
}

/// Splits a block into tokens. Whitespace, braces and parentheses are not tokens.
pub fn tokenize(block: &str) -> impl Iterator<Item = Token<'_>> {
    TOKEN.find_iter(block).map(|token| match token.as_str() {
        "." => Token::Dot,
        ";" => Token::Semicolon,
        "," => Token::Comma,
        term => Token::Term(term),
    })
}
