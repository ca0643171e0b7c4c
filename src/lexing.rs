//! Base tokenization
//!
//! Turns a document into a flat `(Token, span)` stream. This never fails: bytes no token
//! recognises (a stray quote, non-ASCII whitespace) are reported as [`Token::Other`] so the
//! spans cover the whole source without gaps.

use crate::token::Token;
use logos::Logos;
use std::ops::Range;

/// A token paired with its byte range in the source
pub type Spanned = (Token, Range<usize>);

/// Tokenize source text with location information
pub fn tokenize(source: &str) -> Vec<Spanned> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(Token::Other);
        tokens.push((token, lexer.span()));
    }

    tokens
}

/// Iterate over the structural tokens only, dropping whitespace, newlines and comments
pub fn significant(tokens: &[Spanned]) -> impl Iterator<Item = &Spanned> {
    tokens.iter().filter(|(token, _)| !token.is_trivia())
}
