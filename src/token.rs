//! Token definitions for Bro/Zeek script declarations
//!
//!     Only the structure needed to find `module` declarations and `type ... : record` blocks
//!     is tokenized. Everything else falls into a catch-all so that spans stay contiguous.
//!
//!     Comments and string literals are single tokens. Braces or keywords that appear inside
//!     them never take part in block detection.
use logos::Logos;

/// All tokens produced by the declaration lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    // Keywords
    #[token("module")]
    Module,
    #[token("type")]
    Type,
    #[token("record")]
    Record,

    // Identifiers, optionally namespace qualified (Conn::Info)
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*", |lex| lex.slice().to_string())]
    Ident(String),

    // Punctuation
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Comment up to (not including) the end of line
    #[regex(r"#[^\n]*")]
    Comment,

    // Double quoted string literal with backslash escapes
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    Str,

    #[token("\n")]
    Newline,

    #[regex(r"[ \t\r\x0C]+")]
    Whitespace,

    // Anything else: operators, attributes (&log), numbers, stray quotes
    #[regex(r#"[^\sA-Za-z_:;{}#"]+"#)]
    Other,
}

impl Token {
    /// Tokens that carry no structure: whitespace, line breaks and comments
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline | Token::Comment)
    }
}
