//! Record block detection
//!
//!     A record block has the shape `type <name> : record { <body> } ;`. Blocks are found by a
//!     small state machine over the structural tokens (comments and whitespace are skipped):
//!
//!         Idle --type--> Type --ident--> Named --:--> Colon --record--> Keyword --{--> Body
//!         Body --{ / }--> Body (depth tracking) ... --matching }--> Closed --;--> emit, Idle
//!
//!     Any unexpected token returns the machine to Idle, where it is looked at again so that a
//!     `type` keyword directly after a broken declaration still starts a new candidate.
//!     Braces inside the body nest, so a body may contain `{ ... }` groups. A body whose
//!     closing brace never arrives produces no block.
//!
//!     Each nested group is remembered as a range of the body. [`RecordBlock::top_level`]
//!     drops those ranges, so `inner: record { a: count; };` spread over several lines reads
//!     as the single declaration `inner: record ;`.

use crate::lexing::{significant, Spanned};
use crate::token::Token;
use std::borrow::Cow;
use std::ops::Range;

/// One `type <name>: record { ... };` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBlock<'a> {
    /// The record type name (`Info`)
    pub name: String,
    /// Raw text between the outer braces
    pub body: &'a str,
    /// Nested `{ ... }` groups, braces included, as byte ranges of `body`
    pub nested: Vec<Range<usize>>,
}

impl<'a> RecordBlock<'a> {
    /// The body with every nested group cut out
    pub fn top_level(&self) -> Cow<'a, str> {
        if self.nested.is_empty() {
            return Cow::Borrowed(self.body);
        }
        let mut text = String::with_capacity(self.body.len());
        let mut last = 0;
        for range in &self.nested {
            text.push_str(&self.body[last..range.start]);
            last = range.end;
        }
        text.push_str(&self.body[last..]);
        Cow::Owned(text)
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Type,
    Named(String),
    Colon(String),
    Keyword(String),
    Body {
        name: String,
        start: usize,
        depth: usize,
        nested: Vec<Range<usize>>,
    },
    Closed {
        name: String,
        body: Range<usize>,
        nested: Vec<Range<usize>>,
    },
}

impl State {
    /// Transition out of Idle
    fn start(token: &Token) -> State {
        match token {
            Token::Type => State::Type,
            _ => State::Idle,
        }
    }
}

/// Find every record block in source order
pub fn find_records<'a>(source: &'a str, tokens: &[Spanned]) -> Vec<RecordBlock<'a>> {
    let mut blocks = Vec::new();
    let mut state = State::Idle;

    for (token, span) in significant(tokens) {
        state = match (state, token) {
            (State::Type, Token::Ident(name)) => State::Named(name.clone()),
            (State::Named(name), Token::Colon) => State::Colon(name),
            (State::Colon(name), Token::Record) => State::Keyword(name),
            (State::Keyword(name), Token::OpenBrace) => State::Body {
                name,
                start: span.end,
                depth: 1,
                nested: Vec::new(),
            },
            (
                State::Body {
                    name,
                    start,
                    depth,
                    mut nested,
                },
                Token::OpenBrace,
            ) => {
                if depth == 1 {
                    nested.push(span.start - start..span.end - start);
                }
                State::Body {
                    name,
                    start,
                    depth: depth + 1,
                    nested,
                }
            }
            (
                State::Body {
                    name,
                    start,
                    depth,
                    mut nested,
                },
                Token::CloseBrace,
            ) => match depth {
                1 => State::Closed {
                    name,
                    body: start..span.start,
                    nested,
                },
                2 => {
                    if let Some(group) = nested.last_mut() {
                        group.end = span.end - start;
                    }
                    State::Body {
                        name,
                        start,
                        depth: 1,
                        nested,
                    }
                }
                _ => State::Body {
                    name,
                    start,
                    depth: depth - 1,
                    nested,
                },
            },
            (body @ State::Body { .. }, _) => body,
            (State::Closed { name, body, nested }, Token::Semicolon) => {
                blocks.push(RecordBlock {
                    name,
                    body: &source[body],
                    nested,
                });
                State::Idle
            }
            (_, token) => State::start(token),
        };
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::tokenize;

    fn records(source: &str) -> Vec<RecordBlock<'_>> {
        find_records(source, &tokenize(source))
    }

    #[test]
    fn test_single_record() {
        let source = "type Info: record {\n\tts: time &log;\n};\n";
        let found = records(source);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Info");
        assert_eq!(found[0].body, "\n\tts: time &log;\n");
        assert!(found[0].nested.is_empty());
        assert_eq!(found[0].top_level(), found[0].body);
    }

    #[test]
    fn test_spacing_is_flexible() {
        let found = records("type Info :record{a: count};");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body, "a: count");
    }

    #[test]
    fn test_multiple_records_in_order() {
        let source = "type A: record { x: count; };\ntype B: record { y: string; };\n";
        let names: Vec<String> = records(source).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_nested_braces_are_balanced() {
        let source = "type A: record {\n\tx: set[string] &default = set() { };\n\ty: count;\n};\n";
        let found = records(source);
        assert_eq!(found.len(), 1);
        assert!(found[0].body.contains("y: count;"));
        assert_eq!(
            found[0].top_level(),
            "\n\tx: set[string] &default = set() ;\n\ty: count;\n"
        );
    }

    #[test]
    fn test_multi_line_nested_record_is_cut_out() {
        let source = "type A: record {\n\tinner: record {\n\t\ta: count;\n\t\tdeep: table[string] of count { };\n\t};\n\tlast: string;\n};\n";
        let found = records(source);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].nested.len(), 1);
        let group = &found[0].body[found[0].nested[0].clone()];
        assert!(group.starts_with('{'));
        assert!(group.ends_with('}'));
        assert_eq!(found[0].top_level(), "\n\tinner: record ;\n\tlast: string;\n");
    }

    #[test]
    fn test_braces_in_comments_are_ignored() {
        let source = "type A: record {\n\t# closing } here\n\tx: count;\n};\n";
        let found = records(source);
        assert_eq!(found.len(), 1);
        assert!(found[0].body.contains("x: count;"));
    }

    #[test]
    fn test_requires_trailing_semicolon() {
        assert!(records("type A: record { x: count; }\n").is_empty());
    }

    #[test]
    fn test_unterminated_body() {
        assert!(records("type A: record { x: count;\n").is_empty());
    }

    #[test]
    fn test_non_record_types_are_skipped() {
        let source = "type Kind: enum { A, B };\ntype Info: record { x: count; };\n";
        let found = records(source);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Info");
    }

    #[test]
    fn test_restarts_on_type_after_broken_declaration() {
        let found = records("type type Info: record { x: count; };");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Info");
    }
}
