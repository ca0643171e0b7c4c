//! Module declaration lookup

use crate::error::Missing;
use crate::lexing::{significant, Spanned};
use crate::token::Token;

/// Find the first `module <name>;` declaration and return its name.
///
/// Whitespace, line breaks and comments may appear between the three tokens. The name is a
/// plain identifier; a namespace qualified `module A::B;` does not count.
pub fn find_module(tokens: &[Spanned]) -> Result<String, Missing> {
    let structural: Vec<&Token> = significant(tokens).map(|(token, _)| token).collect();

    structural
        .windows(3)
        .find_map(|window| match window {
            [Token::Module, Token::Ident(name), Token::Semicolon] if !name.contains("::") => {
                Some(name.clone())
            }
            _ => None,
        })
        .ok_or(Missing::Module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::tokenize;

    #[test]
    fn test_finds_module() {
        let tokens = tokenize("@load base/utils\n\nmodule Conn;\n\nexport {}\n");
        assert_eq!(find_module(&tokens), Ok("Conn".to_string()));
    }

    #[test]
    fn test_first_module_wins() {
        let tokens = tokenize("module A;\nmodule B;\n");
        assert_eq!(find_module(&tokens), Ok("A".to_string()));
    }

    #[test]
    fn test_missing_module() {
        let tokens = tokenize("export { type Info: record { ts: time; }; }\n");
        assert_eq!(find_module(&tokens), Err(Missing::Module));
    }

    #[test]
    fn test_malformed_module() {
        assert_eq!(find_module(&tokenize("module ;\n")), Err(Missing::Module));
        assert_eq!(find_module(&tokenize("module Conn\n")), Err(Missing::Module));
        assert_eq!(find_module(&tokenize("module 42;\n")), Err(Missing::Module));
        assert_eq!(find_module(&tokenize("module Foo::Bar;\n")), Err(Missing::Module));
    }

    #[test]
    fn test_commented_module_is_ignored() {
        let tokens = tokenize("# module Old;\nmodule New;\n");
        assert_eq!(find_module(&tokens), Ok("New".to_string()));
    }
}
