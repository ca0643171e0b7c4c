//! Field declaration lines
//!
//!     A declaration line is whitespace separated: `<name>[:] <type> [attributes...]`.
//!     Token 0 with its trailing colons removed is the name, token 1 is the type, taken verbatim.
//!     Anything after the type (`&log`, `&optional`, ...) is not interpreted.

use crate::error::Missing;

/// A parsed `(name, type)` pair, before indices are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub data_type: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Declaration {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Parse one trimmed body line.
///
/// Fewer than two tokens is a malformed declaration.
pub fn parse_declaration(line: &str) -> Result<Declaration, Missing> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(name), Some(data_type)) => {
            Ok(Declaration::new(name.trim_end_matches(':'), data_type))
        }
        _ => Err(Missing::FieldLine {
            line: line.trim().to_string(),
        }),
    }
}
